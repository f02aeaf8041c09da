//! Best-effort forwarding of raw interaction payloads to an external log sink.
use async_trait::async_trait;

use crate::error::DataSourceError;

#[async_trait]
pub trait LogSink: Send + Sync {
    async fn forward(&self, raw: Vec<u8>) -> Result<(), DataSourceError>;
}

/// Posts the interaction JSON verbatim to a webhook URL.
pub struct WebhookLogSink {
    http: reqwest::Client,
    url: String,
}

impl WebhookLogSink {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl LogSink for WebhookLogSink {
    async fn forward(&self, raw: Vec<u8>) -> Result<(), DataSourceError> {
        let res = self
            .http
            .post(&self.url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(raw)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(DataSourceError::Status(res.status().as_u16()));
        }
        Ok(())
    }
}
