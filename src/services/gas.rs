//! Client for the GAS web app that owns points, menu and threshold config.
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::data::{RedemptionEvent, Snapshot};
use crate::error::DataSourceError;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Current points, menu and threshold table.
    async fn fetch_snapshot(&self) -> Result<Snapshot, DataSourceError>;
    /// Records a redemption adjustment against a user.
    async fn record_redemption(&self, event: &RedemptionEvent) -> Result<(), DataSourceError>;
}

pub struct GasClient {
    http: reqwest::Client,
    url: String,
}

impl GasClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DataSource for GasClient {
    #[instrument(level = "debug", skip(self))]
    async fn fetch_snapshot(&self) -> Result<Snapshot, DataSourceError> {
        let res = self.http.get(&self.url).send().await?;
        if !res.status().is_success() {
            return Err(DataSourceError::Status(res.status().as_u16()));
        }
        let snapshot: Snapshot = res.json().await?;
        debug!(
            target = "gas",
            categories = snapshot.menu.len(),
            users = snapshot.stats.len(),
            rules = snapshot.config.len(),
            "snapshot fetched"
        );
        Ok(snapshot)
    }

    #[instrument(level = "debug", skip(self), fields(user = %event.user, points = event.points))]
    async fn record_redemption(&self, event: &RedemptionEvent) -> Result<(), DataSourceError> {
        let res = self.http.post(&self.url).json(event).send().await?;
        if !res.status().is_success() {
            return Err(DataSourceError::Status(res.status().as_u16()));
        }
        Ok(())
    }
}
