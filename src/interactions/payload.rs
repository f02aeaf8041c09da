//! The slice of an inbound interaction payload the router reads.
//! Everything else in the body is ignored here and forwarded verbatim to the log sink.
use serde::Deserialize;
use serenity::model::application::InteractionType;

#[derive(Debug, Clone, Deserialize)]
pub struct InboundInteraction {
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// Continuation token used to patch a deferred response.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub data: Option<InteractionData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionData {
    /// Command name (application commands).
    #[serde(default)]
    pub name: Option<String>,
    /// Component or modal custom_id.
    #[serde(default)]
    pub custom_id: Option<String>,
}

impl InboundInteraction {
    pub fn command_name(&self) -> Option<&str> {
        self.data.as_ref()?.name.as_deref()
    }

    pub fn custom_id(&self) -> Option<&str> {
        self.data.as_ref()?.custom_id.as_deref()
    }
}
