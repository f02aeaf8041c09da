use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kajibot::AppState;
use kajibot::config::Settings;
use kajibot::interactions::InteractionRouter;
use kajibot::server::{self, Ed25519Keys, ServerState};
use kajibot::services::{GasClient, SerenityDiscord, SnapshotCache, WebhookLogSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine in deployments that inject the environment directly.
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kajibot=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env().context("loading settings")?;
    let signatures = Ed25519Keys::from_hex_keys(&settings.public_keys)?;

    let http = reqwest::Client::builder()
        .timeout(settings.http_timeout)
        .build()
        .context("building HTTP client")?;

    let app_state = Arc::new(AppState {
        panel_command: settings.panel_command.clone(),
        cache: Arc::new(SnapshotCache::new(settings.snapshot_ttl)),
        source: Arc::new(GasClient::new(http.clone(), &settings.gas_url)),
        log_sink: Arc::new(WebhookLogSink::new(http, &settings.log_sink_url)),
        discord: Arc::new(SerenityDiscord::new(
            &settings.bot_token,
            settings.application_id,
            &settings.panel_command,
        )),
    });

    let app = server::build_router(ServerState {
        router: Arc::new(InteractionRouter::new(app_state)),
        signatures: Arc::new(signatures),
    });

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("binding {}", settings.bind_addr))?;
    info!(target = "server", addr = %settings.bind_addr, command = %settings.panel_command, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
