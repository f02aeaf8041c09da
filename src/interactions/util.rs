//! Shared interaction helpers: fire-and-forget background work and deferred-response patching.
use std::future::Future;
use std::sync::Arc;

use crate::AppState;
use crate::commands::panel::render_root;
use crate::data::Snapshot;

/// Spawns `work` detached from the request. The caller never awaits it; failures are logged with `tag`.
pub fn spawn_background<F>(tag: &'static str, work: F)
where
    F: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(e) = work.await {
            tracing::error!(target = "bg", tag = %tag, error = ?e, "background task failed");
        }
    });
}

/// Renders the root panel for `snapshot` and patches it over the deferred response.
pub async fn patch_root(app_state: &AppState, token: &str, snapshot: &Snapshot) -> anyhow::Result<()> {
    app_state
        .discord
        .patch_original(token, render_root(snapshot))
        .await?;
    Ok(())
}

/// Fetches a fresh snapshot, replaces the cache and patches the root panel.
pub async fn refresh_and_patch(app_state: Arc<AppState>, token: String) -> anyhow::Result<()> {
    let snapshot = app_state
        .cache
        .get(true, || app_state.source.fetch_snapshot())
        .await?;
    patch_root(&app_state, &token, &snapshot).await?;
    tracing::debug!(target = "panel", action = "patch_root", "deferred panel delivered");
    Ok(())
}
