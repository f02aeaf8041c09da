//! Redemption flow: the leader cashes in the current gap as a negative adjustment.
use std::sync::Arc;

use tracing::{info, instrument};

use super::util::patch_root;
use crate::AppState;
use crate::commands::panel::logic::{leader_and_gap, rank_users};
use crate::data::{RedemptionEvent, Snapshot};

/// The event a redemption would post for `snapshot`; `None` when nobody has points yet.
/// A zero gap still yields an event.
pub fn plan(snapshot: &Snapshot) -> Option<RedemptionEvent> {
    let standings = rank_users(&snapshot.stats);
    let (leader, gap) = leader_and_gap(&standings)?;
    Some(RedemptionEvent::new(leader.name.clone(), -gap))
}

/// Background half of a redemption press, run after the acknowledgement went out.
/// Uses the cached snapshot at any age, posts the event, then always re-fetches and re-patches.
/// A rejected POST (transport error or non-2xx) ends the flow here: no refetch, no patch.
#[instrument(level = "debug", skip(app_state, token))]
pub async fn run(app_state: Arc<AppState>, token: String) -> anyhow::Result<()> {
    let snapshot = match app_state.cache.current().await {
        Some(s) => s,
        None => Arc::new(app_state.source.fetch_snapshot().await?),
    };

    let Some(event) = plan(&snapshot) else {
        info!(target = "redemption", "no users recorded; nothing to redeem");
        return Ok(());
    };

    app_state.source.record_redemption(&event).await?;
    info!(target = "redemption", user = %event.user, points = event.points, "redemption recorded");

    let fresh = app_state
        .cache
        .get(true, || app_state.source.fetch_snapshot())
        .await?;
    patch_root(&app_state, &token, &fresh).await
}
