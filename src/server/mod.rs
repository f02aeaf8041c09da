//! HTTP surface: the interactions endpoint plus two operator control routes.
pub mod verify;

use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::constants::{HEADER_SIGNATURE, HEADER_TIMESTAMP};
use crate::error::RouteError;
use crate::interactions::InteractionRouter;

pub use verify::{Ed25519Keys, SignatureCheck};

#[derive(Clone)]
pub struct ServerState {
    pub router: Arc<InteractionRouter>,
    pub signatures: Arc<dyn SignatureCheck>,
}

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/register", get(register_commands))
        .route("/reset", get(reset_cache))
        .fallback(interactions_endpoint)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Any POST that is not a control route is an interaction delivery.
async fn interactions_endpoint(
    State(state): State<ServerState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, RouteError> {
    if method != Method::POST {
        return Err(RouteError::UnsupportedMethod);
    }

    let (Some(signature), Some(timestamp)) = (
        header(&headers, HEADER_SIGNATURE),
        header(&headers, HEADER_TIMESTAMP),
    ) else {
        return Err(RouteError::BadRequest("missing signature headers".into()));
    };
    if body.is_empty() {
        return Err(RouteError::BadRequest("empty body".into()));
    }
    if !state.signatures.verify(signature, timestamp, &body) {
        return Err(RouteError::SignatureInvalid);
    }

    let response = state.router.handle(&body).await?;
    Ok(Json(response).into_response())
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
}

async fn register_commands(State(state): State<ServerState>) -> Response {
    match state.router.app_state().discord.register_commands().await {
        Ok(count) => {
            info!(target = "server", count, "commands registered");
            "Success! Commands registered.".into_response()
        }
        Err(e) => {
            error!(target = "server", error = ?e, "command registration failed");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Error: {e}")).into_response()
        }
    }
}

async fn reset_cache(State(state): State<ServerState>) -> &'static str {
    state.router.app_state().cache.invalidate().await;
    info!(target = "server", "snapshot cache cleared");
    "Cache cleared."
}
