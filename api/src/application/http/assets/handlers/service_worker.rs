use axum::{
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::application::http::server::app_state::AppState;

/// Served from the site root so the worker's scope covers every page.
pub async fn service_worker(State(state): State<AppState>) -> Response {
    let path = state.args.storage.static_dir.join("service-worker.js");

    match tokio::fs::read(&path).await {
        Ok(script) => ([(CONTENT_TYPE, "application/javascript")], script).into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
