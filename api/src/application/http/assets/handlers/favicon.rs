use axum::{
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::application::http::server::app_state::AppState;

pub async fn favicon(State(state): State<AppState>) -> Response {
    let path = state.args.storage.static_dir.join("favicon.ico");

    match tokio::fs::read(&path).await {
        Ok(icon) => ([(CONTENT_TYPE, "image/x-icon")], icon).into_response(),
        Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}
