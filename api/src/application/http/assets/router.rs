use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::application::http::server::app_state::AppState;

use super::handlers::{favicon::favicon, service_worker::service_worker};

pub fn asset_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/service-worker.js", get(service_worker))
        .route("/favicon.ico", get(favicon))
        .nest_service("/static", ServeDir::new(&state.args.storage.static_dir))
}
