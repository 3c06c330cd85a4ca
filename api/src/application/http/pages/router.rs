use axum::{Router, extract::DefaultBodyLimit, middleware, routing::get};

use crate::application::{
    http::server::app_state::AppState, session_middleware::session_middleware,
};

use super::handlers::{
    chat::get_chat,
    index::index,
    results::{get_results, post_results},
    style::{get_style, post_style},
    upload::{MAX_UPLOAD_SIZE, get_upload, post_upload},
};

pub fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/upload", get(get_upload).post(post_upload))
        .route("/results", get(get_results).post(post_results))
        .route("/style", get(get_style).post(post_style))
        .route("/chat", get(get_chat))
        .layer(middleware::from_fn_with_state(state, session_middleware))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_SIZE))
}
