use axum::{extract::State, response::Html};
use minijinja::context;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.templates.render("index.html", context! {})
}
