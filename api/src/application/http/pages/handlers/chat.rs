use axum::{Extension, extract::State, response::Html};
use fridgechef_core::domain::workflow::WorkflowService;
use minijinja::context;

use crate::application::{
    http::server::{api_entities::api_error::ApiError, app_state::AppState},
    session_middleware::SessionContext,
};

pub async fn get_chat(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Html<String>, ApiError> {
    let recipe = state.service.compose_recipe(session.id).await?;

    state.templates.render(
        "chat.html",
        context! {
            recipe => recipe.text,
            ingredients => recipe.ingredients,
            styles => recipe.styles,
        },
    )
}
