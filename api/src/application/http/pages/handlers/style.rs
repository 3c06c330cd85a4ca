use axum::{
    Extension,
    extract::State,
    response::{Html, Response},
};
use fridgechef_core::domain::{recipe::RECIPE_STYLE_OPTIONS, workflow::WorkflowService};
use minijinja::context;

use crate::application::{
    http::{
        pages::validators::StyleForm,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateForm},
                response::found,
            },
            app_state::AppState,
        },
    },
    session_middleware::SessionContext,
};

pub async fn get_style(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.templates.render(
        "style.html",
        context! { options => RECIPE_STYLE_OPTIONS },
    )
}

pub async fn post_style(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateForm(form): ValidateForm<StyleForm>,
) -> Result<Response, ApiError> {
    state
        .service
        .choose_styles(session.id, form.recipe_type)
        .await?;

    Ok(found("/chat"))
}
