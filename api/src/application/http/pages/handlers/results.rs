use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
use fridgechef_core::domain::workflow::WorkflowService;
use minijinja::context;

use crate::application::{
    http::{
        pages::validators::EditIngredientsForm,
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

pub async fn get_results(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Response, ApiError> {
    let Some(view) = state.service.load_results(session.id).await? else {
        return Ok(found("/upload"));
    };

    let page = state.templates.render(
        "results.html",
        context! {
            upload_url_prefix => &state.upload_url_prefix,
            filenames => view.filenames,
            ingredients => view.ingredients,
        },
    )?;

    Ok(page.into_response())
}

pub async fn post_results(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    ValidateForm(form): ValidateForm<EditIngredientsForm>,
) -> Result<Response, ApiError> {
    state
        .service
        .edit_ingredients(session.id, form.ingredients)
        .await?;

    Ok(found("/style"))
}
