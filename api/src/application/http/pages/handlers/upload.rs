use axum::{
    Extension,
    extract::{Multipart, State},
    response::{Html, Response},
};
use fridgechef_core::domain::{upload::value_objects::UploadedImage, workflow::WorkflowService};
use minijinja::context;
use tracing::{error, warn};

use crate::application::{
    http::server::{
        api_entities::{api_error::ApiError, response::found},
        app_state::AppState,
    },
    session_middleware::SessionContext,
};

pub const MAX_UPLOAD_SIZE: usize = 50 * 1024 * 1024; // 50 MB

pub async fn get_upload(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.templates.render("upload.html", context! {})
}

pub async fn post_upload(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut images = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        ApiError::from(e)
    })? {
        if field.name() != Some("images") {
            continue;
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(|e| {
            error!(file_name = %original_name, "Failed to read image: {}", e);
            ApiError::from(e)
        })?;

        // Browsers send an empty part when the picker was left untouched
        if original_name.is_empty() && data.is_empty() {
            warn!("Skipping empty file field");
            continue;
        }

        images.push(UploadedImage::new(original_name, data));
    }

    state.service.begin_upload(session.id, images).await?;

    Ok(found("/results"))
}
