use axum::{
    extract::{FromRequest, Request, multipart::MultipartError},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Form;
use fridgechef_core::domain::common::entities::app_errors::CoreError;
use minijinja::{AutoEscape, Environment, context};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;
use validator::{Validate, ValidationErrors};

const ERROR_PAGE: &str = include_str!("../../../../../templates/error.html");

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{message}")]
    InternalServerError { message: String, detail: String },
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Invalid(message) => ApiError::BadRequest(message),
            CoreError::InvalidFilename(name) => {
                ApiError::BadRequest(format!("Invalid stored filename: {name}"))
            }
            other => ApiError::InternalServerError {
                message: other.to_string(),
                detail: format!("{other:#?}"),
            },
        }
    }
}

impl From<minijinja::Error> for ApiError {
    fn from(error: minijinja::Error) -> Self {
        ApiError::InternalServerError {
            message: format!("Template rendering failed: {error}"),
            detail: format!("{error:#}"),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(error: MultipartError) -> Self {
        let message = format!("Failed to read upload: {}", error.body_text());
        match error.status() {
            StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge(message),
            _ => ApiError::BadRequest(message),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(errors.to_string())
    }
}

/// Urlencoded form body, validated before the handler sees it. Repeated keys
/// collect into `Vec` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidateForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(format!("Invalid form body: {e}")))?;
        value.validate()?;
        Ok(ValidateForm(value))
    }
}

fn render_error_page(title: &str, message: &str, detail: &str) -> String {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.render_str(ERROR_PAGE, context! { title => title, message => message, detail => detail })
        .unwrap_or_else(|_| format!("{title}: {message}"))
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Html(render_error_page("잘못된 요청", &message, "")),
            )
                .into_response(),
            ApiError::PayloadTooLarge(message) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Html(render_error_page("파일이 너무 큽니다", &message, "")),
            )
                .into_response(),
            ApiError::InternalServerError { message, detail } => {
                error!(error = %message, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(render_error_page("서버 내부 오류", &message, &detail)),
                )
                    .into_response()
            }
        }
    }
}
