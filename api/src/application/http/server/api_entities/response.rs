use axum::{
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

/// `302 Found` to another page of the flow.
pub fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}
