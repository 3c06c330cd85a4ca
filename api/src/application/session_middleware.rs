use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use fridgechef_core::domain::session::entities::SessionId;
use tracing::debug;

use crate::application::http::server::app_state::AppState;

pub const SESSION_COOKIE: &str = "fridgechef_session";

/// Session handle stored in request extensions
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub id: SessionId,
}

/// Resolves the visitor's session from the signed cookie, starting a new one
/// when the cookie is missing or fails verification.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let jar: SignedCookieJar = SignedCookieJar::from_headers(req.headers(), state.cookie_key.clone());

    let existing = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let (id, is_new) = match existing {
        Some(id) => (id, false),
        None => {
            let id = SessionId::generate();
            debug!(session_id = %id, "Starting new session");
            (id, true)
        }
    };

    req.extensions_mut().insert(SessionContext { id });
    let response = next.run(req).await;

    if !is_new {
        return response;
    }

    let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    (jar.add(cookie), response).into_response()
}
