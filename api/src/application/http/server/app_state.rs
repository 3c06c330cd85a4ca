use std::sync::Arc;

use axum_extra::extract::cookie::Key;
use fridgechef_core::application::FridgeChefService;

use crate::args::Args;

use super::templates::Templates;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FridgeChefService,
    pub templates: Arc<Templates>,
    /// URL path the gallery links stored uploads under
    pub upload_url_prefix: String,
    /// Signs the session cookie. Generated per process, so restarts drop sessions.
    pub cookie_key: Key,
}

impl AppState {
    pub fn new(
        args: Arc<Args>,
        service: FridgeChefService,
        templates: Templates,
        upload_url_prefix: String,
    ) -> Self {
        Self {
            args,
            service,
            templates: Arc::new(templates),
            upload_url_prefix,
            cookie_key: Key::generate(),
        }
    }
}
