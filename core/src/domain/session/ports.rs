use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    session::entities::{SessionId, SessionState},
};

/// Server-side storage for per-visitor state
#[cfg_attr(test, mockall::automock)]
pub trait SessionRepository: Send + Sync {
    /// Returns `None` for unknown or expired sessions
    fn load(
        &self,
        id: SessionId,
    ) -> impl Future<Output = Result<Option<SessionState>, CoreError>> + Send;

    fn store(
        &self,
        id: SessionId,
        state: SessionState,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn remove(&self, id: SessionId) -> impl Future<Output = Result<(), CoreError>> + Send;
}
