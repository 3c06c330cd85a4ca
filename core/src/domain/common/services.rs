use std::sync::Arc;

use crate::domain::{
    llm::ports::LLMClient, session::ports::SessionRepository, upload::ports::UploadStore,
};

/// Shared service object. Every domain service trait is implemented on it, so the
/// HTTP layer holds a single handle.
pub struct Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    pub(crate) llm_client: Arc<L>,
    pub(crate) upload_store: Arc<U>,
    pub(crate) session_repository: Arc<S>,
}

impl<L, U, S> Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    pub fn new(llm_client: L, upload_store: U, session_repository: S) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            upload_store: Arc::new(upload_store),
            session_repository: Arc::new(session_repository),
        }
    }
}

impl<L, U, S> Clone for Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            upload_store: Arc::clone(&self.upload_store),
            session_repository: Arc::clone(&self.session_repository),
        }
    }
}
