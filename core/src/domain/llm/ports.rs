use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, llm::value_objects::CompletionRequest,
};

/// Chat-completion backend. Takes role-tagged messages, returns the first
/// completion's text.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
