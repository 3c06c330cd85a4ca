use std::future::Future;
use std::time::Duration;

use bytes::Bytes;

use crate::domain::{common::entities::app_errors::CoreError, upload::entities::StoredImageName};

/// Port for the directory holding uploaded images
#[cfg_attr(test, mockall::automock)]
pub trait UploadStore: Send + Sync {
    /// Write the full payload under the given name
    fn save(
        &self,
        name: &StoredImageName,
        payload: Bytes,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn read(
        &self,
        name: &StoredImageName,
    ) -> impl Future<Output = Result<Vec<u8>, CoreError>> + Send;

    fn remove(&self, name: &StoredImageName) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Delete every regular file last modified more than `max_age` ago.
    /// Returns how many were removed; individual deletion failures are skipped.
    fn sweep_older_than(
        &self,
        max_age: Duration,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
