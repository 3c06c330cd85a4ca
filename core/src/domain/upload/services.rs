use std::future::Future;
use std::time::Duration;

use tracing::{instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    llm::ports::LLMClient,
    session::ports::SessionRepository,
    upload::{entities::StoredImageName, ports::UploadStore, value_objects::UploadedImage},
};

/// Service trait for the upload directory
pub trait UploadService: Send + Sync {
    /// Persist each image under a freshly generated name, in input order
    fn store_images(
        &self,
        images: Vec<UploadedImage>,
    ) -> impl Future<Output = Result<Vec<StoredImageName>, CoreError>> + Send;

    /// Best-effort removal; failures are logged and otherwise ignored
    fn discard_images(&self, filenames: &[String]) -> impl Future<Output = ()> + Send;

    fn sweep_stale_uploads(
        &self,
        max_age: Duration,
    ) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

impl<L, U, S> UploadService for Service<L, U, S>
where
    L: LLMClient,
    U: UploadStore,
    S: SessionRepository,
{
    #[instrument(skip(self, images), fields(count = images.len()))]
    async fn store_images(
        &self,
        images: Vec<UploadedImage>,
    ) -> Result<Vec<StoredImageName>, CoreError> {
        let mut stored = Vec::with_capacity(images.len());

        for image in images {
            let name = StoredImageName::generate(&image.original_name);
            tracing::debug!(
                original_name = %image.original_name,
                stored_name = %name,
                size = image.data.len(),
                "Storing uploaded image"
            );
            self.upload_store.save(&name, image.data).await?;
            stored.push(name);
        }

        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn discard_images(&self, filenames: &[String]) {
        for filename in filenames {
            let name = match StoredImageName::parse(filename) {
                Ok(name) => name,
                Err(e) => {
                    warn!(filename = %filename, error = %e, "Skipping invalid stored filename");
                    continue;
                }
            };

            match self.upload_store.remove(&name).await {
                Ok(()) | Err(CoreError::NotFound) => {}
                Err(e) => warn!(filename = %filename, error = %e, "Failed to remove upload"),
            }
        }
    }

    #[instrument(skip(self))]
    async fn sweep_stale_uploads(&self, max_age: Duration) -> Result<usize, CoreError> {
        let removed = self.upload_store.sweep_older_than(max_age).await?;
        tracing::info!(removed, "Swept stale uploads");
        Ok(removed)
    }
}
