use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::entities::app_errors::CoreError,
    upload::{entities::StoredImageName, ports::UploadStore},
};

/// Uploads kept as plain files in one directory
#[derive(Debug, Clone)]
pub struct LocalUploadStore {
    directory: PathBuf,
}

impl LocalUploadStore {
    pub async fn new(directory: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let directory = directory.into();
        tokio::fs::create_dir_all(&directory).await?;

        tracing::info!(directory = %directory.display(), "Upload directory ready");

        Ok(Self { directory })
    }

    fn path_for(&self, name: &StoredImageName) -> PathBuf {
        self.directory.join(name.as_str())
    }
}

impl UploadStore for LocalUploadStore {
    #[instrument(skip(self, payload), fields(size = payload.len()))]
    async fn save(&self, name: &StoredImageName, payload: Bytes) -> Result<(), CoreError> {
        tokio::fs::write(self.path_for(name), &payload).await?;
        Ok(())
    }

    async fn read(&self, name: &StoredImageName) -> Result<Vec<u8>, CoreError> {
        Ok(tokio::fs::read(self.path_for(name)).await?)
    }

    async fn remove(&self, name: &StoredImageName) -> Result<(), CoreError> {
        tokio::fs::remove_file(self.path_for(name)).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn sweep_older_than(&self, max_age: Duration) -> Result<usize, CoreError> {
        let now = SystemTime::now();
        let mut removed = 0;
        let mut entries = tokio::fs::read_dir(&self.directory).await?;

        while let Some(entry) = entries.next_entry().await? {
            let Ok(metadata) = entry.metadata().await else {
                continue;
            };
            if !metadata.is_file() {
                continue;
            }
            let Ok(modified) = metadata.modified() else {
                continue;
            };

            let age = now.duration_since(modified).unwrap_or_default();
            if age <= max_age {
                continue;
            }

            match tokio::fs::remove_file(entry.path()).await {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!(
                    path = %entry.path().display(),
                    error = %e,
                    "Failed to remove stale upload"
                ),
            }
        }

        Ok(removed)
    }
}
