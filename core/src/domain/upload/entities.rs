use std::fmt;

use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_EXTENSION: &str = ".jpg";

/// Name of a file in the upload directory: a random hex stem plus the
/// lower-cased extension of the name the browser sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoredImageName(String);

impl StoredImageName {
    pub fn generate(original_name: &str) -> Self {
        let extension = extension_of(original_name)
            .map(|ext| ext.to_lowercase())
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        Self(format!("{}{}", Uuid::new_v4().simple(), extension))
    }

    /// Accepts a name read back from the session. Anything that could escape
    /// the upload directory is rejected.
    pub fn parse(name: &str) -> Result<Self, CoreError> {
        if name.is_empty()
            || name.contains('/')
            || name.contains('\\')
            || name.contains("..")
            || name.starts_with('.')
        {
            return Err(CoreError::InvalidFilename(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime_type(&self) -> &'static str {
        match extension_of(&self.0).as_deref() {
            Some(".png") => "image/png",
            Some(".gif") => "image/gif",
            Some(".webp") => "image/webp",
            _ => "image/jpeg",
        }
    }
}

impl fmt::Display for StoredImageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StoredImageName> for String {
    fn from(name: StoredImageName) -> Self {
        name.0
    }
}

/// Suffix of the last path component including the dot, ignoring leading dots
/// (`.bashrc` has none). A bare trailing dot counts as no extension.
fn extension_of(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let stem_start = base.len() - base.trim_start_matches('.').len();
    let rest = &base[stem_start..];
    let dot = rest.rfind('.')?;
    let extension = &rest[dot..];
    if extension.len() <= 1 {
        return None;
    }
    Some(extension.to_string())
}
