use bytes::Bytes;

/// An image received from the browser, before it is written to the upload store.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub original_name: String,
    pub data: Bytes,
}

impl UploadedImage {
    pub fn new(original_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            original_name: original_name.into(),
            data: data.into(),
        }
    }
}
