use std::fmt;

/// Encoded photo bytes as produced by a capture device.
#[derive(Clone, PartialEq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub source: String,
}

impl CapturedImage {
    pub fn new(bytes: Vec<u8>, source: impl Into<String>) -> Self {
        Self {
            bytes,
            source: source.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for CapturedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedImage")
            .field("source", &self.source)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

pub trait DeviceCamera {
    /// Presents the capture UI and blocks until the user is done.
    /// `Ok(None)` means the user cancelled.
    fn capture_photo(
        &self,
    ) -> Result<Option<CapturedImage>, Box<dyn std::error::Error + Send + Sync>>;
}
