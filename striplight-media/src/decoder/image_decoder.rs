use crate::Image;
use anyhow::Result;
use log::warn;
use std::fmt;
use std::path::Path;

/// Fatal decode failure: the bytes are not a supported image format, or the
/// decoded frame has a zero dimension. Decoding is deterministic, so there is
/// no retry tier above this.
#[derive(Debug)]
pub struct DecodeError {
    reason: String,
}

impl DecodeError {
    pub fn new(reason: impl Into<String>) -> Self {
        DecodeError {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "image decode failed: {}", self.reason)
    }
}

impl std::error::Error for DecodeError {}

impl Image {
    pub fn open_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .map_err(|e| DecodeError::new(format!("{}: {e}", path.display())))?;
        Self::from_decoded(decoded)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| DecodeError::new(format!("in-memory buffer: {e}")))?;
        Self::from_decoded(decoded)
    }

    fn from_decoded(decoded: image::DynamicImage) -> Result<Self> {
        let frame = decoded.into_rgb8();
        let (width, height) = frame.dimensions();
        if width == 0 || height == 0 {
            warn!("decoder produced an empty frame ({width}x{height})");
            return Err(DecodeError::new("decoded frame is empty").into());
        }
        Ok(Image { frame })
    }
}
