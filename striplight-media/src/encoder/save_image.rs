use crate::Image;
use anyhow::{Context, Result};
use std::path::Path;

impl Image {
    /// Encodes the frame to disk; the format is inferred from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.frame()
            .save(path)
            .with_context(|| format!("failed to save image to {}", path.display()))
    }
}
