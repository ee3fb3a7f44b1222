use image::GrayImage;
use log::warn;
use parking_lot::Mutex;
use std::path::PathBuf;
use striplight_media::Image;

/// Capability to persist labeled intermediate images for operator diagnosis.
///
/// Purely observational: disabling the sink must not change any
/// classification result. Implementations are shared across parallel lane
/// workers, so they must be safe to call concurrently; one file per
/// lane/stage label keeps writers from contending on a single file.
pub trait DebugSink: Sync {
    /// Whether snapshots will actually be persisted. Lets callers skip
    /// building overlay images that would be thrown away.
    fn enabled(&self) -> bool {
        true
    }

    fn save(&self, label: &str, image: &Image);

    fn save_mask(&self, label: &str, mask: &GrayImage);
}

/// Discards every snapshot.
pub struct NullSink;

impl DebugSink for NullSink {
    fn enabled(&self) -> bool {
        false
    }

    fn save(&self, _label: &str, _image: &Image) {}

    fn save_mask(&self, _label: &str, _mask: &GrayImage) {}
}

/// Writes each snapshot as `<dir>/<label>.png` and records what was written.
/// Write failures are logged and swallowed; diagnostics never fail a
/// classification call.
pub struct DirectorySink {
    dir: PathBuf,
    manifest: Mutex<Vec<String>>,
}

impl DirectorySink {
    pub fn create(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(DirectorySink {
            dir,
            manifest: Mutex::new(Vec::new()),
        })
    }

    /// Labels written so far, in completion order.
    pub fn manifest(&self) -> Vec<String> {
        self.manifest.lock().clone()
    }

    fn record(&self, label: &str) {
        self.manifest.lock().push(label.to_string());
    }
}

impl DebugSink for DirectorySink {
    fn save(&self, label: &str, image: &Image) {
        let path = self.dir.join(format!("{label}.png"));
        match image.save(&path) {
            Ok(()) => self.record(label),
            Err(e) => warn!("failed to write debug image {label}: {e:#}"),
        }
    }

    fn save_mask(&self, label: &str, mask: &GrayImage) {
        let path = self.dir.join(format!("{label}.png"));
        match mask.save(&path) {
            Ok(()) => self.record(label),
            Err(e) => warn!("failed to write debug mask {label}: {e}"),
        }
    }
}
