//! Seams to whatever hosts the tracker: the document it observes and the
//! place finished heat-maps are delivered to.

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::models::{InputElement, TargetId};

/// Pixel size of the surface a heat-map is drawn onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSurface {
    pub width: u32,
    pub height: u32,
}

/// The observed document.
pub trait Document: Send + Sync {
    /// Every input present once the document is ready, in document order.
    fn input_elements(&self) -> Vec<InputElement>;

    /// Current value of an input, if it still exists.
    fn input_value(&self, target: TargetId) -> Option<String>;

    /// The drawing surface with the given id, if the document has one.
    fn canvas(&self, canvas_id: &str) -> Option<CanvasSurface>;
}

/// Receives finished exports, the way a browser receives a download.
pub trait DownloadSink: Send + Sync {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<()>;
}

/// Writes downloads into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for DirectorySink {
    fn deliver(&self, file_name: &str, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create download dir {}", self.dir.display()))?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write download to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_sink_creates_missing_dir() {
        let root = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(root.path().join("downloads"));

        sink.deliver("probe.png", b"png").unwrap();

        let written = fs::read(sink.dir().join("probe.png")).unwrap();
        assert_eq!(written, b"png");
    }
}
