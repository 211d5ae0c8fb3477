use crate::domain::ports::Viewer;
use crate::utils::error::{QuadrantError, Result};
use std::path::Path;

/// Hands the image to the desktop's default image viewer.
#[cfg(feature = "cli")]
#[derive(Debug, Default, Clone)]
pub struct SystemViewer;

#[cfg(feature = "cli")]
impl Viewer for SystemViewer {
    fn show(&self, path: &Path) -> Result<()> {
        opener::open(path).map_err(|e| QuadrantError::ViewerError {
            message: e.to_string(),
        })
    }
}

/// Used for headless runs (`--no-display`).
#[derive(Debug, Default, Clone)]
pub struct NoopViewer;

impl Viewer for NoopViewer {
    fn show(&self, path: &Path) -> Result<()> {
        tracing::debug!("Display disabled, chart left at {}", path.display());
        Ok(())
    }
}

/// Try to display the chart. Failures are logged and dropped; the image is
/// already on disk by the time this runs. Returns whether it was shown.
pub fn show_best_effort<V: Viewer + ?Sized>(viewer: &V, path: &Path) -> bool {
    match viewer.show(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("Ignoring viewer failure for {}: {}", path.display(), e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenViewer;

    impl Viewer for BrokenViewer {
        fn show(&self, _path: &Path) -> Result<()> {
            Err(QuadrantError::ViewerError {
                message: "no display server".to_string(),
            })
        }
    }

    #[test]
    fn test_viewer_failure_is_swallowed() {
        assert!(!show_best_effort(&BrokenViewer, Path::new("initiatives.png")));
    }

    #[test]
    fn test_noop_viewer_succeeds() {
        assert!(show_best_effort(&NoopViewer, Path::new("initiatives.png")));
    }
}
