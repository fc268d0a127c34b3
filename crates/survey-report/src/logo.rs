use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const DEFAULT_LOGO_PATH: &str = "assets/logo.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoStatus {
    Loaded { path: PathBuf, width: u32, height: u32 },
    Missing { path: PathBuf, notice: String },
}

impl LogoStatus {
    /// One header line for the text report.
    pub fn banner(&self) -> String {
        match self {
            LogoStatus::Loaded { path, width, height } => format!("[logo {}x{} {}]", width, height, path.display()),
            LogoStatus::Missing { notice, .. } => format!("[{}]", notice),
        }
    }
}

/// Probe the optional logo asset. Never fails: an absent or unreadable image
/// turns into a placeholder notice.
pub fn probe_logo(path: &Path) -> LogoStatus {
    if !path.exists() {
        debug!("logo: {} not present", path.display());
        return LogoStatus::Missing {
            path: path.to_path_buf(),
            notice: format!("logo not found at {}", path.display()),
        };
    }
    match image::image_dimensions(path) {
        Ok((width, height)) => {
            debug!("logo: {} ({}x{})", path.display(), width, height);
            LogoStatus::Loaded { path: path.to_path_buf(), width, height }
        }
        Err(e) => {
            warn!("logo: cannot decode {}: {}", path.display(), e);
            LogoStatus::Missing {
                path: path.to_path_buf(),
                notice: format!("logo at {} could not be read", path.display()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn missing_logo_is_a_notice() {
        let dir = tempfile::tempdir().unwrap();
        let st = probe_logo(&dir.path().join("nope.png"));
        assert!(matches!(st, LogoStatus::Missing { .. }));
        assert!(st.banner().contains("logo not found"));
    }

    #[test]
    fn garbage_logo_is_a_notice() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("logo.png");
        std::fs::write(&p, b"definitely not a png").unwrap();
        match probe_logo(&p) {
            LogoStatus::Missing { notice, .. } => assert!(notice.contains("could not be read")),
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn reads_logo_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("logo.png");
        RgbImage::from_pixel(32, 12, Rgb([10, 20, 30])).save(&p).unwrap();
        assert_eq!(
            probe_logo(&p),
            LogoStatus::Loaded { path: p.clone(), width: 32, height: 12 }
        );
    }
}
