use anyhow::Result;
use std::path::Path;

use crate::logo::{probe_logo, LogoStatus};
use crate::schematic::{MAX_SCHEMATIC_PX, MIN_SCHEMATIC_PX};

pub fn check_schematic(size_px: u32, path: Option<&Path>) -> Result<()> {
    anyhow::ensure!(
        (MIN_SCHEMATIC_PX..=MAX_SCHEMATIC_PX).contains(&size_px),
        "report.schematic_px should be {}..={}", MIN_SCHEMATIC_PX, MAX_SCHEMATIC_PX
    );
    if let Some(p) = path {
        anyhow::ensure!(!p.is_dir(), "report.schematic_path is a dir: {}", p.display());
    }
    Ok(())
}

pub fn check_logo(path: &Path) -> Result<()> {
    match probe_logo(path) {
        LogoStatus::Loaded { .. } => Ok(()),
        LogoStatus::Missing { notice, .. } => anyhow::bail!(notice),
    }
}
