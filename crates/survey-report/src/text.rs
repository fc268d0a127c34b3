use std::fmt::{self, Write};

use survey_advisor::advisor::MIN_AREA_HA;
use survey_advisor::{schematic, AdvisoryResult, MarkerRole};

use crate::logo::LogoStatus;

pub fn render_text(r: &AdvisoryResult, logo: &LogoStatus) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_report(&mut out, r, logo)?;
    Ok(out)
}

/// "12 Perimeter, 1 Center" for the schematic of `r`.
pub fn marker_summary(r: &AdvisoryResult) -> String {
    let markers = schematic(r);
    [MarkerRole::Perimeter, MarkerRole::Center]
        .iter()
        .map(|role| format!("{} {}", markers.iter().filter(|m| m.role == *role).count(), role.label()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_report(out: &mut String, r: &AdvisoryResult, logo: &LogoStatus) -> fmt::Result {
    writeln!(out, "{}", logo.banner())?;
    writeln!(out, "Flight planning report: {} precision", r.tier)?;
    writeln!(out, "Terrain: {} ha", r.area_ha)?;
    if r.clamped {
        writeln!(out, "NOTE: requested area {} ha raised to the {} ha minimum", r.requested_area_ha, MIN_AREA_HA)?;
    }
    writeln!(out)?;

    writeln!(out, "  Flight altitude : {}m - {}m", r.altitude_m.min, r.altitude_m.max)?;
    writeln!(out, "  Flight speed    : {} - {} m/s", r.speed_mps.min, r.speed_mps.max)?;
    writeln!(out, "  Control points  : {}", r.gcp_count)?;
    writeln!(out, "  Layout          : {}", r.layout)?;
    writeln!(out, "  Schematic       : {}", marker_summary(r))?;
    writeln!(out, "  Max GCP spacing : {}m", r.max_gcp_spacing_m)?;
    if let Some(fp) = &r.footprint {
        writeln!(out, "  Footprint       : square ~{:.1}m side, {:.1}m perimeter", fp.side_m, fp.perimeter_m)?;
    }
    writeln!(out)?;

    writeln!(out, "TIP: place perimeter points {}m inside the terrain edge.", r.perimeter_offset_m)?;
    if let Some(w) = &r.warning {
        writeln!(out, "WARNING: {}", w.message)?;
    }
    writeln!(out, "OK: parameters validated for flat-terrain guidance.")?;
    Ok(())
}
