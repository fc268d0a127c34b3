use serde::Serialize;
use std::fmt;

use crate::error::AdvisorError;
use crate::profile::{PrecisionTier, Range};

/// Smallest terrain the advisory accepts; anything below is floored to it.
pub const MIN_AREA_HA: f64 = 0.1;
/// Upper bound (inclusive) of the 4+1 layout band.
pub const SMALL_TERRAIN_MAX_HA: f64 = 5.0;
/// Upper bound (inclusive) of the 8+1 layout band. Above this the network is density-based.
pub const MEDIUM_TERRAIN_MAX_HA: f64 = 30.0;

const M2_PER_HA: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GcpLayout {
    FourPlusCenter,
    EightPlusCenter,
    PerimeterNetwork,
}

impl GcpLayout {
    pub fn description(self) -> &'static str {
        match self {
            GcpLayout::FourPlusCenter => "4 perimeter + 1 center",
            GcpLayout::EightPlusCenter => "8 perimeter + 1 center",
            GcpLayout::PerimeterNetwork => "perimeter network, density-based",
        }
    }
}

impl fmt::Display for GcpLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Square-terrain estimate used for the large band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Footprint {
    pub side_m: f64,
    pub perimeter_m: f64,
}

impl Footprint {
    pub fn square(area_ha: f64) -> Self {
        let side_m = (area_ha * M2_PER_HA).sqrt();
        Self { side_m, perimeter_m: 4.0 * side_m }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LargeTerrainWarning {
    pub max_perimeter_separation_m: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdvisoryResult {
    pub tier: PrecisionTier,
    pub requested_area_ha: f64,
    /// Area actually used, after flooring to [`MIN_AREA_HA`].
    pub area_ha: f64,
    pub clamped: bool,
    pub altitude_m: Range,
    pub speed_mps: Range,
    pub gcp_count: u32,
    pub layout: GcpLayout,
    pub perimeter_offset_m: f64,
    pub max_gcp_spacing_m: f64,
    pub footprint: Option<Footprint>,
    pub warning: Option<LargeTerrainWarning>,
}

impl AdvisoryResult {
    pub fn perimeter_points(&self) -> u32 {
        self.gcp_count.saturating_sub(1)
    }
}

pub fn compute(area_ha: f64, tier: PrecisionTier) -> AdvisoryResult {
    let p = tier.profile();

    let clamped = area_ha.is_nan() || area_ha < MIN_AREA_HA;
    let area = if clamped { MIN_AREA_HA } else { area_ha };

    let (gcp_count, layout, footprint) = if area <= SMALL_TERRAIN_MAX_HA {
        (5, GcpLayout::FourPlusCenter, None)
    } else if area <= MEDIUM_TERRAIN_MAX_HA {
        (9, GcpLayout::EightPlusCenter, None)
    } else {
        let fp = Footprint::square(area);
        // +1 is the mandatory center point
        let n = (fp.perimeter_m / p.max_gcp_spacing_m).ceil() as u32;
        (n.saturating_add(1), GcpLayout::PerimeterNetwork, Some(fp))
    };

    let warning = footprint.map(|_| LargeTerrainWarning {
        max_perimeter_separation_m: p.max_perimeter_separation_m,
        message: format!(
            "large terrain: keep perimeter point separation at or below {}m",
            p.max_perimeter_separation_m
        ),
    });

    AdvisoryResult {
        tier,
        requested_area_ha: area_ha,
        area_ha: area,
        clamped,
        altitude_m: p.altitude_m,
        speed_mps: p.speed_mps,
        gcp_count,
        layout,
        perimeter_offset_m: p.perimeter_offset_m,
        max_gcp_spacing_m: p.max_gcp_spacing_m,
        footprint,
        warning,
    }
}

/// Same as [`compute`], with the tier given as a free-form label.
pub fn compute_labeled(area_ha: f64, tier: &str) -> Result<AdvisoryResult, AdvisorError> {
    Ok(compute(area_ha, tier.parse()?))
}
