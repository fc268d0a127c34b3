use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AdvisorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrecisionTier {
    #[serde(alias = "high", alias = "Alta", alias = "alta")]
    High,
    #[serde(alias = "good", alias = "Buena", alias = "buena")]
    Good,
}

impl PrecisionTier {
    pub const ALL: [PrecisionTier; 2] = [PrecisionTier::High, PrecisionTier::Good];

    pub fn label(self) -> &'static str {
        match self {
            PrecisionTier::High => "High",
            PrecisionTier::Good => "Good",
        }
    }

    pub fn profile(self) -> &'static PrecisionProfile {
        match self {
            PrecisionTier::High => &HIGH,
            PrecisionTier::Good => &GOOD,
        }
    }
}

impl fmt::Display for PrecisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PrecisionTier {
    type Err = AdvisorError;

    // Case-insensitive; the Spanish labels of the field sheets are accepted too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "alta" => Ok(PrecisionTier::High),
            "good" | "buena" => Ok(PrecisionTier::Good),
            _ => Err(AdvisorError::InvalidTier(s.to_string())),
        }
    }
}

/// Inclusive min..max pair, in the unit of the field it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min: u32,
    pub max: u32,
}

/// Fixed flight and GCP parameters for one precision tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecisionProfile {
    pub tier: PrecisionTier,
    pub altitude_m: Range,
    pub speed_mps: Range,
    /// Upper bound on distance between neighbouring GCPs.
    pub max_gcp_spacing_m: f64,
    /// How far inside the terrain edge perimeter GCPs go.
    pub perimeter_offset_m: f64,
    /// Separation cap for perimeter points on large terrain.
    pub max_perimeter_separation_m: f64,
}

pub static HIGH: PrecisionProfile = PrecisionProfile {
    tier: PrecisionTier::High,
    altitude_m: Range { min: 60, max: 100 },
    speed_mps: Range { min: 4, max: 7 },
    max_gcp_spacing_m: 250.0,
    perimeter_offset_m: 10.0,
    max_perimeter_separation_m: 15.0,
};

pub static GOOD: PrecisionProfile = PrecisionProfile {
    tier: PrecisionTier::Good,
    altitude_m: Range { min: 80, max: 120 },
    speed_mps: Range { min: 4, max: 7 },
    max_gcp_spacing_m: 300.0,
    perimeter_offset_m: 15.0,
    max_perimeter_separation_m: 20.0,
};
