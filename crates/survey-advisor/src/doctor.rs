use anyhow::Result;

use crate::advisor::MIN_AREA_HA;
use crate::profile::PrecisionTier;

pub fn check_profiles() -> Result<()> {
    for tier in PrecisionTier::ALL {
        let p = tier.profile();
        anyhow::ensure!(p.tier == tier, "profile table for {} is keyed wrong", tier);
        anyhow::ensure!(p.altitude_m.min < p.altitude_m.max, "{}: altitude range inverted", tier);
        anyhow::ensure!(p.speed_mps.min < p.speed_mps.max, "{}: speed range inverted", tier);
        anyhow::ensure!(p.max_gcp_spacing_m > 0.0, "{}: max GCP spacing must be positive", tier);
        anyhow::ensure!(p.perimeter_offset_m > 0.0, "{}: perimeter offset must be positive", tier);
        anyhow::ensure!(p.max_perimeter_separation_m > 0.0, "{}: perimeter separation cap must be positive", tier);
    }
    Ok(())
}

pub fn check_default_area(area_ha: f64) -> Result<()> {
    anyhow::ensure!(area_ha.is_finite(), "input.default_area_ha must be finite");
    anyhow::ensure!(area_ha >= MIN_AREA_HA, "input.default_area_ha below minimum ({} ha)", MIN_AREA_HA);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_pass() {
        check_profiles().unwrap();
    }

    #[test]
    fn default_area_bounds() {
        assert!(check_default_area(5.0).is_ok());
        assert!(check_default_area(0.1).is_ok());
        assert!(check_default_area(0.0).is_err());
        assert!(check_default_area(f64::NAN).is_err());
        assert!(check_default_area(f64::INFINITY).is_err());
    }
}
