use serde::Serialize;

use crate::advisor::AdvisoryResult;

/// Above this the diagram stops adding perimeter markers; the count in the
/// result is unaffected.
pub const MAX_PERIMETER_MARKERS: u32 = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarkerRole {
    Perimeter,
    Center,
}

impl MarkerRole {
    pub fn label(self) -> &'static str {
        match self {
            MarkerRole::Perimeter => "Perimeter",
            MarkerRole::Center => "Center",
        }
    }
}

/// GCP position on the schematic, normalized 0..1 on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GcpMarker {
    pub x: f64,
    pub y: f64,
    pub role: MarkerRole,
}

/// Lay the GCPs of `result` out on a unit square: perimeter points evenly
/// spaced along the boundary (counter-clockwise from the origin corner),
/// followed by the center point.
///
/// With 4 perimeter points this gives the corners, with 8 the corners plus
/// the edge midpoints. It is a diagram of the policy, not survey geometry.
pub fn schematic(result: &AdvisoryResult) -> Vec<GcpMarker> {
    let n = result.perimeter_points().min(MAX_PERIMETER_MARKERS);
    let mut out = Vec::with_capacity(n as usize + 1);

    let step = 4.0 / n.max(1) as f64;
    for i in 0..n {
        let (x, y) = boundary_point(i as f64 * step);
        out.push(GcpMarker { x, y, role: MarkerRole::Perimeter });
    }
    out.push(GcpMarker { x: 0.5, y: 0.5, role: MarkerRole::Center });
    out
}

// t is arc length along the unit square boundary, 0..4
fn boundary_point(t: f64) -> (f64, f64) {
    let t = t.rem_euclid(4.0);
    if t < 1.0 {
        (t, 0.0)
    } else if t < 2.0 {
        (1.0, t - 1.0)
    } else if t < 3.0 {
        (3.0 - t, 1.0)
    } else {
        (0.0, 4.0 - t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::compute;
    use crate::profile::PrecisionTier;

    fn on_boundary(m: &GcpMarker) -> bool {
        let eps = 1e-9;
        m.x.abs() < eps || m.y.abs() < eps || (m.x - 1.0).abs() < eps || (m.y - 1.0).abs() < eps
    }

    #[test]
    fn small_terrain_uses_corners() {
        let markers = schematic(&compute(3.0, PrecisionTier::High));
        let corners: Vec<(f64, f64)> = markers
            .iter()
            .filter(|m| m.role == MarkerRole::Perimeter)
            .map(|m| (m.x, m.y))
            .collect();
        assert_eq!(corners, vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    }

    #[test]
    fn medium_terrain_adds_midpoints() {
        let markers = schematic(&compute(20.0, PrecisionTier::Good));
        assert_eq!(markers.len(), 9);
        assert!(markers.iter().any(|m| m.x == 0.5 && m.y == 0.0));
        assert!(markers.iter().any(|m| m.x == 0.0 && m.y == 0.5));
    }

    #[test]
    fn marker_count_matches_gcp_count() {
        for area in [0.1, 5.0, 30.0, 31.0, 75.0, 400.0] {
            for tier in PrecisionTier::ALL {
                let r = compute(area, tier);
                let markers = schematic(&r);
                assert_eq!(markers.len() as u32, r.gcp_count);

                let centers: Vec<_> = markers.iter().filter(|m| m.role == MarkerRole::Center).collect();
                assert_eq!(centers.len(), 1);
                assert_eq!((centers[0].x, centers[0].y), (0.5, 0.5));

                for m in markers.iter().filter(|m| m.role == MarkerRole::Perimeter) {
                    assert!((0.0..=1.0).contains(&m.x) && (0.0..=1.0).contains(&m.y));
                    assert!(on_boundary(m), "{m:?} off the boundary");
                }
            }
        }
    }

    #[test]
    fn huge_terrain_is_capped() {
        let markers = schematic(&compute(f64::INFINITY, PrecisionTier::High));
        assert_eq!(markers.len() as u32, MAX_PERIMETER_MARKERS + 1);
    }
}
