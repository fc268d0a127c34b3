//! Flight and ground-control-point advisory for small drone survey jobs.
//!
//! Everything here is pure: a terrain area and a precision tier go in, an
//! [`AdvisoryResult`] comes out.

pub mod advisor;
pub mod doctor;
pub mod error;
pub mod layout;
pub mod profile;

pub use advisor::{compute, compute_labeled, AdvisoryResult, Footprint, GcpLayout, LargeTerrainWarning};
pub use error::AdvisorError;
pub use layout::{schematic, GcpMarker, MarkerRole};
pub use profile::{PrecisionProfile, PrecisionTier, Range};
