//! Travel-Time Forward Model
//!
//! First-arrival travel times for a layered-earth refraction survey:
//! - Ray functions: direct wave, head wave, critical distance
//! - Table construction: per-sensor, per-interface orchestration

pub mod rays;
pub mod table;

pub use rays::{critical_distance, direct_time, refracted_time};
pub use table::TravelTimeTable;
