//! Headwave - Refraction Travel-Time Forward Modeling
//!
//! Headwave computes first-arrival seismic travel times for a 1-D
//! layered-earth model observed by an array of surface sensors:
//! 1. Direct waves: energy traveling along the surface layer
//! 2. Head waves: energy critically refracted along deeper, faster interfaces
//!
//! # Architecture
//!
//! The computation pipeline has three stages:
//! - Model: validated layer geometry and sensor spread (immutable inputs)
//! - Forward: per-sensor, per-interface travel-time table construction
//! - Plot: two-panel travel-time figure rendered to PNG

pub mod cli;
pub mod config;
pub mod error;
pub mod forward;
pub mod model;
pub mod plot;

// Re-export commonly used types
pub use config::SurveyConfig;
pub use error::{HeadwaveError, Result};
pub use forward::{critical_distance, direct_time, refracted_time, TravelTimeTable};
pub use model::{LayerModel, SensorSpread};
