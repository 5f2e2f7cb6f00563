//! Survey Configuration
//!
//! Externalized survey parameters: layer geometry, velocities, sensor
//! offsets, and the figure output path. Stored as pretty-printed JSON. The
//! defaults reproduce a reference two-layer survey with a dense near-source
//! sensor group and a sparse far group.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{LayerModel, SensorSpread};

/// Default figure output file name.
pub const DEFAULT_OUTPUT: &str = "traveltimes.png";

/// Survey parameters as read from a configuration file.
///
/// Raw, unvalidated values; [`SurveyConfig::build`] produces the validated
/// model/spread pair or a configuration error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Layer thicknesses in meters, shallowest first.
    pub thicknesses: Vec<f64>,

    /// Layer velocities in m/s, shallowest first, half-space last.
    /// Must contain one more item than `thicknesses`.
    pub velocities: Vec<f64>,

    /// Sensor offsets in meters.
    pub sensors: Vec<f64>,

    /// Path the travel-time figure is written to.
    pub output: PathBuf,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        // Two-layer reference survey: 8 sensors staked at whole meters near
        // the source, then 16 more at 12 m spacing out to 204 m
        let sensors = SensorSpread::evenly_spaced(5.0, 12.0, 8)
            .floored()
            .chain(SensorSpread::evenly_spaced(24.0, 204.0, 16));

        Self {
            thicknesses: vec![3.0, 17.0],
            velocities: vec![450.0, 1300.0, 1800.0],
            sensors: sensors.into_offsets(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl SurveyConfig {
    /// Load a configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write the configuration to a JSON file, pretty-printed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the parameters into a model/spread pair.
    ///
    /// # Errors
    /// Propagates the layer-model invariant failures (`EmptyModel`,
    /// `LayerMismatch`); the sensor list is accepted as given.
    pub fn build(&self) -> Result<(LayerModel, SensorSpread)> {
        let model = LayerModel::new(self.thicknesses.clone(), self.velocities.clone())?;
        let spread = SensorSpread::from_offsets(self.sensors.clone());
        Ok((model, spread))
    }
}
