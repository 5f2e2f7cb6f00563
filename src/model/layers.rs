//! Layered-Earth Model
//!
//! A horizontally layered 1-D earth model: N layer thicknesses over a
//! half-space, with one velocity per layer plus one for the half-space
//! (N + 1 velocities total). Construction validates the structural
//! invariants and fails fast; physical plausibility (velocities increasing
//! with depth) is deliberately not checked — see the forward module for how
//! inverted velocities surface in the output.

use crate::error::{HeadwaveError, Result};

/// Validated layered-earth model.
///
/// Invariants (enforced at construction):
/// - at least one layer thickness
/// - exactly one more velocity than thicknesses
#[derive(Debug, Clone, PartialEq)]
pub struct LayerModel {
    thicknesses: Vec<f64>,
    velocities: Vec<f64>,
}

impl LayerModel {
    /// Create a validated layer model.
    ///
    /// # Arguments
    /// * `thicknesses` - Layer thicknesses in meters, shallowest first
    /// * `velocities` - Layer velocities in m/s, shallowest first, ending
    ///   with the half-space velocity
    ///
    /// # Errors
    /// Returns `EmptyModel` if `thicknesses` is empty, `LayerMismatch` if
    /// `velocities.len() != thicknesses.len() + 1`.
    pub fn new(thicknesses: Vec<f64>, velocities: Vec<f64>) -> Result<Self> {
        if thicknesses.is_empty() {
            return Err(HeadwaveError::EmptyModel);
        }
        if velocities.len() != thicknesses.len() + 1 {
            return Err(HeadwaveError::LayerMismatch {
                velocities: velocities.len(),
                thicknesses: thicknesses.len(),
            });
        }

        Ok(Self {
            thicknesses,
            velocities,
        })
    }

    /// Number of layers above the half-space.
    ///
    /// This equals the number of refracting interfaces: interface `i` is the
    /// boundary at the bottom of layer `i`.
    pub fn num_layers(&self) -> usize {
        self.thicknesses.len()
    }

    /// All layer thicknesses in meters, shallowest first.
    pub fn thicknesses(&self) -> &[f64] {
        &self.thicknesses
    }

    /// All velocities in m/s, shallowest first, half-space last.
    pub fn velocities(&self) -> &[f64] {
        &self.velocities
    }

    /// Thickness of layer `layer` in meters.
    ///
    /// Panics if `layer >= num_layers()`.
    pub fn thickness(&self, layer: usize) -> f64 {
        self.thicknesses[layer]
    }

    /// Velocity of layer `layer` in m/s.
    ///
    /// Index `num_layers()` addresses the half-space. Panics beyond that.
    pub fn velocity(&self, layer: usize) -> f64 {
        self.velocities[layer]
    }

    /// Velocity of the surface layer in m/s (carries the direct wave).
    pub fn surface_velocity(&self) -> f64 {
        self.velocities[0]
    }

    /// Velocity of the medium below interface `interface` in m/s (the
    /// refractor a head wave travels along).
    ///
    /// Panics if `interface >= num_layers()`.
    pub fn refractor_velocity(&self, interface: usize) -> f64 {
        self.velocities[interface + 1]
    }
}
