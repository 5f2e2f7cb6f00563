//! Travel-Time Table Construction
//!
//! Orchestrates the per-sensor, per-interface evaluation of the ray
//! functions into a direct-time vector and a refraction-time table. The
//! table is a pure derived value: deterministic, no shared state, every
//! cell computed independently. A NaN produced by one physically invalid
//! interface stays in that cell and never aborts the rest of the table.

use serde::Serialize;

use crate::forward::rays::{direct_time, refracted_time};
use crate::model::{LayerModel, SensorSpread};

/// Computed first-arrival travel times for one survey.
///
/// One direct time per sensor, and one refraction time per
/// (interface, sensor) pair. Times are floating-point seconds; undefined
/// refractions are NaN cells.
#[derive(Debug, Clone, Serialize)]
pub struct TravelTimeTable {
    /// Sensor offsets the table was computed for, in meters
    offsets: Vec<f64>,
    /// Direct-wave arrival time per sensor, in seconds
    direct: Vec<f64>,
    /// Head-wave arrival times: one row per interface, one column per sensor
    refracted: Vec<Vec<f64>>,
}

impl TravelTimeTable {
    /// Compute the full travel-time table for a model and sensor spread.
    ///
    /// # Arguments
    /// * `model` - Validated layered-earth model
    /// * `spread` - Surface sensor offsets
    ///
    /// # Returns
    /// A table with `spread.len()` direct times and
    /// `model.num_layers() x spread.len()` refraction times.
    pub fn compute(model: &LayerModel, spread: &SensorSpread) -> Self {
        let offsets = spread.offsets().to_vec();

        let direct = offsets
            .iter()
            .map(|&offset| direct_time(offset, model.surface_velocity()))
            .collect();

        let refracted = (0..model.num_layers())
            .map(|interface| {
                offsets
                    .iter()
                    .map(|&offset| refracted_time(model, offset, interface))
                    .collect()
            })
            .collect();

        Self {
            offsets,
            direct,
            refracted,
        }
    }

    /// Number of sensors (columns).
    pub fn num_sensors(&self) -> usize {
        self.offsets.len()
    }

    /// Number of refracting interfaces (rows).
    pub fn num_interfaces(&self) -> usize {
        self.refracted.len()
    }

    /// Sensor offsets in meters, in spread order.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Direct-wave times in seconds, one per sensor.
    pub fn direct(&self) -> &[f64] {
        &self.direct
    }

    /// Head-wave times in seconds for one interface, one per sensor.
    ///
    /// Panics if `interface >= num_interfaces()`.
    pub fn refracted(&self, interface: usize) -> &[f64] {
        &self.refracted[interface]
    }

    /// Iterate over the refraction rows, shallowest interface first.
    pub fn refracted_rows(&self) -> impl Iterator<Item = &[f64]> {
        self.refracted.iter().map(|row| row.as_slice())
    }

    /// Per-cell validity view of the refraction table.
    ///
    /// `true` marks a finite travel time; `false` marks an undefined
    /// refraction (velocity inversion). The numeric table itself is left
    /// untouched.
    pub fn defined_mask(&self) -> Vec<Vec<bool>> {
        self.refracted
            .iter()
            .map(|row| row.iter().map(|t| t.is_finite()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_layer_model() -> LayerModel {
        LayerModel::new(vec![3.0, 17.0], vec![450.0, 1300.0, 1800.0]).unwrap()
    }

    #[test]
    fn test_table_shape() {
        let model = two_layer_model();
        let spread = SensorSpread::from_offsets(vec![5.0, 10.0, 20.0]);
        let table = TravelTimeTable::compute(&model, &spread);

        assert_eq!(table.num_sensors(), 3);
        assert_eq!(table.num_interfaces(), 2);
        assert_eq!(table.direct().len(), 3);
        for row in table.refracted_rows() {
            assert_eq!(row.len(), 3);
        }
    }

    #[test]
    fn test_reference_survey_values() {
        let model = two_layer_model();
        let spread = SensorSpread::from_offsets(vec![5.0, 10.0, 20.0]);
        let table = TravelTimeTable::compute(&model, &spread);

        // Direct: x / 450
        for (k, &offset) in spread.offsets().iter().enumerate() {
            assert_relative_eq!(table.direct()[k], offset / 450.0, max_relative = 1e-12);
        }

        // First interface: x/1300 + 2*3*cos(asin(450/1300))/450
        let delay0 = 2.0 * 3.0 * (450.0_f64 / 1300.0).asin().cos() / 450.0;
        for (k, &offset) in spread.offsets().iter().enumerate() {
            assert_relative_eq!(
                table.refracted(0)[k],
                offset / 1300.0 + delay0,
                max_relative = 1e-12
            );
        }

        // Second interface: x/1800 + both overlying delays
        let delay = 2.0 * 3.0 * (450.0_f64 / 1800.0).asin().cos() / 450.0
            + 2.0 * 17.0 * (1300.0_f64 / 1800.0).asin().cos() / 1300.0;
        for (k, &offset) in spread.offsets().iter().enumerate() {
            assert_relative_eq!(
                table.refracted(1)[k],
                offset / 1800.0 + delay,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_determinism() {
        let model = two_layer_model();
        let spread = SensorSpread::from_offsets(vec![5.0, 10.0, 20.0]);

        let a = TravelTimeTable::compute(&model, &spread);
        let b = TravelTimeTable::compute(&model, &spread);
        assert_eq!(a.direct(), b.direct());
        assert_eq!(a.refracted(0), b.refracted(0));
        assert_eq!(a.refracted(1), b.refracted(1));
    }

    #[test]
    fn test_inversion_isolated_to_one_row() {
        // Middle layer faster than the first refractor: interface 0 is
        // undefined, interface 1 must stay finite
        let model = LayerModel::new(vec![3.0, 17.0], vec![1400.0, 1300.0, 1800.0]).unwrap();
        let spread = SensorSpread::from_offsets(vec![5.0, 10.0, 20.0]);
        let table = TravelTimeTable::compute(&model, &spread);

        assert!(table.refracted(0).iter().all(|t| t.is_nan()));
        assert!(table.refracted(1).iter().all(|t| t.is_finite()));
        assert!(table.direct().iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_defined_mask_matches_cells() {
        let model = LayerModel::new(vec![3.0, 17.0], vec![1400.0, 1300.0, 1800.0]).unwrap();
        let spread = SensorSpread::from_offsets(vec![5.0, 10.0]);
        let table = TravelTimeTable::compute(&model, &spread);

        let mask = table.defined_mask();
        assert_eq!(mask.len(), 2);
        assert_eq!(mask[0], vec![false, false]);
        assert_eq!(mask[1], vec![true, true]);
    }

    #[test]
    fn test_empty_spread() {
        let model = two_layer_model();
        let table = TravelTimeTable::compute(&model, &SensorSpread::default());

        assert_eq!(table.num_sensors(), 0);
        assert_eq!(table.num_interfaces(), 2);
        assert!(table.direct().is_empty());
        assert!(table.refracted(0).is_empty());
    }
}
