//! Ray Travel-Time Functions
//!
//! Leaf computations for the three ray paths of a layered refraction survey:
//! the direct wave along the surface layer, the head wave critically
//! refracted along a deeper interface, and the critical distance at which a
//! head wave first becomes observable.
//!
//! None of these functions validate physical plausibility. A velocity
//! inversion (an overlying layer faster than the refractor) pushes the
//! arcsine argument past 1 and the result is NaN under IEEE-754 semantics.
//! Callers that need to distinguish such cells use
//! [`TravelTimeTable::defined_mask`](crate::forward::TravelTimeTable::defined_mask).

use crate::model::LayerModel;

/// Direct-wave travel time in seconds.
///
/// # Arguments
/// * `offset` - Horizontal source-sensor offset in meters (>= 0)
/// * `velocity` - Surface-layer velocity in m/s (> 0)
///
/// Preconditions are documented, not checked: a zero or negative velocity
/// yields infinity or a negative time.
#[inline]
pub fn direct_time(offset: f64, velocity: f64) -> f64 {
    offset / velocity
}

/// Head-wave travel time in seconds through interface `interface`.
///
/// The wave descends through every layer above the refractor at that
/// layer's critical angle relative to the refractor velocity, travels
/// laterally along the interface, and returns symmetrically. Each overlying
/// layer `k` contributes a two-way delay `2 h_k cos(theta_k) / v_k` with
/// `theta_k = asin(v_k / v_refractor)`; the lateral leg contributes
/// `offset / v_refractor`.
///
/// # Arguments
/// * `model` - Layered-earth model
/// * `offset` - Horizontal source-sensor offset in meters (>= 0)
/// * `interface` - Refracting interface, 0-based from the shallowest
///
/// Returns NaN if any overlying layer is faster than the refractor.
/// Panics if `interface >= model.num_layers()`.
pub fn refracted_time(model: &LayerModel, offset: f64, interface: usize) -> f64 {
    let v_refractor = model.refractor_velocity(interface);
    let mut time = offset / v_refractor;

    for layer in 0..=interface {
        let v = model.velocity(layer);
        let theta = (v / v_refractor).asin();
        time += 2.0 * model.thickness(layer) * theta.cos() / v;
    }

    time
}

/// Critical refraction distance in meters for a single interface.
///
/// The minimum source-sensor offset at which a head wave along an interface
/// at depth `thickness` can be observed, for the two-layer sub-case with
/// velocity `v_upper` above and `v_lower` below.
///
/// # Arguments
/// * `thickness` - Depth to the interface in meters
/// * `v_upper` - Velocity above the interface in m/s
/// * `v_lower` - Velocity below the interface in m/s
///
/// Returns NaN unless `v_upper < v_lower` (no critical refraction exists
/// otherwise).
#[inline]
pub fn critical_distance(thickness: f64, v_upper: f64, v_lower: f64) -> f64 {
    let theta = (v_upper / v_lower).asin();
    2.0 * thickness * theta.tan()
}
