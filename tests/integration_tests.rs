//! Integration Tests
//!
//! End-to-end tests for the Headwave forward-modeling pipeline.

use std::path::PathBuf;

use headwave::{
    critical_distance, LayerModel, SensorSpread, SurveyConfig, TravelTimeTable,
};

/// Helper to build the reference two-layer survey.
fn reference_survey() -> (LayerModel, SensorSpread) {
    SurveyConfig::default().build().unwrap()
}

// === Full Pipeline Tests ===

#[test]
fn test_full_pipeline_produces_figure() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("traveltimes.png");

    let (model, spread) = reference_survey();
    let table = TravelTimeTable::compute(&model, &spread);
    headwave::plot::render_figure(&spread, &table, &output).unwrap();

    let (w, h) = image::image_dimensions(&output).unwrap();
    assert_eq!(
        (w, h),
        (headwave::plot::FIGURE_WIDTH, headwave::plot::FIGURE_HEIGHT),
        "figure must use the fixed resolution"
    );
}

#[test]
fn test_config_file_round_trip_drives_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("survey.json");
    let output = dir.path().join("figure.png");

    let config = SurveyConfig {
        thicknesses: vec![4.0],
        velocities: vec![600.0, 2400.0],
        sensors: vec![2.0, 4.0, 8.0, 16.0, 32.0],
        output: output.clone(),
    };
    config.save(&config_path).unwrap();

    let loaded = SurveyConfig::load(&config_path).unwrap();
    assert_eq!(loaded, config);

    let (model, spread) = loaded.build().unwrap();
    let table = TravelTimeTable::compute(&model, &spread);
    assert_eq!(table.num_interfaces(), 1);
    assert_eq!(table.num_sensors(), 5);

    headwave::plot::render_figure(&spread, &table, &output).unwrap();
    assert!(output.exists());
}

// === Forward Model Properties ===

#[test]
fn test_reference_survey_table_shape() {
    let (model, spread) = reference_survey();
    let table = TravelTimeTable::compute(&model, &spread);

    assert_eq!(table.num_sensors(), 24);
    assert_eq!(table.num_interfaces(), 2);
    assert_eq!(table.direct().len(), 24);
}

#[test]
fn test_reference_survey_known_values() {
    let (model, spread) = reference_survey();
    let table = TravelTimeTable::compute(&model, &spread);

    // First sensor sits at 5 m: direct arrival is 5/450 s
    let expected_direct = 5.0 / 450.0;
    assert!(
        (table.direct()[0] - expected_direct).abs() < 1e-12,
        "direct time at 5 m: expected {}, got {}",
        expected_direct,
        table.direct()[0]
    );

    // First-interface head wave at 5 m
    let delay = 2.0 * 3.0 * (450.0_f64 / 1300.0).asin().cos() / 450.0;
    let expected_refr = 5.0 / 1300.0 + delay;
    assert!(
        (table.refracted(0)[0] - expected_refr).abs() < 1e-12,
        "refraction time at 5 m: expected {}, got {}",
        expected_refr,
        table.refracted(0)[0]
    );
}

#[test]
fn test_reference_critical_distances() {
    let (model, _) = reference_survey();

    let x1 = critical_distance(
        model.thickness(0),
        model.velocity(0),
        model.refractor_velocity(0),
    );
    assert!((x1 - 2.2138).abs() < 0.001, "first interface: got {}", x1);

    let x2 = critical_distance(
        model.thickness(1),
        model.velocity(1),
        model.refractor_velocity(1),
    );
    assert!(x2.is_finite() && x2 > 0.0, "second interface: got {}", x2);
}

#[test]
fn test_head_waves_overtake_direct_at_far_offsets() {
    // Beyond the crossover the faster refractor wins: the head wave arrives
    // before the direct wave at the farthest reference sensor
    let (model, spread) = reference_survey();
    let table = TravelTimeTable::compute(&model, &spread);

    let last = table.num_sensors() - 1;
    assert!(
        table.refracted(0)[last] < table.direct()[last],
        "expected first refraction ({}) before direct ({}) at {} m",
        table.refracted(0)[last],
        table.direct()[last],
        table.offsets()[last]
    );
}

#[test]
fn test_velocity_inversion_isolated() {
    // Layer 2 slower than layer 1: only interface 1 (the slow refractor)
    // becomes undefined, everything else stays finite
    let model = LayerModel::new(vec![3.0, 17.0], vec![450.0, 1300.0, 1000.0]).unwrap();
    let spread = SensorSpread::from_offsets(vec![5.0, 50.0, 100.0]);
    let table = TravelTimeTable::compute(&model, &spread);

    assert!(table.direct().iter().all(|t| t.is_finite()));
    assert!(table.refracted(0).iter().all(|t| t.is_finite()));
    assert!(table.refracted(1).iter().all(|t| t.is_nan()));

    let mask = table.defined_mask();
    assert!(mask[0].iter().all(|&ok| ok));
    assert!(mask[1].iter().all(|&ok| !ok));
}

// === Validation ===

#[test]
fn test_invalid_configs_fail_before_computation() {
    let empty = SurveyConfig {
        thicknesses: vec![],
        velocities: vec![450.0],
        sensors: vec![5.0],
        output: PathBuf::from("unused.png"),
    };
    assert_eq!(empty.build().unwrap_err().error_code(), "EMPTY_MODEL");

    let mismatched = SurveyConfig {
        thicknesses: vec![3.0, 17.0],
        velocities: vec![450.0, 1300.0],
        sensors: vec![5.0],
        output: PathBuf::from("unused.png"),
    };
    assert_eq!(
        mismatched.build().unwrap_err().error_code(),
        "LAYER_MISMATCH"
    );
}
