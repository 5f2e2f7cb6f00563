//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::Path;

use log::info;

use crate::config::SurveyConfig;
use crate::error::Result;
use crate::forward::{critical_distance, TravelTimeTable};
use crate::model::LayerModel;
use crate::plot;

/// Load a configuration file, or fall back to the reference survey.
fn load_config(path: Option<&Path>) -> Result<SurveyConfig> {
    match path {
        Some(p) => {
            info!("Loading survey configuration: {}", p.display());
            SurveyConfig::load(p)
        }
        None => {
            info!("No configuration given, using the reference survey");
            Ok(SurveyConfig::default())
        }
    }
}

/// Compute the survey, report critical distances, render the figure.
pub fn run(config: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let (model, spread) = config.build()?;

    info!(
        "Computing travel times: {} layers, {} sensors",
        model.num_layers(),
        spread.len()
    );
    let table = TravelTimeTable::compute(&model, &spread);

    print_critical_distances(&model);

    let output = output.unwrap_or(&config.output);
    plot::render_figure(&spread, &table, output)?;
    println!("Figure saved: {}", output.display());

    Ok(())
}

/// Compute the survey and dump the travel-time table as pretty JSON.
pub fn print_times(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let (model, spread) = config.build()?;

    let table = TravelTimeTable::compute(&model, &spread);

    let json = serde_json::to_string_pretty(&table)?;
    println!("{}", json);

    Ok(())
}

/// Write the default survey configuration to a file.
pub fn init_config(path: &Path) -> Result<()> {
    info!("Writing default survey configuration: {}", path.display());

    SurveyConfig::default().save(path)?;
    println!("Survey configuration written: {}", path.display());

    Ok(())
}

/// One critical-distance line per interface.
///
/// The distance for interface `i` is the two-layer estimate using the
/// velocities directly above and below it.
fn print_critical_distances(model: &LayerModel) {
    for interface in 0..model.num_layers() {
        let x = critical_distance(
            model.thickness(interface),
            model.velocity(interface),
            model.refractor_velocity(interface),
        );
        println!(
            "Refraction {} critical distance: {:.3} m",
            interface + 1,
            x
        );
    }
}
