//! CLI logic for the shot map renderer.
//!
//! This module contains the core CLI logic: configuration loading, reading
//! the match data and writing the rendered SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::info;

use shotmap::{ShotMapBuilder, ShotMapError};

/// Run the shot map CLI application
///
/// Loads the configuration, extracts the shots from the events file (and
/// the lineups file, if given), and writes the rendered SVG to the output
/// file. With `--compare`, a second events file is loaded the same way and
/// drawn mirrored on the same pitch.
///
/// # Errors
///
/// Returns `ShotMapError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed or incomplete match data
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ShotMapError> {
    info!(
        events_path = args.events,
        lineups_path:? = args.lineups,
        output_path = args.output;
        "Processing match"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.no_labels {
        app_config.labels_mut().set_enabled(false);
    }

    let builder = ShotMapBuilder::new(app_config);
    let shots = builder.load_shots_from_paths(
        Path::new(&args.events),
        args.lineups.as_deref().map(Path::new),
    )?;
    let svg = match &args.compare {
        Some(compare) => {
            info!(compare_path = compare; "Rendering comparison map");
            let second = builder.load_shots_from_paths(
                Path::new(compare),
                args.compare_lineups.as_deref().map(Path::new),
            )?;
            let providers = [
                builder.config().plot().provider(),
                args.compare_provider.as_deref().unwrap_or_default(),
            ];
            builder.render_comparison_svg(&shots, &second, providers)?
        }
        None => builder.render_svg(&shots)?,
    };

    fs::write(&args.output, svg)?;

    info!(output_file = args.output, shot_count = shots.len(); "SVG exported successfully");

    Ok(())
}
