//! Chordwheel CLI library
//!
//! This module contains the core CLI logic for the chordwheel text
//! visualizer.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;
pub use error_adapter::ErrorAdapter;

use std::{fs, io};

use log::info;

use chordwheel::{ChordwheelError, WheelBuilder};

/// Run the chordwheel CLI application
///
/// This function processes the input text through the chordwheel pipeline
/// and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ChordwheelError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Style color parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), ChordwheelError> {
    info!(output_path = args.output; "Processing text");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Resolve the source text, inline flag first
    let source = match (&args.text, &args.input) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => {
            info!(input_path = path.as_str(); "Reading input file");
            fs::read_to_string(path)?
        }
        (None, None) => {
            // clap enforces one of the two; direct callers may not.
            return Err(ChordwheelError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no input file or inline text given",
            )));
        }
    };

    // Process text using the WheelBuilder API
    let builder = WheelBuilder::new(app_config);
    let graph = builder.ingest(&source);
    let svg = builder.render_svg(&graph)?;

    // Write output file
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
