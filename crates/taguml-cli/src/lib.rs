//! CLI logic for the taguml diagram generator.
//!
//! This module contains the core CLI logic for the taguml diagram
//! generator.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Mode};

use std::fs;

use log::{info, warn};

use taguml::{DiagramGenerator, TagIndex, TagumlError};

/// Run the taguml CLI application
///
/// This function reads the tag file, renders the selected diagram, and
/// writes the PlantUML text to the output file.
///
/// # Errors
///
/// Returns `TagumlError` for:
/// - A missing or unreadable input file
/// - Configuration loading errors
/// - Output file write errors
///
/// Skipped tag lines are reported as warnings and do not fail the run.
pub fn run(args: &Args) -> Result<(), TagumlError> {
    info!(
        input_path = args.input,
        mode:? = args.mode;
        "Generating diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the tag listing using the DiagramGenerator API
    let generator = DiagramGenerator::new(app_config);
    let index = generator.parse(&source);
    report_warnings(&index, &source);

    let diagram = match args.mode {
        Mode::Func => generator.render_function_diagram(&index),
        Mode::Class => generator.render_class_diagram(&index),
    };

    // Write output file
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.mode.default_output().to_string());
    fs::write(&output, diagram)?;

    info!(output_file = output; "PlantUML diagram written");

    Ok(())
}

/// Render each skipped-line warning with a source snippet.
fn report_warnings(index: &TagIndex, source: &str) {
    if index.warnings().is_empty() {
        return;
    }

    let reporter = miette::GraphicalReportHandler::new();

    for report in error_adapter::warning_reports(index.warnings(), source) {
        let mut rendered = String::new();
        reporter
            .render_report(&mut rendered, &report)
            .expect("Writing to String buffer is infallible");

        warn!("{rendered}");
    }
}
