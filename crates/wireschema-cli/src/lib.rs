//! CLI logic for the wireschema tool.
//!
//! `check` imports a layout and reports every issue; `fmt` imports a layout
//! and writes it back in canonical form.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command};

use std::fs;

use log::{info, warn};

use wireschema::{LayoutCodec, WireSchemaError};

use error_adapter::{IssueAdapter, render};

/// Run the wireschema CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `WireSchemaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Imports the configured policy refuses
pub fn run(args: &Args) -> Result<(), WireSchemaError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(mode) = args.round_trip {
        info!(mode:?; "Round-trip mode set on the command line");
        app_config = app_config.with_round_trip(mode);
    }

    let codec = LayoutCodec::new(app_config);
    match &args.command {
        Command::Check { input } => check(&codec, input),
        Command::Fmt { input, output } => format(&codec, input, output.as_deref()),
    }
}

/// Import `input`, print its warnings, and fail if the policy refuses it.
fn check(codec: &LayoutCodec, input: &str) -> Result<(), WireSchemaError> {
    info!(input_path = input; "Checking layout");

    let source = fs::read_to_string(input)?;
    let outcome = codec.import(&source);
    let issues = outcome.issues().to_vec();

    let layout = outcome
        .accept(codec.config().import().policy())
        .map_err(|err| WireSchemaError::new_import_error(err, source.as_str()))?;

    for issue in &issues {
        warn!("{}", render(&IssueAdapter::new(issue, &source)));
    }

    println!(
        "{input}: {} components, {} wires, {} issues",
        layout.components().len(),
        layout.wires().len(),
        issues.len()
    );
    Ok(())
}

/// Import `input` and write its canonical export.
fn format(codec: &LayoutCodec, input: &str, output: Option<&str>) -> Result<(), WireSchemaError> {
    info!(input_path = input, output_path:? = output; "Formatting layout");

    let layout = codec.read_file(input)?;
    match output {
        Some(path) => codec.write_file(path, &layout)?,
        None => print!("{}", codec.export(&layout)),
    }

    info!(input_path = input; "Layout formatted successfully");
    Ok(())
}
