//! Rendering of match results for the CLI

pub mod formatter;

pub use formatter::{save_results_to_file, ConsoleFormatter, JsonFormatter, OutputFormatter};
