//! Plugin Annotation - annotation block generator for engine plugins

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = plugin_annotation::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
