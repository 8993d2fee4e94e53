//! The `check` command: compile a file and report the outcome.

use std::process::ExitCode;

use super::{read_source, report_failure, CliOptions};
use crate::compile_with_config;

/// Compile `path`; print `OK: <path> (N functions)` or the diagnostics.
pub fn check_file(path: &str, options: &CliOptions) -> ExitCode {
    let Some(source) = read_source(path) else {
        return ExitCode::FAILURE;
    };

    match compile_with_config(&source, &options.compile_config()) {
        Ok(compilation) => {
            println!("OK: {path} ({} functions)", compilation.function_count());
            ExitCode::SUCCESS
        }
        Err(failure) => report_failure(&source, &failure, options),
    }
}
