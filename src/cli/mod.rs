//! Non-interactive mode: flags in, passwords out.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

use crate::error::AppError;
use crate::logging;

pub fn run(args: Vec<String>) -> ExitCode {
    let flags = match CliFlags::try_parse_from(args) {
        Ok(flags) => flags,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    quiet::set(flags.quiet);
    logging::init(flags.verbose, flags.quiet);
    if flags.seed.is_some() {
        prompts::warn("Seeded output is reproducible; do not use it for real secrets");
    }

    match Context::new(flags).run() {
        Ok(()) | Err(AppError::Aborted) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
