use std::env;
use std::process::ExitCode;

mod cli;
mod clipboard;
mod error;
mod exits;
mod logging;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    exits::harden_process();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => {
            logging::init(0, false);
            tui::run();
            ExitCode::SUCCESS
        }
        _ => cli::run(args),
    }
}
