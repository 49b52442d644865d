//! Interactive menu.

mod input;
mod menu;
mod text;

pub use input::*;
pub use menu::*;
pub use text::*;

use passforge::pass::GenerationConfig;
use passforge::session::Session;
use passforge::source::Source;

use crate::terminal::{clear, reset_terminal};

/// Run TUI interactive mode.
pub fn run() {
    reset_terminal();
    clear();
    let session = Session::new(GenerationConfig::default());
    Menu::new(session, Source::System).run();
    reset_terminal();
}
