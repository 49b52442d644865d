use rand::rngs::StdRng;

use passforge::pass::ConfigOption;
use passforge::pass::config::{MAX_LENGTH, MAX_QUANTITY, MIN_LENGTH, MIN_QUANTITY};
use passforge::session::Session;
use passforge::source::Source;

use crate::clipboard::Clipboard;
use crate::error::AppError;
use crate::terminal::clear;

use super::{
    Input, Status, enter_prompt, get_editable_input, get_numeric_input, print_help, print_main_menu,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Regenerate,
    Length,
    Quantity,
    Toggle(ConfigOption),
    /// 0-based index.
    Copy(usize),
    CopyAll,
    /// 0-based index.
    Visibility(usize),
    History,
    ClearHistory,
    Help,
    Quit,
    Invalid,
}

/// Parse a 1-based index after a command letter. A bare letter means 1.
fn index(rest: &str) -> Option<usize> {
    if rest.is_empty() {
        return Some(0);
    }
    rest.trim().parse::<usize>().ok()?.checked_sub(1)
}

impl Command {
    pub fn parse(input: &str) -> Command {
        let input = input.trim().to_lowercase();
        if let Ok(n) = input.parse::<usize>()
            && let Some(&option) = n.checked_sub(1).and_then(|i| ConfigOption::ALL.get(i))
        {
            return Command::Toggle(option);
        }

        match input.as_str() {
            "" => Command::Regenerate,
            "l" => Command::Length,
            "n" => Command::Quantity,
            "a" => Command::CopyAll,
            "h" => Command::History,
            "x" => Command::ClearHistory,
            "?" => Command::Help,
            "q" => Command::Quit,
            s => {
                let (head, rest) = s.split_at(s.chars().next().map_or(0, char::len_utf8));
                match (head, index(rest)) {
                    ("c", Some(i)) => Command::Copy(i),
                    ("v", Some(i)) => Command::Visibility(i),
                    _ => Command::Invalid,
                }
            }
        }
    }
}

pub struct Menu {
    session: Session,
    source: Source,
    rng: StdRng,
    clipboard: Option<Clipboard>,
    show_history: bool,
    status: Status,
}

impl Menu {
    pub fn new(session: Session, source: Source) -> Self {
        Self {
            session,
            source,
            rng: source.rng(),
            clipboard: None,
            show_history: false,
            status: Status::None,
        }
    }

    pub fn run(&mut self) {
        self.run_with(|| get_editable_input(enter_prompt(), ""));
    }

    /// Main loop. Ends on `q` or when `next_command` reports closed input.
    fn run_with(&mut self, mut next_command: impl FnMut() -> Input) {
        self.regenerate();
        loop {
            print_main_menu(&self.session, self.source, self.show_history, &self.status);
            self.status = Status::None;

            let input = match next_command() {
                Input::Line(input) => input,
                Input::Cancelled => continue,
                Input::Closed => {
                    tracing::warn!("no terminal input, leaving interactive mode");
                    break;
                }
            };

            match Command::parse(&input) {
                Command::Quit => {
                    clear();
                    break;
                }
                Command::Help => {
                    clear();
                    print_help();
                    let _ = get_editable_input("Press Enter to return", "");
                }
                command => self.apply(command),
            }
        }
    }

    fn regenerate(&mut self) {
        self.session.regenerate(&mut self.rng);
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Regenerate => self.regenerate(),
            Command::Length => {
                let prompt = format!("Password length ({MIN_LENGTH}-{MAX_LENGTH})");
                if let Some(length) = get_numeric_input(&prompt, self.session.config.length) {
                    if self.session.config.set_length(length) {
                        self.regenerate();
                    } else {
                        self.status = Status::Error(format!(
                            "Length must be between {MIN_LENGTH} and {MAX_LENGTH}."
                        ));
                    }
                }
            }
            Command::Quantity => {
                let prompt = format!("Number of passwords ({MIN_QUANTITY}-{MAX_QUANTITY})");
                if let Some(n) = get_numeric_input(&prompt, self.session.config.quantity) {
                    if self.session.config.set_quantity(n) {
                        self.regenerate();
                    } else {
                        self.status = Status::Error(format!(
                            "Quantity must be between {MIN_QUANTITY} and {MAX_QUANTITY}."
                        ));
                    }
                }
            }
            Command::Toggle(option) => {
                self.session.config.toggle(option);
                self.regenerate();
            }
            Command::Copy(i) => self.copy_one(i),
            Command::CopyAll => self.copy_all(),
            Command::Visibility(i) if i < self.session.len() => {
                self.session.toggle_visibility(i);
            }
            Command::Visibility(_) => {
                self.status = Status::Error("No password with that number.".to_string());
            }
            Command::History => self.show_history = !self.show_history,
            Command::ClearHistory => {
                self.session.clear_history();
                self.status = Status::Notice("History cleared.".to_string());
            }
            Command::Invalid => {
                self.status = Status::Error("Invalid command, press ? for help.".to_string());
            }
            Command::Help | Command::Quit => {}
        }
    }

    fn clipboard(&mut self) -> Result<&mut Clipboard, AppError> {
        if self.clipboard.is_none() {
            self.clipboard = Some(Clipboard::connect()?);
        }
        self.clipboard
            .as_mut()
            .ok_or_else(|| AppError::Clipboard("not connected".to_string()))
    }

    fn copy_one(&mut self, index: usize) {
        let Some(password) = self.session.password(index).map(str::to_owned) else {
            self.status = Status::Error("No password with that number.".to_string());
            return;
        };
        if password.is_empty() {
            self.status = Status::Error("Nothing to copy.".to_string());
            return;
        }
        let password = zeroize::Zeroizing::new(password);

        match self.clipboard().and_then(|c| c.copy(&password)) {
            Ok(()) => {
                self.session.record_copy(index);
                self.status = Status::Notice(format!("Password {} copied.", index + 1));
            }
            Err(e) => self.copy_failed(e),
        }
    }

    fn copy_all(&mut self) {
        if self.session.is_empty() || !self.session.config.has_any_class() {
            self.status = Status::Error("Nothing to copy.".to_string());
            return;
        }
        let all = self.session.copy_all();
        match self.clipboard().and_then(|c| c.copy(&all)) {
            Ok(()) => {
                let count = self.session.len();
                self.status = Status::Notice(format!("{count} passwords copied."));
            }
            Err(e) => self.copy_failed(e),
        }
    }

    fn copy_failed(&mut self, e: AppError) {
        tracing::warn!("{e}");
        self.clipboard = None;
        self.status = Status::Error(format!("Copy failed: {e}"));
    }
}
