use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Line editor state: the buffer and a 0-based cursor in chars.
#[derive(Debug, Default, PartialEq, Eq)]
struct Line {
    chars: Vec<char>,
    cursor: usize,
}

enum Outcome {
    Editing,
    Submit,
    Cancel,
}

impl Line {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Apply one key. `accept` filters typed characters.
    fn apply(&mut self, key: KeyEvent, accept: fn(char) -> bool) -> Outcome {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(0);
            }
            KeyCode::Char('q') if ctrl => return Outcome::Cancel,
            KeyCode::Esc => return Outcome::Cancel,
            KeyCode::Enter => return Outcome::Submit,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.chars.len()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl && accept(c) => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Outcome::Editing
    }
}

/// Result of one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Esc or Ctrl+Q.
    Cancelled,
    /// No terminal to read from, or reading failed.
    Closed,
}

impl Input {
    pub fn line(self) -> Option<String> {
        match self {
            Input::Line(s) => Some(s),
            Input::Cancelled | Input::Closed => None,
        }
    }
}

/// Read a line in raw mode.
fn read_line(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Input {
    let mut line = Line::new(initial);

    let Ok(mut guard) = RawModeGuard::new() else {
        return Input::Closed;
    };

    print!("{prompt}: {}", line.text());
    flush();
    let mut drawn = line.chars.len();

    let outcome = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break None,
        };

        match line.apply(key, accept) {
            Outcome::Submit => break Some(true),
            Outcome::Cancel => break Some(false),
            Outcome::Editing => {}
        }

        print!("\r{prompt}: {}", " ".repeat(drawn + 1));
        print!("\r{prompt}: {}", line.text());
        print!("\x1b[{}G", prompt.chars().count() + 3 + line.cursor);
        flush();
        drawn = line.chars.len();
    };

    guard.release();
    println!();
    match outcome {
        Some(true) => Input::Line(line.text()),
        Some(false) => Input::Cancelled,
        None => Input::Closed,
    }
}

pub fn get_editable_input(prompt: &str, initial_value: &str) -> Input {
    read_line(prompt, initial_value, |_| true)
}

/// Digits only. `None` on cancel, closed input or an empty line.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = initial_value.to_string();
    read_line(prompt, &initial, |c| c.is_ascii_digit())
        .line()?
        .parse()
        .ok()
}
