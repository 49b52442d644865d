//! CLI context - bundles settings, flags, and clipboard state.

use std::fs::OpenOptions;
use std::io::{BufRead, Write};

use serde::Serialize;
use zeroize::{Zeroize, Zeroizing};

use passforge::pass::{self, Assessment, strength::MAX_SCORE};
use passforge::session::Stats;

use super::{CliFlags, prompts};
use crate::clipboard::Clipboard;
use crate::error::AppError;
use crate::settings::{Destination, Settings};

#[derive(Serialize)]
struct Report<'a> {
    password: &'a str,
    assessment: Assessment,
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<Clipboard>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            settings: Settings::from_flags(&flags),
            flags,
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> Result<(), AppError> {
        if self.flags.analyze {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            return self.analyze(stdin.lock(), &mut stdout.lock());
        }

        let any_class = self.settings.generation.has_any_class();
        if !any_class {
            prompts::no_class_selected();
            // JSON consumers still get an (empty) array
            if !self.settings.json {
                return Ok(());
            }
        }

        self.connect_clipboard()?;

        let mut passwords = if any_class {
            pass::generate_batch(&self.settings.generation, &mut self.settings.source.rng())
        } else {
            Vec::new()
        };
        let stats = passwords
            .first()
            .filter(|_| self.settings.show_strength)
            .and_then(|first| Stats::of(first, &self.settings.generation));

        let result = self.deliver(&passwords);
        passwords.zeroize();
        result?;

        if let Some(stats) = stats {
            prompts::stats(&stats);
        }
        Ok(())
    }

    fn connect_clipboard(&mut self) -> Result<(), AppError> {
        if self.settings.destination != Destination::Clipboard {
            return Ok(());
        }
        match Clipboard::connect() {
            Ok(clipboard) => self.clipboard = Some(clipboard),
            Err(e) => {
                if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                    return Err(AppError::Aborted);
                }
                self.settings.destination = Destination::Terminal;
            }
        }
        Ok(())
    }

    fn deliver(&mut self, passwords: &[String]) -> Result<(), AppError> {
        let mut buf = Zeroizing::new(Vec::new());
        self.render(passwords, &mut *buf)?;

        match &self.settings.destination {
            Destination::Terminal => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                out.write_all(&buf)?;
                out.flush()?;
            }
            Destination::File(path) => {
                let output_err = |source| AppError::Output {
                    path: path.clone(),
                    source,
                };
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(output_err)?;
                }
                let mut file = OpenOptions::new()
                    .create(true)
                    .append(!self.settings.json)
                    .write(true)
                    .truncate(self.settings.json)
                    .open(path)
                    .map_err(output_err)?;
                file.write_all(&buf).map_err(output_err)?;

                let full_path = std::fs::canonicalize(path)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|_| path.display().to_string());
                prompts::passwords_written(passwords.len(), &full_path);
            }
            Destination::Clipboard => {
                let text = Zeroizing::new(String::from_utf8_lossy(&buf).trim_end().to_string());
                if let Some(clipboard) = self.clipboard.as_mut() {
                    clipboard.copy(&text)?;
                    prompts::clipboard_copied(passwords.len());
                }
            }
        }
        Ok(())
    }

    /// Plain lines, tab-separated lines with strength, or a JSON array.
    pub fn render<W: Write>(&self, passwords: &[String], out: &mut W) -> Result<(), AppError> {
        let config = &self.settings.generation;
        if self.settings.json {
            let reports: Vec<Report> = passwords
                .iter()
                .map(|p| Report {
                    password: p,
                    assessment: Assessment::of(p, config),
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &reports)?;
            writeln!(out)?;
            return Ok(());
        }

        for password in passwords {
            if self.settings.show_strength {
                let assessment = Assessment::of(password, config);
                writeln!(
                    out,
                    "{password}\t{}\t{}/{MAX_SCORE}",
                    assessment.strength, assessment.score
                )?;
            } else {
                writeln!(out, "{password}")?;
            }
        }
        Ok(())
    }

    /// Score each input line. Entropy assumes the character types selected by
    /// the flags.
    pub fn analyze<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<(), AppError> {
        let config = &self.settings.generation;
        let mut lines = Vec::new();
        for line in input.lines() {
            lines.push(Zeroizing::new(line?));
        }

        if self.settings.json {
            let assessments: Vec<Assessment> =
                lines.iter().map(|l| Assessment::of(l, config)).collect();
            serde_json::to_writer_pretty(&mut *out, &assessments)?;
            writeln!(out)?;
        } else {
            for line in &lines {
                let a = Assessment::of(line, config);
                writeln!(
                    out,
                    "{}/{MAX_SCORE}\t{}\t{} bits\t{}",
                    a.score, a.strength, a.entropy_bits, a.crack_time
                )?;
            }
        }
        tracing::debug!(count = lines.len(), "analyzed passwords");
        Ok(())
    }
}
