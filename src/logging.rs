//! Diagnostic logging to stderr.

use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::{BLUE, DIM, GREEN, RED, RESET, YELLOW};

/// `[+] message key=value` with a colored level marker.
pub struct MarkerFormatter;

impl<S, N> FormatEvent<S, N> for MarkerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (marker, color) = match *event.metadata().level() {
            Level::TRACE => ("[ ]", DIM),
            Level::DEBUG => ("[?]", BLUE),
            Level::INFO => ("[+]", GREEN),
            Level::WARN => ("[*]", YELLOW),
            Level::ERROR => ("[-]", RED),
        };

        if writer.has_ansi_escapes() {
            write!(writer, "{color}{marker}{RESET} ")?;
        } else {
            write!(writer, "{marker} ")?;
        }
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the flag-derived level.
pub fn init(verbosity: u8, quiet: bool) {
    let level = match (quiet, verbosity) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(crate::cli::quiet::stderr_is_terminal())
        .event_format(MarkerFormatter)
        .try_init();
}
