//! Terminal logging setup.
//!
//! Progress bars and summary tables are the primary UX; `tracing` output is
//! reserved for warnings (per-block decode skips) and, at `-v`/`-vv`, the
//! debug/trace detail a developer chasing a decode failure would want.

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatFields;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Renders `timestamp - LEVEL - message`, with no target or span fields.
struct ShumzuFormat;

impl<S, N> FormatEvent<S, N> for ShumzuFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        SystemTime.format_time(&mut writer)?;
        write!(writer, " - {} - ", event.metadata().level())?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initializes the global `tracing` subscriber. `verbosity` is the number
/// of `-v` flags: 0 → warnings only, 1 → info, 2+ → debug and above.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).event_format(ShumzuFormat).with_writer(std::io::stderr).try_init();
}
