//! Test setup shared by the wireval crates.
//!
//! Calling [`setup`] (or using the [`test`] attribute, which calls it for you)
//! installs colored panic backtraces and a tracing subscriber, exactly once
//! per process. Set `WIREVAL_LOG` to a `tracing_subscriber` targets spec
//! (e.g. `wireval=debug`) to filter output; the default is TRACE everywhere.

#![warn(missing_docs)]

pub use wireval_testhelpers_macros::test;

use std::sync::LazyLock;
use std::time::Instant;

use tracing_subscriber::filter::Targets;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Timestamps rendered as seconds elapsed since the first test in the process.
struct Uptime;

impl FormatTime for Uptime {
    fn format_time(&self, w: &mut Writer<'_>) -> core::fmt::Result {
        let elapsed = START_TIME.elapsed();
        write!(w, "{:4}.{:03}s", elapsed.as_secs(), elapsed.subsec_millis())
    }
}

/// One-shot initialization, guarded so it is safe no matter how many tests
/// run in the same process.
static INIT: LazyLock<()> = LazyLock::new(|| {
    // Pin the start time before anything logs.
    let _ = *START_TIME;

    color_backtrace::BacktracePrinter::new()
        .verbosity(color_backtrace::Verbosity::Medium)
        .install(Box::new(termcolor::StandardStream::stderr(
            termcolor::ColorChoice::AlwaysAnsi,
        )));

    let filter = std::env::var("WIREVAL_LOG")
        .ok()
        .and_then(|spec| spec.parse::<Targets>().ok())
        .unwrap_or_else(|| Targets::new().with_default(tracing::Level::TRACE));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(Uptime)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(filter)
        .try_init()
        .ok();
});

/// Install the panic printer and tracing subscriber for the current process.
///
/// Idempotent; `#[wireval_testhelpers::test]` calls this before every test
/// body, so tests rarely need it directly.
pub fn setup() {
    #[allow(clippy::let_unit_value)]
    let _ = *INIT;
}
