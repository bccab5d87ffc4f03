pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
};

/// Whether span close events (with their busy/idle timings) should be logged.
fn wants_span_timings(filter: &EnvFilter) -> bool {
    let filter = filter.to_string();
    filter.contains("debug") || filter.contains("trace")
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// At `debug` or `trace` the close of every instrumented span is logged, so
/// payload loads show how long they took. Only binaries call this; the
/// library never touches global logging state.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let span_events = if wants_span_timings(&env_filter) {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(span_events)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
