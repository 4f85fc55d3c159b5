use time::macros::format_description;
use tracing_subscriber::{
    fmt::{format::FmtSpan, time::UtcTime},
    EnvFilter,
};

/// Installs the global console subscriber. The filter is read from
/// `RUST_LOG`. Fails if a subscriber is already installed.
pub fn init_console_subscriber() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let timer = UtcTime::new(format_description!(
        "[year]-[month]-[day]T[hour repr:24]:[minute]:[second].[subsecond digits:3]Z"
    ));
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(timer)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_level(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .try_init()
}

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    let _ = init_console_subscriber();
}
