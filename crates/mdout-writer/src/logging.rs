use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize a tracing subscriber for applications using mdout-writer.
///
/// Session events (sink open/close, release, drop-time failures) are
/// emitted under the `mdout_fs` and `mdout_writer` targets. Prints compact formatted logs to stdout. The level comes from the
/// `RUST_LOG` environment variable, defaulting to "info". The library never
/// calls this itself; applications opt in.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
