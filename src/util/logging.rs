use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Installs the global `tracing` subscriber.
///
/// Events are written to standard error so that standard output only carries
/// the conversion report. `RUST_LOG` takes precedence when set; otherwise
/// everything at `default_level` and above is shown.
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
pub fn init(default_level: LevelFilter) {
    let filter = EnvFilter::builder().with_default_directive(default_level.into())
                                     .from_env_lossy();

    let installed = tracing_subscriber::fmt().with_env_filter(filter)
                                             .with_writer(std::io::stderr)
                                             .with_target(false)
                                             .try_init();
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
