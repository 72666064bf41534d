use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set. Otherwise only warnings are shown, or debug
/// output when `verbose` is true. Stdout stays free for command output.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("launcher_patch={default_level}")));

    // A subscriber may already be installed when embedded in another binary.
    let _ = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
