use tracing_subscriber::{fmt, EnvFilter};

/// Diagnostics go to stderr so stdout stays usable for `--dry-run` output.
pub fn initialize_logger(verbose: bool) {
    let default_directive = if verbose {
        "codeprep=debug"
    } else {
        "codeprep=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global logger");
}
