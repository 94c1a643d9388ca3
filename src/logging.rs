use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `BUDGETCALC_LOG=debug`.
pub const LOG_ENV: &str = "BUDGETCALC_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Send diagnostics to stderr; stdout carries nothing but the JSON answer.
/// Calling this more than once is harmless.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();
}
