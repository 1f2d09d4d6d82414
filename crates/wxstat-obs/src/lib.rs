use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize logging to stderr; stdout carries report output.
/// - RUST_LOG respected; otherwise `filter`
/// - Panics if a global subscriber is already installed
pub fn init(service_name: &str, filter: &str, format: LogFormat) {
    if let Err(e) = try_init(service_name, filter, format) {
        panic!("failed to initialize logging: {e}");
    }
}

/// Like [`init`], but reports an already-installed subscriber as an error
pub fn try_init(service_name: &str, filter: &str, format: LogFormat) -> Result<(), TryInitError> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| filter.to_string());
    let registry = tracing_subscriber::registry().with(EnvFilter::new(env_filter));

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()?,
    }

    tracing::debug!(service = %service_name, "Logging initialized");
    Ok(())
}
