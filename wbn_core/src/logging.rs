//! Installation of the process-wide log subscriber.

use tracing::Level;

use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines for terminals.
    Text,
    /// One JSON object per line, for CloudWatch.
    Json,
}

/// Install the log subscriber. Call once at process start.
pub fn init_logging(level: Level, format: LogFormat) -> Result<(), Error> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true);
    let result = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|err| Error::Logging(err.to_string()))
}
