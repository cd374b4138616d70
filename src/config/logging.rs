use crate::error::ConfigError;
use std::path::Path;

/// Loads a log4rs YAML configuration, e.g. the `log-config.yml` shipped
/// with the crate. Can only succeed once per process.
pub fn init_logging<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    log4rs::init_file(path, Default::default()).map_err(|e| ConfigError::Logging(e.to_string()))
}
