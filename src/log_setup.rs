use flexi_logger::{Logger, LoggerHandle};

use crate::error::Result;

/// Starts logging to stderr at `base_level`; `RUST_LOG` takes precedence.
///
/// Logging stops when the returned handle is dropped.
pub fn setup_logging(base_level: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(base_level)?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()?;
    Ok(handle)
}
