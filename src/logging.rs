//! File logger setup.
//!
//! The terminal owns stdout, so records only go to a file and only when one
//! is configured.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};

use crate::config::Config;

/// Install the global logger if `config.log_path` is set.
///
/// Returns whether a logger was installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = fern::log_file(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            let now = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default();
            out.finish(format_args!(
                "[{}.{:03} {:<5} {}] {}",
                now.as_secs(),
                now.subsec_millis(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.log_level)
        .chain(file)
        .apply()
        .map_err(|e| anyhow!("installing logger: {e}"))?;

    Ok(true)
}
