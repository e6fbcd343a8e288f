//! File-backed tracing setup.
//!
//! The terminal owns stdout, so logs go to a file. Off by default; enabled
//! through `ETALAGE_LOG` or the config file. `RUST_LOG` filters as usual.

use std::fs::OpenOptions;
use std::sync::Mutex;

use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber when a log file is configured.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("etalage=info"));
    // A second init call must stay harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
