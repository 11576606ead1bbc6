use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

/// Sends compact log lines to `path`. The terminal belongs to the game, so
/// without a file no subscriber is installed and events are dropped.
pub fn setup_logging(path: Option<&Path>, level: Level) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .finish()
        .try_init()
        .context("installing the log subscriber")?;
    Ok(())
}
