use crate::config::LogConfig;
use anyhow::Context;
use simplelog::{ConfigBuilder, WriteLogger};

/// Start appending log messages to the configured log file.  Does nothing if
/// no log file is configured.
///
/// The terminal is taken over by the game, so messages never go to stderr.
pub(crate) fn init(cfg: &LogConfig) -> anyhow::Result<()> {
    let Some(ref path) = cfg.file else {
        return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).context("failed to create log directory")?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context("failed to open log file")?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    WriteLogger::init(cfg.level, config, file)
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    Ok(())
}
