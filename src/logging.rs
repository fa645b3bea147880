use anyhow::Context;
use env_logger::{Builder, Env};
use std::fs::File;
use std::path::Path;

/// Send log records to a file; the terminal belongs to the UI.
///
/// Level comes from `LOG_LEVEL` (default `info`).
pub fn init_logging(target: &Path) -> anyhow::Result<()> {
    let log_env = Env::default()
        .filter_or("LOG_LEVEL", "info")
        .write_style_or("LOG_STYLE", "never");

    let log_file = File::create(target)
        .with_context(|| format!("Could not create log file {}", target.display()))?;

    Builder::from_env(log_env)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .context("Logger already initialized")?;

    Ok(())
}
