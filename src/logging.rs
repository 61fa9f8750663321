use anyhow::Context;
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use std::path::Path;

pub const CONFIG_FILE: &str = "log4rs.yaml";
pub const LEVEL_VAR: &str = "DISCS_LOG";

const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:5})} {M} - {m}{n}";

/// Reads `log4rs.yaml` from the working directory if there is one,
/// otherwise logs to stdout at the level named by `DISCS_LOG` (default info).
pub fn init_logging() -> anyhow::Result<()> {
    if Path::new(CONFIG_FILE).exists() {
        return log4rs::init_file(CONFIG_FILE, Default::default())
            .with_context(|| format!("failed to load {}", CONFIG_FILE));
    }
    let level = level_from(std::env::var(LEVEL_VAR).ok().as_deref());
    log4rs::init_config(console_config(level)?)?;
    Ok(())
}

fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

fn console_config(level: LevelFilter) -> anyhow::Result<Config> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    Ok(config)
}
