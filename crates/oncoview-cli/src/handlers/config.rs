use super::HandlerContext;
use crate::config::Config;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

pub fn show(config: &Config, config_path: &Path, ctx: &HandlerContext) -> Result<()> {
    ctx.render(presenters::present_config(config, config_path))
}

pub fn set_alias(
    mut config: Config,
    config_path: &Path,
    label: String,
    code: i64,
    ctx: &HandlerContext,
) -> Result<()> {
    config.set_alias(label.clone(), code);
    config
        .save_to(config_path)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    info!(%label, code, path = %config_path.display(), "saved class code alias");

    ctx.render(presenters::present_alias_set(label, code))
}
