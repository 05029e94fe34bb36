use super::args::{Cli, Commands, ConfigCommand, LogLevel, OutputFormat};
use super::handlers::{self, HandlerContext};
use crate::config::{self, Config};
use crate::presentation::{RenderOptions, ViewMode};
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.log_level, !cli.no_color);

    let data_dir = config::resolve_data_dir(cli.data_dir.as_deref())?;
    let config_path = Config::path_in(&data_dir);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    debug!(path = %config_path.display(), "configuration loaded");

    let color = use_color(&cli, &config);

    match cli.command {
        Commands::Show {
            file,
            expand,
            expand_all,
            mode,
        } => {
            let mode = mode.map(ViewMode::from).unwrap_or(config.display.view_mode);
            let ctx = HandlerContext::new(cli.format, RenderOptions::new(mode, color));
            let options = handlers::show::ShowOptions {
                file,
                expand,
                expand_all,
            };
            handlers::show::handle(&config, options, &ctx)
        }

        Commands::Classes => {
            let ctx = HandlerContext::new(
                cli.format,
                RenderOptions::new(config.display.view_mode, color),
            );
            handlers::classes::handle(&ctx)
        }

        Commands::Config { command } => {
            let ctx = HandlerContext::new(
                cli.format,
                RenderOptions::new(ViewMode::Standard, color),
            );
            match command {
                ConfigCommand::Show => handlers::config::show(&config, &config_path, &ctx),
                ConfigCommand::SetAlias { label, code } => {
                    handlers::config::set_alias(config, &config_path, label, code, &ctx)
                }
            }
        }
    }
}

/// Logs go to stderr; `RUST_LOG` overrides `--log-level`
fn init_logging(level: LogLevel, color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color && std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn use_color(cli: &Cli, config: &Config) -> bool {
    cli.format == OutputFormat::Plain
        && !cli.no_color
        && config.display.color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
