use colored::Colorize;
use wiki_server::{ServerConfig, WikiServer};

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Config(args) => cmd_config(args),
    }
}

/// Config file (or defaults) with command-line overrides applied.
fn resolve_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if args.no_seed {
        config.seed_defaults = false;
    }
    Ok(config)
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<ServerConfig> {
    match path {
        Some(path) => Ok(ServerConfig::load(path)?),
        None => Ok(ServerConfig::default()),
    }
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    tracing::debug!(
        bind_addr = %config.bind_addr,
        seed_defaults = config.seed_defaults,
        config_file = ?args.config,
        "resolved server config"
    );
    println!(
        "{} wiki on {}{}",
        "✓".green().bold(),
        format!("http://{}", config.bind_addr).bold(),
        if config.seed_defaults { "" } else { " (empty store)" }.dimmed(),
    );
    WikiServer::new(config).serve().await?;
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
