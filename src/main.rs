use anyhow::Result;
use clap::Parser;
use skyblock_core::config::ServerConfig;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Path to the config file, created with defaults if missing
    #[arg(long, default_value = "Config.toml")]
    config: PathBuf,

    /// Run commands as this player (name or uuid) instead of the console
    #[arg(long)]
    player: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let logfile = tracing_appender::rolling::daily("./logs", "skyblock.log");
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var("SKYBLOCK_LOG")
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(logfile.and(std::io::stderr))
        .with_env_filter(env_filter)
        .init();

    let config = ServerConfig::load(&args.config)?;
    info!("Loaded config from {}", args.config.display());
    skyblock_core::console::run(config, args.player.as_deref())
}
