//! dewhitepaper: browse and vote on deWhitepaper expectations from the terminal.

mod cli;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{execute_command, Commands, Context};
use dewhitepaper::Config;

#[derive(Parser)]
#[command(name = "dewhitepaper")]
#[command(about = "Browse, read and vote on deWhitepaper expectations")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "DEWHITEPAPER_CONFIG", default_value = "dewhitepaper.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Skip content gateways and read milestone content from the store
    #[arg(long)]
    offline: bool,

    /// Disable simulated store latency
    #[arg(long)]
    no_latency: bool,

    /// Gateway timeout in milliseconds (overrides config file)
    #[arg(long)]
    gateway_timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("dewhitepaper={}", cli.log_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Config file: {}", cli.config);
    let mut config = Config::load(&cli.config)?;

    // Apply CLI overrides
    if cli.offline {
        config.gateway.offline = true;
    }
    if cli.no_latency {
        config.store.simulate_latency = false;
    }
    if let Some(timeout_ms) = cli.gateway_timeout_ms {
        config.gateway.timeout_ms = timeout_ms;
    }
    config.validate()?;

    let ctx = Context::new(config)?;
    let output = execute_command(&ctx, cli.command).await?;

    print!("{}", output.text);
    if !output.success {
        std::process::exit(1);
    }

    Ok(())
}
