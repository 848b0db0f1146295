use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use padmiss_core::Config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "padmiss")]
#[command(about = "Padmiss tournament service client")]
struct Args {
    #[arg(short, long, default_value = "padmiss.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Register this cabinet with the tournament service
    Register {
        /// Cabinet name to register
        name: String,
        #[arg(long, env = "PADMISS_EMAIL")]
        email: String,
        #[arg(long, env = "PADMISS_PASSWORD")]
        password: String,
    },
    /// Look up a player profile
    Player {
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        rfid: Option<String>,
        #[arg(long)]
        nickname: Option<String>,
    },
    /// Show a player's most recent score
    Last { player_id: String },
    /// Dump a player's recent score history per chart
    History { player_id: String },
    /// Announce this cabinet's address, once or on an interval
    Broadcast {
        /// Repeat every N seconds until interrupted
        #[arg(long)]
        interval: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("padmiss=info".parse()?))
        .init();

    let args = Args::parse();

    let config = Config::load(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;

    match args.command {
        Command::Register {
            name,
            email,
            password,
        } => commands::register::run(&config, &name, &email, &password),
        Command::Player { id, rfid, nickname } => commands::player::run(&config, id, rfid, nickname),
        Command::Last { player_id } => commands::last::run(&config, &player_id),
        Command::History { player_id } => commands::history::run(&config, &player_id),
        Command::Broadcast { interval } => commands::broadcast::run(&config, interval),
    }
}
