use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slipscroll_core::ScrollSettings;

mod commands;

#[derive(Parser)]
#[command(name = "slipscroll")]
#[command(author, version, about = "A lerped smooth-scrolling engine with a terminal demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Position interpolation factor, (0, 1]
    #[arg(long)]
    scroll_ease: Option<f64>,

    /// Speed interpolation factor, (0, 1]
    #[arg(long)]
    speed_ease: Option<f64>,

    /// Render loop frame rate
    #[arg(long)]
    fps: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the scrolling demo
    Run,
    /// Print the effective configuration as TOML
    Config {
        /// Write the configuration file if it does not exist yet
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration and apply flag overrides
    let mut settings = ScrollSettings::load()?;
    if let Some(scroll_ease) = cli.scroll_ease {
        settings.scroll_ease = scroll_ease;
    }
    if let Some(speed_ease) = cli.speed_ease {
        settings.speed_ease = speed_ease;
    }
    if let Some(fps) = cli.fps {
        settings.fps = fps;
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(&settings),
        Some(Commands::Config { init }) => commands::config::run(&settings, init),
    }
}
