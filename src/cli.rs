use std::path::PathBuf;

mod session;
mod terminal;
mod vehicles;

use catalog::{Config, Region};
use clap::ArgAction;

/// Parse a region from a string, ignoring case.
fn parse_region(s: &str) -> Result<Region, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        self.command.unwrap_or_default().run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Manage the catalog interactively (default)
    ///
    /// Reads the commands 'add', 'remove', 'show' and 'exit' from standard
    /// input. Nothing is kept once the session ends.
    Session(session::Command),

    /// Build the demo vehicles and start their engines
    Vehicles(vehicles::Command),
}

impl Default for Command {
    fn default() -> Self {
        Self::Session(session::Command::default())
    }
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Session(command) => command.run(config)?,
            Self::Vehicles(command) => command.run(config)?,
        }
        Ok(())
    }
}
