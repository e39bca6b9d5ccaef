//! slotbook - find free Google Calendar slots and book demo meetings
//! into them, with attendees, reminders, and a Meet link.

mod app_config;
mod availability;
mod booking;
mod commands;
mod error;
mod google;
mod interval;
mod session;
mod tui;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app_config::AppConfig;

#[derive(Parser)]
#[command(name = "slotbook")]
#[command(about = "Find free Google Calendar slots and book demo meetings into them")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect a Google account
    Auth,
    /// List the free slots over the coming days
    Slots,
    /// Book a meeting into one of the free slots
    Book {
        /// Event title (defaults to the configured one)
        #[arg(short, long)]
        title: Option<String>,

        /// Event description (defaults to the configured one)
        #[arg(short, long)]
        description: Option<String>,

        /// Comma-separated attendee emails (prompted for if omitted)
        #[arg(short, long)]
        attendees: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Commands::Auth => commands::auth::run(&config).await,
        Commands::Slots => commands::slots::run(&config).await,
        Commands::Book {
            title,
            description,
            attendees,
        } => commands::book::run(&config, title, description, attendees).await,
    }
}
