//! Questlog control - terminal front-end for the quest tracker.
//!
//! Plays the presentation role: HUD, list surface, inputs, and the
//! delete confirmation dialog. All state transitions go through the
//! `questlog` session controller.

mod commands;
mod config;
mod ui;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use questlog::{FileStore, Priority, QuestLog, SortKey, StatusFilter};
use tracing::Level;

#[derive(Parser)]
#[command(name = "questctl")]
#[command(about = "Questlog - a gamified quest tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP, streak, and quest counts
    Status,

    /// List quests
    List {
        /// Completion filter: all, active, completed
        #[arg(long, default_value_t = StatusFilter::All)]
        filter: StatusFilter,

        /// Sort key: priority, deadline
        #[arg(long, default_value_t = SortKey::Priority)]
        sort: SortKey,

        /// Case-insensitive title search
        #[arg(long)]
        search: Option<String>,
    },

    /// Add a new quest
    Add {
        /// Quest title
        title: String,

        /// Priority: high, medium, low
        #[arg(long, default_value_t = Priority::Medium)]
        priority: Priority,

        /// Deadline as YYYY-MM-DD
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// Toggle a quest's completion (accepts a unique id prefix)
    Done {
        /// Quest id or unique prefix
        id: String,
    },

    /// Edit a quest (not implemented yet)
    Edit {
        /// Quest id or unique prefix
        id: String,
    },

    /// Delete a quest after confirmation
    Rm {
        /// Quest id or unique prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = config::Config::load()?;
    let mut log = QuestLog::open(FileStore::new(&config.data_dir));

    match cli.command {
        Commands::Status => commands::status(&log),
        Commands::List { filter, sort, search } => commands::list(&mut log, filter, sort, search),
        Commands::Add { title, priority, due } => commands::add(&mut log, &title, priority, due)?,
        Commands::Done { id } => commands::done(&mut log, &id)?,
        Commands::Edit { id } => commands::edit(&log, &id)?,
        Commands::Rm { id, yes } => commands::rm(&mut log, &id, yes)?,
    }

    Ok(())
}
