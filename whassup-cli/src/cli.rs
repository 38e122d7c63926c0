//! CLI parser.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "whassup")]
#[command(about = "Read chats from a WhatsApp msgstore.db", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to msgstore.db (overrides WHASSUP_DB_PATH).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Directory with downloaded media (overrides WHASSUP_MEDIA_DIR).
    #[arg(long, global = true)]
    pub media_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List chats, most recently active first.
    Chats {
        #[arg(long)]
        json: bool,
    },
    /// Print a chat's history in chronological order.
    History {
        /// Chat key, e.g. 4915773981234@s.whatsapp.net.
        #[arg(short, long)]
        chat: String,
        /// Only the latest N messages.
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(long)]
        json: bool,
        /// Keep Private Use Area glyphs in message text.
        #[arg(long)]
        raw: bool,
    },
    /// Print the latest N messages across all chats.
    Recent {
        #[arg(short, long, default_value = "20")]
        limit: u32,
        #[arg(long)]
        raw: bool,
    },
    /// Show one message with all decoded fields.
    Show {
        id: i64,
    },
}
