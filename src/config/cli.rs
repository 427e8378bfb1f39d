use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Directory holding the library, preferences, and icons
    #[arg(long, env = "GAMESHELF_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import games from a JSON export
    Import {
        /// Path to the export file
        file: PathBuf,

        /// Abort on the first bad record instead of skipping it
        #[arg(long)]
        strict: bool,
    },
    /// List games in the library
    List {
        /// Only games on this platform
        #[arg(long)]
        platform: Option<String>,

        /// Only games with this status
        #[arg(long)]
        status: Option<String>,

        /// Include hidden games
        #[arg(long)]
        show_hidden: bool,

        /// Sort criterion (name, platform, status, recency)
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// Show which platforms the library has games for
    Platforms,
    /// Store an icon image for a game
    SetIcon {
        /// Id of the game to attach the icon to
        id: Uuid,

        /// Path to the image file
        image: PathBuf,
    },
    /// Recompute recency for every game from its last_played date
    RefreshRecency,
    /// Persist the default sort criterion
    SetSort {
        /// name, platform, status, or recency
        sort_by: String,
    },
}
