use crate::config::cli::Command;
use crate::config::Config;
use crate::domain::{Platform, SortBy, Status};
use crate::error::Result;
use crate::infrastructure::FileSystemStore;
use crate::services::{LibraryService, ListFilter};
use std::sync::Arc;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

fn main() -> Result<()> {
    let config = Config::new()?;
    init_tracing(&config.args.log_level);
    config.ensure_directories()?;

    let store = Arc::new(FileSystemStore::new(&config.args.data_dir));
    let library = LibraryService::new(store);

    match &config.args.command {
        Command::Import { file, strict } => {
            let doc: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(file)?)?;
            let report = library.import(&doc, *strict)?;
            println!(
                "Imported {} games, skipped {}",
                report.imported, report.skipped
            );
        }
        Command::List {
            platform,
            status,
            show_hidden,
            sort_by,
        } => {
            let filter = ListFilter {
                platform: platform.as_deref().map(Platform::from_raw),
                status: status.as_deref().map(Status::from_raw),
                show_hidden: *show_hidden,
                sort_by: sort_by.as_deref().map(SortBy::from_raw),
            };
            for game in library.list(filter)? {
                let favorite = if game.is_favorite { " *" } else { "" };
                println!(
                    "{:<40} {:<12} {:<10} {}{}",
                    game.name,
                    game.platform.display_name(),
                    game.status.display_name(),
                    game.recency.display_name(),
                    favorite
                );
            }
        }
        Command::Platforms => {
            for (platform, present) in library.platform_membership()? {
                let marker = if present { "x" } else { "-" };
                println!("{} {}", marker, platform.display_name());
            }
        }
        Command::SetIcon { id, image } => {
            let bytes = std::fs::read(image)?;
            let path = library.attach_icon(*id, &bytes)?;
            println!("Icon stored at {path}");
        }
        Command::RefreshRecency => {
            let count = library.refresh_recency()?;
            println!("Recomputed recency for {count} games");
        }
        Command::SetSort { sort_by } => {
            library.set_sort_preference(SortBy::from_raw(sort_by))?;
            println!("Default sort set to {sort_by}");
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let level = level.parse().unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();
}
