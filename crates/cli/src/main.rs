// FILE: crates/cli/src/main.rs

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use readshelf_config::{Config, ConfigManager};
use std::path::PathBuf;

mod commands;

/// Width used when none is given; a large viewport
const DEFAULT_WIDTH: &str = "1200";

fn width_arg() -> Arg {
    Arg::new("width")
        .short('w')
        .long("width")
        .value_name("PIXELS")
        .help("Viewport width used to pick the carousel page size")
        .value_parser(clap::value_parser!(u32))
        .default_value(DEFAULT_WIDTH)
}

fn build_cli() -> Command {
    Command::new("readshelf")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Readshelf Contributors")
        .about("Personal e-book shelf: import folders, browse them page by page")
        .arg(
            Arg::new("config-dir")
                .short('c')
                .long("config-dir")
                .value_name("PATH")
                .help("Directory holding config.toml and the quote cache")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("import")
                .about("Import one or more folders into the shelf")
                .arg(
                    Arg::new("dirs")
                        .required(true)
                        .num_args(1..)
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Folders to import"),
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Confirm every preview without asking")
                        .action(ArgAction::SetTrue),
                )
                .arg(width_arg()),
        )
        .subcommand(
            Command::new("browse")
                .about("Show one page of a folder's books")
                .arg(
                    Arg::new("dir")
                        .required(true)
                        .value_name("DIR")
                        .value_parser(clap::value_parser!(PathBuf))
                        .help("Folder to browse"),
                )
                .arg(width_arg())
                .arg(
                    Arg::new("page")
                        .short('p')
                        .long("page")
                        .value_name("PAGE")
                        .help("Page to show, starting at 1")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("stepped")
                        .long("stepped")
                        .help("Use stepped navigation regardless of config")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("quote")
                .about("Show the quote of the day")
                .arg(
                    Arg::new("date")
                        .short('d')
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Day to show (defaults to today)"),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage the configuration file")
                .subcommand_required(true)
                .subcommand(Command::new("init").about("Write a default config file if none exists"))
                .subcommand(Command::new("show").about("Print the effective configuration"))
                .subcommand(Command::new("path").about("Print the config file location")),
        )
}

fn config_manager(config_dir: Option<&PathBuf>) -> Result<ConfigManager> {
    match config_dir {
        Some(dir) => ConfigManager::with_directory(dir.clone())
            .with_context(|| format!("Failed to use config directory {}", dir.display())),
        None => ConfigManager::new().context("Failed to locate config directory"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let manager = config_manager(matches.get_one::<PathBuf>("config-dir"))?;

    // The logger's default level comes from the config, so load it first
    let (config, load_error) = match manager.load_with_env_overrides() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.app.log_level.to_string()),
    )
    .init();

    if let Some(e) = load_error {
        log::warn!("Failed to load config: {}, using defaults", e);
    }

    match matches.subcommand() {
        Some(("import", sub_matches)) => commands::import_folders(&config, sub_matches).await,
        Some(("browse", sub_matches)) => commands::browse_folder(&config, sub_matches).await,
        Some(("quote", sub_matches)) => commands::show_quote(&manager, &config, sub_matches).await,
        Some(("config", sub_matches)) => commands::config_command(&manager, &config, sub_matches),
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
