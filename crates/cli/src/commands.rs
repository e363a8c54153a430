// FILE: crates/cli/src/commands.rs

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use console::style;
use readshelf_carousel::{Carousel, Navigation, PageSizePolicy};
use readshelf_config::{CarouselConfig, Config, ConfigManager};
use readshelf_core::{Book, Catalog, PreviewFolder};
use readshelf_library::{IngestionEvent, LibrarySession, LocalFileSystem};
use readshelf_quotes::{HttpQuoteSource, JsonFileStore, QuoteCache};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// What happened to one folder during `import`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImportResult {
    Imported { folder: String, books: usize },
    Declined { folder: String },
    Empty { folder: String },
    Unreadable,
}

/// Import folders into a fresh shelf and print it
pub async fn import_folders(config: &Config, matches: &ArgMatches) -> Result<()> {
    let dirs: Vec<PathBuf> = matches
        .get_many::<PathBuf>("dirs")
        .ok_or_else(|| anyhow::anyhow!("At least one folder is required"))?
        .cloned()
        .collect();
    let assume_yes = matches.get_flag("yes");
    let width = matches.get_one::<u32>("width").copied().unwrap_or(1200);

    let mut session = LibrarySession::from_config(&config.library);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    for dir in &dirs {
        match import_one(&mut session, dir, assume_yes, &mut input).await? {
            ImportResult::Imported { folder, books } => {
                println!("{} Added {} ({} books)", style("✓").green().bold(), folder, books);
            }
            ImportResult::Declined { folder } => {
                println!("Skipped {}", folder);
            }
            ImportResult::Empty { folder } => {
                println!(
                    "{} No supported books in {}",
                    style("!").yellow().bold(),
                    folder
                );
            }
            ImportResult::Unreadable => {
                println!(
                    "{} Could not open {}",
                    style("✗").red().bold(),
                    dir.display()
                );
            }
        }
    }

    println!();
    print!("{}", render_catalog(session.catalog(), &config.carousel, width));
    Ok(())
}

/// Runs one add-folder pass against `dir`
pub(crate) async fn import_one<R: BufRead>(
    session: &mut LibrarySession,
    dir: &Path,
    assume_yes: bool,
    input: &mut R,
) -> Result<ImportResult> {
    if let IngestionEvent::Rejected { state } = session.start_add() {
        bail!("Cannot start an import while {}", state);
    }

    let provider = LocalFileSystem::new(dir);
    match session.scan(&provider).await {
        IngestionEvent::PreviewReady => {
            let preview = session
                .preview_folder()
                .context("Preview missing after scan")?;
            let folder = preview.name().to_string();
            let books = preview.len();
            print!("{}", render_preview(preview));

            let accept = assume_yes
                || ask_confirm(input, &format!("Add {} books from {}?", books, folder))?;
            if accept {
                match session.confirm() {
                    IngestionEvent::Confirmed(_) => Ok(ImportResult::Imported { folder, books }),
                    _ => bail!("Folder {} could not be added; check the log", folder),
                }
            } else {
                session.cancel();
                Ok(ImportResult::Declined { folder })
            }
        }
        IngestionEvent::EmptyFolder { folder } => {
            session.cancel();
            Ok(ImportResult::Empty { folder })
        }
        IngestionEvent::PickerCancelled => Ok(ImportResult::Unreadable),
        other => {
            session.cancel();
            bail!("Unexpected import state: {:?}", other)
        }
    }
}

/// Asks a yes/no question; anything but `y`/`yes` is no
fn ask_confirm<R: BufRead>(input: &mut R, prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read answer")?;

    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Show one page of a single folder
pub async fn browse_folder(config: &Config, matches: &ArgMatches) -> Result<()> {
    let dir = matches
        .get_one::<PathBuf>("dir")
        .ok_or_else(|| anyhow::anyhow!("Folder is required"))?;
    let width = matches.get_one::<u32>("width").copied().unwrap_or(1200);
    let page = matches.get_one::<usize>("page").copied().unwrap_or(1);

    let mut carousel_config = config.carousel.clone();
    if matches.get_flag("stepped") {
        carousel_config.navigation = readshelf_config::NavigationKind::Stepped;
    }

    let mut session = LibrarySession::from_config(&config.library);
    let mut no_input = io::empty();
    match import_one(&mut session, dir, true, &mut no_input).await? {
        ImportResult::Imported { .. } => {}
        ImportResult::Empty { folder } => bail!("No supported books in {}", folder),
        ImportResult::Unreadable => bail!("Could not open {}", dir.display()),
        ImportResult::Declined { folder } => bail!("Import of {} was declined", folder),
    }

    let folder = session
        .catalog()
        .get(0)
        .context("Imported folder missing from catalog")?;
    let mut carousel = Carousel::from_config(folder.books().to_vec(), &carousel_config, width);
    turn_to(&mut carousel, page);

    println!("{}", style(folder.name()).bold().cyan());
    print!("{}", render_window(&carousel));
    Ok(())
}

/// Moves to 1-based `page`; in stepped mode each page is one step
pub(crate) fn turn_to<T>(carousel: &mut Carousel<T>, page: usize) {
    let target = page.saturating_sub(1);
    match carousel.navigation() {
        Navigation::Paged => carousel.go_to_page(target),
        Navigation::Stepped { .. } => carousel.advance(target),
    }
}

/// Print the quote of the day
pub async fn show_quote(manager: &ConfigManager, config: &Config, matches: &ArgMatches) -> Result<()> {
    let date = parse_date(matches.get_one::<String>("date").map(String::as_str))?;

    let store_path = manager.resolve(&config.quotes.cache_file);
    let store = JsonFileStore::open(&store_path)
        .with_context(|| format!("Failed to open quote cache {}", store_path.display()))?;
    let cache = QuoteCache::with_config(store, &config.quotes);
    let source = HttpQuoteSource::new().context("Failed to create HTTP client")?;

    let quote = cache.quote_for(date, &source).await;
    println!("{} {}", style("Quote Today").bold().blue(), date);
    println!("{}", quote);
    Ok(())
}

pub(crate) fn parse_date(value: Option<&str>) -> Result<NaiveDate> {
    match value {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text)),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// `config init|show|path`
pub fn config_command(manager: &ConfigManager, config: &Config, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("init", _)) => {
            if manager
                .initialize()
                .context("Failed to write default config")?
            {
                println!("Created {}", manager.config_path().display());
            } else {
                println!("Config already exists at {}", manager.config_path().display());
            }
        }
        Some(("show", _)) => {
            let text = config
                .to_toml_string()
                .context("Failed to render config")?;
            print!("{}", text);
        }
        Some(("path", _)) => println!("{}", manager.config_path().display()),
        _ => bail!("Unknown config command"),
    }
    Ok(())
}

pub(crate) fn render_preview(preview: &PreviewFolder) -> String {
    let mut out = format!("Preview: {} ({} books)\n", preview.name(), preview.len());
    for book in preview.books() {
        out.push_str(&format!("  - {}\n", book));
    }
    out
}

/// Catalog summary with the first carousel page of every folder
pub(crate) fn render_catalog(catalog: &Catalog, carousel: &CarouselConfig, width: u32) -> String {
    if catalog.is_empty() {
        return "Shelf is empty. Use 'import' to add folders.\n".to_string();
    }

    let mut out = format!(
        "{} folders, {} books\n{}\n",
        catalog.len(),
        catalog.book_count(),
        "=".repeat(60)
    );

    let policy = PageSizePolicy::from_config(carousel);
    for (index, folder) in catalog.folders().iter().enumerate() {
        let marker = if folder.is_expanded() { "v" } else { ">" };
        out.push_str(&format!(
            "{} [{}] {} ({} books)\n",
            marker,
            index,
            folder.name(),
            folder.len()
        ));

        let view = Carousel::new(
            folder.books().to_vec(),
            policy,
            Navigation::from_config(carousel),
            width,
        );
        out.push_str(&render_window(&view));
    }
    out
}

pub(crate) fn render_window(carousel: &Carousel<Book>) -> String {
    let state = carousel.state();
    let mut out = match carousel.navigation() {
        Navigation::Paged => format!(
            "    page {}/{} ({}, {} per page)\n",
            state.current_page + 1,
            state.total_pages.max(1),
            state.class,
            state.page_size
        ),
        Navigation::Stepped { step } => format!(
            "    from #{} of {} ({}, {} visible, step {})\n",
            state.start + 1,
            state.len,
            state.class,
            state.page_size,
            step
        ),
    };

    for book in carousel.window() {
        out.push_str(&format!("    {}\n", book));
    }
    out
}
