//! Edge case and error scenario tests

use readshelf_config::{Config, ConfigError, ConfigManager, NavigationKind};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn setup_test_manager() -> Result<(TempDir, ConfigManager), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let manager = ConfigManager::with_directory(temp_dir.path().to_path_buf())?;
    Ok((temp_dir, manager))
}

#[test]
fn test_whitespace_only_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    fs::write(manager.config_path(), "   \n\t\n")?;

    assert!(matches!(
        manager.load(),
        Err(ConfigError::Empty { .. })
    ));
    Ok(())
}

#[test]
fn test_out_of_range_values_load_with_warning() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    fs::write(
        manager.config_path(),
        "[carousel]\nsmall_page_size = 0\n",
    )?;

    // Loading keeps the user's values; validation only reports them
    let config = manager.load()?;
    assert_eq!(config.carousel.small_page_size, 0);
    assert_eq!(manager.validate()?.len(), 1);
    Ok(())
}

#[test]
fn test_unknown_navigation_is_parse_error() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;
    fs::write(manager.config_path(), "[carousel]\nnavigation = \"sideways\"\n")?;

    assert!(matches!(
        manager.load(),
        Err(ConfigError::Parse { .. })
    ));
    Ok(())
}

#[test]
fn test_concurrent_config_loads() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_dir = temp_dir.path().to_path_buf();
    let manager = ConfigManager::with_directory(config_dir.clone())?;
    manager.initialize()?;

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let dir = config_dir.clone();
            std::thread::spawn(move || {
                let mgr = ConfigManager::with_directory(dir).expect("manager");
                for _ in 0..10 {
                    assert_eq!(mgr.load().expect("load"), Config::default());
                }
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().is_ok());
    }
    Ok(())
}

#[test]
fn test_breakpoint_boundaries() {
    let mut config = Config::default();

    config.carousel.medium_min_width = 1023;
    assert!(config.validate().is_ok());

    config.carousel.medium_min_width = 1024;
    assert!(config.validate().is_err());

    config.carousel.medium_min_width = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_unicode_values_survive_save() -> Result<(), Box<dyn std::error::Error>> {
    let (_temp_dir, manager) = setup_test_manager()?;

    let mut config = Config::default();
    config.library.default_author = "Anónimo 作者".to_string();
    config.quotes.fallback_text = "Pas de citation aujourd’hui".to_string();
    config.carousel.navigation = NavigationKind::Stepped;
    manager.save(&config)?;

    assert_eq!(manager.load()?, config);
    Ok(())
}

#[test]
fn test_relative_cache_file_resolves_under_config_dir() -> Result<(), Box<dyn std::error::Error>> {
    let (temp_dir, manager) = setup_test_manager()?;

    let resolved = manager.resolve(&PathBuf::from("quotes.json"));
    assert_eq!(resolved, temp_dir.path().join("quotes.json"));

    let absolute = PathBuf::from("/var/cache/quotes.json");
    assert_eq!(manager.resolve(&absolute), absolute);
    Ok(())
}
