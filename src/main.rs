//! Folio - typed, eagerly validated configuration for a static portfolio site.

mod check;
mod cli;
mod config;
mod export;
mod init;
mod logger;
mod registry;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use config::{CONFIG_FILE, SiteConfig};
use registry::Registry;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        log!("error"; "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Init { path } = &cli.command {
        let path = init::new_config(path.as_deref())?;
        log!("init"; "wrote {}", path.display());
        return Ok(());
    }

    let registry = install(cli)?;

    match &cli.command {
        Commands::Check => {
            for line in check::summary(registry) {
                log!("check"; "{line}");
            }
            log!("check"; "configuration is valid");
        }
        Commands::Show { name: Some(name), .. } => {
            println!("{}", show_constant(registry, name)?);
        }
        Commands::Show { name: None, json } => {
            let config = registry.config();
            let text = if *json {
                serde_json::to_string_pretty(config)?
            } else {
                config.to_toml()?
            };
            println!("{text}");
        }
        Commands::Export { target, compact } => {
            println!("{}", export::render(*target, registry.config(), !compact)?);
        }
        Commands::Init { .. } => {}
    }

    Ok(())
}

/// Pick the config file: `-C` wins, then `default` when it exists.
/// `None` means the built-in configuration.
fn config_path(explicit: Option<&Path>, default: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if default.exists() => Some(default.to_path_buf()),
        None => None,
    }
}

/// Load and validate the configuration at `path`, or the built-in one.
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    match path {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("Failed to load `{}`", path.display())),
        None => SiteConfig::builtin().context("Built-in configuration is invalid"),
    }
}

/// Install the registry from the file the CLI resolves to.
fn install(cli: &Cli) -> Result<&'static Registry> {
    let registry = match config_path(cli.config.as_deref(), Path::new(CONFIG_FILE)) {
        Some(path) => registry::init(load_config(Some(&path))?)?,
        None => registry::get().context("Built-in configuration is invalid")?,
    };
    Ok(registry)
}

/// A single named constant as pretty JSON.
fn show_constant(registry: &Registry, name: &str) -> Result<String> {
    let Some(constant) = registry.constant(name) else {
        bail!(
            "unknown constant `{name}`, expected one of: {}",
            Registry::NAMES.join(", ")
        );
    };
    Ok(serde_json::to_string_pretty(&constant)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::BUILTIN;
    use std::fs;

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join(CONFIG_FILE);
        fs::write(&default, BUILTIN).unwrap();
        let explicit = dir.path().join("other.toml");

        let path = config_path(Some(&explicit), &default);
        assert_eq!(path, Some(explicit));
    }

    #[test]
    fn test_default_path_used_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join(CONFIG_FILE);
        fs::write(&default, BUILTIN.replace("name = \"Alessandro Marcolini\"", "name = \"Alice\""))
            .unwrap();

        let path = config_path(None, &default);
        assert_eq!(path.as_deref(), Some(default.as_path()));

        let config = load_config(path.as_deref()).unwrap();
        assert_eq!(config.site.name, "Alice");
        assert_eq!(config.config_path, Some(default));
    }

    #[test]
    fn test_builtin_used_when_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let default = dir.path().join(CONFIG_FILE);

        let path = config_path(None, &default);
        assert!(path.is_none());

        let config = load_config(path.as_deref()).unwrap();
        assert!(config.config_path.is_none());
        assert_eq!(config, SiteConfig::builtin().unwrap());
    }

    #[test]
    fn test_load_error_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[site\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("broken.toml"));
    }

    #[test]
    fn test_show_constant() {
        let registry = Registry::new(SiteConfig::builtin().unwrap()).unwrap();

        let text = show_constant(&registry, "HOME").unwrap();
        assert!(text.contains("\"title\": \"Home\""));

        let err = show_constant(&registry, "FOOTER").unwrap_err().to_string();
        assert!(err.contains("unknown constant `FOOTER`"));
        assert!(err.contains("SITE, HOME, BLOG, WORK, PROJECTS, ABOUT, SOCIALS"));
    }
}
