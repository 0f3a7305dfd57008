//! @acp:module "Init Command"
//! @acp:summary "Write a trait-finder config file"
//! @acp:domain cli
//! @acp:layer handler

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::render::OutputFormat;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Config file to write (defaults to .trait-finder.json)
    pub path: Option<PathBuf>,
    /// Force overwrite existing config
    pub force: bool,
    /// Catalog file to record in the config
    pub catalog: Option<PathBuf>,
    /// Default output format
    pub format: Option<OutputFormat>,
    /// Parallel matching threshold
    pub parallel_threshold: Option<usize>,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = options
        .path
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    if config_path.exists() && !options.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    // Prompt only when nothing was given on the command line
    let interactive = !options.yes
        && options.catalog.is_none()
        && options.format.is_none()
        && options.parallel_threshold.is_none();

    let config = if interactive {
        run_interactive_init()?
    } else {
        build_config(&options)
    };

    write_config(&config_path, &config)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  Run {} to search the catalog",
        style("trait-finder find --op1 <value>").cyan()
    );

    Ok(())
}

/// Config from command-line options, defaults elsewhere
pub fn build_config(options: &InitOptions) -> Config {
    let mut config = Config::default();
    if let Some(ref catalog) = options.catalog {
        config.catalog = Some(catalog.clone());
    }
    if let Some(format) = options.format {
        config.format = format;
    }
    if let Some(threshold) = options.parallel_threshold {
        config.parallel_threshold = threshold.max(1);
    }
    config
}

fn write_config(path: &Path, config: &Config) -> Result<()> {
    config
        .save(path)
        .with_context(|| format!("Failed to write config to {:?}", path))
}

fn run_interactive_init() -> Result<Config> {
    let theme = ColorfulTheme::default();
    let mut config = Config::default();

    println!("{} Trait Finder Setup\n", style("→").cyan());

    let use_builtin = Confirm::with_theme(&theme)
        .with_prompt("Use the built-in catalog?")
        .default(true)
        .interact()?;
    if !use_builtin {
        let path: String = Input::with_theme(&theme)
            .with_prompt("Catalog file (.json, .yaml)")
            .interact_text()?;
        config.catalog = Some(PathBuf::from(path.trim()));
    }

    let formats = ["text", "json"];
    let picked = Select::with_theme(&theme)
        .with_prompt("Default output format")
        .items(&formats)
        .default(0)
        .interact()?;
    config.format = if picked == 1 {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    config.color = Confirm::with_theme(&theme)
        .with_prompt("Colored output?")
        .default(true)
        .interact()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_from_flags() {
        let options = InitOptions {
            catalog: Some(PathBuf::from("weapons.yaml")),
            format: Some(OutputFormat::Json),
            parallel_threshold: Some(0),
            yes: true,
            ..Default::default()
        };
        let config = build_config(&options);
        assert_eq!(config.catalog, Some(PathBuf::from("weapons.yaml")));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.parallel_threshold, 1);
    }

    #[test]
    fn test_init_writes_and_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let options = InitOptions {
            path: Some(path.clone()),
            yes: true,
            ..Default::default()
        };

        execute_init(options.clone()).unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());

        assert!(execute_init(options.clone()).is_err());

        let forced = InitOptions {
            force: true,
            ..options
        };
        assert!(execute_init(forced).is_ok());
    }
}
