#![forbid(unsafe_code)]
//! Trait Finder Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use trait_finder::commands::{
    execute_find, execute_init, execute_interactive, execute_options, execute_validate,
    FindOptions, InitOptions, InteractiveOptions, OptionsOptions, ValidateOptions,
};
use trait_finder::config::DEFAULT_CONFIG_FILE;
use trait_finder::{Category, Config, OutputFormat};

#[derive(Parser)]
#[command(name = "trait-finder")]
#[command(about = "Find weapons whose trait records match your selected traits")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Catalog file (JSON or YAML), overrides the config and built-in catalog
    #[arg(long, global = true, env = "TRAIT_FINDER_CATALOG")]
    catalog: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Match selected traits and list weapons by tier
    Find {
        /// Base attribute to match (repeatable)
        #[arg(long = "op1")]
        op1: Vec<String>,

        /// Effect type to match (repeatable)
        #[arg(long = "op2")]
        op2: Vec<String>,

        /// Special trait to match (repeatable)
        #[arg(long = "op3")]
        op3: Vec<String>,

        /// Output format (defaults to the config value)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Expand every tier, including ones collapsed by default
        #[arg(long)]
        expand_all: bool,
    },

    /// List selectable values per category
    Options {
        /// Only list one category (1, 2, 3, op1, op2, op3)
        #[arg(long)]
        category: Option<Category>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a catalog for duplicate zones, unknown values and conflicting traits
    Validate {
        /// Catalog file (defaults to --catalog, then the built-in catalog)
        file: Option<PathBuf>,

        /// Exit with an error when any issue is found
        #[arg(long)]
        strict: bool,
    },

    /// Toggle traits interactively and watch results update
    Interactive {
        /// Expand every tier
        #[arg(long)]
        expand_all: bool,
    },

    /// Write a config file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Default output format
        #[arg(long, value_enum)]
        format: Option<FormatArg>,

        /// Catalog size at which matching runs in parallel
        #[arg(long)]
        parallel_threshold: Option<usize>,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Output format argument
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum FormatArg {
    #[default]
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load_or_default(&cli.config)?;

    if cli.no_color || !config.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let catalog = cli.catalog.clone().or_else(|| config.catalog.clone());
    let pipeline = config.pipeline_options();

    match cli.command {
        Commands::Find {
            op1,
            op2,
            op3,
            format,
            expand_all,
        } => {
            let options = FindOptions {
                op1,
                op2,
                op3,
                catalog,
                format: format.map(Into::into).unwrap_or(config.format),
                expand_all,
                pipeline,
            };
            execute_find(options)?;
        }

        Commands::Options { category, json } => {
            let options = OptionsOptions {
                category,
                catalog,
                json,
            };
            execute_options(options)?;
        }

        Commands::Validate { file, strict } => {
            let options = ValidateOptions {
                file: file.or(catalog),
                strict,
            };
            execute_validate(options)?;
        }

        Commands::Interactive { expand_all } => {
            let options = InteractiveOptions {
                catalog,
                expand_all,
                pipeline,
            };
            execute_interactive(options)?;
        }

        Commands::Init {
            force,
            format,
            parallel_threshold,
            yes,
        } => {
            let options = InitOptions {
                path: Some(cli.config),
                force,
                catalog: cli.catalog,
                format: format.map(Into::into),
                parallel_threshold,
                yes,
            };
            execute_init(options)?;
        }
    }

    Ok(())
}
