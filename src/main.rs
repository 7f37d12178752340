//! # Clapper CLI
//!
//! Command-line interface for call sheet customization.
//!
//! ## Usage
//!
//! ```bash
//! # List built-in themes
//! clapper themes
//!
//! # Only TV themes
//! clapper themes --category tv
//!
//! # Fill a stored (sparse) customization from defaults
//! clapper resolve settings.json
//!
//! # Apply a theme to a customization (defaults if --from is omitted)
//! clapper apply-theme documentary --from settings.json
//!
//! # Renderer style primitives, optionally after applying a theme
//! clapper styles settings.json --theme indie
//!
//! # Run the HTTP API
//! clapper serve --listen 0.0.0.0:8080 --settings-dir ./settings
//! ```
//!
//! `FILE` arguments accept `-` for stdin. Set `RUST_LOG` to change log verbosity.

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use clapper::{
    ClapperError, PartialCustomization,
    customization::{ThemeCategory, resolve_with_defaults},
    server::{self, ServerConfig},
    style::derive,
    theme::{apply_theme, catalog},
};

/// Clapper - Call sheet customization utility
#[derive(Parser, Debug)]
#[command(name = "clapper")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List built-in industry themes
    Themes {
        /// Only themes in this category (film, tv, commercial, documentary)
        #[arg(long)]
        category: Option<String>,

        /// Print full theme definitions as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Resolve a sparse customization against the defaults
    Resolve {
        /// JSON customization file (omit for pure defaults, "-" for stdin)
        file: Option<PathBuf>,
    },

    /// Apply a built-in theme to a customization
    ApplyTheme {
        /// Theme id (see `clapper themes`)
        theme: String,

        /// Customization to apply the theme to
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },

    /// Derive renderer style primitives from a customization
    Styles {
        /// JSON customization file (omit for pure defaults, "-" for stdin)
        file: Option<PathBuf>,

        /// Apply this theme before deriving
        #[arg(long)]
        theme: Option<String>,
    },

    /// Run the HTTP API server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Directory for per-user settings (in-memory if omitted)
        #[arg(long, value_name = "DIR")]
        settings_dir: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ClapperError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Themes { category, json } => {
            let themes = match category.as_deref() {
                Some(c) => catalog::by_category(&ThemeCategory::parse(c)),
                None => catalog::built_in(),
            };

            if json {
                return print_json(&themes);
            }

            if themes.is_empty() {
                println!("No themes in that category.");
                return Ok(());
            }

            println!("Available themes:");
            for theme in &themes {
                println!("  {:<14} {:<12} {}", theme.id, theme.category.as_str(), theme.name);
            }
            Ok(())
        }

        Commands::Resolve { file } => {
            let partial = read_partial(file.as_deref())?;
            print_json(&resolve_with_defaults(&partial))
        }

        Commands::ApplyTheme { theme, from } => {
            let preset = catalog::find(&theme)?;
            let current = resolve_with_defaults(&read_partial(from.as_deref())?);
            print_json(&apply_theme(&current, &preset))
        }

        Commands::Styles { file, theme } => {
            let mut custom = resolve_with_defaults(&read_partial(file.as_deref())?);
            if let Some(id) = theme {
                custom = apply_theme(&custom, &catalog::find(&id)?);
            }
            print_json(&derive(&custom))
        }

        Commands::Serve {
            listen,
            settings_dir,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                settings_dir,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))
        }
    }
}

/// Read a sparse customization from a file, stdin ("-"), or nothing.
fn read_partial(path: Option<&Path>) -> Result<PartialCustomization, ClapperError> {
    let text = match path {
        None => return Ok(PartialCustomization::default()),
        Some(p) if p.as_os_str() == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Some(p) => std::fs::read_to_string(p)?,
    };

    if text.trim().is_empty() {
        return Ok(PartialCustomization::default());
    }
    Ok(serde_json::from_str(&text)?)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), ClapperError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
