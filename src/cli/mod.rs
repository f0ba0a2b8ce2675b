//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the
//! appropriate commands.

use std::error::Error;

use clap::{Parser, Subcommand};

use crate::core::app::AppOptions;
use crate::core::config::Config;
use crate::core::constants::DEFAULT_ENDPOINT;
use crate::ui::app_loop::run_app;
use crate::ui::theme::Theme;
use crate::utils::logging;
use crate::utils::url::normalize_base_url;

#[derive(Parser)]
#[command(name = "revlens")]
#[command(about = "A terminal interface for checking product-review authenticity")]
#[command(
    long_about = "Revlens is a full-screen terminal interface that submits a product-page URL \
to a remote analysis service and renders the returned authenticity metrics: \
overall score, rating distribution, category breakdown, and example reviews.\n\n\
Controls:\n\
  Type              Enter a product link in the input field\n\
  Enter             Analyze the link\n\
  Tab / Shift+Tab   Switch between breakdown categories\n\
  Up/Down/Mouse     Scroll the detail panel\n\
  Esc               Cancel an in-flight analysis\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Product page URL to prefill the input field
    pub url: Option<String>,

    /// Analysis endpoint to use instead of the built-in default
    #[arg(short = 'e', long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write diagnostic logs to the specified file
    #[arg(short = 'l', long, value_name = "FILE")]
    pub log: Option<String>,

    /// UI theme ("dark" or "light")
    #[arg(short = 't', long, value_name = "NAME")]
    pub theme: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the checker interface (default)
    Check,
    /// Set configuration values
    Set {
        /// Configuration key to set ("endpoint" or "theme")
        key: String,
        /// Value to set for the key
        value: Option<String>,
    },
    /// Unset configuration values
    Unset {
        /// Configuration key to unset
        key: String,
    },
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command.unwrap_or(Commands::Check) {
        Commands::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "endpoint" => match value {
                    Some(val) => {
                        let normalized = normalize_base_url(&val);
                        config.endpoint = Some(normalized.clone());
                        config.save()?;
                        println!("✅ Set endpoint to: {normalized}");
                    }
                    None => config.print_all(),
                },
                "theme" => match value {
                    Some(val) => {
                        config.theme = Some(val.clone());
                        config.save()?;
                        println!("✅ Set theme to: {val}");
                    }
                    None => config.print_all(),
                },
                _ => {
                    eprintln!("❌ Unknown config key: {key}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Unset { key } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "endpoint" => {
                    config.endpoint = None;
                    config.save()?;
                    println!("✅ Unset endpoint");
                }
                "theme" => {
                    config.theme = None;
                    config.save()?;
                    println!("✅ Unset theme");
                }
                _ => {
                    eprintln!("❌ Unknown config key: {key}");
                    std::process::exit(1);
                }
            }
            Ok(())
        }
        Commands::Check => {
            let config = Config::load()?;
            logging::init(args.log.as_deref())?;

            // Flag beats config beats built-in default.
            let endpoint = args
                .endpoint
                .or(config.endpoint)
                .map(|e| normalize_base_url(&e))
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
            let theme_name = args
                .theme
                .or(config.theme)
                .unwrap_or_else(|| "dark".to_string());

            run_app(AppOptions {
                endpoint,
                theme: Theme::from_name(&theme_name),
                initial_url: args.url,
            })
            .await
        }
    }
}
