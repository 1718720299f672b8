//! Command-line interface parsing for wxdash
//!
//! This module handles parsing of CLI arguments using clap and resolves
//! them into the startup configuration (API base URL and initial city)
//! injected into the rest of the application.

use clap::Parser;

/// City looked up automatically on startup when none is given
pub const DEFAULT_CITY: &str = "Vijayawada";

/// Base URL used when `--api-url` is not given.
///
/// Dev builds talk to a local backend on port 9090; release builds assume
/// the API is served from the standard port on the same host.
pub fn default_api_url() -> &'static str {
    if cfg!(debug_assertions) {
        "http://localhost:9090"
    } else {
        "http://localhost"
    }
}

/// wxdash - Current weather conditions in your terminal
#[derive(Parser, Debug)]
#[command(name = "wxdash")]
#[command(about = "Current weather conditions in your terminal")]
#[command(version)]
pub struct Cli {
    /// City to look up on startup
    ///
    /// Examples:
    ///   wxdash               # Look up the default city
    ///   wxdash London        # Look up London on startup
    pub city: Option<String>,

    /// Base URL of the weather API backend
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Base URL the weather client talks to
    pub api_url: String,
    /// City fetched automatically when the app starts
    pub default_city: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url().to_string(),
            default_city: DEFAULT_CITY.to_string(),
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Arguments
    /// * `cli` - The parsed CLI struct
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            api_url: cli
                .api_url
                .clone()
                .unwrap_or_else(|| default_api_url().to_string()),
            default_city: cli.city.clone().unwrap_or_else(|| DEFAULT_CITY.to_string()),
        }
    }
}
