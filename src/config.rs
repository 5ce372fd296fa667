// src/config.rs
use crate::constants::{DEFAULT_RECORDS_ENDPOINT, DEFAULT_REQUEST_TIMEOUT_SECS, RECORDS_ENDPOINT_ENV};
use crate::error::AppError;
use crate::query::PageRequest;
use crate::types::Endpoint;
use clap::Parser;
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Records listing endpoint (overrides RECORDS_API_URL)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Page to retrieve; repeat to retrieve several pages concurrently
    #[arg(short, long = "page", allow_negative_numbers = true)]
    pub pages: Vec<i64>,

    /// Only include records of this color; repeat for several colors
    #[arg(short, long = "color")]
    pub colors: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Pretty-print the JSON summaries
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved configuration: where to fetch from and what to ask for.
#[derive(Debug, Clone)]
pub struct RetrieveConfig {
    pub endpoint: Endpoint,
    pub timeout: Duration,
    /// One entry per page to retrieve, all sharing the same color filter.
    pub requests: Vec<PageRequest>,
    pub pretty: bool,
}

impl RetrieveConfig {
    /// Resolves configuration from CLI input and the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let env_endpoint = std::env::var(RECORDS_ENDPOINT_ENV).ok();
        Self::resolve_with_env(cli, env_endpoint)
    }

    /// Resolution with the environment value passed in explicitly.
    ///
    /// Endpoint precedence: command line, then environment, then the default.
    pub fn resolve_with_env(
        cli: CommandLineInput,
        env_endpoint: Option<String>,
    ) -> Result<Self, AppError> {
        let raw_endpoint = cli
            .endpoint
            .or(env_endpoint)
            .unwrap_or_else(|| DEFAULT_RECORDS_ENDPOINT.to_string());
        let endpoint = Endpoint::parse(&raw_endpoint)?;

        if cli.timeout_secs == 0 {
            return Err(AppError::MissingConfiguration(
                "timeout must be at least one second".to_string(),
            ));
        }

        let filter = PageRequest::new().with_colors(cli.colors)?;
        let requests = if cli.pages.is_empty() {
            vec![filter]
        } else {
            cli.pages
                .into_iter()
                .map(|page| filter.clone().with_page(page))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(cli.timeout_secs),
            requests,
            pretty: cli.pretty,
        })
    }
}

impl Default for RetrieveConfig {
    fn default() -> Self {
        Self {
            endpoint: Self::default_endpoint(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            requests: vec![PageRequest::new()],
            pretty: false,
        }
    }
}

impl RetrieveConfig {
    fn default_endpoint() -> Endpoint {
        Endpoint::parse(DEFAULT_RECORDS_ENDPOINT)
            .expect("Default records endpoint should always be valid")
    }
}
