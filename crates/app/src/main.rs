use chrono::Utc;
use clap::{Parser, Subcommand};
use pdf_query_core::{
    format_date, hidden_match_count, match_count_label, results_heading, site_directory,
    sites_by_region, sort_results, visible_matches, web_search_url, MockSearchBackend,
    Notification, NotificationLevel, Notifier, RandomSource, RemoteSearchClient, SearchConfig,
    SearchOrchestrator, SearchParams, SearchResult, SeededRandom, SortOrder, ThreadRandom,
    DEFAULT_SEARCH_PATH,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pdf-query", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Search API base URL (overrides PDF_QUERY_API_BASE_URL)
    #[arg(long)]
    api_base_url: Option<String>,

    /// Serve results from built-in mock data (overrides PDF_QUERY_USE_MOCK_DATA)
    #[arg(long, default_value_t = false)]
    use_mock_data: bool,

    /// Search endpoint path
    #[arg(long, default_value = DEFAULT_SEARCH_PATH)]
    search_path: String,

    /// Result cap sent to the API
    #[arg(long, default_value = "20")]
    max_results: usize,

    /// Simulated latency of the mock backend, in milliseconds
    #[arg(long, default_value = "1500")]
    mock_latency_ms: u64,

    /// Optional HTTP timeout for API requests, in seconds
    #[arg(long)]
    request_timeout_secs: Option<u64>,
}

#[derive(Subcommand)]
enum Command {
    /// Search PDF content, optionally scoped to ICB sites.
    Search {
        /// Search query
        #[arg(long)]
        query: String,
        /// Site URL to scope the search to (repeatable).
        #[arg(long = "site")]
        sites: Vec<String>,
        /// Result ordering: date or relevance.
        #[arg(long, default_value = "date")]
        sort: SortOrder,
        /// Show every match instead of the first two.
        #[arg(long, default_value_t = false)]
        expand: bool,
        /// Print results as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Seed for the mock backend's random choices.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// List the ICB sites that can scope a search.
    Sites {
        /// Only show sites in this region.
        #[arg(long)]
        region: Option<String>,
    },
    /// Print a web-search link restricted to ICB sites.
    WebUrl {
        /// Search query
        #[arg(long)]
        query: String,
        /// Site URL to restrict to (repeatable).
        #[arg(long = "site")]
        sites: Vec<String>,
    },
}

impl Cli {
    /// Applies command-line overrides on top of the environment-derived config.
    fn search_config(&self, base: SearchConfig) -> SearchConfig {
        let base_url = self
            .api_base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .unwrap_or(base.base_url);

        SearchConfig {
            base_url,
            search_path: self.search_path.clone(),
            use_mock_data: base.use_mock_data || self.use_mock_data,
            max_results: self.max_results,
            mock_latency: Duration::from_millis(self.mock_latency_ms),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Prints notifications to stderr and mirrors them into the log.
struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => warn!(message = %notification.message, "notification"),
            _ => info!(message = %notification.message, "notification"),
        }
        eprintln!("[{}] {}", notification.level, notification.message);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.search_config(SearchConfig::from_env());
    config.validate()?;

    info!(
        version = app_version,
        mode = ?config.mode(),
        endpoint = %config.search_endpoint()?,
        started_at = %Utc::now().to_rfc3339(),
        "pdf-query boot"
    );

    match cli.command {
        Command::Search {
            query,
            sites,
            sort,
            expand,
            json,
            seed,
        } => {
            let params = match SearchParams::new(&query, sites) {
                Ok(params) => params,
                Err(error) => {
                    warn!(%error, "search not submitted");
                    anyhow::bail!("enter a search query");
                }
            };

            let notifier = Arc::new(ConsoleNotifier);
            let random: Arc<dyn RandomSource> = match seed {
                Some(seed) => Arc::new(SeededRandom::new(seed)),
                None => Arc::new(ThreadRandom),
            };
            let orchestrator = SearchOrchestrator::new(
                config.mode(),
                RemoteSearchClient::new(&config, notifier.clone())?,
                MockSearchBackend::with_random(&config, random),
                notifier,
            );

            let mut results = orchestrator.search(&params).await;
            sort_results(&mut results, sort);

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_results(&results, params.query(), expand);
            }
        }
        Command::Sites { region } => {
            for (name, sites) in sites_by_region() {
                if region
                    .as_deref()
                    .is_some_and(|wanted| !wanted.eq_ignore_ascii_case(name))
                {
                    continue;
                }
                println!("{name}");
                for site in sites {
                    println!("  {:<55} {}", site.name, site.url);
                }
            }
            let unregioned = site_directory()
                .iter()
                .filter(|site| site.region.is_none())
                .count();
            if unregioned > 0 && region.is_none() {
                println!("({unregioned} site(s) without a region)");
            }
        }
        Command::WebUrl { query, sites } => {
            println!("{}", web_search_url(&query, &sites)?);
        }
    }

    Ok(())
}

fn print_results(results: &[SearchResult], query: &str, expanded: bool) {
    println!("{}", results_heading(results.len(), query));

    for result in results {
        println!();
        println!(
            "{}  [{}]",
            result.title,
            match_count_label(result.matches.len())
        );
        println!("  date:   {}", format_date(&result.date));
        println!("  source: {}", result.source);

        for item in visible_matches(result, expanded) {
            println!("  page {}:", item.page);
            println!(
                "    {}>>{}<<{}",
                item.text_before, item.matched_text, item.text_after
            );
        }

        let hidden = hidden_match_count(result, expanded);
        if hidden > 0 {
            println!("  ... {hidden} more matches (use --expand)");
        }

        println!("  {} | {}", result.file_size, result.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdf_query_core::config::{ENV_API_BASE_URL, ENV_USE_MOCK_DATA};
    use pdf_query_core::{SearchMode, DEFAULT_API_BASE_URL};

    fn environment(pairs: &'static [(&'static str, &'static str)]) -> SearchConfig {
        SearchConfig::from_lookup(|key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        })
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn environment_flags_resolve_like_the_core() {
        let cli = parse(&["pdf-query", "sites"]);
        let config = cli.search_config(environment(&[
            (ENV_USE_MOCK_DATA, "TRUE"),
            (ENV_API_BASE_URL, "   "),
        ]));

        assert_eq!(config.mode(), SearchMode::Mock);
        assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn command_line_overrides_environment() {
        let cli = parse(&[
            "pdf-query",
            "--api-base-url",
            "http://localhost:8080",
            "--use-mock-data",
            "sites",
        ]);
        let config = cli.search_config(environment(&[
            (ENV_USE_MOCK_DATA, "false"),
            (ENV_API_BASE_URL, "https://api.example.org"),
        ]));

        assert_eq!(config.mode(), SearchMode::Mock);
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn blank_override_keeps_environment_url() {
        let cli = parse(&["pdf-query", "--api-base-url", " ", "sites"]);
        let config = cli.search_config(environment(&[(ENV_API_BASE_URL, "https://api.example.org")]));

        assert_eq!(config.base_url, "https://api.example.org");
        assert_eq!(config.mode(), SearchMode::Live);
    }
}
