pub mod backends;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod orchestrator;
pub mod present;
pub mod random;
pub mod sites;
pub mod traits;
pub mod web;

pub use backends::{route_query, FixtureSet, MockSearchBackend, RemoteSearchClient};
pub use config::{SearchConfig, DEFAULT_API_BASE_URL, DEFAULT_SEARCH_PATH};
pub use error::SearchError;
pub use models::{Match, SearchMode, SearchParams, SearchResult};
pub use notify::{
    Notification, NotificationLevel, Notifier, RecordingNotifier, SharedNotifier, TracingNotifier,
};
pub use orchestrator::SearchOrchestrator;
pub use present::{
    format_date, hidden_match_count, match_count_label, results_heading, sort_results,
    visible_matches, SortOrder,
};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use sites::{matches_any_site, site_by_url, site_directory, sites_by_region, SiteDescriptor};
pub use traits::SearchBackend;
pub use web::web_search_url;
