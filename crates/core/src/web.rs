use crate::sites::site_by_url;
use crate::SearchError;
use url::Url;

const WEB_SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Hosts used when no site filter is given.
const DEFAULT_SCOPE: [&str; 3] = [
    "bedfordshirelutonandmiltonkeynes.icb.nhs.uk",
    "cpics.org.uk",
    "hertsandwestessex.ics.nhs.uk",
];

/// Builds a general web-search link restricted to the given sites with
/// `site:` operators, e.g. `(site:a OR site:b) query`.
pub fn web_search_url(query: &str, sites: &[String]) -> Result<Url, SearchError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::InvalidInput("query is empty".to_string()));
    }

    let hosts: Vec<String> = if sites.is_empty() {
        DEFAULT_SCOPE.iter().map(|host| host.to_string()).collect()
    } else {
        sites.iter().map(|site| site_host(site)).collect()
    };

    let scope = hosts
        .iter()
        .map(|host| format!("site:{host}"))
        .collect::<Vec<_>>()
        .join(" OR ");

    Ok(Url::parse_with_params(
        WEB_SEARCH_ENDPOINT,
        &[("q", format!("({scope}) {query}"))],
    )?)
}

fn site_host(site: &str) -> String {
    if let Some(known) = site_by_url(site) {
        return known.host().to_string();
    }
    Url::parse(site)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| site.trim().to_string())
}
