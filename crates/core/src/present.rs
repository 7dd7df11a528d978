//! Presentation helpers shared by front-ends: ordering, match truncation and
//! date labels. Nothing here performs I/O.

use crate::{Match, SearchResult};
use chrono::{DateTime, NaiveDate, NaiveTime};
use std::cmp::Ordering;
use std::str::FromStr;

/// Matches shown per result before the list is expanded.
pub const COLLAPSED_MATCH_COUNT: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Date,
    Relevance,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(Self::Date),
            "relevance" => Ok(Self::Relevance),
            other => Err(format!("unknown sort order: {other}")),
        }
    }
}

/// Stable in-place sort. `Date` puts the newest first and unparsable dates
/// last; `Relevance` puts results with more matches first.
pub fn sort_results(results: &mut [SearchResult], order: SortOrder) {
    match order {
        SortOrder::Date => results.sort_by(|left, right| {
            match (timestamp(&left.date), timestamp(&right.date)) {
                (Some(left), Some(right)) => right.cmp(&left),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
        SortOrder::Relevance => {
            results.sort_by(|left, right| right.matches.len().cmp(&left.matches.len()))
        }
    }
}

pub fn visible_matches(result: &SearchResult, expanded: bool) -> &[Match] {
    if expanded {
        &result.matches
    } else {
        &result.matches[..result.matches.len().min(COLLAPSED_MATCH_COUNT)]
    }
}

pub fn hidden_match_count(result: &SearchResult, expanded: bool) -> usize {
    result.matches.len() - visible_matches(result, expanded).len()
}

pub fn match_count_label(count: usize) -> String {
    if count == 1 {
        "1 match".to_string()
    } else {
        format!("{count} matches")
    }
}

pub fn results_heading(count: usize, query: &str) -> String {
    if count == 0 {
        "No results found".to_string()
    } else {
        format!("Found {count} results for \"{query}\"")
    }
}

/// Formats an ISO date as e.g. "March 15, 2023". Empty input becomes
/// "Unknown date"; anything unparsable is returned unchanged.
pub fn format_date(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "Unknown date".to_string();
    }

    match parse_date(trimmed) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => value.to_string(),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|date| date.date_naive()))
}

fn timestamp(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if let Ok(date) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date.timestamp());
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(title: &str, date: &str, match_count: usize) -> SearchResult {
        SearchResult {
            title: title.to_string(),
            url: format!("https://example.com/{title}.pdf"),
            date: date.to_string(),
            source: "Test".to_string(),
            file_size: "1 MB".to_string(),
            matches: (0..match_count)
                .map(|index| Match::new(index as u32 + 1, "", "hit", ""))
                .collect(),
        }
    }

    fn titles(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|result| result.title.as_str()).collect()
    }

    #[test]
    fn date_sort_is_newest_first_with_invalid_last() {
        let mut results = vec![
            result("old", "2021-01-01", 1),
            result("broken", "sometime", 1),
            result("new", "2023-09-05", 1),
            result("mid", "2022-06-30T12:00:00Z", 1),
        ];
        sort_results(&mut results, SortOrder::Date);
        assert_eq!(titles(&results), vec!["new", "mid", "old", "broken"]);
    }

    #[test]
    fn relevance_sort_is_stable() {
        let mut results = vec![
            result("a", "2023-01-01", 1),
            result("b", "2023-01-01", 3),
            result("c", "2023-01-01", 1),
        ];
        sort_results(&mut results, SortOrder::Relevance);
        assert_eq!(titles(&results), vec!["b", "a", "c"]);
    }

    #[test]
    fn collapsed_view_shows_two_matches() {
        let long = result("long", "2023-01-01", 3);
        assert_eq!(visible_matches(&long, false).len(), 2);
        assert_eq!(hidden_match_count(&long, false), 1);
        assert_eq!(visible_matches(&long, true).len(), 3);
        assert_eq!(hidden_match_count(&long, true), 0);

        let short = result("short", "2023-01-01", 1);
        assert_eq!(visible_matches(&short, false).len(), 1);
    }

    #[test]
    fn dates_render_long_form() {
        assert_eq!(format_date("2023-03-15"), "March 15, 2023");
        assert_eq!(format_date("2023-09-05T08:00:00+00:00"), "September 5, 2023");
        assert_eq!(format_date(""), "Unknown date");
        assert_eq!(format_date("Q3 2023"), "Q3 2023");
    }

    #[test]
    fn labels_pluralise() {
        assert_eq!(match_count_label(1), "1 match");
        assert_eq!(match_count_label(3), "3 matches");
        assert_eq!(results_heading(0, "x"), "No results found");
        assert_eq!(results_heading(2, "budget"), "Found 2 results for \"budget\"");
    }

    #[test]
    fn sort_order_parses() {
        assert_eq!("Relevance".parse::<SortOrder>(), Ok(SortOrder::Relevance));
        assert!("size".parse::<SortOrder>().is_err());
    }
}
