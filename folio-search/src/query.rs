//! Search request model and arXiv query construction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default number of results per page when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: u64 = 50;

/// Result ordering accepted by the search endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Upstream relevance ranking, the default
    #[default]
    Relevance,
    /// Most recently submitted papers first
    NewestFirst,
    /// Oldest submissions first
    OldestFirst,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Relevance => write!(f, "relevance"),
            Self::NewestFirst => write!(f, "date_new"),
            Self::OldestFirst => write!(f, "date_old"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(Self::Relevance),
            "date_new" => Ok(Self::NewestFirst),
            "date_old" => Ok(Self::OldestFirst),
            _ => Err(format!(
                "Invalid sort order: '{s}'. Valid options are: relevance, date_new, date_old"
            )),
        }
    }
}

/// Parameters for one paper search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text query, may be empty
    pub query: String,
    /// Zero-based offset of the first result
    pub start: u64,
    /// Number of results to return
    pub max_results: u64,
    /// Result ordering
    pub sort: SortOrder,
    /// arXiv category codes the results must match, ORed together
    pub categories: Vec<String>,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            start: 0,
            max_results: DEFAULT_PAGE_SIZE,
            sort: SortOrder::default(),
            categories: Vec::new(),
        }
    }
}

impl SearchRequest {
    /// Creates a request for the given query with default pagination.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Builds a request from loosely-typed URL query parameters.
    ///
    /// Missing or unparseable values fall back to their defaults: empty
    /// query, offset 0, ten results, relevance ordering, no category
    /// filter. `max_results` is clamped to `1..=MAX_PAGE_SIZE`.
    pub fn from_query_params(params: &HashMap<String, String>) -> Self {
        let query = params
            .get("query")
            .map(|q| q.trim().to_string())
            .unwrap_or_default();

        let start = params
            .get("start")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        let max_results = params
            .get("max_results")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let sort = params
            .get("sort_by")
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        let categories = params
            .get("categories")
            .map(|raw| parse_categories(raw))
            .unwrap_or_default();

        Self {
            query,
            start,
            max_results,
            sort,
            categories,
        }
    }

    /// Builds the arXiv `search_query` expression for this request.
    ///
    /// Category filters are ANDed onto the free-text part as one
    /// parenthesized OR group: `heat AND (cat:cs OR cat:math)`.
    pub fn search_expression(&self) -> String {
        let cats: Vec<String> = self
            .categories
            .iter()
            .map(|c| format!("cat:{c}"))
            .collect();

        if cats.is_empty() {
            return self.query.clone();
        }
        format!("{} AND ({})", self.query, cats.join(" OR "))
    }

    /// Upstream query parameters for this request.
    ///
    /// Relevance ordering sends no sort parameters at all so the API's
    /// default ranking applies; the date orderings both sort by
    /// submission date and differ only in direction.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("search_query", self.search_expression()),
            ("start", self.start.to_string()),
            ("max_results", self.max_results.to_string()),
        ];

        match self.sort {
            SortOrder::Relevance => {}
            SortOrder::NewestFirst => {
                pairs.push(("sortBy", "submittedDate".to_string()));
                pairs.push(("sortOrder", "descending".to_string()));
            }
            SortOrder::OldestFirst => {
                pairs.push(("sortBy", "submittedDate".to_string()));
                pairs.push(("sortOrder", "ascending".to_string()));
            }
        }

        pairs
    }
}

/// Splits a comma-separated category list, dropping empty segments.
pub fn parse_categories(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_expression_joins_categories_with_or() {
        let request = SearchRequest {
            query: "quantum error correction".to_string(),
            categories: vec!["cs".to_string(), "math".to_string()],
            ..SearchRequest::default()
        };

        assert_eq!(
            request.search_expression(),
            "quantum error correction AND (cat:cs OR cat:math)"
        );
    }

    #[test]
    fn test_expression_without_categories_is_bare_query() {
        let request = SearchRequest::new("dark matter");
        assert_eq!(request.search_expression(), "dark matter");
    }

    #[test]
    fn test_single_category_still_parenthesized() {
        let request = SearchRequest {
            query: "bandits".to_string(),
            categories: vec!["cs".to_string()],
            ..SearchRequest::default()
        };
        assert_eq!(request.search_expression(), "bandits AND (cat:cs)");
    }

    #[test]
    fn test_newest_first_sets_sort_pairs() {
        let request = SearchRequest {
            sort: SortOrder::NewestFirst,
            ..SearchRequest::new("test")
        };
        let pairs = request.query_pairs();

        assert!(pairs.contains(&("sortBy", "submittedDate".to_string())));
        assert!(pairs.contains(&("sortOrder", "descending".to_string())));
    }

    #[test]
    fn test_oldest_first_sorts_ascending() {
        let request = SearchRequest {
            sort: SortOrder::OldestFirst,
            ..SearchRequest::new("test")
        };
        let pairs = request.query_pairs();

        assert!(pairs.contains(&("sortBy", "submittedDate".to_string())));
        assert!(pairs.contains(&("sortOrder", "ascending".to_string())));
    }

    #[test]
    fn test_relevance_sends_no_sort_pairs() {
        let request = SearchRequest::new("test");
        let pairs = request.query_pairs();

        assert!(pairs.iter().all(|(k, _)| *k != "sortBy"));
        assert!(pairs.iter().all(|(k, _)| *k != "sortOrder"));
    }

    #[test]
    fn test_from_query_params_applies_defaults() {
        let request = SearchRequest::from_query_params(&params(&[]));

        assert_eq!(request.query, "");
        assert_eq!(request.start, 0);
        assert_eq!(request.max_results, DEFAULT_PAGE_SIZE);
        assert_eq!(request.sort, SortOrder::Relevance);
        assert!(request.categories.is_empty());
    }

    #[test]
    fn test_from_query_params_ignores_garbage_values() {
        let request = SearchRequest::from_query_params(&params(&[
            ("query", "heat kernel"),
            ("start", "not-a-number"),
            ("max_results", "-3"),
            ("sort_by", "shuffled"),
        ]));

        assert_eq!(request.query, "heat kernel");
        assert_eq!(request.start, 0);
        assert_eq!(request.max_results, DEFAULT_PAGE_SIZE);
        assert_eq!(request.sort, SortOrder::Relevance);
    }

    #[test]
    fn test_from_query_params_clamps_page_size() {
        let request =
            SearchRequest::from_query_params(&params(&[("query", "x"), ("max_results", "500")]));
        assert_eq!(request.max_results, MAX_PAGE_SIZE);

        let request =
            SearchRequest::from_query_params(&params(&[("query", "x"), ("max_results", "0")]));
        assert_eq!(request.max_results, 1);
    }

    #[test]
    fn test_from_query_params_splits_categories() {
        let request = SearchRequest::from_query_params(&params(&[
            ("query", "x"),
            ("categories", "cs, math,,stat"),
        ]));
        assert_eq!(request.categories, vec!["cs", "math", "stat"]);
    }

    #[test]
    fn test_sort_order_wire_names_round_trip() {
        for sort in [
            SortOrder::Relevance,
            SortOrder::NewestFirst,
            SortOrder::OldestFirst,
        ] {
            assert_eq!(sort.to_string().parse::<SortOrder>(), Ok(sort));
        }
        assert!("submitted".parse::<SortOrder>().is_err());
    }
}
