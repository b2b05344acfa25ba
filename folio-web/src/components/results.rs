//! Result list components for the search page.

use folio_search::FeedEntry;

use crate::components::layout::escape_html;

/// Formats an RFC 3339 timestamp as a short human-readable date.
///
/// Unparseable input is returned unchanged.
pub fn format_date(raw: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(raw) {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Renders the results count heading shown above the list.
pub fn results_header(total_results: u64, query: &str) -> String {
    format!(
        r#"<div class="mb-4 flex justify-between items-center">
            <h2 class="text-xl font-medium text-white">{total_results} results for &quot;{}&quot;</h2>
        </div>"#,
        escape_html(query)
    )
}

/// Renders one paper as a result card.
pub fn result_card(entry: &FeedEntry) -> String {
    let title = escape_html(&entry.title);
    let summary = escape_html(&entry.summary);
    let date = escape_html(&format_date(&entry.published));

    let meta = match entry.arxiv_id() {
        Some(id) => format!(
            r#"{date} <span class="hidden sm:inline">&bull;</span> arXiv: {}"#,
            escape_html(id)
        ),
        None => date,
    };

    let authors: String = entry
        .authors
        .iter()
        .map(|author| {
            format!(
                r#"<span class="px-2 py-1 text-xs border border-gray-600 rounded-full text-gray-300">{}</span>"#,
                escape_html(&author.name)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 overflow-hidden">
            <h3 class="text-lg font-medium leading-tight mb-3">
                <a href="{id}" target="_blank" rel="noopener noreferrer" class="text-white hover:underline">{title}</a>
            </h3>
            <div class="flex flex-wrap gap-x-2 gap-y-1 items-center mb-3 text-sm text-gray-400">
                {meta}
            </div>
            <div class="flex flex-wrap gap-1 mb-3">
                {authors}
            </div>
            <p class="text-gray-400 text-sm line-clamp-2 mb-4">{summary}</p>
            <a href="{id}" target="_blank" rel="noopener noreferrer" class="text-folio-400 text-sm hover:underline">View on arXiv</a>
        </div>"#,
        id = escape_html(&entry.id),
    )
}

/// Renders the full result list.
pub fn results_list(entries: &[FeedEntry]) -> String {
    let cards: String = entries
        .iter()
        .map(result_card)
        .collect::<Vec<_>>()
        .join("\n");

    format!(r#"<div class="flex flex-col gap-4 mb-8">{cards}</div>"#)
}

/// Renders the empty state shown when a search matches nothing.
pub fn no_results() -> String {
    r#"<div class="text-center py-12 border border-gray-700 rounded-lg">
        <h3 class="text-lg font-medium text-white">No results found</h3>
        <p class="text-gray-400 mt-2">Try adjusting your search query or filters to find more results.</p>
    </div>"#
        .to_string()
}

/// Renders the error notice shown when the search request fails.
pub fn error_notice() -> String {
    r#"<div class="rounded-md bg-red-900 bg-opacity-30 border border-red-800 p-4 my-4">
        <h3 class="text-sm font-medium text-red-300">Error fetching search results</h3>
        <div class="mt-2 text-sm text-red-200">
            <p>Please try again later or modify your search query.</p>
            <p class="mt-1">If problems persist, the arXiv API may be temporarily unavailable.</p>
        </div>
    </div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use folio_search::Author;

    use super::*;

    fn sample_entry() -> FeedEntry {
        FeedEntry {
            id: "http://arxiv.org/abs/2401.12345v1".to_string(),
            updated: "2024-01-16T09:30:00Z".to_string(),
            published: "2024-01-15T10:00:00Z".to_string(),
            title: "Attention Is Not All You Need".to_string(),
            summary: "We revisit the transformer architecture.".to_string(),
            authors: vec![Author {
                name: "Ada Lovelace".to_string(),
            }],
        }
    }

    #[test]
    fn test_format_date_short_form() {
        assert_eq!(format_date("2024-01-15T10:00:00Z"), "Jan 15, 2024");
        assert_eq!(format_date("2023-12-02T00:00:00Z"), "Dec 2, 2023");
    }

    #[test]
    fn test_format_date_passes_through_invalid_input() {
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_result_card_links_to_abstract() {
        let html = result_card(&sample_entry());

        assert!(html.contains(r#"href="http://arxiv.org/abs/2401.12345v1""#));
        assert!(html.contains("Attention Is Not All You Need"));
        assert!(html.contains("arXiv: 2401.12345v1"));
        assert!(html.contains("Jan 15, 2024"));
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("View on arXiv"));
    }

    #[test]
    fn test_result_card_escapes_markup_in_titles() {
        let mut entry = sample_entry();
        entry.title = "Bounds for <k>-SAT & friends".to_string();

        let html = result_card(&entry);

        assert!(html.contains("Bounds for &lt;k&gt;-SAT &amp; friends"));
        assert!(!html.contains("<k>-SAT"));
    }

    #[test]
    fn test_results_header_quotes_query() {
        let html = results_header(212, "heat equation");
        assert!(html.contains("212 results for &quot;heat equation&quot;"));
    }

    #[test]
    fn test_no_results_copy() {
        let html = no_results();
        assert!(html.contains("No results found"));
        assert!(html.contains("Try adjusting your search query or filters"));
    }

    #[test]
    fn test_error_notice_copy() {
        let html = error_notice();
        assert!(html.contains("Error fetching search results"));
        assert!(html.contains("the arXiv API may be temporarily unavailable"));
    }
}
