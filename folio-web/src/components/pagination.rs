//! Windowed pagination controls for search results.

use folio_search::SearchRequest;

/// One slot in a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A numbered page link
    Page(u64),
    /// A gap between non-adjacent page numbers
    Ellipsis,
}

/// Computes which page numbers to display for a paginated result set.
///
/// Seven or fewer pages are listed in full. Longer ranges are windowed:
/// the first and last page stay visible, pages adjacent to the current
/// one fill the middle, and ellipsis slots mark the gaps.
pub fn pagination_range(current_page: u64, total_pages: u64) -> Vec<PageItem> {
    if total_pages <= 7 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    if current_page <= 3 {
        // Near the start: 1 2 3 4 5 ... N
        let mut items: Vec<PageItem> = (1..=5).map(PageItem::Page).collect();
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total_pages));
        items
    } else if current_page >= total_pages - 2 {
        // Near the end: 1 ... N-4 N-3 N-2 N-1 N
        let mut items = vec![PageItem::Page(1), PageItem::Ellipsis];
        items.extend((total_pages - 4..=total_pages).map(PageItem::Page));
        items
    } else {
        // Middle: 1 ... c-1 c c+1 ... N
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(current_page - 1),
            PageItem::Page(current_page),
            PageItem::Page(current_page + 1),
            PageItem::Ellipsis,
            PageItem::Page(total_pages),
        ]
    }
}

/// Builds the `/search` URL for the given page of the current request.
fn page_href(request: &SearchRequest, page: u64) -> String {
    let start = (page.saturating_sub(1)) * request.max_results;
    let mut href = format!(
        "/search?query={}&start={start}&sort_by={}",
        urlencoding::encode(&request.query),
        request.sort
    );

    if !request.categories.is_empty() {
        href.push_str(&format!(
            "&categories={}",
            urlencoding::encode(&request.categories.join(","))
        ));
    }

    href
}

/// Renders pagination links and the visible-range summary line.
///
/// Returns an empty string when there is nothing to page through.
pub fn pagination_controls(
    request: &SearchRequest,
    total_results: u64,
    visible_count: usize,
) -> String {
    let items_per_page = request.max_results.max(1);
    let total_pages = total_results.div_ceil(items_per_page);
    let current_page = request.start / items_per_page + 1;

    if visible_count == 0 || total_pages == 0 {
        return String::new();
    }

    let link_classes = "px-3 py-2 rounded-md text-sm font-medium transition-colors text-gray-300 hover:text-folio-500 hover:bg-gray-700";
    let active_classes = "px-3 py-2 rounded-md text-sm font-medium text-white bg-folio-500";
    let disabled_classes = "px-3 py-2 rounded-md text-sm font-medium text-gray-600";

    let previous = if current_page > 1 {
        format!(
            r#"<a href="{}" class="{link_classes}">Previous</a>"#,
            page_href(request, current_page - 1)
        )
    } else {
        format!(r#"<span class="{disabled_classes}">Previous</span>"#)
    };

    let next = if current_page < total_pages {
        format!(
            r#"<a href="{}" class="{link_classes}">Next</a>"#,
            page_href(request, current_page + 1)
        )
    } else {
        format!(r#"<span class="{disabled_classes}">Next</span>"#)
    };

    let mut pages = String::new();
    for item in pagination_range(current_page, total_pages) {
        match item {
            PageItem::Page(page) if page == current_page => {
                pages.push_str(&format!(r#"<span class="{active_classes}">{page}</span>"#));
            }
            PageItem::Page(page) => {
                pages.push_str(&format!(
                    r#"<a href="{}" class="{link_classes}">{page}</a>"#,
                    page_href(request, page)
                ));
            }
            PageItem::Ellipsis => {
                pages.push_str(r#"<span class="px-2 py-2 text-sm text-gray-500">&hellip;</span>"#);
            }
        }
    }

    let shown_from = request.start + 1;
    let shown_to = (request.start + visible_count as u64).min(total_results);

    format!(
        r#"<div class="my-8">
            <nav class="flex items-center justify-center space-x-1">
                {previous}
                {pages}
                {next}
            </nav>
            <div class="text-center text-sm text-gray-400 mt-6">
                Showing {shown_from} - {shown_to} of {total_results} results
            </div>
        </div>"#
    )
}

#[cfg(test)]
mod tests {
    use folio_search::SortOrder;
    use proptest::prelude::*;

    use super::*;

    fn pages(items: &[PageItem]) -> Vec<u64> {
        items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page(p) => Some(*p),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_short_range_lists_every_page() {
        let range = pagination_range(1, 7);
        assert_eq!(pages(&range), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(!range.contains(&PageItem::Ellipsis));
    }

    #[test]
    fn test_empty_range_for_zero_pages() {
        assert!(pagination_range(1, 0).is_empty());
    }

    #[test]
    fn test_near_start_window() {
        let range = pagination_range(2, 12);
        assert_eq!(
            range,
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Page(4),
                PageItem::Page(5),
                PageItem::Ellipsis,
                PageItem::Page(12),
            ]
        );
    }

    #[test]
    fn test_near_end_window() {
        let range = pagination_range(11, 12);
        assert_eq!(
            range,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(8),
                PageItem::Page(9),
                PageItem::Page(10),
                PageItem::Page(11),
                PageItem::Page(12),
            ]
        );
    }

    #[test]
    fn test_middle_window_has_two_gaps() {
        let range = pagination_range(6, 12);
        assert_eq!(
            range,
            vec![
                PageItem::Page(1),
                PageItem::Ellipsis,
                PageItem::Page(5),
                PageItem::Page(6),
                PageItem::Page(7),
                PageItem::Ellipsis,
                PageItem::Page(12),
            ]
        );
    }

    #[test]
    fn test_window_boundaries_switch_at_page_four() {
        // Page 3 still anchors to the head window, page 4 floats
        assert!(!pagination_range(3, 20).contains(&PageItem::Page(20 - 1)));
        assert_eq!(pages(&pagination_range(4, 20)), vec![1, 3, 4, 5, 20]);
    }

    #[test]
    fn test_current_past_the_end_anchors_to_tail() {
        // start beyond the last page still renders the tail window
        assert_eq!(pages(&pagination_range(12, 10)), vec![1, 6, 7, 8, 9, 10]);
    }

    proptest! {
        #[test]
        fn prop_window_shape_holds(current in 1u64..400, total in 1u64..400) {
            prop_assume!(current <= total);
            let range = pagination_range(current, total);

            prop_assert!(range.len() <= 7);

            let visible = pages(&range);
            prop_assert_eq!(visible.first().copied(), Some(1));
            prop_assert_eq!(visible.last().copied(), Some(total));
            prop_assert!(visible.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(visible.contains(&current));
        }
    }

    #[test]
    fn test_controls_disable_previous_on_first_page() {
        let request = SearchRequest::new("quantum");
        let html = pagination_controls(&request, 35, 10);

        assert!(html.contains(">Previous</span>"));
        assert!(html.contains(">Next</a>"));
        assert!(html.contains("Showing 1 - 10 of 35 results"));
    }

    #[test]
    fn test_controls_disable_next_on_last_page() {
        let request = SearchRequest {
            start: 30,
            ..SearchRequest::new("quantum")
        };
        let html = pagination_controls(&request, 35, 5);

        assert!(html.contains(">Previous</a>"));
        assert!(html.contains(">Next</span>"));
        assert!(html.contains("Showing 31 - 35 of 35 results"));
    }

    #[test]
    fn test_controls_link_carries_query_state() {
        let request = SearchRequest {
            query: "dark matter".to_string(),
            sort: SortOrder::NewestFirst,
            categories: vec!["cs".to_string(), "math".to_string()],
            ..SearchRequest::default()
        };
        let html = pagination_controls(&request, 100, 10);

        assert!(html.contains("query=dark%20matter"));
        assert!(html.contains("sort_by=date_new"));
        assert!(html.contains("categories=cs%2Cmath"));
        assert!(html.contains("start=10"));
    }

    #[test]
    fn test_controls_empty_without_results() {
        let request = SearchRequest::new("quantum");
        assert!(pagination_controls(&request, 0, 0).is_empty());
    }
}
