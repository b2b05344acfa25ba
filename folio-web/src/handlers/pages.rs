//! Page handlers for the search interface

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::response::Html;
use folio_search::{SearchRequest, SortOrder};
use tracing::warn;

use crate::components::layout::escape_html;
use crate::components::{layout, pagination, results};
use crate::server::AppState;

/// Example queries offered on the home page.
const EXAMPLE_SEARCHES: [(&str, &str); 6] = [
    ("🏃", "Does exercise improve cognition?"),
    ("💵", "Can cash transfers reduce poverty?"),
    ("💊", "Are statins effective in the elderly?"),
    ("🛏", "Can mindfulness help with sleep?"),
    ("🍬", "Does aspartame cause cancer?"),
    ("🦠", "Is gut microbiome linked to depression?"),
];

/// Top-level arXiv archives offered as category filters.
const CATEGORIES: [(&str, &str); 8] = [
    ("cs", "Computer Science"),
    ("math", "Mathematics"),
    ("physics", "Physics"),
    ("q-bio", "Quantitative Biology"),
    ("q-fin", "Quantitative Finance"),
    ("stat", "Statistics"),
    ("econ", "Economics"),
    ("eess", "Electrical Engineering and Systems Science"),
];

/// Renders the landing page with the hero search bar.
pub async fn home_page() -> Html<String> {
    let chips: String = EXAMPLE_SEARCHES
        .iter()
        .map(|(emoji, query)| {
            format!(
                r#"<a href="/search?query={}" class="px-4 py-2 bg-gray-800 border border-gray-700 rounded-full text-sm text-gray-300 hover:border-folio-500 hover:text-white transition-colors">{emoji} {query}</a>"#,
                urlencoding::encode(query)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let content = format!(
        r#"<div class="flex flex-col items-center text-center max-w-3xl mx-auto py-12">
            <h1 class="text-4xl md:text-5xl font-bold tracking-tight text-white">Find relevant papers, faster</h1>
            <p class="mt-4 text-lg text-gray-400 max-w-2xl">
                Search the arXiv catalog of open-access research papers.
                Filter by category and sort by relevance or submission date.
            </p>
            <form action="/search" method="get" class="flex items-center w-full max-w-2xl mt-8 space-x-2">
                {}
                {}
            </form>
            <div class="mt-6 flex flex-wrap justify-center gap-2">
                {chips}
            </div>
        </div>"#,
        layout::input("query", "Search articles, papers...", "text", Some("required")),
        layout::button("Search", "primary", Some(r#"type="submit""#)),
    );

    layout::render_page("Home", "home", &content)
}

/// Renders the search results page.
///
/// Reads the search state from URL query parameters, runs the search
/// server-side and renders results, filters and pagination.
pub async fn search_page(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Html<String> {
    let request = SearchRequest::from_query_params(&params);

    if request.query.is_empty() {
        let content = format!(
            r#"{}
            <div class="text-center py-12">
                <div class="text-6xl mb-4">🔍</div>
                <h2 class="text-2xl font-semibold text-white mb-4">Search arXiv</h2>
                <p class="text-gray-400">Enter a query above to find open-access research papers.</p>
            </div>"#,
            search_bar(&request)
        );
        return layout::render_page("Search", "search", &content);
    }

    match state.search_service.search(&request).await {
        Ok(page) => {
            let result_area = if page.entries.is_empty() {
                results::no_results()
            } else {
                format!(
                    "{}\n{}",
                    results::results_list(&page.entries),
                    pagination::pagination_controls(
                        &request,
                        page.metadata.total_results,
                        page.entries.len()
                    )
                )
            };

            let content = format!(
                r#"{bar}
                {header}
                <div class="flex flex-col md:flex-row gap-4">
                    <div class="w-full md:w-64 flex-shrink-0">
                        {filters}
                    </div>
                    <div class="flex-1">
                        {result_area}
                    </div>
                </div>"#,
                bar = search_bar(&request),
                header = results::results_header(page.metadata.total_results, &request.query),
                filters = filters_panel(&request),
            );

            layout::render_page("Search", "search", &content)
        }
        Err(error) => {
            warn!("search page request failed: {error}");
            let content = format!(
                r#"{bar}
                <div class="mb-4">
                    <h2 class="text-xl font-medium text-white">Error fetching results</h2>
                </div>
                {notice}"#,
                bar = search_bar(&request),
                notice = results::error_notice(),
            );

            layout::render_page("Search", "search", &content)
        }
    }
}

/// Renders the top search bar, prefilled with the current query.
///
/// Active sort and category filters ride along as hidden fields so a
/// fresh submit keeps them, mirroring how the filter state survives a
/// new query.
fn search_bar(request: &SearchRequest) -> String {
    let mut hidden = String::new();
    if request.sort != SortOrder::Relevance {
        hidden.push_str(&format!(
            r#"<input type="hidden" name="sort_by" value="{}" />"#,
            request.sort
        ));
    }
    if !request.categories.is_empty() {
        hidden.push_str(&format!(
            r#"<input type="hidden" name="categories" value="{}" />"#,
            escape_html(&request.categories.join(","))
        ));
    }

    let value_attr = format!(r#"value="{}" required"#, escape_html(&request.query));

    format!(
        r#"<form action="/search" method="get" class="flex items-center w-full max-w-2xl mx-auto mb-8 space-x-2">
            {hidden}
            {}
            {}
        </form>"#,
        layout::input("query", "Search articles, papers...", "text", Some(&value_attr)),
        layout::button("Search", "primary", Some(r#"type="submit""#)),
    )
}

/// Renders the filter sidebar with sort order and category controls.
fn filters_panel(request: &SearchRequest) -> String {
    let has_active_filters =
        request.sort != SortOrder::Relevance || !request.categories.is_empty();

    let clear = if has_active_filters {
        format!(
            r#"<a href="/search?query={}" class="text-xs text-gray-400 hover:text-white">Clear</a>"#,
            urlencoding::encode(&request.query)
        )
    } else {
        String::new()
    };

    let sort_options: String = [
        (SortOrder::Relevance, "Relevance"),
        (SortOrder::NewestFirst, "Newest First"),
        (SortOrder::OldestFirst, "Oldest First"),
    ]
    .iter()
    .map(|(order, label)| {
        let selected = if *order == request.sort { " selected" } else { "" };
        format!(r#"<option value="{order}"{selected}>{label}</option>"#)
    })
    .collect();

    let checkboxes: String = CATEGORIES
        .iter()
        .map(|(id, name)| {
            let checked = if request.categories.iter().any(|c| c == id) {
                " checked"
            } else {
                ""
            };
            format!(
                r#"<label class="flex items-center space-x-2 text-sm font-normal text-gray-300 cursor-pointer">
                    <input type="checkbox" value="{id}" class="category-box accent-folio-500" onchange="collectCategories()"{checked} />
                    <span>{name}</span>
                </label>"#
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-4 sticky top-20">
            <form action="/search" method="get">
                <div class="flex justify-between items-center mb-4">
                    <h3 class="font-medium text-lg text-white">Filters</h3>
                    {clear}
                </div>
                <input type="hidden" name="query" value="{query}" />
                <input type="hidden" name="categories" id="categories-field" value="{categories}" />
                <div class="mb-4">
                    <label for="sort-select" class="text-sm font-medium mb-2 block text-gray-300">Sort By</label>
                    <select name="sort_by" id="sort-select" class="w-full px-3 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-folio-500">
                        {sort_options}
                    </select>
                </div>
                <div class="mb-4">
                    <span class="text-sm font-medium mb-2 block text-gray-300">Categories</span>
                    <div class="space-y-2 mt-1">
                        {checkboxes}
                    </div>
                </div>
                <button type="submit" class="w-full px-4 py-2 bg-folio-500 hover:bg-folio-600 text-white rounded-lg font-medium transition-colors">Apply Filters</button>
            </form>
            <script>
                function collectCategories() {{
                    const boxes = document.querySelectorAll('.category-box:checked');
                    const values = Array.from(boxes).map(box => box.value);
                    document.getElementById('categories-field').value = values.join(',');
                }}
            </script>
        </div>"#,
        query = escape_html(&request.query),
        categories = escape_html(&request.categories.join(",")),
    )
}
