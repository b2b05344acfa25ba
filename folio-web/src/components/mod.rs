//! Reusable HTML components for the Tailwind UI
//!
//! Components are server-rendered HTML fragments composed into full
//! pages by the page handlers. All styling uses Tailwind CSS.

pub mod layout;
pub mod pagination;
pub mod results;

// Re-export main component functions
pub use layout::{button, card, escape_html, input, nav_bar, page_header, render_page};
pub use pagination::{PageItem, pagination_controls, pagination_range};
pub use results::{error_notice, format_date, no_results, result_card, results_header, results_list};
