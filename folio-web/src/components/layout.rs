//! Layout components - page shell, headers, cards, navigation

use axum::response::Html;

/// Escapes text for safe interpolation into HTML.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a card container with optional header.
pub fn card(title: Option<&str>, content: &str) -> String {
    let header_html = title
        .map(|t| format!(r#"<h3 class="text-lg font-semibold text-white mb-6">{t}</h3>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="bg-gray-800 border border-gray-700 rounded-lg p-6 mb-6">
            {header_html}
            {content}
        </div>"#
    )
}

/// Renders the main navigation bar.
///
/// Highlights the active page based on the provided page identifier.
pub fn nav_bar(active_page: &str) -> String {
    let nav_item = |href: &str, label: &str, page: &str| {
        let active_class = if page == active_page {
            "nav-active text-folio-500 bg-folio-500 bg-opacity-10"
        } else {
            "text-gray-300 hover:text-folio-500 hover:bg-gray-700"
        };

        format!(
            r#"<a href="{href}" class="px-3 py-2 rounded-md text-sm font-medium transition-colors {active_class}">{label}</a>"#
        )
    };

    format!(
        r#"<nav class="bg-gray-800 border-b border-gray-700 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        <a href="/" class="text-2xl font-bold text-folio-500">Folio</a>
                        <div class="hidden md:flex space-x-6">
                            {}
                            {}
                        </div>
                    </div>
                    <div class="flex items-center space-x-2 text-sm text-gray-400">
                        <span>Open-access paper search</span>
                    </div>
                </div>
            </div>
        </nav>"#,
        nav_item("/", "Home", "home"),
        nav_item("/search", "Search", "search")
    )
}

/// Renders a button with Tailwind styling.
///
/// Variants: primary, secondary, ghost.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-4 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-folio-500 hover:bg-folio-600 text-white focus:ring-folio-500",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        "ghost" => "text-gray-300 hover:text-white hover:bg-gray-700 focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}

/// Renders an input field with Tailwind styling.
pub fn input(name: &str, placeholder: &str, input_type: &str, attributes: Option<&str>) -> String {
    let attrs = attributes.unwrap_or("");

    format!(
        r#"<input type="{input_type}" name="{name}" placeholder="{placeholder}"
                  class="w-full px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-folio-500 focus:border-transparent"
                  {attrs} />"#
    )
}

/// Wraps page content in the base HTML shell with navigation.
pub fn render_page(title: &str, active_nav: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{} - Folio</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'folio': {{
                                    50: '#eef2ff',
                                    400: '#818cf8',
                                    500: '#6366f1',
                                    600: '#4f46e5',
                                    900: '#1e1b4b'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            {}

            <main class="max-w-7xl mx-auto px-4 py-8">
                {}
            </main>
        </body>
        </html>"#,
        title,
        nav_bar(active_nav),
        content
    );

    Html(html)
}
