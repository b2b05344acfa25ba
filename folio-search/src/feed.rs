//! Atom feed parsing for arXiv search responses.
//!
//! ArXiv answers with namespaced Atom XML. Element names are matched by
//! local-name suffix so the feed's prefix choices do not matter, and
//! every captured text value is whitespace-normalized because the API
//! wraps titles and abstracts across indented lines.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::errors::SearchError;
use crate::types::{Author, FeedEntry, SearchMetadata, SearchPage};

/// Collapses runs of whitespace, including newlines, to single spaces.
fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses an arXiv Atom document into a normalized search page.
///
/// Feed counters missing from the document default to zero. Entries and
/// per-entry author lists are materialized as lists even when the feed
/// contains a single occurrence.
///
/// # Errors
/// - `SearchError::ParseError` - Document is not well-formed XML
pub fn parse_feed(body: &str) -> Result<SearchPage, SearchError> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut metadata = SearchMetadata::default();
    let mut entries: Vec<FeedEntry> = Vec::new();
    let mut draft = FeedEntry::default();
    let mut in_entry = false;
    let mut in_author = false;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                if name.ends_with("entry") {
                    draft = FeedEntry::default();
                    in_entry = true;
                } else if in_entry && name.ends_with("author") {
                    in_author = true;
                }
                text.clear();
            }
            Ok(Event::Text(t)) => {
                let chunk = t.unescape().map_err(|e| SearchError::ParseError {
                    reason: format!("invalid text content: {e}"),
                })?;
                text.push_str(&chunk);
            }
            Ok(Event::End(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).to_string();
                let value = normalize_ws(&text);
                text.clear();

                if in_entry {
                    if name.ends_with("entry") {
                        in_entry = false;
                        entries.push(std::mem::take(&mut draft));
                    } else if name.ends_with("author") {
                        in_author = false;
                    } else if in_author && name.ends_with("name") {
                        if !value.is_empty() {
                            draft.authors.push(Author { name: value });
                        }
                    } else if name.ends_with("published") {
                        draft.published = value;
                    } else if name.ends_with("updated") {
                        draft.updated = value;
                    } else if name.ends_with("title") {
                        draft.title = value;
                    } else if name.ends_with("summary") {
                        draft.summary = value;
                    } else if name.ends_with("id") {
                        draft.id = value;
                    }
                } else if name.ends_with("totalResults") {
                    metadata.total_results = value.parse().unwrap_or(0);
                } else if name.ends_with("startIndex") {
                    metadata.start = value.parse().unwrap_or(0);
                } else if name.ends_with("itemsPerPage") {
                    metadata.items_per_page = value.parse().unwrap_or(0);
                } else if name.ends_with("title") {
                    metadata.title = value;
                } else if name.ends_with("updated") {
                    metadata.updated = value;
                } else if name.ends_with("id") {
                    metadata.id = value;
                }
            }
            Err(e) => {
                return Err(SearchError::ParseError {
                    reason: format!("malformed feed: {e}"),
                });
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(SearchPage { metadata, entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ENTRY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <title type="html">ArXiv Query: search_query=all:bandits</title>
  <id>http://arxiv.org/api/cHxbiOdZaP56ODnBPIenZhzg5f8</id>
  <updated>2024-01-15T00:00:00-05:00</updated>
  <opensearch:totalResults>212</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>10</opensearch:itemsPerPage>
  <entry>
    <id>http://arxiv.org/abs/0805.3415v1</id>
    <updated>2008-05-22T13:02:54Z</updated>
    <published>2008-05-22T13:02:54Z</published>
    <title>On Upper-Confidence Bound Policies for
  Non-Stationary Bandit Problems</title>
    <summary>  Multi-armed bandit problems are considered
  as a paradigm of the trade-off between exploring and exploiting.  </summary>
    <author><name>Aurelien Garivier</name></author>
    <author><name>Eric Moulines</name></author>
    <category term="math.ST" scheme="http://arxiv.org/schemas/atom"/>
    <link href="http://arxiv.org/abs/0805.3415v1" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/0805.3415v1" rel="related" type="application/pdf"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/1305.2545v2</id>
    <updated>2013-05-11T00:00:00Z</updated>
    <published>2013-05-11T00:00:00Z</published>
    <title>Bandits with Knapsacks</title>
    <summary>Abstract two.</summary>
    <author><name>Ashwinkumar Badanidiyuru</name></author>
    <category term="cs.DS" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
</feed>
"#;

    #[test]
    fn test_parses_entries_and_envelope_counters() {
        let page = parse_feed(TWO_ENTRY_FEED).unwrap();

        assert_eq!(page.metadata.total_results, 212);
        assert_eq!(page.metadata.start, 0);
        assert_eq!(page.metadata.items_per_page, 10);
        assert_eq!(
            page.metadata.title,
            "ArXiv Query: search_query=all:bandits"
        );
        assert_eq!(page.entries.len(), 2);
        assert_eq!(page.entries[0].authors.len(), 2);
        assert_eq!(page.entries[1].arxiv_id(), Some("1305.2545v2"));
    }

    #[test]
    fn test_single_entry_becomes_one_element_list() {
        let xml = r#"
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <title>ArXiv Query</title>
  <opensearch:totalResults>1</opensearch:totalResults>
  <entry>
    <id>http://arxiv.org/abs/2301.04104v2</id>
    <updated>2023-01-10T00:00:00Z</updated>
    <published>2023-01-10T00:00:00Z</published>
    <title>Solo Paper</title>
    <summary>One entry only.</summary>
    <author><name>Single Author</name></author>
  </entry>
</feed>
"#;
        let page = parse_feed(xml).unwrap();

        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.metadata.total_results, 1);
    }

    #[test]
    fn test_single_author_becomes_one_element_list() {
        let xml = r#"
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/2301.04104v2</id>
    <title>Solo Paper</title>
    <summary>s</summary>
    <author><name>Grace Hopper</name></author>
  </entry>
</feed>
"#;
        let page = parse_feed(xml).unwrap();

        assert_eq!(page.entries[0].authors.len(), 1);
        assert_eq!(page.entries[0].authors[0].name, "Grace Hopper");
    }

    #[test]
    fn test_feed_without_entries_yields_empty_page() {
        let xml = r#"
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <title>ArXiv Query: search_query=all:zzzznope</title>
  <id>http://arxiv.org/api/empty</id>
  <updated>2024-01-15T00:00:00-05:00</updated>
  <opensearch:totalResults>0</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>10</opensearch:itemsPerPage>
</feed>
"#;
        let page = parse_feed(xml).unwrap();

        assert!(page.entries.is_empty());
        assert_eq!(page.metadata.total_results, 0);
        assert_eq!(page.metadata.title, "ArXiv Query: search_query=all:zzzznope");
    }

    #[test]
    fn test_namespace_prefixes_are_ignored() {
        let xml = r#"
<atom:feed xmlns:atom="http://www.w3.org/2005/Atom"
           xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">
  <atom:title>Prefixed Feed</atom:title>
  <opensearch:totalResults>1</opensearch:totalResults>
  <atom:entry>
    <atom:id>http://arxiv.org/abs/9912.12345v1</atom:id>
    <atom:title>Prefixed Entry</atom:title>
    <atom:summary>s</atom:summary>
    <atom:author><atom:name>P. Author</atom:name></atom:author>
  </atom:entry>
</atom:feed>
"#;
        let page = parse_feed(xml).unwrap();

        assert_eq!(page.metadata.title, "Prefixed Feed");
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].title, "Prefixed Entry");
        assert_eq!(page.entries[0].authors[0].name, "P. Author");
    }

    #[test]
    fn test_whitespace_collapsed_in_titles_and_summaries() {
        let page = parse_feed(TWO_ENTRY_FEED).unwrap();

        assert_eq!(
            page.entries[0].title,
            "On Upper-Confidence Bound Policies for Non-Stationary Bandit Problems"
        );
        assert!(!page.entries[0].summary.contains('\n'));
        assert!(page.entries[0].summary.starts_with("Multi-armed bandit"));
    }

    #[test]
    fn test_missing_counters_default_to_zero() {
        let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title></feed>"#;
        let page = parse_feed(xml).unwrap();

        assert_eq!(page.metadata.total_results, 0);
        assert_eq!(page.metadata.start, 0);
        assert_eq!(page.metadata.items_per_page, 0);
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let result = parse_feed("<feed><entry><title>broken</feed>");
        assert!(matches!(
            result,
            Err(SearchError::ParseError { .. })
        ));
    }
}
