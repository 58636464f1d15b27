//! Paper search against the arXiv API.
//!
//! arXiv exposes an Atom feed at `http://export.arxiv.org/api/query`;
//! queries support field prefixes (ti:, au:, abs:, cat:, ...), AND/OR
//! operators, and submittedDate ranges.

use crate::types::Paper;
use chrono::{DateTime, Utc};
use paperchat_core::{AppError, AppResult};
use quick_xml::events::Event;
use quick_xml::Reader;

/// arXiv API query endpoint.
const ARXIV_API_URL: &str = "http://export.arxiv.org/api/query";

/// Search arXiv and return up to `max_results` papers.
///
/// The query may use field prefixes, boolean operators, and date ranges as
/// documented by the arXiv API. Results keep the feed's relevance order.
///
/// # Errors
/// `Arxiv` for transport failures, non-success statuses, or an unparseable
/// feed.
pub async fn search_papers(query: &str, max_results: usize) -> AppResult<Vec<Paper>> {
    let query = normalize_query(query);

    tracing::info!("Searching arXiv for '{}' (max {})", query, max_results);

    let client = reqwest::Client::new();
    let response = client
        .get(ARXIV_API_URL)
        .query(&[
            ("search_query", query.as_str()),
            ("start", "0"),
            ("max_results", &max_results.to_string()),
        ])
        .send()
        .await
        .map_err(|e| AppError::Arxiv(format!("Failed to reach arXiv API: {}", e)))?;

    if !response.status().is_success() {
        return Err(AppError::Arxiv(format!(
            "arXiv API returned status {}",
            response.status()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AppError::Arxiv(format!("Failed to read arXiv response: {}", e)))?;

    let papers = parse_feed(&body)?;

    tracing::info!("arXiv returned {} papers", papers.len());
    Ok(papers)
}

/// Normalize a query string before it is URL-encoded.
///
/// The arXiv API treats `+` as a space; queries produced by the translation
/// step use `+` as a separator, so it is mapped back to a literal space and
/// left to the HTTP client's own percent-encoding.
fn normalize_query(query: &str) -> String {
    query.replace('+', " ").trim().to_string()
}

/// Partially parsed `<entry>` element.
#[derive(Default)]
struct EntryFields {
    title: String,
    summary: String,
    id: String,
    published: String,
    authors: Vec<String>,
    link: Option<String>,
}

impl EntryFields {
    fn into_paper(self) -> AppResult<Paper> {
        // The entry id is a URL like http://arxiv.org/abs/2106.09685v2
        let arxiv_id = self
            .id
            .split("/abs/")
            .last()
            .unwrap_or(&self.id)
            .to_string();

        let published = DateTime::parse_from_rfc3339(self.published.trim())
            .map_err(|e| {
                AppError::Arxiv(format!(
                    "Invalid published date '{}': {}",
                    self.published, e
                ))
            })?
            .with_timezone(&Utc);

        Ok(Paper {
            title: normalize_whitespace(&self.title),
            authors: self.authors,
            summary: normalize_whitespace(&self.summary),
            arxiv_id,
            published,
            link: self.link,
        })
    }
}

/// Parse an arXiv Atom feed into paper records.
fn parse_feed(xml: &str) -> AppResult<Vec<Paper>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut papers = Vec::new();
    let mut buf = Vec::new();

    let mut current_entry: Option<EntryFields> = None;
    let mut current_element = String::new();
    let mut in_author = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();

                match name.as_str() {
                    "entry" => current_entry = Some(EntryFields::default()),
                    "author" => in_author = true,
                    "link" => capture_alternate_link(e, current_entry.as_mut())?,
                    _ => {}
                }
                current_element = name;
            }
            Ok(Event::Empty(ref e)) => {
                if e.local_name().as_ref() == b"link" {
                    capture_alternate_link(e, current_entry.as_mut())?;
                }
            }
            Ok(Event::End(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();

                match name.as_str() {
                    "entry" => {
                        if let Some(entry) = current_entry.take() {
                            papers.push(entry.into_paper()?);
                        }
                    }
                    "author" => in_author = false,
                    _ => {}
                }
                current_element.clear();
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().to_string();

                if let Some(entry) = current_entry.as_mut() {
                    match current_element.as_str() {
                        "title" => entry.title.push_str(&text),
                        "summary" => entry.summary.push_str(&text),
                        "id" => entry.id.push_str(&text),
                        "published" => entry.published.push_str(&text),
                        "name" if in_author => entry.authors.push(text),
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::Arxiv(format!("Failed to parse arXiv feed: {}", e)))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(papers)
}

/// Record the `rel="alternate"` link href on the current entry.
fn capture_alternate_link(
    element: &quick_xml::events::BytesStart<'_>,
    entry: Option<&mut EntryFields>,
) -> AppResult<()> {
    let Some(entry) = entry else {
        return Ok(());
    };

    let mut rel_alternate = false;
    let mut href = None;

    for attr in element.attributes() {
        let attr =
            attr.map_err(|e| AppError::Arxiv(format!("Invalid link attribute: {}", e)))?;
        match attr.key.as_ref() {
            b"rel" => {
                rel_alternate = attr
                    .unescape_value()
                    .map(|v| v == "alternate")
                    .unwrap_or(false);
            }
            b"href" => {
                href = attr.unescape_value().ok().map(|v| v.to_string());
            }
            _ => {}
        }
    }

    if rel_alternate {
        entry.link = href;
    }

    Ok(())
}

/// Collapse runs of whitespace (including line breaks) to single spaces.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=all:attention</title>
  <entry>
    <id>http://arxiv.org/abs/1706.03762v7</id>
    <published>2017-06-12T17:57:34Z</published>
    <title>Attention Is All
 You Need</title>
    <summary>  The dominant sequence transduction models are based on complex
recurrent or convolutional neural networks.
</summary>
    <author><name>Ashish Vaswani</name></author>
    <author><name>Noam Shazeer</name></author>
    <link href="http://arxiv.org/abs/1706.03762v7" rel="alternate" type="text/html"/>
    <link title="pdf" href="http://arxiv.org/pdf/1706.03762v7" rel="related" type="application/pdf"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/2106.09685v2</id>
    <published>2021-06-17T17:37:18Z</published>
    <title>LoRA: Low-Rank Adaptation of Large Language Models</title>
    <summary>An important paradigm of natural language processing.</summary>
    <author><name>Edward J. Hu</name></author>
    <link href="http://arxiv.org/abs/2106.09685v2" rel="alternate" type="text/html"/>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_feed() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert_eq!(papers.len(), 2);

        let first = &papers[0];
        assert_eq!(first.title, "Attention Is All You Need");
        assert_eq!(first.arxiv_id, "1706.03762v7");
        assert_eq!(first.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
        assert_eq!(
            first.link.as_deref(),
            Some("http://arxiv.org/abs/1706.03762v7")
        );
        assert!(first.summary.starts_with("The dominant sequence"));
        assert!(!first.summary.contains('\n'));
        assert_eq!(first.published.format("%Y-%m-%d").to_string(), "2017-06-12");
    }

    #[test]
    fn test_parse_feed_skips_feed_title() {
        let papers = parse_feed(SAMPLE_FEED).unwrap();
        assert!(!papers[0].title.contains("ArXiv Query"));
    }

    #[test]
    fn test_parse_empty_feed() {
        let xml = r#"<?xml version="1.0"?><feed xmlns="http://www.w3.org/2005/Atom"></feed>"#;
        let papers = parse_feed(xml).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_parse_invalid_date_is_error() {
        let xml = r#"<feed><entry><id>http://arxiv.org/abs/1</id><published>not-a-date</published><title>T</title><summary>S</summary></entry></feed>"#;
        assert!(parse_feed(xml).is_err());
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(
            normalize_query("ti:\"language models\"+AND+cat:cs"),
            "ti:\"language models\" AND cat:cs"
        );
        assert_eq!(normalize_query("  attention  "), "attention");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("Attention Is All\n You  Need"),
            "Attention Is All You Need"
        );
    }
}
