use std::time::Duration;

use anyhow::anyhow;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html};
use sqlx::SqlitePool;
use url::Url;

use crate::{
    dal::search_log_db,
    domain::snippet::{strip_citations, Snippet},
};

const HTTP_TIMEOUT: Duration = Duration::from_secs(20);

/// One encyclopedia site. The variants differ only in how they spot a
/// disambiguation page and where the top marker sits; the traversal that
/// turns a marked document into snippets is shared below.
pub trait Source {
    fn name(&self) -> &'static str;

    fn base_url(&self) -> &Url;

    /// Structural test for a disambiguation page.
    fn is_disambiguation(&self, doc: &Html) -> bool;

    /// The element sitting right before the content of interest. `None`
    /// when the document carries none of the expected landmarks.
    fn top_marker<'a>(&self, doc: &'a Html, disambiguated: bool) -> Option<ElementRef<'a>>;
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no connection to the source host")]
    Connectivity(#[source] reqwest::Error),
    #[error("the source took too long to respond")]
    Timeout(#[source] reqwest::Error),
    #[error("{code}: {reason}")]
    Fetch { code: u16, reason: &'static str },
    #[error(transparent)]
    Extraction(#[from] anyhow::Error),
}

/// Shared outbound client. All fetches run under the same fixed timeout.
pub fn http_client() -> Client {
    Client::builder().timeout(HTTP_TIMEOUT).build().unwrap()
}

pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No content",
        400 => "Bad request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Page does not exist",
        500 => "Internal server error",
        _ => "Unrecognized status code",
    }
}

pub fn page_url(base: &Url, key_word: &str) -> Result<Url, SearchError> {
    let segment = key_word.split_whitespace().collect::<Vec<_>>().join("_");

    base.join(&segment)
        .map_err(|e| SearchError::Extraction(anyhow!("bad page url for {:?}: {}", key_word, e)))
}

/// Fetch the page for `key_word`, classify it and pull out its snippets.
/// A fully successful run appends exactly one row to the search log;
/// nothing is logged on any failure.
pub async fn search<S: Source>(
    source: &S,
    http: &Client,
    pool: &SqlitePool,
    key_word: &str,
) -> Result<Vec<Snippet>, SearchError> {
    let url = page_url(source.base_url(), key_word)?;
    let response = http.get(url).send().await.map_err(fetch_error)?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(SearchError::Fetch {
            code: status.as_u16(),
            reason: reason_phrase(status.as_u16()),
        });
    }

    let body = response.text().await.map_err(fetch_error)?;
    let snippets = extract_document(source, &body)?;

    search_log_db::insert_search(pool, source.name(), key_word)
        .await
        .map_err(|e| SearchError::Extraction(anyhow!("failed to record the search: {}", e)))?;

    log::info!(
        "{}: extracted {} snippets for {:?}",
        source.name(),
        snippets.len(),
        key_word
    );

    Ok(snippets)
}

fn fetch_error(error: reqwest::Error) -> SearchError {
    if error.is_timeout() {
        SearchError::Timeout(error)
    } else if error.is_connect() {
        SearchError::Connectivity(error)
    } else {
        SearchError::Extraction(anyhow::Error::from(error))
    }
}

fn extract_document<S: Source>(source: &S, html: &str) -> Result<Vec<Snippet>, SearchError> {
    let doc = Html::parse_document(html);
    let disambiguated = source.is_disambiguation(&doc);
    let top = source
        .top_marker(&doc, disambiguated)
        .ok_or_else(|| anyhow!("{}: no top marker in the fetched document", source.name()))?;

    match disambiguated {
        true => Ok(extract_disambiguation(top)),
        false => Ok(extract_article(&doc, top)),
    }
}

/// Articles: the naive top marker can be followed by infoboxes and other
/// furniture, so first locate the paragraph where body text actually
/// starts, then collect the run of paragraph siblings from there.
fn extract_article<'a>(doc: &'a Html, top: ElementRef<'a>) -> Vec<Snippet> {
    let Some(first) = first_body_paragraph(doc, top) else {
        return Vec::new();
    };

    let mut snippets = vec![paragraph_snippet(first)];
    let mut sibling = first.next_sibling();
    while let Some(node) = sibling {
        if let Some(text) = node.value().as_text() {
            if text.trim().is_empty() {
                sibling = node.next_sibling();
                continue;
            }
            break;
        }
        match ElementRef::wrap(node) {
            Some(element) if element.value().name() == "p" => {
                snippets.push(paragraph_snippet(element));
                sibling = node.next_sibling();
            }
            _ => break,
        }
    }

    snippets
}

// First paragraph after the marker, in document order, that holds real
// text and sits in a plain container.
fn first_body_paragraph<'a>(doc: &'a Html, top: ElementRef<'a>) -> Option<ElementRef<'a>> {
    let mut past_top = false;
    for node in doc.root_element().descendants() {
        if node.id() == top.id() {
            past_top = true;
            continue;
        }
        if !past_top {
            continue;
        }
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };
        if element.value().name() != "p" {
            continue;
        }
        if element.text().collect::<String>().trim().is_empty() {
            continue;
        }
        let in_plain_container = node
            .parent()
            .and_then(ElementRef::wrap)
            .is_some_and(|parent| parent.value().name() == "div");
        if in_plain_container {
            return Some(element);
        }
    }

    None
}

fn paragraph_snippet(paragraph: ElementRef<'_>) -> Snippet {
    Snippet::Text(strip_citations(&paragraph.text().collect::<String>()))
}

/// Disambiguation pages: walk the marker's subtree keeping only section
/// headers and list entries. A list item's text past its first line break
/// is link furniture, not part of the candidate topic.
fn extract_disambiguation(top: ElementRef<'_>) -> Vec<Snippet> {
    let mut snippets = Vec::new();
    for element in top.descendants().filter_map(ElementRef::wrap) {
        match element.value().name() {
            "h2" => {
                let heading: String = element.text().collect();
                snippets.push(Snippet::Heading(heading.trim().to_string()));
            }
            "ul" => {
                for item in element.children().filter_map(ElementRef::wrap) {
                    let text: String = item.text().collect();
                    let first_line = text.lines().next().unwrap_or("").trim();
                    if !first_line.is_empty() {
                        snippets.push(Snippet::Text(strip_citations(first_line)));
                    }
                }
            }
            _ => {}
        }
    }

    snippets
}
