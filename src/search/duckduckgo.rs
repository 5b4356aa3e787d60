// file: src/search/duckduckgo.rs
// description: DuckDuckGo HTML endpoint client returning the top hit
// reference: https://html.duckduckgo.com/html/

use crate::config::SearchConfig;
use crate::error::{Result, ServiceError};
use crate::search::{DelayPolicy, RandomDelay, SearchHit, SearchProvider};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Queries longer than this are trimmed; the provider handles short
/// queries better than full documents.
const QUERY_MAX_CHARS: usize = 100;

pub struct DuckDuckGoClient {
    http: reqwest::Client,
    endpoint: String,
    delay: Box<dyn DelayPolicy>,
}

impl DuckDuckGoClient {
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Self::with_delay(config, Box::new(RandomDelay))
    }

    pub fn with_delay(config: &SearchConfig, delay: Box<dyn DelayPolicy>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ServiceError::Search(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            delay,
        })
    }

    async fn fetch(&self, query: &str) -> Result<String> {
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::Search(format!(
                "provider returned status {}",
                response.status()
            )));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl SearchProvider for DuckDuckGoClient {
    async fn search(&self, query_text: &str) -> Option<SearchHit> {
        let query = build_query(query_text);
        info!("Searching: {}...", query.chars().take(50).collect::<String>());

        self.delay.wait().await;

        let html = match self.fetch(&query).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Search request failed: {}", e);
                return None;
            }
        };

        match parse_first_result(&html) {
            Some(hit) => {
                info!("Match found: {}", hit.url);
                Some(hit)
            }
            None => {
                debug!("No results found");
                None
            }
        }
    }
}

/// First 100 characters of the source text, newlines flattened to spaces.
fn build_query(source_text: &str) -> String {
    source_text
        .chars()
        .take(QUERY_MAX_CHARS)
        .collect::<String>()
        .replace('\n', " ")
}

/// Pull the top organic result out of the HTML endpoint's markup.
fn parse_first_result(html: &str) -> Option<SearchHit> {
    let document = Html::parse_document(html);
    let result_sel = Selector::parse("div.result").ok()?;
    let link_sel = Selector::parse("a.result__a").ok()?;
    let snippet_sel = Selector::parse(".result__snippet").ok()?;

    let result = document.select(&result_sel).next()?;
    let link = result.select(&link_sel).next()?;
    let href = link.value().attr("href")?;

    let snippet = result
        .select(&snippet_sel)
        .next()
        .map(|el| el.text().collect::<Vec<_>>().join(""))
        .unwrap_or_default();

    let snippet = snippet.trim().to_string();
    if snippet.is_empty() {
        return None;
    }

    Some(SearchHit {
        url: resolve_redirect(href),
        snippet,
    })
}

/// The HTML endpoint wraps result links in a `/l/?uddg=<encoded>` redirect.
/// Unwrap it to the destination URL; leave plain links untouched.
fn resolve_redirect(href: &str) -> String {
    if let Some(idx) = href.find("uddg=") {
        let encoded = &href[idx + 5..];
        let encoded = encoded.split('&').next().unwrap_or(encoded);
        return urlencoding::decode(encoded)
            .map(|url| url.into_owned())
            .unwrap_or_else(|_| encoded.to_string());
    }

    if let Some(rest) = href.strip_prefix("//") {
        return format!("https://{rest}");
    }

    href.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::NoDelay;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_query_truncates_to_100_chars() {
        let long = "x".repeat(300);
        assert_eq!(build_query(&long).chars().count(), 100);
    }

    #[test]
    fn test_build_query_flattens_newlines() {
        assert_eq!(build_query("line one\nline two"), "line one line two");
    }

    #[test]
    fn test_resolve_redirect_unwraps_uddg() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc123";
        assert_eq!(resolve_redirect(href), "https://example.com/page");
    }

    #[test]
    fn test_resolve_redirect_preserves_literal_plus() {
        // A plus in the destination path is path data, not a space; only
        // percent escapes are decoded.
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fa+b%20c";
        assert_eq!(resolve_redirect(href), "https://example.com/a+b c");
    }

    #[test]
    fn test_resolve_redirect_keeps_plain_links() {
        assert_eq!(
            resolve_redirect("https://example.com/direct"),
            "https://example.com/direct"
        );
        assert_eq!(
            resolve_redirect("//example.com/schemeless"),
            "https://example.com/schemeless"
        );
    }

    #[test]
    fn test_parse_first_result_from_markup() {
        let html = r##"
        <html><body><div id="links">
          <div class="result results_links">
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fdoc">Example Title</a>
            <a class="result__snippet" href="#">A snippet describing the page content.</a>
          </div>
          <div class="result results_links">
            <a class="result__a" href="https://other.example.com">Second</a>
            <a class="result__snippet" href="#">Second snippet.</a>
          </div>
        </div></body></html>
        "##;

        let hit = parse_first_result(html).unwrap();
        assert_eq!(hit.url, "https://example.com/doc");
        assert_eq!(hit.snippet, "A snippet describing the page content.");
    }

    #[test]
    fn test_parse_empty_page_yields_none() {
        assert!(parse_first_result("<html><body>no results</body></html>").is_none());
    }

    #[test]
    fn test_result_without_snippet_yields_none() {
        let html = r#"<div class="result"><a class="result__a" href="https://x.example">T</a></div>"#;
        assert!(parse_first_result(html).is_none());
    }

    #[tokio::test]
    async fn test_with_delay_client_degrades_to_none_on_unreachable_endpoint() {
        // The NoDelay policy keeps this fast; the refused connection must
        // surface as None, never as an error.
        let config = SearchConfig {
            endpoint: "http://127.0.0.1:9/html/".to_string(),
            user_agent: "docsim-test".to_string(),
            timeout_secs: 2,
        };

        let client = DuckDuckGoClient::with_delay(&config, Box::new(NoDelay)).unwrap();
        assert!(client.search("anything at all").await.is_none());
    }
}
