//! Client for the MediaWiki Action API.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;
use wr_core::{Article, ArticleSource, Error, Result};

pub const API_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Upstream latency is not ours to control; a hung request counts as a
/// failed fetch after this long.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

pub struct WikipediaSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl WikipediaSource {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(API_ENDPOINT, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_endpoint(API_ENDPOINT, timeout)
    }

    /// Point the client at another Action API endpoint (tests, mirrors).
    pub fn with_endpoint(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint =
            Url::parse(endpoint).map_err(|e| Error::InvalidUrl(format!("{endpoint}: {e}")))?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("wikirandom/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[derive(Debug, Deserialize)]
struct RandomResponse {
    query: RandomQuery,
}

#[derive(Debug, Deserialize)]
struct RandomQuery {
    random: Vec<RandomPage>,
}

#[derive(Debug, Deserialize)]
struct RandomPage {
    title: String,
}

#[derive(Debug, Deserialize)]
struct SummaryResponse {
    query: SummaryQuery,
}

#[derive(Debug, Deserialize)]
struct SummaryQuery {
    // Keyed by page id, with "-1" for missing pages; we only ever ask for one.
    pages: HashMap<String, PageSummary>,
}

#[derive(Debug, Deserialize)]
struct PageSummary {
    pageid: Option<u64>,
    title: Option<String>,
    extract: Option<String>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    source: String,
}

#[async_trait]
impl ArticleSource for WikipediaSource {
    async fn random_title(&self) -> Result<String> {
        let response: RandomResponse = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("action", "query"),
                ("list", "random"),
                ("rnnamespace", "0"),
                ("rnlimit", "1"),
                ("format", "json"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let page = response
            .query
            .random
            .into_iter()
            .next()
            .ok_or_else(|| Error::Source("random query returned no pages".to_string()))?;
        Ok(page.title)
    }

    async fn summary(&self, title: &str) -> Result<Article> {
        let response: SummaryResponse = self
            .client
            .get(self.endpoint.clone())
            .query(&[
                ("action", "query"),
                ("prop", "extracts|pageimages"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("pithumbsize", "800"),
                ("format", "json"),
                ("titles", title),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let page = response
            .query
            .pages
            .into_values()
            .next()
            .ok_or_else(|| Error::Source(format!("no summary returned for {title:?}")))?;

        Ok(Article {
            id: page
                .pageid
                .ok_or_else(|| Error::Source(format!("summary for {title:?} has no page id")))?,
            title: page.title.unwrap_or_else(|| title.to_string()),
            extract: page
                .extract
                .ok_or_else(|| Error::Source(format!("summary for {title:?} has no extract")))?,
            thumbnail: page.thumbnail.map(|t| t.source),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source_for(server: &MockServer) -> WikipediaSource {
        WikipediaSource::with_endpoint(
            &format!("{}/w/api.php", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn random_title_parses_the_random_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("list", "random"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "batchcomplete": "",
                "query": { "random": [ { "id": 736, "ns": 0, "title": "Albert Einstein" } ] }
            })))
            .mount(&server)
            .await;

        let title = source_for(&server).random_title().await.unwrap();
        assert_eq!(title, "Albert Einstein");
    }

    #[tokio::test]
    async fn summary_maps_the_page_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("prop", "extracts|pageimages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": { "pages": { "736": {
                    "pageid": 736,
                    "title": "Albert Einstein",
                    "extract": "Albert Einstein was a theoretical physicist.",
                    "thumbnail": { "source": "https://upload.wikimedia.org/einstein.jpg", "width": 800, "height": 600 }
                } } }
            })))
            .mount(&server)
            .await;

        let article = source_for(&server).summary("Albert Einstein").await.unwrap();
        assert_eq!(article.id, 736);
        assert_eq!(article.title, "Albert Einstein");
        assert_eq!(
            article.thumbnail.as_deref(),
            Some("https://upload.wikimedia.org/einstein.jpg")
        );
    }

    #[tokio::test]
    async fn summary_without_thumbnail_is_fine() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": { "pages": { "42": {
                    "pageid": 42,
                    "title": "Obscure Village",
                    "extract": "A village with no photograph."
                } } }
            })))
            .mount(&server)
            .await;

        let article = source_for(&server).summary("Obscure Village").await.unwrap();
        assert_eq!(article.thumbnail, None);
    }

    #[tokio::test]
    async fn summary_without_extract_is_malformed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "query": { "pages": { "42": { "pageid": 42, "title": "Half a Page" } } }
            })))
            .mount(&server)
            .await;

        let err = source_for(&server).summary("Half a Page").await.unwrap_err();
        assert!(matches!(err, Error::Source(_)));
        assert!(err.is_fetch_failure());
    }

    #[tokio::test]
    async fn server_errors_surface_as_fetch_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = source_for(&server).random_title().await.unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert!(err.is_fetch_failure());
    }
}
