//! Top-headlines source for newsapi.org-compatible endpoints.
//!
//! The request is `GET {endpoint}?country=..&pageSize=..&apiKey=..`.  The
//! response body is decoded by [`NewsApiSource::parse_response`], a pure
//! function so the shaping rules can be tested without a network.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::Deserialize;
use tracing::{debug, error, info, instrument, warn};

use super::article::UNTITLED;
use super::{Article, ArticleSource};
use crate::error::FetchError;

/// Settings for one headline request.
#[derive(Debug, Clone)]
pub struct NewsApiConfig {
    pub endpoint: String,
    pub api_key: String,
    pub country: String,
    pub page_size: u32,
    pub timeout: Duration,
}

/// Fetches top headlines over HTTP.
pub struct NewsApiSource {
    config: NewsApiConfig,
    client: Client,
    label: String,
}

// Wire format.  Every field is optional: upstream routinely sends nulls.

#[derive(Debug, Deserialize)]
struct HeadlinesResponse {
    status: Option<String>,
    code: Option<String>,
    message: Option<String>,
    #[serde(default)]
    articles: Vec<RawArticle>,
}

impl HeadlinesResponse {
    /// Split off the `{"status":"error"}` form the API uses for failures.
    fn into_result(self) -> Result<Self, FetchError> {
        if self.status.as_deref() == Some("error") {
            return Err(FetchError::Api {
                code: self.code.unwrap_or_else(|| "unknown".into()),
                message: self.message.unwrap_or_default(),
            });
        }
        Ok(self)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    title: Option<String>,
    description: Option<String>,
    url_to_image: Option<String>,
    url: Option<String>,
    published_at: Option<String>,
    source: Option<RawSource>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    name: Option<String>,
}

impl NewsApiSource {
    /// Build a source with its own blocking client.  The client enforces
    /// `config.timeout` on every request.
    pub fn new(config: NewsApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;
        let label = format!("News API ({})", config.country);
        Ok(Self {
            config,
            client,
            label,
        })
    }

    /// Decode a headlines body, drop articles without an image, and fill in
    /// fallbacks for missing text.
    pub fn parse_response(body: &str) -> Result<Vec<Article>, FetchError> {
        let response: HeadlinesResponse = serde_json::from_str(body)?;
        let response = response.into_result()?;

        let total = response.articles.len();
        let articles: Vec<Article> = response
            .articles
            .into_iter()
            .filter_map(Self::shape)
            .collect();

        debug!(total, kept = articles.len(), "shaped headlines");
        Ok(articles)
    }

    /// Turn a non-success response into an error.  The API's own
    /// `{"status":"error",..}` body wins; anything else reports the status.
    pub fn error_from_body(status: u16, body: &str) -> FetchError {
        match serde_json::from_str::<HeadlinesResponse>(body).map(HeadlinesResponse::into_result) {
            Ok(Err(api_error)) => api_error,
            _ => FetchError::Status(status),
        }
    }

    fn request(&self) -> Result<String, FetchError> {
        let timeout = self.config.timeout;
        let page_size = self.config.page_size.to_string();

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("country", self.config.country.as_str()),
                ("pageSize", page_size.as_str()),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .header(CONTENT_TYPE, "application/json")
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            )
            .send()
            .map_err(|e| FetchError::from_reqwest(e, timeout))?;

        let status = response.status();
        let body = response.text();
        if !status.is_success() {
            let body = body.as_deref().unwrap_or_default();
            return Err(Self::error_from_body(status.as_u16(), body));
        }
        body.map_err(|e| FetchError::from_reqwest(e, timeout))
    }

    fn shape(raw: RawArticle) -> Option<Article> {
        let image_url = non_blank(raw.url_to_image)?;

        let published = raw
            .published_at
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Some(Article {
            title: non_blank(raw.title).unwrap_or_else(|| UNTITLED.to_string()),
            description: non_blank(raw.description),
            image_url,
            link: raw.url.unwrap_or_default(),
            source_name: raw.source.and_then(|s| non_blank(s.name)),
            published,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ArticleSource for NewsApiSource {
    fn name(&self) -> &str {
        &self.label
    }

    #[instrument(skip(self), fields(country = %self.config.country, page_size = self.config.page_size))]
    fn fetch(&mut self) -> Result<Vec<Article>, FetchError> {
        let body = match self.request() {
            Ok(body) => body,
            Err(err) => {
                error!(error = %err, "headline request failed");
                return Err(err);
            }
        };

        match Self::parse_response(&body) {
            Ok(articles) => {
                info!(count = articles.len(), "fetched headlines");
                Ok(articles)
            }
            Err(err) => {
                warn!(error = %err, "could not decode headlines");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BODY: &str = r#"{
      "status": "ok",
      "totalResults": 3,
      "articles": [
        {
          "source": { "id": null, "name": "Example Wire" },
          "title": "First headline",
          "description": "Something happened",
          "url": "https://example.com/1",
          "urlToImage": "https://img.example.com/1.jpg",
          "publishedAt": "2026-10-18T09:30:00Z"
        },
        {
          "source": { "id": null, "name": "No Pictures Daily" },
          "title": "No image here",
          "description": "Dropped",
          "url": "https://example.com/2",
          "urlToImage": null,
          "publishedAt": "2026-10-18T08:00:00Z"
        },
        {
          "source": { "id": null, "name": "" },
          "title": null,
          "description": null,
          "url": "https://example.com/3",
          "urlToImage": "https://img.example.com/3.jpg",
          "publishedAt": "yesterday"
        }
      ]
    }"#;

    fn config_for(endpoint: String) -> NewsApiConfig {
        NewsApiConfig {
            endpoint,
            api_key: "test-key".into(),
            country: "us".into(),
            page_size: 10,
            timeout: Duration::from_secs(2),
        }
    }

    // -- parse_response ------------------------------------------------------

    #[test]
    fn parse_drops_articles_without_image() {
        let articles = NewsApiSource::parse_response(BODY).unwrap();
        assert_eq!(articles.len(), 2);
        assert!(articles.iter().all(|a| !a.image_url.is_empty()));
        assert!(articles.iter().all(|a| a.title != "No image here"));
    }

    #[test]
    fn parse_keeps_upstream_order_and_fields() {
        let articles = NewsApiSource::parse_response(BODY).unwrap();
        let first = &articles[0];
        assert_eq!(first.title, "First headline");
        assert_eq!(first.description.as_deref(), Some("Something happened"));
        assert_eq!(first.link, "https://example.com/1");
        assert_eq!(first.source_name.as_deref(), Some("Example Wire"));
        assert!(first.published.is_some());
    }

    #[test]
    fn parse_fills_fallbacks_for_missing_text() {
        let articles = NewsApiSource::parse_response(BODY).unwrap();
        let third = &articles[1];
        assert_eq!(third.title, UNTITLED);
        assert!(third.description.is_none());
        assert!(third.source_name.is_none());
        assert!(third.published.is_none(), "unparsable date degrades to None");
    }

    #[test]
    fn parse_treats_blank_image_as_missing() {
        let body = r#"{"status":"ok","articles":[{"title":"t","url":"u","urlToImage":"  "}]}"#;
        assert!(NewsApiSource::parse_response(body).unwrap().is_empty());
    }

    #[test]
    fn parse_accepts_missing_articles_array() {
        let articles = NewsApiSource::parse_response(r#"{"status":"ok"}"#).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn parse_surfaces_api_error_body() {
        let body = r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#;
        match NewsApiSource::parse_response(body) {
            Err(FetchError::Api { code, message }) => {
                assert_eq!(code, "apiKeyInvalid");
                assert_eq!(message, "Your API key is invalid.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            NewsApiSource::parse_response("<html>oops</html>"),
            Err(FetchError::Parse(_))
        ));
    }

    // -- error_from_body -----------------------------------------------------

    #[test]
    fn error_body_with_api_error_wins_over_status() {
        let body = r#"{"status":"error","code":"rateLimited","message":"Too many requests."}"#;
        match NewsApiSource::error_from_body(429, body) {
            FetchError::Api { code, message } => {
                assert_eq!(code, "rateLimited");
                assert_eq!(message, "Too many requests.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn error_body_without_api_shape_reports_status() {
        assert!(matches!(
            NewsApiSource::error_from_body(502, "<html>Bad Gateway</html>"),
            FetchError::Status(502)
        ));
        assert!(matches!(
            NewsApiSource::error_from_body(500, r#"{"status":"ok","articles":[]}"#),
            FetchError::Status(500)
        ));
        assert!(matches!(
            NewsApiSource::error_from_body(404, ""),
            FetchError::Status(404)
        ));
    }

    #[test]
    fn name_mentions_country() {
        let src = NewsApiSource::new(config_for("http://localhost/".into())).unwrap();
        assert_eq!(src.name(), "News API (us)");
    }

    // -- fetch over HTTP -----------------------------------------------------

    // The blocking client must not run on an async worker thread.
    async fn fetch_blocking(config: NewsApiConfig) -> Result<Vec<Article>, FetchError> {
        tokio::task::spawn_blocking(move || NewsApiSource::new(config)?.fetch())
            .await
            .expect("fetch task panicked")
    }

    #[tokio::test]
    async fn fetch_sends_query_and_shapes_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/top-headlines"))
            .and(query_param("country", "us"))
            .and(query_param("pageSize", "10"))
            .and(query_param("apiKey", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
            .expect(1)
            .mount(&server)
            .await;

        let articles = fetch_blocking(config_for(format!("{}/v2/top-headlines", server.uri())))
            .await
            .unwrap();
        assert_eq!(articles.len(), 2);
    }

    #[tokio::test]
    async fn fetch_maps_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = fetch_blocking(config_for(server.uri())).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(401)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_surfaces_api_error_sent_with_4xx() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#,
            ))
            .mount(&server)
            .await;

        let err = fetch_blocking(config_for(server.uri())).await.unwrap_err();
        match err {
            FetchError::Api { code, message } => {
                assert_eq!(code, "apiKeyInvalid");
                assert_eq!(message, "Your API key is invalid.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_reports_transport_error() {
        // Bind then release a port so nothing is listening on it.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut src = NewsApiSource::new(config_for(format!("http://{addr}/"))).unwrap();
        let err = src.fetch().unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn fetch_reports_timeout_distinctly() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(BODY)
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let mut config = config_for(server.uri());
        config.timeout = Duration::from_millis(200);
        let err = fetch_blocking(config).await.unwrap_err();
        match err {
            FetchError::Timeout(after) => assert_eq!(after, Duration::from_millis(200)),
            other => panic!("expected timeout, got {other:?}"),
        }
        assert_eq!(
            FetchError::Timeout(Duration::from_millis(200)).to_string(),
            "request timed out after 200ms"
        );
    }

    #[tokio::test]
    async fn fetch_reports_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = fetch_blocking(config_for(server.uri())).await.unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)), "got {err:?}");
    }
}
