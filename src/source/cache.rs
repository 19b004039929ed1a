//! Time-bounded reuse of a source's last good result.
//!
//! [`CachedSource`] wraps any [`ArticleSource`].  A successful fetch is kept
//! for `ttl`; calls inside that window return a clone without touching the
//! inner source.  Failures are passed through and never stored, so the next
//! call retries.

use std::time::{Duration, Instant};

use tracing::debug;

use super::{Article, ArticleSource};
use crate::error::FetchError;

pub struct CachedSource<S> {
    inner: S,
    ttl: Duration,
    entry: Option<(Instant, Vec<Article>)>,
}

impl<S: ArticleSource> CachedSource<S> {
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entry: None,
        }
    }

    /// Forget the stored result so the next fetch goes upstream.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    fn fetch_at(&mut self, now: Instant) -> Result<Vec<Article>, FetchError> {
        if let Some((stored_at, articles)) = &self.entry {
            let age = now.saturating_duration_since(*stored_at);
            if age < self.ttl {
                debug!(age_secs = age.as_secs(), "serving cached headlines");
                return Ok(articles.clone());
            }
        }

        let articles = self.inner.fetch()?;
        self.entry = Some((now, articles.clone()));
        Ok(articles)
    }
}

impl<S: ArticleSource> ArticleSource for CachedSource<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn fetch(&mut self) -> Result<Vec<Article>, FetchError> {
        self.fetch_at(Instant::now())
    }
}
