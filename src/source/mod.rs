//! Article source abstraction layer.
//!
//! This module defines the [`ArticleSource`] trait and the common [`Article`]
//! type.  Concrete sources live in sub-modules: [`newsapi`] talks to a
//! top-headlines endpoint, and [`cache`] wraps any other source with a
//! time-bounded memo.
//!
//! ## Adding a new source
//!
//! 1. Create a new file in this directory.
//! 2. Define a struct holding its settings and implement [`ArticleSource`].
//! 3. Re-export it below and construct it in `main.rs`.
//!
//! The fetch thread, the carousel and the UI never look past the trait.

mod article;
mod cache;
mod newsapi;

pub use article::{truncate, Article};
pub use cache::CachedSource;
pub use newsapi::{NewsApiConfig, NewsApiSource};

use crate::error::FetchError;

/// Trait that every article source must implement.
///
/// [`fetch()`](ArticleSource::fetch) runs on the background fetch thread, so
/// implementations must be [`Send`].  It takes `&mut self` so wrappers such
/// as [`CachedSource`] can keep state between calls.
pub trait ArticleSource: Send {
    /// Human-readable label shown in the status bar.
    fn name(&self) -> &str;

    /// Fetch the current headlines.  Articles without an image are already
    /// filtered out of the returned list.
    fn fetch(&mut self) -> Result<Vec<Article>, FetchError>;
}
