//! The headline record shared by every source and the carousel.
//!
//! `Article` is what survives post-processing: by the time one exists it is
//! guaranteed to carry an image URL, and a missing upstream title has already
//! been replaced with a placeholder.  Cards never have to deal with absent
//! values except for the optional fields listed below.

use chrono::{DateTime, Utc};

/// Title shown when the upstream record has none.
pub const UNTITLED: &str = "(untitled)";

/// Marker appended to text cut by [`truncate`].
pub const ELLIPSIS: &str = "...";

/// A single headline, ready to be rendered as a card.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Article {
    /// Headline text.
    pub title: String,

    /// Optional standfirst / summary.
    pub description: Option<String>,

    /// Card image.  Records without one are dropped before this type is built.
    pub image_url: String,

    /// URL of the full story.
    pub link: String,

    /// Publisher name, e.g. "Reuters".
    pub source_name: Option<String>,

    /// Publication time, when the upstream value parsed.
    pub published: Option<DateTime<Utc>>,
}

impl Article {
    /// Host part of the image URL, shown in place of the bitmap.
    pub fn image_host(&self) -> &str {
        let rest = self
            .image_url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.image_url);
        rest.split(['/', '?', '#']).next().unwrap_or(rest)
    }
}

/// Cut `text` to at most `limit` characters, appending [`ELLIPSIS`] when
/// anything was removed.  Counts `char`s, so multi-byte text is never split
/// mid-codepoint.
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}{ELLIPSIS}", &text[..byte_idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub fn make_article(title: &str, image_url: &str) -> Article {
        Article {
            title: title.to_string(),
            description: None,
            image_url: image_url.to_string(),
            link: "https://example.com/story".to_string(),
            source_name: None,
            published: None,
        }
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("Hello", 60), "Hello");
        assert_eq!(truncate("", 60), "");
    }

    #[test]
    fn text_at_exact_limit_has_no_ellipsis() {
        let text = "a".repeat(60);
        assert_eq!(truncate(&text, 60), text);
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let text = "b".repeat(61);
        let cut = truncate(&text, 60);
        assert_eq!(cut.len(), 63);
        assert!(cut.ends_with("..."));
        assert_eq!(&cut[..60], "b".repeat(60));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(truncate(&text, 3), "ééé...");
    }

    #[test]
    fn image_host_strips_scheme_and_path() {
        let a = make_article("t", "https://cdn.example.com/img/1.jpg?w=300");
        assert_eq!(a.image_host(), "cdn.example.com");
    }

    #[test]
    fn image_host_without_scheme() {
        let a = make_article("t", "static.example.org/pic.png");
        assert_eq!(a.image_host(), "static.example.org");
    }
}
