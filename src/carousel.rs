//! Carousel view-model.
//!
//! Holds the article list and a single cursor, the index of the first fully
//! visible card.  The cursor always satisfies
//! `0 <= cursor <= items.len().saturating_sub(window_size)`; the only
//! mutations are [`Carousel::advance`], [`Carousel::retreat`] and
//! [`Carousel::set_items`], each of which preserves that bound.

use crate::source::{truncate, Article};

/// Geometry and text limits for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselLayout {
    /// Number of simultaneously fully visible cards.
    pub window_size: usize,
    /// Card width in pixels.
    pub card_width: u32,
    /// Gap between cards in pixels.
    pub gap: u32,
    /// Maximum title length in characters before truncation.
    pub title_limit: usize,
    /// Maximum description length in characters before truncation.
    pub description_limit: usize,
}

impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            window_size: 3,
            card_width: 423,
            gap: 24,
            title_limit: 60,
            description_limit: 100,
        }
    }
}

impl CarouselLayout {
    /// Horizontal distance between the left edges of two adjacent cards.
    pub fn step(&self) -> u64 {
        u64::from(self.card_width) + u64::from(self.gap)
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    items: Vec<Article>,
    cursor: usize,
    layout: CarouselLayout,
}

impl Carousel {
    pub fn new(items: Vec<Article>, layout: CarouselLayout) -> Self {
        Self {
            items,
            cursor: 0,
            layout,
        }
    }

    pub fn items(&self) -> &[Article] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the list, keeping the cursor where it was if still valid.
    pub fn set_items(&mut self, items: Vec<Article>) {
        self.items = items;
        self.cursor = self.cursor.min(self.ceiling());
    }

    // -- navigation ----------------------------------------------------------

    /// Largest valid cursor.  Zero when the list fits in one window.
    pub fn ceiling(&self) -> usize {
        self.items.len().saturating_sub(self.layout.window_size)
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor != 0
    }

    pub fn can_advance(&self) -> bool {
        self.cursor < self.ceiling()
    }

    pub fn retreat(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn advance(&mut self) {
        if self.can_advance() {
            self.cursor += 1;
        }
    }

    // -- derived view --------------------------------------------------------

    /// Whether item `index` lies outside the fully visible window.
    pub fn is_side_item(&self, index: usize) -> bool {
        index < self.cursor || index >= self.cursor + self.layout.window_size
    }

    /// Track translation in pixels.
    pub fn offset(&self) -> u64 {
        self.cursor as u64 * self.layout.step()
    }

    /// Index range of the fully visible window, clipped to the list.
    pub fn window(&self) -> std::ops::Range<usize> {
        let end = (self.cursor + self.layout.window_size).min(self.items.len());
        self.cursor.min(end)..end
    }

    /// Title of item `index`, cut to the configured limit.
    pub fn title(&self, index: usize) -> Option<String> {
        self.items
            .get(index)
            .map(|a| truncate(&a.title, self.layout.title_limit))
    }

    /// Description of item `index`, cut to the configured limit.  Missing
    /// descriptions render as an empty string.
    pub fn description(&self, index: usize) -> Option<String> {
        self.items.get(index).map(|a| {
            a.description
                .as_deref()
                .map(|d| truncate(d, self.layout.description_limit))
                .unwrap_or_default()
        })
    }
}
