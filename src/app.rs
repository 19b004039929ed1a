use crate::carousel::{Carousel, CarouselLayout};
use crate::poll::{PollMsg, Refresh};

/// Whether the first fetch has come back yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

pub struct App {
    /// Headlines and the cursor over them.
    pub carousel: Carousel,
    pub load_state: LoadState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Last fetch status message.
    pub status: String,
    /// Refresh asked for by the user, picked up by the main loop.
    pub pending_refresh: Option<Refresh>,
}

impl App {
    pub fn new(layout: CarouselLayout) -> Self {
        Self {
            carousel: Carousel::new(Vec::new(), layout),
            load_state: LoadState::Loading,
            quit: false,
            status: "Loading articles...".into(),
            pending_refresh: None,
        }
    }

    /// Apply a result from the fetch thread.
    ///
    /// A failure leaves whatever was already loaded in place; with nothing
    /// loaded the carousel stays empty and the placeholder is shown.
    pub fn apply(&mut self, msg: PollMsg) {
        self.load_state = LoadState::Ready;
        match msg {
            PollMsg::Articles(articles) => {
                self.status = format!("Fetched {} articles", articles.len());
                self.carousel.set_items(articles);
            }
            PollMsg::Error(e) => {
                self.status = format!("Error: {e}");
            }
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn previous(&mut self) {
        self.carousel.retreat();
    }

    pub fn next(&mut self) {
        self.carousel.advance();
    }

    pub fn request_refresh(&mut self, kind: Refresh) {
        self.pending_refresh = Some(kind);
        self.status = "Refreshing...".into();
    }
}
