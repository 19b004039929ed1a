//! Background headline fetching.
//!
//! Runs on a dedicated thread: fetches once at startup, then waits for
//! refresh requests from the UI.  Results go back over an [`mpsc`] channel
//! that the main loop drains every tick.  The source is wrapped in a
//! [`CachedSource`], so a plain refresh inside the TTL is served from memory.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use crate::source::{Article, ArticleSource, CachedSource};

/// Messages sent from the fetch thread to the UI thread.
#[derive(Debug)]
pub enum PollMsg {
    /// A fetch finished with these articles.
    Articles(Vec<Article>),
    /// A fetch failed with this error description.
    Error(String),
}

/// Requests sent from the UI thread to the fetch thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Re-read, reusing a cached result if it is still fresh.
    Cached,
    /// Drop the cached result and go upstream.
    Force,
}

/// Handle to the running fetch thread.
pub struct Poller {
    pub rx: mpsc::Receiver<PollMsg>,
    requests: mpsc::Sender<Refresh>,
}

impl Poller {
    /// Ask for another fetch.  Returns `false` if the thread has stopped.
    pub fn refresh(&self, kind: Refresh) -> bool {
        self.requests.send(kind).is_ok()
    }
}

/// Spawn the fetch thread.
///
/// The thread performs the initial fetch immediately.  It exits once either
/// end of its channels is dropped; an in-flight result is simply discarded.
pub fn spawn<S>(source: S, ttl: Duration) -> Poller
where
    S: ArticleSource + 'static,
{
    let (tx, rx) = mpsc::channel();
    let (requests, commands) = mpsc::channel();

    thread::spawn(move || {
        let mut source = CachedSource::new(source, ttl);
        let mut next = Some(Refresh::Cached);

        while let Some(kind) = next {
            if kind == Refresh::Force {
                source.invalidate();
            }
            let msg = match source.fetch() {
                Ok(articles) => {
                    info!(count = articles.len(), source = source.name(), "fetch complete");
                    PollMsg::Articles(articles)
                }
                Err(e) => {
                    warn!(error = %e, source = source.name(), "fetch failed");
                    PollMsg::Error(format!("{}: {e}", source.name()))
                }
            };
            // If the receiver is gone the UI has exited; stop quietly.
            if tx.send(msg).is_err() {
                return;
            }
            next = commands.recv().ok();
        }
    });

    Poller { rx, requests }
}
