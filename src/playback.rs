//! Step-by-step replay of a finished search, for whatever draws it.
//!
//! A [Playback] yields every visited node first and then every path node, each as a [Frame]
//! carrying the delay to wait before showing the next one. It is a plain iterator: it cannot be
//! rewound, and once its [CancelToken] is cancelled it yields nothing more.

use std::slice;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::search::SearchOutcome;

/// Pause after showing a visited node.
pub const VISITED_FRAME_DELAY: Duration = Duration::from_millis(50);
/// Pause after showing a path node.
pub const PATH_FRAME_DELAY: Duration = Duration::from_millis(200);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame<N> {
    Visited(N),
    Path(N),
}

impl<N> Frame<N> {
    pub fn node(&self) -> &N {
        match self {
            Frame::Visited(n) | Frame::Path(n) => n,
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            Frame::Visited(_) => VISITED_FRAME_DELAY,
            Frame::Path(_) => PATH_FRAME_DELAY,
        }
    }
}

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug)]
pub struct Playback<'a, N> {
    visited: slice::Iter<'a, N>,
    path: slice::Iter<'a, N>,
    cancel: CancelToken,
}

impl<'a, N> Playback<'a, N> {
    /// Token that stops this playback when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }
}

impl<'a, N: Clone> Iterator for Playback<'a, N> {
    type Item = Frame<N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cancel.is_cancelled() {
            return None;
        }
        self.visited
            .next()
            .map(|n| Frame::Visited(n.clone()))
            .or_else(|| self.path.next().map(|n| Frame::Path(n.clone())))
    }
}

impl<N> SearchOutcome<N> {
    /// Frames for the visited order followed by the path (if any), cancellable through a fresh
    /// [CancelToken].
    pub fn playback(&self) -> Playback<'_, N> {
        self.playback_with(CancelToken::new())
    }

    /// Like [playback](Self::playback), but stopped by an existing token.
    pub fn playback_with(&self, cancel: CancelToken) -> Playback<'_, N> {
        Playback {
            visited: self.visited.iter(),
            path: self.path.as_deref().unwrap_or_default().iter(),
            cancel,
        }
    }
}
