//! Navigator that records requested routes instead of routing.

use std::sync::{Arc, Mutex, PoisonError};

use crate::task::ports::{Navigator, Route};

/// Collects navigation requests in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<(Route, String)>>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no recorded visits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded routes and their rendered paths.
    #[must_use]
    pub fn visits(&self) -> Vec<(Route, String)> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recently requested path.
    #[must_use]
    pub fn last_path(&self) -> Option<String> {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .map(|(_, path)| path.clone())
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route, path: &str) {
        self.visits
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((route, path.to_owned()));
    }
}
