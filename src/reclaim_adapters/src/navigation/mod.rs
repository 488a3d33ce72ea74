//! Navigation adapters.
//!
//! The real host (a UI shell) supplies its own `Navigator`; these two cover
//! headless use and tests.

use std::sync::{Arc, Mutex};

use reclaim_core::{Navigator, Route};

/// Swallows navigations. For headless callers that only care about flow
/// state.
#[derive(Debug, Clone, Default)]
pub struct NoopNavigator;

impl NoopNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigator for NoopNavigator {
    fn navigate(&self, _route: Route) {}
}

/// Records every navigation in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.visited.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.visited.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.lock().unwrap().push(route);
    }
}
