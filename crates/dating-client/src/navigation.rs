//! Client navigation.

use parking_lot::RwLock;

/// Moves the client to another route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Navigator that keeps the visited routes in memory.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: RwLock<Vec<String>>,
}

impl HistoryNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The route navigated to last, if any.
    pub fn current_route(&self) -> Option<String> {
        self.history.read().last().cloned()
    }

    /// Every route navigated to, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.read().clone()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, route: &str) {
        self.history.write().push(route.to_string());
    }
}
