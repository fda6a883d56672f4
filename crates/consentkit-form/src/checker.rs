//! Consent lookup capability.

use std::collections::HashMap;

/// Reports whether a cookie category is currently allowed for the
/// requesting user.
///
/// Implemented by the host, typically over whatever medium it stores
/// consent decisions in. This crate never reads or persists those
/// decisions itself.
pub trait ConsentChecker: Send + Sync {
    fn is_category_allowed(&self, category: &str) -> bool;
}

/// In-memory consent state keyed by category id.
///
/// An adapter for hosts that have already resolved consent per category.
/// Categories without a recorded decision report not allowed, unless the
/// state was created with [`ConsentState::allow_all`].
#[derive(Debug, Clone, Default)]
pub struct ConsentState {
    decisions: HashMap<String, bool>,
    allow_unset: bool,
}

impl ConsentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State reporting every category as allowed.
    pub fn allow_all() -> Self {
        Self {
            decisions: HashMap::new(),
            allow_unset: true,
        }
    }

    /// Record a decision for one category.
    pub fn set(&mut self, category: impl Into<String>, allowed: bool) {
        self.decisions.insert(category.into(), allowed);
    }
}

impl FromIterator<(String, bool)> for ConsentState {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self {
            decisions: iter.into_iter().collect(),
            allow_unset: false,
        }
    }
}

impl ConsentChecker for ConsentState {
    fn is_category_allowed(&self, category: &str) -> bool {
        *self.decisions.get(category).unwrap_or(&self.allow_unset)
    }
}
