//! Outside-click dismissal
//!
//! One registry for the whole app tracks which inputs currently show a
//! dropdown. Every click is reported once; every open dropdown the click did
//! not land in gets closed.

use std::collections::BTreeSet;

use crate::page::InputId;

#[derive(Debug, Default)]
pub struct DismissalRegistry {
    open: BTreeSet<InputId>,
}

impl DismissalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether `input`'s dropdown is showing
    pub fn sync(&mut self, input: InputId, open: bool) {
        if open {
            self.open.insert(input);
        } else {
            self.open.remove(&input);
        }
    }

    pub fn is_open(&self, input: InputId) -> bool {
        self.open.contains(&input)
    }

    pub fn has_open(&self) -> bool {
        !self.open.is_empty()
    }

    /// A click happened; `inside` is the dropdown it landed in, if any
    ///
    /// Returns the inputs whose dropdowns must close and forgets them.
    pub fn dismiss(&mut self, inside: Option<InputId>) -> Vec<InputId> {
        let closing: Vec<InputId> = self
            .open
            .iter()
            .copied()
            .filter(|input| Some(*input) != inside)
            .collect();
        for input in &closing {
            self.open.remove(input);
        }
        closing
    }

    /// Forget everything (page unload)
    pub fn clear(&mut self) {
        self.open.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_tracks_open_state() {
        let mut registry = DismissalRegistry::new();
        let input = InputId::new(1);

        registry.sync(input, true);
        assert!(registry.is_open(input));
        assert!(registry.has_open());

        registry.sync(input, false);
        assert!(!registry.is_open(input));
        assert!(!registry.has_open());
    }

    #[test]
    fn test_outside_click_closes_everything() {
        let mut registry = DismissalRegistry::new();
        registry.sync(InputId::new(1), true);
        registry.sync(InputId::new(2), true);

        let closed = registry.dismiss(None);
        assert_eq!(closed, vec![InputId::new(1), InputId::new(2)]);
        assert!(!registry.has_open());
    }

    #[test]
    fn test_click_inside_keeps_that_dropdown() {
        let mut registry = DismissalRegistry::new();
        registry.sync(InputId::new(1), true);
        registry.sync(InputId::new(2), true);

        let closed = registry.dismiss(Some(InputId::new(2)));
        assert_eq!(closed, vec![InputId::new(1)]);
        assert!(registry.is_open(InputId::new(2)));
    }

    #[test]
    fn test_dismiss_with_nothing_open() {
        let mut registry = DismissalRegistry::new();
        assert!(registry.dismiss(None).is_empty());
    }

    #[test]
    fn test_clear_forgets_all() {
        let mut registry = DismissalRegistry::new();
        registry.sync(InputId::new(1), true);
        registry.clear();
        assert!(!registry.has_open());
    }
}
