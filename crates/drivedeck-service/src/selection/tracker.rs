//! The [`SelectionTracker`]: the set of currently selected item ids.

use std::collections::HashSet;

use drivedeck_core::types::ItemId;

/// Tracks which items in the current listing are selected.
///
/// Folder and file ids share one namespace here. The tracker is owned by
/// the hosting view, so selection naturally resets on navigation; nothing
/// is persisted.
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker {
    selected: HashSet<ItemId>,
}

impl SelectionTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of a single item.
    pub fn toggle(&mut self, id: ItemId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Select-all toggle: if the current selection is exactly the given
    /// visible set, clears it; otherwise replaces the selection with
    /// exactly that set. Never additive.
    pub fn select_all(&mut self, visible_ids: &[ItemId]) {
        let all: HashSet<ItemId> = visible_ids.iter().copied().collect();
        if self.selected == all {
            self.selected.clear();
        } else {
            self.selected = all;
        }
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Whether an item is selected.
    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    /// The selected ids, in ascending order for deterministic iteration.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self.selected.iter().copied().collect();
        ids.sort();
        ids
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle(ItemId(1));
        assert!(tracker.is_selected(ItemId(1)));
        tracker.toggle(ItemId(1));
        assert!(!tracker.is_selected(ItemId(1)));
    }

    #[test]
    fn test_select_all_twice_toggles_back_to_none() {
        let mut tracker = SelectionTracker::new();
        let visible = vec![ItemId(1), ItemId(2), ItemId(3)];
        tracker.select_all(&visible);
        assert_eq!(tracker.len(), 3);
        tracker.select_all(&visible);
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_select_all_replaces_partial_selection() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle(ItemId(1));
        tracker.toggle(ItemId(99));
        let visible = vec![ItemId(1), ItemId(2)];
        tracker.select_all(&visible);
        assert_eq!(tracker.selected_ids(), vec![ItemId(1), ItemId(2)]);
    }

    #[test]
    fn test_clear() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle(ItemId(5));
        tracker.clear();
        assert!(tracker.is_empty());
    }
}
