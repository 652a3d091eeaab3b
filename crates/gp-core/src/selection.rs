use crate::category::KEY_HIGHLIGHTS_ID;

/// The currently selected category id.
///
/// Created with the synthetic highlight id, mutated only by explicit user
/// selection, never persisted. Writes are unconditional: validation against
/// the registry is deferred to the filter's unknown-id policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected: u32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected: KEY_HIGHLIGHTS_ID,
        }
    }
}

impl SelectionState {
    pub fn selected(&self) -> u32 {
        self.selected
    }

    pub fn select(&mut self, category_id: u32) {
        self.selected = category_id;
    }
}
