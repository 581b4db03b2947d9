use super::filter::{FilterState, PlaygroundEntry, RoleFilter, Selection};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Completed-so-far over visible-now, as shown in the playground header.
///
/// `completed` counts every id marked in the session, while `total` is the
/// length of the current filtered list, so `completed` can exceed `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionProgress {
    pub completed: usize,
    pub total: usize,
}

/// Filter, cursor and completion state over a borrowed entry table.
///
/// Every transition is total: empty lists and out-of-range requests leave
/// the state untouched instead of failing.
#[derive(Debug, Clone)]
pub struct Navigator<'a, E: PlaygroundEntry> {
    entries: &'a [E],
    filter: FilterState<E::Category>,
    index: usize,
    completed: BTreeSet<String>,
}

impl<'a, E: PlaygroundEntry> Navigator<'a, E> {
    pub fn new(entries: &'a [E]) -> Self {
        Self {
            entries,
            filter: FilterState::default(),
            index: 0,
            completed: BTreeSet::new(),
        }
    }

    pub fn entries(&self) -> &'a [E] {
        self.entries
    }

    pub fn filter(&self) -> FilterState<E::Category> {
        self.filter
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn completed(&self) -> &BTreeSet<String> {
        &self.completed
    }

    pub fn set_role_filter(&mut self, role: RoleFilter) {
        self.filter.role = role;
        self.index = 0;
        debug!(?role, "role filter changed");
    }

    pub fn set_category_filter(&mut self, category: Selection<E::Category>) {
        self.filter.category = category;
        self.index = 0;
        debug!("category filter changed");
    }

    pub fn filtered(&self) -> Vec<&'a E> {
        self.filter.apply(self.entries)
    }

    pub fn current_entry(&self) -> Option<&'a E> {
        self.filtered().get(self.index).copied()
    }

    pub fn go_to_index(&mut self, index: usize) -> bool {
        let len = self.filtered().len();
        if index < len {
            self.index = index;
            true
        } else {
            trace!(index, len, "ignoring out-of-range jump");
            false
        }
    }

    /// Moves forward one entry; a no-op on the last entry.
    pub fn next(&mut self) -> bool {
        let len = self.filtered().len();
        if self.index + 1 < len {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Moves back one entry; a no-op on the first entry.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Carousel step forward: the last entry wraps to the first.
    pub fn next_wrapping(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.index = (self.index + 1) % len;
        }
    }

    /// Carousel step back: the first entry wraps to the last.
    pub fn previous_wrapping(&mut self) {
        let len = self.filtered().len();
        if len > 0 {
            self.index = (self.index + len - 1) % len;
        }
    }

    /// Records `id` as reviewed. Returns false when it was already recorded.
    pub fn mark_complete(&mut self, id: &str) -> bool {
        let inserted = self.completed.insert(id.to_string());
        if inserted {
            debug!(id, completed = self.completed.len(), "entry marked complete");
        }
        inserted
    }

    pub fn mark_current_complete(&mut self) -> bool {
        match self.current_entry() {
            Some(entry) => self.mark_complete(entry.entry_id()),
            None => false,
        }
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn completion_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn progress(&self) -> CompletionProgress {
        CompletionProgress {
            completed: self.completion_count(),
            total: self.total_count(),
        }
    }
}
