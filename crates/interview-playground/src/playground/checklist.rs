use super::navigator::CompletionProgress;
use crate::content::ChecklistItem;
use std::collections::BTreeSet;
use tracing::trace;

/// Tick state over a borrowed checklist. Unknown ids are ignored.
#[derive(Debug, Clone)]
pub struct Checklist<'a> {
    items: &'a [ChecklistItem],
    checked: BTreeSet<String>,
}

impl<'a> Checklist<'a> {
    pub fn new(items: &'a [ChecklistItem]) -> Self {
        Self {
            items,
            checked: BTreeSet::new(),
        }
    }

    pub fn items(&self) -> &'a [ChecklistItem] {
        self.items
    }

    /// Flips the item and returns whether it is now checked.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            trace!(id, "ignoring toggle of unknown checklist item");
            return false;
        }
        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        }
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.len()
    }

    pub fn progress(&self) -> CompletionProgress {
        CompletionProgress {
            completed: self.checked_count(),
            total: self.items.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::checklist::candidate_checklist;

    #[test]
    fn toggling_twice_unchecks() {
        let items = candidate_checklist();
        let mut checklist = Checklist::new(&items);

        assert!(checklist.toggle("3"));
        assert!(checklist.is_checked("3"));
        assert_eq!(checklist.checked_count(), 1);

        assert!(!checklist.toggle("3"));
        assert_eq!(checklist.checked_count(), 0);
    }

    #[test]
    fn unknown_ids_do_not_count() {
        let items = candidate_checklist();
        let mut checklist = Checklist::new(&items);

        assert!(!checklist.toggle("missing"));
        checklist.toggle("1");
        assert_eq!(
            checklist.progress(),
            CompletionProgress {
                completed: 1,
                total: items.len(),
            }
        );
    }
}
