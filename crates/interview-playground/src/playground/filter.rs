use crate::content::{
    AssessmentType, Audience, PlaygroundQuestion, PracticeScenario, QuestionCategory,
};
use serde::Serialize;

/// Either every value or exactly one value of a tag enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Copy + PartialEq> Selection<T> {
    pub fn admits(self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }

    pub fn selected(self) -> Option<T> {
        match self {
            Selection::All => None,
            Selection::Only(selected) => Some(selected),
        }
    }
}

impl<T> From<Option<T>> for Selection<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Selection::All, Selection::Only)
    }
}

/// Role selection. Entries tagged with the shared audience pass any role.
pub type RoleFilter = Selection<Audience>;

impl RoleFilter {
    pub fn admits_audience(self, audience: Audience) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => audience == selected || audience.is_shared(),
        }
    }
}

/// Read-only view of a record the navigator can filter and track.
pub trait PlaygroundEntry {
    type Category: Copy + PartialEq;

    fn entry_id(&self) -> &str;
    fn audience(&self) -> Audience;
    fn category(&self) -> Self::Category;
}

impl PlaygroundEntry for PlaygroundQuestion {
    type Category = QuestionCategory;

    fn entry_id(&self) -> &str {
        &self.id
    }

    fn audience(&self) -> Audience {
        self.role
    }

    fn category(&self) -> QuestionCategory {
        self.category
    }
}

impl PlaygroundEntry for PracticeScenario {
    type Category = AssessmentType;

    fn entry_id(&self) -> &str {
        &self.id
    }

    fn audience(&self) -> Audience {
        self.role.audience()
    }

    fn category(&self) -> AssessmentType {
        self.kind
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterState<C> {
    pub role: RoleFilter,
    pub category: Selection<C>,
}

impl<C> Default for FilterState<C> {
    fn default() -> Self {
        Self {
            role: Selection::All,
            category: Selection::All,
        }
    }
}

impl<C: Copy + PartialEq> FilterState<C> {
    pub fn admits<E>(&self, entry: &E) -> bool
    where
        E: PlaygroundEntry<Category = C>,
    {
        self.role.admits_audience(entry.audience()) && self.category.admits(entry.category())
    }

    /// Stable subsequence of `entries` passing both selections.
    pub fn apply<'a, E>(&self, entries: &'a [E]) -> Vec<&'a E>
    where
        E: PlaygroundEntry<Category = C>,
    {
        entries.iter().filter(|entry| self.admits(*entry)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_admits_everything() {
        assert!(Selection::<u8>::All.admits(3));
        assert!(Selection::Only(3).admits(3));
        assert!(!Selection::Only(3).admits(4));
        assert_eq!(Selection::from(Some(2)), Selection::Only(2));
        assert_eq!(Selection::<u8>::from(None), Selection::All);
    }

    #[test]
    fn shared_audience_passes_either_role() {
        let candidate = RoleFilter::Only(Audience::Candidate);
        assert!(candidate.admits_audience(Audience::Candidate));
        assert!(candidate.admits_audience(Audience::Both));
        assert!(!candidate.admits_audience(Audience::Interviewer));

        let both = RoleFilter::Only(Audience::Both);
        assert!(both.admits_audience(Audience::Both));
        assert!(!both.admits_audience(Audience::Candidate));
    }
}
