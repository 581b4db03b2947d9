use super::filter::{RoleFilter, Selection};
use super::navigator::{CompletionProgress, Navigator};
use crate::content::{PlaygroundQuestion, QuestionCategory};
use serde::Serialize;

/// Which part of a question the reviewer is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewPane {
    #[default]
    Context,
    Good,
    Bad,
    Takeaways,
}

impl ReviewPane {
    pub const fn ordered() -> [ReviewPane; 4] {
        [
            ReviewPane::Context,
            ReviewPane::Good,
            ReviewPane::Bad,
            ReviewPane::Takeaways,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            ReviewPane::Context => "Context & AI Response",
            ReviewPane::Good => "Good Approaches",
            ReviewPane::Bad => "Bad Approaches",
            ReviewPane::Takeaways => "Key Takeaways",
        }
    }
}

/// Question navigator plus the pane selection of the current question.
///
/// Moving to a different question reopens its context pane. Filter changes
/// keep whichever pane is open.
#[derive(Debug, Clone)]
pub struct QuestionReviewer<'a> {
    navigator: Navigator<'a, PlaygroundQuestion>,
    pane: ReviewPane,
}

impl<'a> QuestionReviewer<'a> {
    pub fn new(questions: &'a [PlaygroundQuestion]) -> Self {
        Self {
            navigator: Navigator::new(questions),
            pane: ReviewPane::Context,
        }
    }

    pub fn navigator(&self) -> &Navigator<'a, PlaygroundQuestion> {
        &self.navigator
    }

    pub fn pane(&self) -> ReviewPane {
        self.pane
    }

    pub fn set_pane(&mut self, pane: ReviewPane) {
        self.pane = pane;
    }

    pub fn set_role_filter(&mut self, role: RoleFilter) {
        self.navigator.set_role_filter(role);
    }

    pub fn set_category_filter(&mut self, category: Selection<QuestionCategory>) {
        self.navigator.set_category_filter(category);
    }

    pub fn filtered(&self) -> Vec<&'a PlaygroundQuestion> {
        self.navigator.filtered()
    }

    pub fn current_question(&self) -> Option<&'a PlaygroundQuestion> {
        self.navigator.current_entry()
    }

    pub fn go_to_index(&mut self, index: usize) -> bool {
        let moved = self.navigator.go_to_index(index);
        if moved {
            self.pane = ReviewPane::Context;
        }
        moved
    }

    pub fn next(&mut self) -> bool {
        let moved = self.navigator.next();
        if moved {
            self.pane = ReviewPane::Context;
        }
        moved
    }

    pub fn previous(&mut self) -> bool {
        let moved = self.navigator.previous();
        if moved {
            self.pane = ReviewPane::Context;
        }
        moved
    }

    pub fn has_next(&self) -> bool {
        self.navigator.index() + 1 < self.navigator.total_count()
    }

    pub fn has_previous(&self) -> bool {
        self.navigator.index() > 0
    }

    pub fn mark_complete(&mut self, id: &str) -> bool {
        self.navigator.mark_complete(id)
    }

    pub fn mark_current_complete(&mut self) -> bool {
        self.navigator.mark_current_complete()
    }

    pub fn is_complete(&self, id: &str) -> bool {
        self.navigator.is_complete(id)
    }

    pub fn progress(&self) -> CompletionProgress {
        self.navigator.progress()
    }
}
