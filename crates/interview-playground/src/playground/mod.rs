//! In-memory UI state: filtered navigation, question review, the guided
//! stepper, the checklist and the rubric weight aggregator.

pub mod checklist;
pub mod filter;
pub mod navigator;
pub mod review;
pub mod rubric;
pub mod stepper;

#[cfg(test)]
mod tests;

pub use checklist::Checklist;
pub use filter::{FilterState, PlaygroundEntry, RoleFilter, Selection};
pub use navigator::{CompletionProgress, Navigator};
pub use review::{QuestionReviewer, ReviewPane};
pub use rubric::{
    BalanceStatus, DimensionId, RubricScorecard, ScorecardRow, WeightMap, WeightSlider,
    BALANCED_TOTAL,
};
pub use stepper::{PlaygroundStepper, StepperStep};
