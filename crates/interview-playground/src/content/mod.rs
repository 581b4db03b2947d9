//! Static content tables consumed read-only by the playground state machines.

/// Case-insensitive `FromStr` over a tag enum's `ordered()` and `value()`.
macro_rules! tag_from_str {
    ($ty:ty, $kind:literal) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::content::UnknownTag;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let needle = raw.trim().to_ascii_lowercase();
                Self::ordered()
                    .into_iter()
                    .find(|tag| tag.value() == needle)
                    .ok_or_else(|| $crate::content::UnknownTag {
                        kind: $kind,
                        value: raw.to_string(),
                    })
            }
        }
    };
}

pub mod checklist;
pub mod domain;
mod loader;
pub mod questions;
pub mod resources;
pub mod rubric;
pub mod scenarios;

pub use checklist::ChecklistItem;
pub use domain::{
    ApproachExample, ApproachKind, AssessmentType, Audience, Difficulty, LinkRef,
    PlaygroundQuestion, PracticeRole, PracticeScenario, QuestionCategory, UnknownTag,
};
pub use loader::{ContentError, ContentImporter};
pub use questions::QuestionLibrary;
pub use resources::{Resource, ResourceCategory};
pub use rubric::RubricDimension;
pub use scenarios::{SelectorKind, SelectorScenario};

use crate::config::ContentConfig;
use tracing::info;

/// Every table the playground renders, built-in or loaded from overrides.
#[derive(Debug, Clone)]
pub struct ContentLibrary {
    pub questions: QuestionLibrary,
    pub dimensions: Vec<RubricDimension>,
    pub practice_scenarios: Vec<PracticeScenario>,
    pub selector_scenarios: Vec<SelectorScenario>,
    pub resources: Vec<Resource>,
    pub checklist: Vec<ChecklistItem>,
}

impl ContentLibrary {
    pub fn standard() -> Self {
        Self {
            questions: QuestionLibrary::standard(),
            dimensions: rubric::rubric_dimensions(),
            practice_scenarios: scenarios::practice_scenarios(),
            selector_scenarios: scenarios::selector_scenarios(),
            resources: resources::resource_library(),
            checklist: checklist::candidate_checklist(),
        }
    }

    /// Starts from the standard tables and swaps in any configured overrides.
    pub fn load(config: &ContentConfig) -> Result<Self, ContentError> {
        let mut library = Self::standard();

        if let Some(path) = &config.questions_path {
            let questions = ContentImporter::questions_from_path(path)?;
            info!(path = %path.display(), count = questions.len(), "using question overrides");
            library.questions = QuestionLibrary::from_questions(questions);
        }

        if let Some(path) = &config.dimensions_path {
            let dimensions = ContentImporter::dimensions_from_path(path)?;
            info!(path = %path.display(), count = dimensions.len(), "using rubric overrides");
            library.dimensions = dimensions;
        }

        Ok(library)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_without_overrides_matches_standard_tables() {
        let library = ContentLibrary::load(&ContentConfig::default()).expect("standard loads");
        let standard = ContentLibrary::standard();
        assert_eq!(
            library.questions.questions().len(),
            standard.questions.questions().len()
        );
        assert_eq!(library.dimensions, standard.dimensions);
    }

    #[test]
    fn load_surfaces_missing_override_files() {
        let config = ContentConfig {
            questions_path: Some("/nonexistent/questions.json".into()),
            dimensions_path: None,
        };
        match ContentLibrary::load(&config) {
            Err(ContentError::Io { table, .. }) => assert_eq!(table, "questions"),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
