use interview_playground::content::resources::{category_counts, filter_resources, CategoryCount};
use interview_playground::content::{
    AssessmentType, Audience, ChecklistItem, Difficulty, PlaygroundQuestion, PracticeRole,
    PracticeScenario, QuestionCategory, Resource, ResourceCategory,
};
use interview_playground::playground::{
    Checklist, CompletionProgress, FilterState, PlaygroundStepper, QuestionReviewer, ReviewPane,
    StepperStep,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(crate) struct QuestionRow<'a> {
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) role: Audience,
    pub(crate) category: QuestionCategory,
    pub(crate) difficulty: Difficulty,
    pub(crate) completed: bool,
    pub(crate) current: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionsView<'a> {
    pub(crate) filter: FilterState<QuestionCategory>,
    pub(crate) index: usize,
    pub(crate) pane: ReviewPane,
    pub(crate) questions: Vec<QuestionRow<'a>>,
    pub(crate) current: Option<&'a PlaygroundQuestion>,
    pub(crate) has_previous: bool,
    pub(crate) has_next: bool,
    pub(crate) progress: CompletionProgress,
}

impl<'a> QuestionsView<'a> {
    pub(crate) fn capture(reviewer: &QuestionReviewer<'a>) -> Self {
        let navigator = reviewer.navigator();
        let index = navigator.index();
        let questions = reviewer
            .filtered()
            .into_iter()
            .enumerate()
            .map(|(position, question)| QuestionRow {
                id: &question.id,
                title: &question.title,
                role: question.role,
                category: question.category,
                difficulty: question.difficulty,
                completed: reviewer.is_complete(&question.id),
                current: position == index,
            })
            .collect();

        Self {
            filter: navigator.filter(),
            index,
            pane: reviewer.pane(),
            questions,
            current: reviewer.current_question(),
            has_previous: reviewer.has_previous(),
            has_next: reviewer.has_next(),
            progress: reviewer.progress(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StepperView<'a> {
    pub(crate) step: StepperStep,
    pub(crate) step_label: &'static str,
    pub(crate) progress_percent: f64,
    pub(crate) role: Option<PracticeRole>,
    pub(crate) kind: Option<AssessmentType>,
    pub(crate) index: usize,
    pub(crate) scenario_count: usize,
    pub(crate) current: Option<&'a PracticeScenario>,
}

impl<'a> StepperView<'a> {
    pub(crate) fn capture(stepper: &PlaygroundStepper<'a>) -> Self {
        Self {
            step: stepper.step(),
            step_label: stepper.step().label(),
            progress_percent: stepper.progress_percent(),
            role: stepper.role(),
            kind: stepper.kind(),
            index: stepper.scenario_index(),
            scenario_count: stepper.scenarios().len(),
            current: stepper.current_scenario(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ResourcesView<'a> {
    pub(crate) category: Option<ResourceCategory>,
    pub(crate) counts: Vec<CategoryCount>,
    pub(crate) total: usize,
    pub(crate) resources: Vec<&'a Resource>,
}

impl<'a> ResourcesView<'a> {
    pub(crate) fn capture(resources: &'a [Resource], category: Option<ResourceCategory>) -> Self {
        Self {
            category,
            counts: category_counts(resources),
            total: resources.len(),
            resources: filter_resources(resources, category),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ChecklistRow<'a> {
    pub(crate) id: &'a str,
    pub(crate) label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<&'a str>,
    pub(crate) checked: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChecklistView<'a> {
    pub(crate) items: Vec<ChecklistRow<'a>>,
    pub(crate) progress: CompletionProgress,
}

impl<'a> ChecklistView<'a> {
    pub(crate) fn capture(checklist: &Checklist<'a>) -> Self {
        let items = checklist
            .items()
            .iter()
            .map(|item: &'a ChecklistItem| ChecklistRow {
                id: &item.id,
                label: &item.label,
                description: item.description.as_deref(),
                checked: checklist.is_checked(&item.id),
            })
            .collect();

        Self {
            items,
            progress: checklist.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_playground::content::ContentLibrary;
    use interview_playground::playground::RoleFilter;

    #[test]
    fn question_view_flags_current_and_completed_rows() {
        let library = ContentLibrary::standard();
        let mut reviewer = QuestionReviewer::new(library.questions.questions());
        reviewer.set_role_filter(RoleFilter::Only(Audience::Interviewer));
        reviewer.mark_current_complete();
        reviewer.next();

        let view = QuestionsView::capture(&reviewer);
        assert_eq!(view.index, 1);
        assert!(view.questions[0].completed);
        assert!(!view.questions[0].current);
        assert!(view.questions[1].current);
        assert!(view.has_previous);
        assert_eq!(view.has_next, view.questions.len() > 2);
        assert_eq!(view.progress.completed, 1);
        assert_eq!(view.progress.total, view.questions.len());
    }

    #[test]
    fn resource_view_counts_ignore_the_active_category() {
        let library = ContentLibrary::standard();
        let view =
            ResourcesView::capture(&library.resources, Some(ResourceCategory::EthicsSecurity));

        let counted: usize = view.counts.iter().map(|count| count.count).sum();
        assert_eq!(counted, view.total);
        assert!(view
            .resources
            .iter()
            .all(|resource| resource.category == ResourceCategory::EthicsSecurity));
    }

    #[test]
    fn stepper_view_serializes_step_and_scenario() {
        let library = ContentLibrary::standard();
        let mut stepper = PlaygroundStepper::new(&library.practice_scenarios);
        stepper.select_role(PracticeRole::Candidate);
        stepper.select_type(AssessmentType::Coding);

        let value = serde_json::to_value(StepperView::capture(&stepper)).expect("serializes");
        assert_eq!(value["step"], "review");
        assert_eq!(value["role"], "candidate");
        assert_eq!(value["current"]["id"], "candidate-coding-1");
    }
}
