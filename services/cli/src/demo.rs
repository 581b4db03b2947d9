use crate::infra::Session;
use crate::render;
use crate::views::{ChecklistView, QuestionsView, ResourcesView, StepperView};
use interview_playground::content::scenarios::find_selector_scenario;
use interview_playground::content::{
    AssessmentType, Audience, PracticeRole, QuestionCategory, ResourceCategory, SelectorKind,
};
use interview_playground::error::AppError;
use interview_playground::playground::{
    Checklist, DimensionId, PlaygroundStepper, QuestionReviewer, ReviewPane, RoleFilter,
    RubricScorecard, Selection, WeightMap, WeightSlider,
};

pub(crate) fn run_demo(session: &Session) -> Result<(), AppError> {
    let library = &session.library;
    println!("AI interview playground demo\n");

    println!("== Question review: candidate view ==");
    let mut reviewer = QuestionReviewer::new(library.questions.questions());
    reviewer.set_role_filter(RoleFilter::Only(Audience::Candidate));
    reviewer.set_pane(ReviewPane::Good);
    reviewer.mark_current_complete();
    reviewer.next();
    render::questions(&QuestionsView::capture(&reviewer));

    println!("\n== Question review: interviewer ethics view ==");
    reviewer.set_role_filter(RoleFilter::Only(Audience::Interviewer));
    reviewer.set_category_filter(Selection::Only(QuestionCategory::Ethics));
    let view = QuestionsView::capture(&reviewer);
    println!(
        "{} questions visible, {} completed this session",
        view.questions.len(),
        view.progress.completed
    );

    println!("\n== Rubric builder ==");
    let slider = WeightSlider::STANDARD;
    let target = session.config.rubric.balance_target;
    let defaults = WeightMap::from_dimensions(&library.dimensions);
    render::scorecard(&RubricScorecard::build(
        &library.dimensions,
        &defaults,
        target,
    ));

    let adjusted = defaults
        .with_weight(DimensionId::new("ai-collaboration"), slider.snap(33))
        .with_weight(DimensionId::new("testing-validation"), slider.snap(3));
    println!("\nAfter raising AI collaboration and lowering testing:");
    render::scorecard(&RubricScorecard::build(
        &library.dimensions,
        &adjusted,
        target,
    ));

    println!("\n== Guided playground ==");
    let mut stepper = PlaygroundStepper::new(&library.practice_scenarios);
    stepper.select_role(PracticeRole::Candidate);
    stepper.select_type(AssessmentType::Coding);
    render::stepper(&StepperView::capture(&stepper));
    stepper.next_scenario();
    println!(
        "\nCarousel wraps back to scenario {} of {}",
        stepper.scenario_index() + 1,
        stepper.scenarios().len()
    );

    println!("\n== Where AI helps and misleads ==");
    let scenario = find_selector_scenario(&library.selector_scenarios, SelectorKind::Debugging);
    render::selector(&scenario);

    println!("\n== Candidate checklist ==");
    let mut checklist = Checklist::new(&library.checklist);
    for id in ["1", "2", "6"] {
        checklist.toggle(id);
    }
    render::checklist(&ChecklistView::capture(&checklist));

    println!("\n== Ethics and security reading ==");
    render::resources(&ResourcesView::capture(
        &library.resources,
        Some(ResourceCategory::EthicsSecurity),
    ));

    Ok(())
}
