use crate::demo::run_demo;
use crate::infra::{bootstrap, parse_tag, parse_weight, Session, WeightArg};
use crate::render::{self, Output};
use crate::views::{ChecklistView, QuestionsView, ResourcesView, StepperView};
use clap::{Args, Parser, Subcommand};
use interview_playground::content::scenarios::find_selector_scenario;
use interview_playground::content::{
    AssessmentType, Audience, PracticeRole, QuestionCategory, ResourceCategory, SelectorKind,
};
use interview_playground::error::AppError;
use interview_playground::playground::{
    Checklist, PlaygroundStepper, QuestionReviewer, RubricScorecard, Selection, WeightMap,
    WeightSlider,
};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "AI Interview Playground",
    about = "Practice and evaluate AI-assisted technical interviews from the terminal",
    version
)]
struct Cli {
    /// Print the command's view as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter, walk and complete playground questions
    Questions(QuestionsArgs),
    /// Adjust rubric weights and check the balance
    Rubric(RubricArgs),
    /// Walk the guided role/type/scenario flow
    Stepper(StepperArgs),
    /// List further reading by category
    Resources(ResourcesArgs),
    /// Show where AI helps and misleads for an interview type
    Selector(SelectorArgs),
    /// Tick items on the candidate self-review checklist
    Checklist(ChecklistArgs),
    /// Scripted walkthrough of every playground component (default command)
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuestionsArgs {
    /// Audience filter: candidate, interviewer or both
    #[arg(long, value_parser = parse_tag::<Audience>)]
    pub(crate) role: Option<Audience>,
    /// Category filter: coding, system-design, debugging, communication or ethics
    #[arg(long, value_parser = parse_tag::<QuestionCategory>)]
    pub(crate) category: Option<QuestionCategory>,
    /// Jump to this position (1-based) in the filtered list
    #[arg(long)]
    pub(crate) index: Option<usize>,
    /// Mark a question id complete before rendering (repeatable)
    #[arg(long = "complete", value_name = "ID")]
    pub(crate) complete: Vec<String>,
    /// Mark the selected question complete
    #[arg(long)]
    pub(crate) complete_current: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RubricArgs {
    /// Set a dimension weight, snapped to the 0-50 slider in steps of 5 (repeatable)
    #[arg(long = "weight", value_name = "DIMENSION=WEIGHT", value_parser = parse_weight)]
    pub(crate) weights: Vec<WeightArg>,
    /// Override the configured balance target
    #[arg(long)]
    pub(crate) target: Option<i64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StepperArgs {
    /// Practice role: candidate or interviewer
    #[arg(long, value_parser = parse_tag::<PracticeRole>)]
    pub(crate) role: Option<PracticeRole>,
    /// Assessment type: coding, system-design, ml or debugging
    #[arg(long = "type", value_parser = parse_tag::<AssessmentType>)]
    pub(crate) kind: Option<AssessmentType>,
    /// Move the scenario carousel by this many steps; negative moves back
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub(crate) advance: i32,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ResourcesArgs {
    /// Only list resources in this category
    #[arg(long, value_parser = parse_tag::<ResourceCategory>)]
    pub(crate) category: Option<ResourceCategory>,
}

#[derive(Args, Debug)]
pub(crate) struct SelectorArgs {
    /// Interview type: coding, refactor, ml-design, debugging or system-design
    #[arg(long = "type", default_value = "coding", value_parser = parse_tag::<SelectorKind>)]
    pub(crate) kind: SelectorKind,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ChecklistArgs {
    /// Toggle a checklist item by id (repeatable)
    #[arg(long = "check", value_name = "ID")]
    pub(crate) check: Vec<String>,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let output = Output::from_flag(cli.json);
    let session = bootstrap()?;

    match cli.command.unwrap_or(Command::Demo) {
        Command::Questions(args) => run_questions(&session, args, output),
        Command::Rubric(args) => run_rubric(&session, args, output),
        Command::Stepper(args) => run_stepper(&session, args, output),
        Command::Resources(args) => run_resources(&session, args, output),
        Command::Selector(args) => run_selector(&session, args, output),
        Command::Checklist(args) => run_checklist(&session, args, output),
        Command::Demo => run_demo(&session),
    }
}

fn run_questions(session: &Session, args: QuestionsArgs, output: Output) -> Result<(), AppError> {
    let QuestionsArgs {
        role,
        category,
        index,
        complete,
        complete_current,
    } = args;

    let library = &session.library.questions;
    let mut reviewer = QuestionReviewer::new(library.questions());
    reviewer.set_role_filter(Selection::from(role));
    reviewer.set_category_filter(Selection::from(category));

    if let Some(position) = index {
        let moved = position
            .checked_sub(1)
            .is_some_and(|offset| reviewer.go_to_index(offset));
        if !moved {
            warn!(
                index = position,
                visible = reviewer.filtered().len(),
                "index outside the filtered list, staying on the first question"
            );
        }
    }

    for id in &complete {
        if library.find(id).is_none() {
            warn!(id = %id, "marking an id that is not in the question library");
        }
        reviewer.mark_complete(id);
    }
    if complete_current {
        reviewer.mark_current_complete();
    }

    render::emit(output, &QuestionsView::capture(&reviewer), render::questions)
}

fn run_rubric(session: &Session, args: RubricArgs, output: Output) -> Result<(), AppError> {
    let dimensions = &session.library.dimensions;
    let target = args.target.unwrap_or(session.config.rubric.balance_target);
    let slider = WeightSlider::STANDARD;

    let mut weights = WeightMap::from_dimensions(dimensions);
    for WeightArg { id, value } in args.weights {
        if !dimensions.iter().any(|dimension| dimension.id == id.as_str()) {
            warn!(dimension = %id, "weight set for a dimension outside the rubric");
        }
        let snapped = slider.snap(value);
        if snapped != value {
            info!(dimension = %id, requested = value, snapped, "weight snapped to slider");
        }
        weights.set_weight(id, snapped);
    }

    let scorecard = RubricScorecard::build(dimensions, &weights, target);
    render::emit(output, &scorecard, render::scorecard)
}

fn run_stepper(session: &Session, args: StepperArgs, output: Output) -> Result<(), AppError> {
    let mut stepper = PlaygroundStepper::new(&session.library.practice_scenarios);

    if let Some(role) = args.role {
        stepper.select_role(role);
    }
    if let Some(kind) = args.kind {
        if !stepper.select_type(kind) {
            warn!(kind = kind.value(), "choose a role before an assessment type");
        }
    }
    for _ in 0..args.advance.unsigned_abs() {
        if args.advance > 0 {
            stepper.next_scenario();
        } else {
            stepper.previous_scenario();
        }
    }

    render::emit(output, &StepperView::capture(&stepper), render::stepper)
}

fn run_resources(session: &Session, args: ResourcesArgs, output: Output) -> Result<(), AppError> {
    let view = ResourcesView::capture(&session.library.resources, args.category);
    render::emit(output, &view, render::resources)
}

fn run_selector(session: &Session, args: SelectorArgs, output: Output) -> Result<(), AppError> {
    let scenario = find_selector_scenario(&session.library.selector_scenarios, args.kind);
    render::emit(output, &scenario, render::selector)
}

fn run_checklist(session: &Session, args: ChecklistArgs, output: Output) -> Result<(), AppError> {
    let mut checklist = Checklist::new(&session.library.checklist);
    for id in &args.check {
        checklist.toggle(id);
    }
    render::emit(output, &ChecklistView::capture(&checklist), render::checklist)
}
