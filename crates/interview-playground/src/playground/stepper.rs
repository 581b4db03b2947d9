use super::filter::Selection;
use super::navigator::Navigator;
use crate::content::{AssessmentType, PracticeRole, PracticeScenario};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepperStep {
    ChooseRole = 1,
    ChooseType = 2,
    Review = 3,
}

impl StepperStep {
    pub const COUNT: u8 = 3;

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            StepperStep::ChooseRole => "Choose Your Role",
            StepperStep::ChooseType => "Choose Assessment Type",
            StepperStep::Review => "Review Scenarios",
        }
    }
}

/// Guided three-step flow: role, then assessment type, then a wrapping
/// carousel over the scenarios matching both.
#[derive(Debug, Clone)]
pub struct PlaygroundStepper<'a> {
    step: StepperStep,
    role: Option<PracticeRole>,
    kind: Option<AssessmentType>,
    carousel: Navigator<'a, PracticeScenario>,
}

impl<'a> PlaygroundStepper<'a> {
    pub fn new(scenarios: &'a [PracticeScenario]) -> Self {
        Self {
            step: StepperStep::ChooseRole,
            role: None,
            kind: None,
            carousel: Navigator::new(scenarios),
        }
    }

    pub fn step(&self) -> StepperStep {
        self.step
    }

    pub fn role(&self) -> Option<PracticeRole> {
        self.role
    }

    pub fn kind(&self) -> Option<AssessmentType> {
        self.kind
    }

    pub fn select_role(&mut self, role: PracticeRole) {
        self.role = Some(role);
        self.carousel.set_role_filter(Selection::Only(role.audience()));
        self.step = StepperStep::ChooseType;
        debug!(role = role.value(), "stepper role selected");
    }

    /// Ignored until a role has been chosen.
    pub fn select_type(&mut self, kind: AssessmentType) -> bool {
        if self.role.is_none() {
            return false;
        }
        self.kind = Some(kind);
        self.carousel.set_category_filter(Selection::Only(kind));
        self.step = StepperStep::Review;
        debug!(
            kind = kind.value(),
            matches = self.carousel.total_count(),
            "stepper type selected"
        );
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.carousel.entries());
    }

    pub fn scenarios(&self) -> Vec<&'a PracticeScenario> {
        if self.step == StepperStep::Review {
            self.carousel.filtered()
        } else {
            Vec::new()
        }
    }

    pub fn current_scenario(&self) -> Option<&'a PracticeScenario> {
        if self.step == StepperStep::Review {
            self.carousel.current_entry()
        } else {
            None
        }
    }

    pub fn scenario_index(&self) -> usize {
        self.carousel.index()
    }

    pub fn next_scenario(&mut self) {
        if self.step == StepperStep::Review {
            self.carousel.next_wrapping();
        }
    }

    pub fn previous_scenario(&mut self) {
        if self.step == StepperStep::Review {
            self.carousel.previous_wrapping();
        }
    }

    pub fn progress_percent(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(StepperStep::COUNT) * 100.0
    }
}
