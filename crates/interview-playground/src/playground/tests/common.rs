use crate::content::rubric::PerformanceExamples;
use crate::content::{
    AssessmentType, Audience, Difficulty, PlaygroundQuestion, PracticeRole, PracticeScenario,
    QuestionCategory, RubricDimension,
};

pub(super) fn question(id: &str, role: Audience, category: QuestionCategory) -> PlaygroundQuestion {
    PlaygroundQuestion {
        id: id.to_string(),
        role,
        category,
        difficulty: Difficulty::Intermediate,
        title: format!("Question {id}"),
        scenario: "Scenario".to_string(),
        context: "Context".to_string(),
        ai_prompt: None,
        ai_response: None,
        good_approaches: Vec::new(),
        bad_approaches: Vec::new(),
        key_takeaways: vec!["Own the result".to_string()],
        resources: Vec::new(),
    }
}

/// Candidate, interviewer and shared entries, in that order.
pub(super) fn role_mix() -> Vec<PlaygroundQuestion> {
    vec![
        question("q1", Audience::Candidate, QuestionCategory::Coding),
        question("q2", Audience::Interviewer, QuestionCategory::Coding),
        question("q3", Audience::Both, QuestionCategory::Communication),
    ]
}

/// Wider table covering every audience across several categories.
pub(super) fn mixed_questions() -> Vec<PlaygroundQuestion> {
    vec![
        question("c-coding", Audience::Candidate, QuestionCategory::Coding),
        question("i-design", Audience::Interviewer, QuestionCategory::SystemDesign),
        question("b-comm", Audience::Both, QuestionCategory::Communication),
        question("c-debug", Audience::Candidate, QuestionCategory::Debugging),
        question("i-coding", Audience::Interviewer, QuestionCategory::Coding),
        question("b-ethics", Audience::Both, QuestionCategory::Ethics),
        question("c-ethics", Audience::Candidate, QuestionCategory::Ethics),
    ]
}

pub(super) fn scenario(id: &str, role: PracticeRole, kind: AssessmentType) -> PracticeScenario {
    PracticeScenario {
        id: id.to_string(),
        role,
        kind,
        title: format!("Scenario {id}"),
        context: "Context".to_string(),
        problem: "Problem".to_string(),
        candidate_prompt: None,
        ai_response: None,
        candidate_guidance: Vec::new(),
        interviewer_guidance: Vec::new(),
    }
}

pub(super) fn stepper_scenarios() -> Vec<PracticeScenario> {
    vec![
        scenario("cand-coding-a", PracticeRole::Candidate, AssessmentType::Coding),
        scenario("int-coding", PracticeRole::Interviewer, AssessmentType::Coding),
        scenario("cand-coding-b", PracticeRole::Candidate, AssessmentType::Coding),
        scenario("cand-debug", PracticeRole::Candidate, AssessmentType::Debugging),
        scenario("cand-coding-c", PracticeRole::Candidate, AssessmentType::Coding),
    ]
}

pub(super) fn dimension(id: &str, default_weight: i32) -> RubricDimension {
    RubricDimension {
        id: id.to_string(),
        name: id.to_uppercase(),
        description: format!("{id} description"),
        default_weight,
        examples: PerformanceExamples {
            weak: "weak".to_string(),
            strong: "strong".to_string(),
        },
    }
}

pub(super) fn ids<'a, I>(entries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a PlaygroundQuestion>,
{
    entries.into_iter().map(|entry| entry.id.as_str()).collect()
}
