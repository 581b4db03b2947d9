use super::domain::{AssessmentType, PracticeRole, PracticeScenario};
use serde::{Deserialize, Serialize};
use std::fmt;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// Scenarios walked by the guided three-step playground.
pub fn practice_scenarios() -> Vec<PracticeScenario> {
    vec![
        PracticeScenario {
            id: "candidate-coding-1".to_string(),
            role: PracticeRole::Candidate,
            kind: AssessmentType::Coding,
            title: "Using AI for Two-Sum Problem".to_string(),
            context: "You are in a coding interview and allowed to use AI tools like ChatGPT or Copilot.".to_string(),
            problem: "Given an array of integers nums and an integer target, return indices of the two numbers such that they add up to target.".to_string(),
            candidate_prompt: Some("Write a function in Python that finds two numbers in an array that add up to a target value".to_string()),
            ai_response: Some("def two_sum(nums, target):\n    for i in range(len(nums)):\n        for j in range(i+1, len(nums)):\n            if nums[i] + nums[j] == target:\n                return [i, j]\n    return None".to_string()),
            candidate_guidance: lines(&[
                "GOOD: Before using AI output, explain the brute force approach and its O(n²) time complexity",
                "GOOD: Identify that AI gave correct but sub-optimal solution",
                "GOOD: Suggest hash map approach for O(n) time complexity",
                "BAD: Copy-paste AI code without testing or explaining",
                "BAD: Not discussing edge cases like duplicates or empty arrays",
            ]),
            interviewer_guidance: lines(&[
                "Observe: Does candidate explain the approach before or after getting AI response?",
                "Observe: Do they identify the time/space complexity of AI solution?",
                "Red flag: Cannot explain why the code works or what it does",
            ]),
        },
        PracticeScenario {
            id: "interviewer-coding-1".to_string(),
            role: PracticeRole::Interviewer,
            kind: AssessmentType::Coding,
            title: "Evaluating AI-Assisted Coding".to_string(),
            context: "You are interviewing a candidate who is using Copilot for a coding problem.".to_string(),
            problem: "Candidate quickly generates a solution using AI. How do you assess their actual skills?".to_string(),
            candidate_prompt: None,
            ai_response: None,
            candidate_guidance: Vec::new(),
            interviewer_guidance: lines(&[
                "Ask: \"Can you explain the approach you took and why it works?\"",
                "Ask: \"What edge cases should we test? Can you write a few test cases?\"",
                "Observe: Do they review AI code carefully or accept it blindly?",
                "Don't: Assume AI usage means cheating, it's a realistic skill",
            ]),
        },
        PracticeScenario {
            id: "candidate-debugging-1".to_string(),
            role: PracticeRole::Candidate,
            kind: AssessmentType::Debugging,
            title: "Debugging with AI Assistance".to_string(),
            context: "A production service is failing 15% of requests. You can use AI to help debug.".to_string(),
            problem: "Logs show: \"TimeoutError: Request to database exceeded 5000ms\"".to_string(),
            candidate_prompt: Some("A service is timing out on database calls 15% of the time. What could cause this?".to_string()),
            ai_response: Some("Possible causes of intermittent database timeouts:\n1. Connection pool exhaustion\n2. Database load/slow queries\n3. Network issues between service and DB\n4. Too many concurrent requests".to_string()),
            candidate_guidance: lines(&[
                "GOOD: Use AI to brainstorm hypotheses, then systematically test them",
                "GOOD: Ask interviewer about architecture (connection pool size, DB type, traffic patterns)",
                "BAD: Pick the first AI suggestion and propose it as \"the fix\"",
            ]),
            interviewer_guidance: lines(&[
                "Observe: Does candidate form their own hypotheses or just repeat AI output?",
                "Red flag: Accepts AI diagnosis without validation or further investigation",
            ]),
        },
        PracticeScenario {
            id: "interviewer-security-1".to_string(),
            role: PracticeRole::Interviewer,
            kind: AssessmentType::Coding,
            title: "Assessing Security Awareness".to_string(),
            context: "Candidate used AI to generate code for user authentication. You notice potential security issues.".to_string(),
            problem: "AI-generated code stores passwords in plain text. How do you evaluate candidate's security judgment?".to_string(),
            candidate_prompt: None,
            ai_response: None,
            candidate_guidance: Vec::new(),
            interviewer_guidance: lines(&[
                "Ask: \"Walk me through the security considerations in this code\"",
                "Observe: Do they identify the plain text password issue unprompted?",
                "Do: Assess whether they recognize the NEED to validate AI code for security",
            ]),
        },
        PracticeScenario {
            id: "candidate-system-design-1".to_string(),
            role: PracticeRole::Candidate,
            kind: AssessmentType::SystemDesign,
            title: "ML System Design with AI".to_string(),
            context: "Design a recommendation system. You can use AI for specific components.".to_string(),
            problem: "Design a video recommendation system for 100M users.".to_string(),
            candidate_prompt: Some("What are the key components of a video recommendation system architecture?".to_string()),
            ai_response: None,
            candidate_guidance: lines(&[
                "GOOD: Start with clarifying questions (scale, latency requirements, personalization level)",
                "GOOD: Draw high-level architecture BEFORE asking AI",
                "BAD: Accept AI architecture diagram as-is without discussing trade-offs",
            ]),
            interviewer_guidance: lines(&[
                "Observe: Does candidate lead the design or follow AI suggestions?",
                "Good sign: Uses AI for validation and specific details, not high-level design",
            ]),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectorKind {
    Coding,
    Refactor,
    MlDesign,
    Debugging,
    SystemDesign,
}

impl SelectorKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Coding,
            Self::Refactor,
            Self::MlDesign,
            Self::Debugging,
            Self::SystemDesign,
        ]
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::Refactor => "refactor",
            Self::MlDesign => "ml-design",
            Self::Debugging => "debugging",
            Self::SystemDesign => "system-design",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Coding => "Algorithmic Coding",
            Self::Refactor => "Refactoring Legacy Code",
            Self::MlDesign => "ML System Design",
            Self::Debugging => "Debugging Production Issue",
            Self::SystemDesign => "Distributed System Design",
        }
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

tag_from_str!(SelectorKind, "scenario type");

/// Side-by-side view of where AI helps and where it misleads for one
/// interview format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorScenario {
    pub id: String,
    pub title: String,
    pub kind: SelectorKind,
    pub problem: String,
    pub ai_helps: Vec<String>,
    pub ai_misleads: Vec<String>,
    pub good_behaviors: Vec<String>,
    pub red_flags: Vec<String>,
}

pub fn selector_scenarios() -> Vec<SelectorScenario> {
    vec![
        SelectorScenario {
            id: "leet-coding".to_string(),
            title: "Algorithmic Problem Solving".to_string(),
            kind: SelectorKind::Coding,
            problem: "Given an array of integers, find two numbers that add up to a specific target. Return indices of the two numbers.".to_string(),
            ai_helps: lines(&[
                "Quickly generating boilerplate code structure",
                "Suggesting multiple solution approaches (brute force, hash map, two pointers)",
                "Explaining time/space complexity trade-offs",
            ]),
            ai_misleads: lines(&[
                "May suggest over-engineered solutions for simple problems",
                "Could miss edge cases like empty arrays or duplicate values",
            ]),
            good_behaviors: lines(&[
                "Start by explaining your approach before asking AI for code",
                "Review AI-generated code line-by-line, testing edge cases",
            ]),
            red_flags: lines(&[
                "Copying AI code without understanding or testing it",
                "Unable to explain why the algorithm works",
            ]),
        },
        SelectorScenario {
            id: "refactor-legacy".to_string(),
            title: "Refactoring Legacy Code".to_string(),
            kind: SelectorKind::Refactor,
            problem: "You inherit a 500-line function with nested conditionals, no tests, and unclear variable names. Make it maintainable.".to_string(),
            ai_helps: lines(&[
                "Identifying code smells and anti-patterns",
                "Generating unit tests for existing behavior",
            ]),
            ai_misleads: lines(&[
                "May suggest refactorings that change behavior unexpectedly",
                "May not preserve edge case handling from original code",
            ]),
            good_behaviors: lines(&[
                "Write characterization tests before refactoring",
                "Refactor in small, verifiable steps",
            ]),
            red_flags: lines(&[
                "Rewriting everything at once from an AI suggestion",
                "No tests protecting existing behavior",
            ]),
        },
        SelectorScenario {
            id: "ml-design".to_string(),
            title: "ML System Design".to_string(),
            kind: SelectorKind::MlDesign,
            problem: "Design a fraud detection system for an online payments platform.".to_string(),
            ai_helps: lines(&[
                "Listing candidate model families and their trade-offs",
                "Suggesting feature ideas from transaction data",
            ]),
            ai_misleads: lines(&[
                "Ignoring class imbalance and precision/recall trade-offs",
                "Skipping monitoring for model drift",
            ]),
            good_behaviors: lines(&[
                "Clarify latency and false-positive cost before choosing a model",
                "Plan offline evaluation and online monitoring",
            ]),
            red_flags: lines(&[
                "Optimizing accuracy on an imbalanced dataset",
                "No plan for retraining or rollback",
            ]),
        },
        SelectorScenario {
            id: "debug-production".to_string(),
            title: "Debugging Production Issue".to_string(),
            kind: SelectorKind::Debugging,
            problem: "Checkout latency doubled after the last release. Find the cause.".to_string(),
            ai_helps: lines(&[
                "Brainstorming likely regressions from a diff",
                "Drafting queries against logs and metrics",
            ]),
            ai_misleads: lines(&[
                "Confidently blaming the wrong component",
                "Proposing fixes without evidence",
            ]),
            good_behaviors: lines(&[
                "Form hypotheses and validate each with data",
                "Compare metrics before and after the release",
            ]),
            red_flags: lines(&[
                "Applying the first AI suggestion to production",
                "Not asking about observability",
            ]),
        },
        SelectorScenario {
            id: "distributed-design".to_string(),
            title: "Distributed System Design".to_string(),
            kind: SelectorKind::SystemDesign,
            problem: "Design a URL shortener that handles 10K writes and 1M reads per second.".to_string(),
            ai_helps: lines(&[
                "Estimating capacity and storage requirements",
                "Enumerating caching and sharding strategies",
            ]),
            ai_misleads: lines(&[
                "Over-complicating the design with unnecessary components",
                "Glossing over consistency and failure modes",
            ]),
            good_behaviors: lines(&[
                "Drive the design yourself and use AI to check estimates",
                "Discuss trade-offs between consistency and availability",
            ]),
            red_flags: lines(&[
                "Presenting an AI diagram without defending choices",
                "Cannot explain what happens when a node fails",
            ]),
        },
    ]
}

/// First scenario of the requested type, the way the selector tabs pick one.
pub fn find_selector_scenario(
    scenarios: &[SelectorScenario],
    kind: SelectorKind,
) -> Option<&SelectorScenario> {
    scenarios.iter().find(|scenario| scenario.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_tabs_parse_from_their_values() {
        for kind in SelectorKind::ordered() {
            assert_eq!(kind.value().parse::<SelectorKind>(), Ok(kind));
        }
        assert_eq!("ML-Design".parse::<SelectorKind>(), Ok(SelectorKind::MlDesign));
        let err = "whiteboard".parse::<SelectorKind>().expect_err("unknown tab");
        assert_eq!(err.to_string(), "unknown scenario type 'whiteboard'");
    }

    #[test]
    fn every_selector_tab_has_a_scenario() {
        let scenarios = selector_scenarios();
        for kind in SelectorKind::ordered() {
            let scenario = find_selector_scenario(&scenarios, kind).expect("scenario for tab");
            assert_eq!(scenario.kind, kind);
            assert!(!scenario.ai_helps.is_empty() && !scenario.red_flags.is_empty());
        }
    }

    #[test]
    fn interviewer_only_scenarios_carry_no_candidate_guidance() {
        for scenario in practice_scenarios() {
            if scenario.role == PracticeRole::Interviewer {
                assert!(scenario.candidate_guidance.is_empty(), "{}", scenario.id);
            }
            assert!(!scenario.interviewer_guidance.is_empty(), "{}", scenario.id);
        }
    }
}
