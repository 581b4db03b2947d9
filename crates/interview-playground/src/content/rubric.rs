use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceExamples {
    pub weak: String,
    pub strong: String,
}

/// A named evaluation criterion with its default share of the scorecard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricDimension {
    pub id: String,
    pub name: String,
    pub description: String,
    pub default_weight: i32,
    pub examples: PerformanceExamples,
}

fn dimension(
    id: &str,
    name: &str,
    description: &str,
    default_weight: i32,
    weak: &str,
    strong: &str,
) -> RubricDimension {
    RubricDimension {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        default_weight,
        examples: PerformanceExamples {
            weak: weak.to_string(),
            strong: strong.to_string(),
        },
    }
}

/// The six shipped dimensions. Defaults total 100.
pub fn rubric_dimensions() -> Vec<RubricDimension> {
    vec![
        dimension(
            "problem-solving",
            "Problem Solving & Decomposition",
            "Ability to break down complex problems into manageable components and identify optimal approaches.",
            25,
            "Jumps to coding without clarifying requirements. Struggles to break down problem into steps.",
            "Asks clarifying questions, outlines approach, discusses trade-offs before coding.",
        ),
        dimension(
            "ai-collaboration",
            "AI Collaboration & Critical Thinking",
            "Effective use of AI tools while maintaining critical judgment and ownership of solutions.",
            20,
            "Copies AI code blindly without understanding. Cannot explain AI suggestions or identify errors.",
            "Uses AI strategically, reviews outputs critically, tests thoroughly, explains reasoning.",
        ),
        dimension(
            "code-quality",
            "Code Quality & Best Practices",
            "Writing clean, maintainable, and correct code following industry standards.",
            20,
            "Code is hard to read, lacks error handling, ignores edge cases. Poor naming and structure.",
            "Clear code structure, handles errors gracefully, considers edge cases, follows conventions.",
        ),
        dimension(
            "communication",
            "Communication & Collaboration",
            "Clearly articulating thought process, asking questions, and explaining technical decisions.",
            15,
            "Works silently. Unclear explanations. Defensive when given feedback or hints.",
            "Thinks out loud, explains decisions, asks good questions, receptive to feedback.",
        ),
        dimension(
            "testing-validation",
            "Testing & Validation",
            "Systematically verifying solutions work correctly across different scenarios.",
            10,
            "Skips testing. Assumes code works. Does not consider edge cases or error conditions.",
            "Tests systematically, validates edge cases, explains testing strategy, catches bugs.",
        ),
        dimension(
            "security-ethics",
            "Security & Ethical Awareness",
            "Recognizing security vulnerabilities, privacy concerns, and ethical implications of solutions.",
            10,
            "Ignores security concerns. Does not validate AI-generated code for vulnerabilities.",
            "Identifies security risks (injection, XSS), validates data, considers privacy implications.",
        ),
    ]
}
