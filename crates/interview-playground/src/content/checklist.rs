use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn item(id: &str, label: &str, description: &str) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: label.to_string(),
        description: Some(description.to_string()),
    }
}

/// Self-review list for candidates practising AI-assisted interviews.
pub fn candidate_checklist() -> Vec<ChecklistItem> {
    vec![
        item(
            "1",
            "I explain my approach before asking AI for code",
            "Demonstrate problem-solving ability independent of AI tools",
        ),
        item(
            "2",
            "I review all AI-generated code line-by-line",
            "Never copy-paste without understanding",
        ),
        item(
            "3",
            "I test AI code for edge cases and errors",
            "AI has high error rates, validation is critical",
        ),
        item(
            "4",
            "I can explain why AI suggestions work",
            "Ownership means understanding, not just using",
        ),
        item(
            "5",
            "I identify security issues in AI code",
            "Stanford research: AI users write less secure code",
        ),
        item(
            "6",
            "I communicate my thought process out loud",
            "Interviewers need to see your reasoning, not just results",
        ),
        item(
            "7",
            "I ask clarifying questions before coding",
            "Understand the problem before reaching for tools",
        ),
    ]
}
