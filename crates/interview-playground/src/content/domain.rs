use serde::{Deserialize, Serialize};
use std::fmt;

/// Who a piece of playground content is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Audience {
    Candidate,
    Interviewer,
    /// Shared tag: content relevant to either side of the table.
    Both,
}

impl Audience {
    pub const fn ordered() -> [Self; 3] {
        [Self::Candidate, Self::Interviewer, Self::Both]
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Interviewer => "interviewer",
            Self::Both => "both",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "For Candidates",
            Self::Interviewer => "For Interviewers",
            Self::Both => "For Both",
        }
    }

    pub const fn badge(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Interviewer => "Interviewer",
            Self::Both => "Both Roles",
        }
    }

    pub const fn is_shared(self) -> bool {
        matches!(self, Self::Both)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Coding,
    SystemDesign,
    Debugging,
    Communication,
    Ethics,
}

impl QuestionCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Coding,
            Self::SystemDesign,
            Self::Debugging,
            Self::Communication,
            Self::Ethics,
        ]
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::SystemDesign => "system-design",
            Self::Debugging => "debugging",
            Self::Communication => "communication",
            Self::Ethics => "ethics",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Coding => "Coding",
            Self::SystemDesign => "System Design",
            Self::Debugging => "Debugging",
            Self::Communication => "Communication",
            Self::Ethics => "Ethics & Security",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApproachKind {
    Good,
    Bad,
}

/// One worked example of handling a question well or badly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproachExample {
    pub kind: ApproachKind,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub explanation: String,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRef {
    pub title: String,
    pub url: String,
}

/// A reviewable interview question with worked good and bad approaches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundQuestion {
    pub id: String,
    pub role: Audience,
    pub category: QuestionCategory,
    pub difficulty: Difficulty,
    pub title: String,
    pub scenario: String,
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<String>,
    pub good_approaches: Vec<ApproachExample>,
    pub bad_approaches: Vec<ApproachExample>,
    pub key_takeaways: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<LinkRef>,
}

/// Role picked on the first step of the guided playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeRole {
    Candidate,
    Interviewer,
}

impl PracticeRole {
    pub const fn ordered() -> [Self; 2] {
        [Self::Candidate, Self::Interviewer]
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Candidate => "candidate",
            Self::Interviewer => "interviewer",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Practice as Candidate",
            Self::Interviewer => "Practice as Interviewer",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Candidate => "Learn how to use AI tools effectively during interviews",
            Self::Interviewer => "Learn how to evaluate candidates who use AI tools",
        }
    }

    pub const fn audience(self) -> Audience {
        match self {
            Self::Candidate => Audience::Candidate,
            Self::Interviewer => Audience::Interviewer,
        }
    }
}

/// Assessment format picked on the second step of the guided playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentType {
    Coding,
    SystemDesign,
    Ml,
    Debugging,
}

impl AssessmentType {
    pub const fn ordered() -> [Self; 4] {
        [Self::Coding, Self::SystemDesign, Self::Ml, Self::Debugging]
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::Coding => "coding",
            Self::SystemDesign => "system-design",
            Self::Ml => "ml",
            Self::Debugging => "debugging",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Coding => "Coding Challenge",
            Self::SystemDesign => "System Design",
            Self::Ml => "ML System Design",
            Self::Debugging => "Debugging",
        }
    }
}

/// Scenario shown in the carousel once role and assessment type are chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PracticeScenario {
    pub id: String,
    pub role: PracticeRole,
    pub kind: AssessmentType,
    pub title: String,
    pub context: String,
    pub problem: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_response: Option<String>,
    #[serde(default)]
    pub candidate_guidance: Vec<String>,
    #[serde(default)]
    pub interviewer_guidance: Vec<String>,
}

/// Raised when a filter or selection value does not name a known tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownTag {}

tag_from_str!(Audience, "role");
tag_from_str!(QuestionCategory, "category");
tag_from_str!(PracticeRole, "practice role");
tag_from_str!(AssessmentType, "assessment type");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_from_their_wire_values() {
        assert_eq!("candidate".parse::<Audience>(), Ok(Audience::Candidate));
        assert_eq!(" Both ".parse::<Audience>(), Ok(Audience::Both));
        assert_eq!(
            "system-design".parse::<QuestionCategory>(),
            Ok(QuestionCategory::SystemDesign)
        );
        assert_eq!("ml".parse::<AssessmentType>(), Ok(AssessmentType::Ml));
        assert_eq!(
            "interviewer".parse::<PracticeRole>(),
            Ok(PracticeRole::Interviewer)
        );
    }

    #[test]
    fn unknown_tags_are_reported_with_their_kind() {
        let err = "recruiter".parse::<Audience>().expect_err("not a role");
        assert_eq!(err.kind, "role");
        assert_eq!(err.to_string(), "unknown role 'recruiter'");
        assert!("both".parse::<PracticeRole>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case_values() {
        let json = serde_json::to_string(&QuestionCategory::SystemDesign).expect("serializes");
        assert_eq!(json, "\"system-design\"");
        let parsed: Audience = serde_json::from_str("\"both\"").expect("deserializes");
        assert!(parsed.is_shared());
    }
}
