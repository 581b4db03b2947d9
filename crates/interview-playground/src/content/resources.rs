use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceCategory {
    CandidateExperience,
    AiTools,
    AssessmentDesign,
    AiCoding,
    EthicsSecurity,
}

impl ResourceCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::CandidateExperience,
            Self::AiTools,
            Self::AssessmentDesign,
            Self::AiCoding,
            Self::EthicsSecurity,
        ]
    }

    pub const fn value(self) -> &'static str {
        match self {
            Self::CandidateExperience => "candidate-experience",
            Self::AiTools => "ai-tools",
            Self::AssessmentDesign => "assessment-design",
            Self::AiCoding => "ai-coding",
            Self::EthicsSecurity => "ethics-security",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CandidateExperience => "Candidate Experience",
            Self::AiTools => "AI Interview Tools",
            Self::AssessmentDesign => "Assessment Design",
            Self::AiCoding => "AI Coding Best Practices",
            Self::EthicsSecurity => "Ethics & Security",
        }
    }
}

tag_from_str!(ResourceCategory, "resource category");

/// External reading linked from the resources section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub url: String,
    pub source: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: ResourceCategory,
    pub label: &'static str,
    pub count: usize,
}

fn resource(
    id: &str,
    title: &str,
    description: &str,
    category: ResourceCategory,
    url: &str,
    source: &str,
) -> Resource {
    Resource {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        url: url.to_string(),
        source: source.to_string(),
    }
}

pub fn resource_library() -> Vec<Resource> {
    vec![
        resource(
            "1",
            "How GenAI is Reshaping Tech Hiring",
            "AI interview questions tripled since 2023. Companies now test how candidates think WITH AI, not just what they know.",
            ResourceCategory::AiTools,
            "https://newsletter.pragmaticengineer.com/p/how-genai-changes-tech-hiring",
            "Pragmatic Engineer",
        ),
        resource(
            "2",
            "State of Interviewing 2025: AI Trends",
            "In-person interviews rose from 24% to 38% in 2025 as companies counter AI cheating.",
            ResourceCategory::AssessmentDesign,
            "https://www.interviewquery.com/p/ai-interview-trends-tech-hiring-2025",
            "Interview Query",
        ),
        resource(
            "3",
            "AI in Interviews: Cheating or New Normal?",
            "Industry shifts from prevention to acceptance with clear policies.",
            ResourceCategory::EthicsSecurity,
            "https://karat.com/ai-in-interviews-cheating-or-the-new-normal/",
            "Karat",
        ),
        resource(
            "4",
            "Candidate Assessment Ultimate Guide 2025",
            "Structured assessments with clear expectations reduce bias. Skills-based hiring is now essential.",
            ResourceCategory::CandidateExperience,
            "https://recruiterflow.com/blog/candidate-assessment/",
            "Recruiterflow",
        ),
        resource(
            "5",
            "Fairness in AI-Driven Recruitment",
            "Academic research on reducing bias in AI hiring and algorithmic fairness metrics.",
            ResourceCategory::EthicsSecurity,
            "https://arxiv.org/html/2405.19699v3",
            "arXiv",
        ),
        resource(
            "6",
            "AI Assisted Programming Complete Guide",
            "If an LLM writes code and you review and test it, that's responsible AI assisted programming.",
            ResourceCategory::AiCoding,
            "https://dualite.dev/blog/ai-assisted-programming-guide",
            "Dualite",
        ),
        resource(
            "12",
            "AI Code Compliance Strategies",
            "Addressing compliance, security, and privacy concerns when using AI coding assistants in regulated environments.",
            ResourceCategory::EthicsSecurity,
            "https://www.blackduck.com/blog/ai-powered-code-compliance-strategies.html",
            "Black Duck",
        ),
    ]
}

/// Resources in a category, or every resource when no category is chosen.
pub fn filter_resources(
    resources: &[Resource],
    category: Option<ResourceCategory>,
) -> Vec<&Resource> {
    resources
        .iter()
        .filter(|resource| category.map_or(true, |wanted| resource.category == wanted))
        .collect()
}

/// Per-category totals in display order, including empty categories.
pub fn category_counts(resources: &[Resource]) -> Vec<CategoryCount> {
    ResourceCategory::ordered()
        .into_iter()
        .map(|category| CategoryCount {
            category,
            label: category.label(),
            count: resources
                .iter()
                .filter(|resource| resource.category == category)
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_parse_case_insensitively() {
        assert_eq!(
            " Ethics-Security ".parse::<ResourceCategory>(),
            Ok(ResourceCategory::EthicsSecurity)
        );
        let err = "podcasts"
            .parse::<ResourceCategory>()
            .expect_err("unknown category");
        assert_eq!(err.kind, "resource category");
        assert_eq!(err.value, "podcasts");
    }

    #[test]
    fn counts_cover_every_category_and_sum_to_total() {
        let resources = resource_library();
        let counts = category_counts(&resources);
        assert_eq!(counts.len(), 5);
        assert_eq!(
            counts.iter().map(|entry| entry.count).sum::<usize>(),
            resources.len()
        );
        let ethics = counts
            .iter()
            .find(|entry| entry.category == ResourceCategory::EthicsSecurity)
            .expect("ethics count present");
        assert_eq!(ethics.count, 3);
    }

    #[test]
    fn no_category_shows_everything() {
        let resources = resource_library();
        assert_eq!(filter_resources(&resources, None).len(), resources.len());
        let coding = filter_resources(&resources, Some(ResourceCategory::AiCoding));
        assert_eq!(coding.len(), 1);
        assert_eq!(coding[0].source, "Dualite");
    }

    #[test]
    fn empty_category_filters_to_nothing() {
        let resources = vec![resource_library().remove(0)];
        assert!(filter_resources(&resources, Some(ResourceCategory::AiCoding)).is_empty());
    }
}
