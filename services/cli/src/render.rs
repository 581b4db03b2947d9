use crate::views::{ChecklistView, QuestionsView, ResourcesView, StepperView};
use interview_playground::content::{ApproachExample, SelectorScenario};
use interview_playground::error::AppError;
use interview_playground::playground::{ReviewPane, RubricScorecard, Selection};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Output {
    Text,
    Json,
}

impl Output {
    pub(crate) fn from_flag(json: bool) -> Self {
        if json {
            Output::Json
        } else {
            Output::Text
        }
    }
}

/// Prints `view` as pretty JSON, or hands it to the text renderer.
pub(crate) fn emit<T, F>(output: Output, view: &T, text: F) -> Result<(), AppError>
where
    T: Serialize,
    F: FnOnce(&T),
{
    match output {
        Output::Json => println!("{}", serde_json::to_string_pretty(view)?),
        Output::Text => text(view),
    }
    Ok(())
}

fn bullets(items: &[String], indent: &str) {
    for item in items {
        println!("{indent}- {item}");
    }
}

fn approaches(heading: &str, examples: &[ApproachExample]) {
    println!("  {heading}:");
    if examples.is_empty() {
        println!("    (none)");
    }
    for example in examples {
        println!("    * {}: {}", example.title, example.description);
        if let Some(code) = &example.code {
            for line in code.lines() {
                println!("        {line}");
            }
        }
        println!("      Why: {}", example.explanation);
        println!("      Impact: {}", example.impact);
    }
}

pub(crate) fn questions(view: &QuestionsView<'_>) {
    let role = view
        .filter
        .role
        .selected()
        .map_or("All Roles", |audience| audience.label());
    let category = match view.filter.category {
        Selection::All => "All Categories",
        Selection::Only(category) => category.label(),
    };
    println!("Questions ({role} / {category})");

    if view.questions.is_empty() {
        println!("  No questions match the selected filters.");
    }
    for (position, row) in view.questions.iter().enumerate() {
        let cursor = if row.current { '>' } else { ' ' };
        let done = if row.completed { "[x]" } else { "[ ]" };
        println!(
            "{cursor} {done} {}. {} ({}, {}, {})",
            position + 1,
            row.title,
            row.role.badge(),
            row.category.label(),
            row.difficulty.label()
        );
    }

    if let Some(question) = view.current {
        println!(
            "\nQuestion {} of {}: {}",
            view.index + 1,
            view.questions.len(),
            question.title
        );
        println!("  Scenario: {}", question.scenario);
        for pane in ReviewPane::ordered() {
            let marker = if pane == view.pane { " (open)" } else { "" };
            println!("\n  [{}]{marker}", pane.label());
            match pane {
                ReviewPane::Context => {
                    println!("  {}", question.context);
                    if let Some(prompt) = &question.ai_prompt {
                        println!("  Prompt: {prompt}");
                    }
                    if let Some(response) = &question.ai_response {
                        println!("  AI response:");
                        for line in response.lines() {
                            println!("    {line}");
                        }
                    }
                }
                ReviewPane::Good => approaches("Good approaches", &question.good_approaches),
                ReviewPane::Bad => approaches("Bad approaches", &question.bad_approaches),
                ReviewPane::Takeaways => {
                    bullets(&question.key_takeaways, "  ");
                    for link in &question.resources {
                        println!("  Read: {} <{}>", link.title, link.url);
                    }
                }
            }
        }
    }

    if view.current.is_some() {
        let previous = if view.has_previous {
            format!("--index {}", view.index)
        } else {
            "none".to_string()
        };
        let next = if view.has_next {
            format!("--index {}", view.index + 2)
        } else {
            "none".to_string()
        };
        println!("\nPrevious: {previous} | Next: {next}");
    }
    println!(
        "\nProgress: {} / {} completed",
        view.progress.completed, view.progress.total
    );
}

pub(crate) fn scorecard(scorecard: &RubricScorecard) {
    println!("Rubric scorecard");
    for row in &scorecard.rows {
        println!(
            "  {:<28} {:>4}  ({:.1}%)",
            row.name, row.weight, row.share_pct
        );
    }
    println!(
        "Total: {} / {} ({})",
        scorecard.total, scorecard.target, scorecard.status
    );
}

pub(crate) fn stepper(view: &StepperView<'_>) {
    println!(
        "Step {} of 3: {} ({:.0}% complete)",
        view.step.number(),
        view.step_label,
        view.progress_percent
    );
    if let Some(role) = view.role {
        println!("  Role: {}", role.label());
    }
    if let Some(kind) = view.kind {
        println!("  Assessment: {}", kind.label());
    }

    match view.current {
        Some(scenario) => {
            println!(
                "\nScenario {} of {}: {}",
                view.index + 1,
                view.scenario_count,
                scenario.title
            );
            println!("  Context: {}", scenario.context);
            println!("  Problem: {}", scenario.problem);
            if let Some(prompt) = &scenario.candidate_prompt {
                println!("  Candidate prompt: {prompt}");
            }
            if let Some(response) = &scenario.ai_response {
                println!("  AI response: {response}");
            }
            if !scenario.candidate_guidance.is_empty() {
                println!("  Candidate guidance:");
                bullets(&scenario.candidate_guidance, "    ");
            }
            if !scenario.interviewer_guidance.is_empty() {
                println!("  Interviewer guidance:");
                bullets(&scenario.interviewer_guidance, "    ");
            }
        }
        None if view.kind.is_some() => {
            println!("\n  No scenarios available for this combination yet.");
        }
        None => {}
    }
}

pub(crate) fn resources(view: &ResourcesView<'_>) {
    let heading = view
        .category
        .map_or("All Resources", |category| category.label());
    println!("{heading} ({} of {})", view.resources.len(), view.total);
    for count in &view.counts {
        println!("  {:<28} {}", count.label, count.count);
    }
    println!();
    for resource in &view.resources {
        println!("- {} ({})", resource.title, resource.source);
        println!("  {}", resource.description);
        println!("  {}", resource.url);
    }
}

pub(crate) fn selector(scenario: &Option<&SelectorScenario>) {
    let Some(scenario) = scenario else {
        println!("No scenario for this interview type.");
        return;
    };
    println!("{} ({})", scenario.title, scenario.kind.label());
    println!("  {}", scenario.problem);
    println!("  Where AI helps:");
    bullets(&scenario.ai_helps, "    ");
    println!("  Where AI misleads:");
    bullets(&scenario.ai_misleads, "    ");
    println!("  Good behaviours:");
    bullets(&scenario.good_behaviors, "    ");
    println!("  Red flags:");
    bullets(&scenario.red_flags, "    ");
}

pub(crate) fn checklist(view: &ChecklistView<'_>) {
    println!(
        "Candidate checklist ({} / {} checked)",
        view.progress.completed, view.progress.total
    );
    for item in &view.items {
        let done = if item.checked { "[x]" } else { "[ ]" };
        println!("  {done} {}. {}", item.id, item.label);
        if let Some(description) = item.description {
            println!("        {description}");
        }
    }
}
