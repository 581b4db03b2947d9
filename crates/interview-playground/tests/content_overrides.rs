use std::fs;
use std::path::PathBuf;

use interview_playground::config::ContentConfig;
use interview_playground::content::{ContentError, ContentLibrary};
use interview_playground::playground::WeightMap;

fn write_fixture(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "interview-playground-{}-{name}",
        std::process::id()
    ));
    fs::write(&path, body).expect("fixture written");
    path
}

const QUESTION: &str = r#"{
    "id": "custom-1",
    "role": "both",
    "category": "communication",
    "difficulty": "beginner",
    "title": "Explain your prompt",
    "scenario": "Walk the interviewer through a prompt",
    "context": "Narrate intent before asking AI for code",
    "good_approaches": [],
    "bad_approaches": [],
    "key_takeaways": ["Say why before what"]
}"#;

#[test]
fn question_and_rubric_overrides_replace_standard_tables() {
    let questions = write_fixture("questions.json", &format!("[{QUESTION}]"));
    let rubric = write_fixture(
        "rubric.json",
        r#"[{"id": "depth", "name": "Depth", "description": "Goes deep",
             "default_weight": 100, "examples": {"weak": "shallow", "strong": "deep"}}]"#,
    );

    let library = ContentLibrary::load(&ContentConfig {
        questions_path: Some(questions.clone()),
        dimensions_path: Some(rubric.clone()),
    })
    .expect("overrides load");

    assert_eq!(library.questions.questions().len(), 1);
    assert!(library.questions.find("custom-1").is_some());
    assert!(WeightMap::from_dimensions(&library.dimensions).is_balanced());
    assert!(!library.practice_scenarios.is_empty());

    fs::remove_file(questions).ok();
    fs::remove_file(rubric).ok();
}

#[test]
fn duplicate_override_ids_are_rejected() {
    let questions = write_fixture(
        "duplicate-questions.json",
        &format!("[{QUESTION}, {QUESTION}]"),
    );

    let result = ContentLibrary::load(&ContentConfig {
        questions_path: Some(questions.clone()),
        dimensions_path: None,
    });

    match result {
        Err(ContentError::DuplicateId { id, .. }) => assert_eq!(id, "custom-1"),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
    fs::remove_file(questions).ok();
}
