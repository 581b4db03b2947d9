use interview_playground::content::{Audience, ContentLibrary, QuestionCategory};
use interview_playground::playground::{QuestionReviewer, ReviewPane, RoleFilter, Selection};

#[test]
fn candidate_review_session_over_the_standard_library() {
    let library = ContentLibrary::standard();
    let questions = library.questions.questions();
    let mut reviewer = QuestionReviewer::new(questions);

    reviewer.set_role_filter(RoleFilter::Only(Audience::Candidate));
    let visible = reviewer.filtered();
    assert!(!visible.is_empty());
    assert!(visible
        .iter()
        .all(|question| matches!(question.role, Audience::Candidate | Audience::Both)));
    assert!(
        visible.iter().any(|question| question.role == Audience::Both),
        "shared questions should be visible to candidates"
    );

    let first = reviewer
        .current_question()
        .expect("candidate questions present");
    assert_eq!(first.id, visible[0].id);

    reviewer.set_pane(ReviewPane::Takeaways);
    assert!(reviewer.mark_current_complete());
    assert!(reviewer.next());
    assert_eq!(reviewer.pane(), ReviewPane::Context);

    let progress = reviewer.progress();
    assert_eq!(progress.completed, 1);
    assert_eq!(progress.total, visible.len());
}

#[test]
fn category_filter_narrows_to_matching_questions() {
    let library = ContentLibrary::standard();
    let questions = library.questions.questions();
    let mut reviewer = QuestionReviewer::new(questions);

    for category in QuestionCategory::ordered() {
        reviewer.set_category_filter(Selection::Only(category));
        let visible = reviewer.filtered();
        assert_eq!(visible.len(), library.questions.for_category(category).len());
        assert!(visible.iter().all(|question| question.category == category));
    }
}

#[test]
fn completions_survive_filter_changes() {
    let library = ContentLibrary::standard();
    let questions = library.questions.questions();
    let mut reviewer = QuestionReviewer::new(questions);

    let first_id = reviewer
        .current_question()
        .map(|question| question.id.clone())
        .expect("standard library is not empty");
    reviewer.mark_current_complete();

    reviewer.set_role_filter(RoleFilter::Only(Audience::Interviewer));
    reviewer.set_category_filter(Selection::Only(QuestionCategory::SystemDesign));

    assert!(reviewer.is_complete(&first_id));
    assert_eq!(reviewer.progress().completed, 1);
}
