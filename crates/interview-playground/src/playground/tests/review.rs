use super::common::*;
use crate::content::{Audience, QuestionCategory};
use crate::playground::{QuestionReviewer, ReviewPane, RoleFilter, Selection};

#[test]
fn moving_between_questions_reopens_context() {
    let questions = role_mix();
    let mut reviewer = QuestionReviewer::new(&questions);

    reviewer.set_pane(ReviewPane::Bad);
    assert!(reviewer.next());
    assert_eq!(reviewer.pane(), ReviewPane::Context);

    reviewer.set_pane(ReviewPane::Takeaways);
    assert!(reviewer.go_to_index(0));
    assert_eq!(reviewer.pane(), ReviewPane::Context);

    reviewer.set_pane(ReviewPane::Good);
    assert!(!reviewer.previous());
    assert_eq!(reviewer.pane(), ReviewPane::Good);
}

#[test]
fn ignored_jump_keeps_the_open_pane() {
    let questions = role_mix();
    let mut reviewer = QuestionReviewer::new(&questions);

    reviewer.set_pane(ReviewPane::Good);
    assert!(!reviewer.go_to_index(9));
    assert_eq!(reviewer.pane(), ReviewPane::Good);
}

#[test]
fn marks_the_current_question_complete() {
    let questions = role_mix();
    let mut reviewer = QuestionReviewer::new(&questions);

    reviewer.set_role_filter(RoleFilter::Only(Audience::Interviewer));
    assert!(reviewer.next());
    assert_eq!(
        reviewer.current_question().map(|question| question.id.as_str()),
        Some("q3")
    );
    assert!(reviewer.mark_current_complete());
    assert!(reviewer.is_complete("q3"));
    assert!(!reviewer.has_next());
    assert!(reviewer.has_previous());
}

#[test]
fn filter_changes_keep_the_open_pane() {
    let questions = role_mix();
    let mut reviewer = QuestionReviewer::new(&questions);

    reviewer.set_pane(ReviewPane::Bad);
    reviewer.set_role_filter(RoleFilter::Only(Audience::Candidate));
    assert_eq!(reviewer.pane(), ReviewPane::Bad);
    assert_eq!(reviewer.navigator().index(), 0);

    reviewer.set_pane(ReviewPane::Takeaways);
    reviewer.set_category_filter(Selection::Only(QuestionCategory::Communication));
    assert_eq!(reviewer.pane(), ReviewPane::Takeaways);
    assert_eq!(
        reviewer.current_question().map(|question| question.id.as_str()),
        Some("q3")
    );
}
