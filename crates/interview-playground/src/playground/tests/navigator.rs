use super::common::*;
use crate::content::{Audience, QuestionCategory};
use crate::playground::{CompletionProgress, Navigator, RoleFilter, Selection};

#[test]
fn candidate_filter_keeps_shared_entries_in_order() {
    let questions = role_mix();
    let mut navigator = Navigator::new(&questions);

    navigator.set_role_filter(RoleFilter::Only(Audience::Candidate));

    assert_eq!(ids(navigator.filtered()), vec!["q1", "q3"]);
}

#[test]
fn filtered_list_is_an_ordered_subsequence_for_every_filter() {
    let questions = mixed_questions();
    let mut navigator = Navigator::new(&questions);

    let roles = std::iter::once(Selection::All).chain(Audience::ordered().map(Selection::Only));
    for role in roles {
        let categories = std::iter::once(Selection::All)
            .chain(QuestionCategory::ordered().map(Selection::Only));
        for category in categories {
            navigator.set_role_filter(role);
            navigator.set_category_filter(category);

            let filtered = navigator.filtered();
            let mut source = questions.iter();
            for entry in &filtered {
                assert!(
                    source.any(|candidate| candidate.id == entry.id),
                    "{} out of source order under {role:?}/{category:?}",
                    entry.id
                );
                assert!(role.admits_audience(entry.role));
                assert!(category.admits(entry.category));
            }
        }
    }
}

#[test]
fn changing_either_filter_resets_the_index() {
    let questions = mixed_questions();
    let mut navigator = Navigator::new(&questions);

    assert!(navigator.go_to_index(4));
    navigator.set_role_filter(RoleFilter::Only(Audience::Interviewer));
    assert_eq!(navigator.index(), 0);

    assert!(navigator.next());
    navigator.set_category_filter(Selection::Only(QuestionCategory::Coding));
    assert_eq!(navigator.index(), 0);

    // Re-selecting the same value still resets.
    navigator.set_role_filter(Selection::All);
    assert!(navigator.next());
    navigator.set_category_filter(Selection::Only(QuestionCategory::Coding));
    assert_eq!(navigator.index(), 0);
}

#[test]
fn out_of_range_jumps_are_ignored() {
    let questions = role_mix();
    let mut navigator = Navigator::new(&questions);

    assert!(navigator.go_to_index(1));
    assert!(!navigator.go_to_index(3));
    assert!(!navigator.go_to_index(usize::MAX));
    assert_eq!(navigator.index(), 1);
}

#[test]
fn clamped_navigation_stops_at_both_ends() {
    let questions = role_mix();
    let mut navigator = Navigator::new(&questions);

    assert!(!navigator.previous());
    assert_eq!(navigator.index(), 0);

    assert!(navigator.next());
    assert!(navigator.next());
    assert!(!navigator.next());
    assert_eq!(navigator.index(), 2);
    assert_eq!(
        navigator.current_entry().map(|entry| entry.id.as_str()),
        Some("q3")
    );
}

#[test]
fn wrapping_navigation_cycles_through_the_filtered_list() {
    let questions = role_mix();
    let mut navigator = Navigator::new(&questions);

    navigator.previous_wrapping();
    assert_eq!(navigator.index(), 2);
    navigator.next_wrapping();
    assert_eq!(navigator.index(), 0);

    navigator.set_role_filter(RoleFilter::Only(Audience::Candidate));
    navigator.next_wrapping();
    navigator.next_wrapping();
    assert_eq!(navigator.index(), 0);
}

#[test]
fn empty_filtered_list_is_safe() {
    let questions = role_mix();
    let mut navigator = Navigator::new(&questions);

    navigator.set_role_filter(RoleFilter::Only(Audience::Interviewer));
    navigator.set_category_filter(Selection::Only(QuestionCategory::Ethics));

    assert!(navigator.filtered().is_empty());
    assert!(navigator.current_entry().is_none());
    assert!(!navigator.next());
    assert!(!navigator.previous());
    assert!(!navigator.go_to_index(0));
    navigator.next_wrapping();
    navigator.previous_wrapping();
    assert_eq!(navigator.index(), 0);
    assert!(!navigator.mark_current_complete());
}

#[test]
fn marking_complete_is_idempotent() {
    let questions = role_mix();
    let mut navigator = Navigator::new(&questions);

    assert!(navigator.mark_complete("q2"));
    assert!(!navigator.mark_complete("q2"));
    assert_eq!(navigator.completion_count(), 1);
    assert!(navigator.is_complete("q2"));
}

#[test]
fn progress_counts_global_completions_against_visible_entries() {
    let questions = role_mix();
    let mut navigator = Navigator::new(&questions);

    navigator.mark_complete("q1");
    navigator.mark_complete("q2");
    navigator.mark_complete("q3");
    navigator.set_role_filter(RoleFilter::Only(Audience::Interviewer));

    assert_eq!(
        navigator.progress(),
        CompletionProgress {
            completed: 3,
            total: 2,
        }
    );
}
