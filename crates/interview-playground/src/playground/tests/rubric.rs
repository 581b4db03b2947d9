use super::common::dimension;
use crate::content::rubric::rubric_dimensions;
use crate::playground::{BalanceStatus, DimensionId, RubricScorecard, WeightMap, BALANCED_TOTAL};

#[test]
fn shipped_dimensions_start_balanced() {
    let weights = WeightMap::from_dimensions(&rubric_dimensions());

    assert_eq!(weights.len(), 6);
    assert_eq!(weights.total_weight(), BALANCED_TOTAL);
    assert!(weights.is_balanced());
}

#[test]
fn setting_a_weight_moves_the_total_by_the_difference() {
    let dimensions = rubric_dimensions();
    let initial = WeightMap::from_dimensions(&dimensions);

    for dimension in &dimensions {
        let updated = initial.with_weight(DimensionId::from(dimension), 30);
        assert_eq!(
            updated.total_weight(),
            initial.total_weight() - i64::from(dimension.default_weight) + 30
        );
        assert_eq!(updated.weight(&DimensionId::from(dimension)), Some(30));
    }
    assert!(initial.is_balanced());
}

#[test]
fn balance_tracks_the_total_exactly() {
    let mut weights = WeightMap::from_dimensions(&[dimension("a", 50), dimension("b", 45)]);
    assert!(!weights.is_balanced());
    assert_eq!(weights.balance(BALANCED_TOTAL), BalanceStatus::Under(5));

    weights.set_weight("b".into(), 50);
    assert!(weights.is_balanced());

    weights.set_weight("a".into(), -20);
    weights.set_weight("b".into(), 120);
    assert_eq!(weights.total_weight(), 100);
    assert!(weights.is_balanced());
}

#[test]
fn unknown_dimensions_are_appended() {
    let weights = WeightMap::from_dimensions(&[dimension("a", 40)]);
    let updated = weights.with_weight("extra".into(), 60);

    let order: Vec<&str> = updated.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(order, vec!["a", "extra"]);
    assert!(updated.is_balanced());
    assert_eq!(weights.len(), 1);
}

#[test]
fn extreme_weights_sum_without_overflow() {
    let mut weights = WeightMap::default();
    weights.set_weight("a".into(), i32::MAX);
    weights.set_weight("b".into(), i32::MAX);
    assert_eq!(weights.total_weight(), 2 * i64::from(i32::MAX));
}

#[test]
fn scorecard_reports_names_and_shares() {
    let dimensions = vec![dimension("a", 75), dimension("b", 25)];
    let weights = WeightMap::from_dimensions(&dimensions).with_weight("ghost".into(), 0);

    let scorecard = RubricScorecard::build(&dimensions, &weights, BALANCED_TOTAL);

    assert!(scorecard.balanced);
    assert_eq!(scorecard.status, BalanceStatus::Balanced);
    assert_eq!(scorecard.rows[0].name, "A");
    assert!((scorecard.rows[0].share_pct - 75.0).abs() < f64::EPSILON);
    assert_eq!(scorecard.rows[2].name, "ghost");
    assert_eq!(scorecard.rows[2].share_pct, 0.0);
}
