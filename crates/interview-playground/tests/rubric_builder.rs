use interview_playground::content::ContentLibrary;
use interview_playground::playground::{
    BalanceStatus, DimensionId, RubricScorecard, WeightMap, WeightSlider, BALANCED_TOTAL,
};

#[test]
fn slider_adjustments_rebalance_the_rubric() {
    let library = ContentLibrary::standard();
    let slider = WeightSlider::STANDARD;
    let mut weights = WeightMap::from_dimensions(&library.dimensions);
    assert!(weights.is_balanced());

    weights.set_weight(DimensionId::new("problem-solving"), slider.snap(32));
    assert_eq!(weights.weight(&"problem-solving".into()), Some(30));
    assert_eq!(weights.balance(BALANCED_TOTAL), BalanceStatus::Over(5));

    weights.set_weight(DimensionId::new("communication"), slider.snap(10));
    assert!(weights.is_balanced());

    let scorecard = RubricScorecard::build(&library.dimensions, &weights, BALANCED_TOTAL);
    assert_eq!(scorecard.rows.len(), library.dimensions.len());
    assert_eq!(scorecard.total, 100);
    let shares: f64 = scorecard.rows.iter().map(|row| row.share_pct).sum();
    assert!((shares - 100.0).abs() < 1e-9);
}

#[test]
fn scorecard_uses_a_custom_target() {
    let library = ContentLibrary::standard();
    let weights = WeightMap::from_dimensions(&library.dimensions);

    let scorecard = RubricScorecard::build(&library.dimensions, &weights, 120);
    assert!(!scorecard.balanced);
    assert_eq!(scorecard.status, BalanceStatus::Under(20));
}

#[test]
fn scorecard_serializes_for_display() {
    let library = ContentLibrary::standard();
    let weights = WeightMap::from_dimensions(&library.dimensions);
    let scorecard = RubricScorecard::build(&library.dimensions, &weights, BALANCED_TOTAL);

    let value = serde_json::to_value(&scorecard).expect("scorecard serializes");
    assert_eq!(value["total"], 100);
    assert_eq!(value["status"]["status"], "balanced");
    assert_eq!(value["rows"][0]["id"], "problem-solving");
}
