use crate::content::RubricDimension;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Total a rubric must reach to count as balanced.
pub const BALANCED_TOTAL: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DimensionId(String);

impl DimensionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DimensionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&RubricDimension> for DimensionId {
    fn from(dimension: &RubricDimension) -> Self {
        Self::new(dimension.id.as_str())
    }
}

/// Current weight per dimension, in dimension order.
///
/// Weights are summed exactly as given. Range and step limits belong to
/// [`WeightSlider`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WeightMap {
    entries: Vec<(DimensionId, i32)>,
}

impl WeightMap {
    pub fn from_dimensions(dimensions: &[RubricDimension]) -> Self {
        let mut map = Self::default();
        for dimension in dimensions {
            map.set_weight(DimensionId::from(dimension), dimension.default_weight);
        }
        map
    }

    pub fn weight(&self, id: &DimensionId) -> Option<i32> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == id)
            .map(|(_, weight)| *weight)
    }

    /// Copy of this map with `id` set to `value`.
    pub fn with_weight(&self, id: DimensionId, value: i32) -> Self {
        let mut next = self.clone();
        next.set_weight(id, value);
        next
    }

    /// Overwrites the weight of `id`, appending it when the map has no such
    /// dimension yet.
    pub fn set_weight(&mut self, id: DimensionId, value: i32) {
        match self.entries.iter_mut().find(|(entry, _)| *entry == id) {
            Some((_, weight)) => *weight = value,
            None => self.entries.push((id.clone(), value)),
        }
        debug!(dimension = %id, value, total = self.total_weight(), "weight updated");
    }

    pub fn total_weight(&self) -> i64 {
        self.entries
            .iter()
            .map(|(_, weight)| i64::from(*weight))
            .sum()
    }

    pub fn is_balanced(&self) -> bool {
        self.is_balanced_against(BALANCED_TOTAL)
    }

    pub fn is_balanced_against(&self, target: i64) -> bool {
        self.total_weight() == target
    }

    pub fn balance(&self, target: i64) -> BalanceStatus {
        let total = self.total_weight();
        match total.cmp(&target) {
            std::cmp::Ordering::Equal => BalanceStatus::Balanced,
            std::cmp::Ordering::Greater => BalanceStatus::Over(total - target),
            std::cmp::Ordering::Less => BalanceStatus::Under(target - total),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DimensionId, i32)> + '_ {
        self.entries.iter().map(|(id, weight)| (id, *weight))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "by", rename_all = "snake_case")]
pub enum BalanceStatus {
    Balanced,
    Over(i64),
    Under(i64),
}

impl fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BalanceStatus::Balanced => write!(f, "balanced"),
            BalanceStatus::Over(by) => write!(f, "over by {by}"),
            BalanceStatus::Under(by) => write!(f, "under by {by}"),
        }
    }
}

/// Range control the rubric builder renders for each dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeightSlider {
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl WeightSlider {
    pub const STANDARD: WeightSlider = WeightSlider {
        min: 0,
        max: 50,
        step: 5,
    };

    /// Clamps `value` into range and rounds it to the nearest step.
    pub fn snap(&self, value: i32) -> i32 {
        let clamped = value.clamp(self.min, self.max);
        if self.step <= 0 {
            return clamped;
        }
        let offset = clamped - self.min;
        let steps = (offset + self.step / 2) / self.step;
        (self.min + steps * self.step).min(self.max)
    }
}

impl Default for WeightSlider {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardRow {
    pub id: DimensionId,
    pub name: String,
    pub weight: i32,
    /// Share of the current total, or 0 when the total is not positive.
    pub share_pct: f64,
}

/// Dimension names joined with their live weights for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RubricScorecard {
    pub rows: Vec<ScorecardRow>,
    pub total: i64,
    pub target: i64,
    pub balanced: bool,
    pub status: BalanceStatus,
}

impl RubricScorecard {
    /// Rows follow the map's order; ids without a dimension show the raw id.
    pub fn build(dimensions: &[RubricDimension], weights: &WeightMap, target: i64) -> Self {
        let total = weights.total_weight();
        let rows = weights
            .iter()
            .map(|(id, weight)| {
                let name = dimensions
                    .iter()
                    .find(|dimension| dimension.id == id.as_str())
                    .map_or_else(|| id.to_string(), |dimension| dimension.name.clone());
                let share_pct = if total > 0 {
                    f64::from(weight) / total as f64 * 100.0
                } else {
                    0.0
                };
                ScorecardRow {
                    id: id.clone(),
                    name,
                    weight,
                    share_pct,
                }
            })
            .collect();

        Self {
            rows,
            total,
            target,
            balanced: weights.is_balanced_against(target),
            status: weights.balance(target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_snaps_to_range_and_step() {
        let slider = WeightSlider::STANDARD;
        assert_eq!(slider.snap(-10), 0);
        assert_eq!(slider.snap(12), 10);
        assert_eq!(slider.snap(13), 15);
        assert_eq!(slider.snap(48), 50);
        assert_eq!(slider.snap(75), 50);
    }

    #[test]
    fn balance_status_reports_distance_from_target() {
        let mut map = WeightMap::default();
        map.set_weight("a".into(), 60);
        assert_eq!(map.balance(100), BalanceStatus::Under(40));
        map.set_weight("b".into(), 50);
        assert_eq!(map.balance(100), BalanceStatus::Over(10));
        assert_eq!(map.balance(110), BalanceStatus::Balanced);
        assert_eq!(BalanceStatus::Over(10).to_string(), "over by 10");
    }
}
