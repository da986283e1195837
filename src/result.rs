//! Packing run results.

use crate::geometry::ItemId;
use crate::placement::PlacedItem;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one packing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PackResult {
    /// Successfully placed items, in placement order.
    pub placements: Vec<PlacedItem>,

    /// IDs of items that could not be placed.
    pub unplaced: Vec<ItemId>,

    /// Utilization ratio (0.0 - 1.0): placed item volume over container volume.
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,

    /// Strategy used for the run.
    pub strategy: Option<String>,
}

impl PackResult {
    /// Creates a new empty result.
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
            unplaced: Vec::new(),
            utilization: 0.0,
            computation_time_ms: 0,
            strategy: None,
        }
    }

    /// Returns true if all items were placed.
    pub fn all_placed(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Returns the number of placed items.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Returns the number of unplaced items.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Returns true if at least one item was placed.
    pub fn is_successful(&self) -> bool {
        !self.placements.is_empty()
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}

impl Default for PackResult {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Item;
    use crate::placement::Position;

    #[test]
    fn test_result_new() {
        let result = PackResult::new();
        assert!(result.placements.is_empty());
        assert_eq!(result.utilization, 0.0);
        assert!(result.all_placed());
        assert!(!result.is_successful());
    }

    #[test]
    fn test_result_counts() {
        let mut result = PackResult::new();
        result.placements.push(PlacedItem::new(
            Item::new("i1", "Box", 2, 2, 2),
            Position::new(0, 0, 0),
        ));
        result.unplaced.push("i2".to_string());
        result.utilization = 0.85;

        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.unplaced_count(), 1);
        assert!(!result.all_placed());
        assert!(result.is_successful());
        assert_eq!(result.utilization_percent(), "85.0%");
    }
}
