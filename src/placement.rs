//! Placement output types.

use crate::geometry::Item;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A grid coordinate: the minimum corner (anchor) of a claimed footprint.
///
/// Axis mapping is uniform across the engine: x runs along the container
/// width, y along the height and z along the depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Offset along the width axis.
    pub x: u32,
    /// Offset along the height axis.
    pub y: u32,
    /// Offset along the depth axis.
    pub z: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

/// An item together with the anchor the engine placed it at.
///
/// Produced only for items that were successfully placed; items the search
/// could not place are reported in
/// [`PackResult::unplaced`](crate::PackResult::unplaced) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedItem {
    /// The placed item.
    pub item: Item,
    /// Anchor of the item's padded footprint.
    pub position: Position,
}

impl PlacedItem {
    /// Creates a new placed item.
    pub fn new(item: Item, position: Position) -> Self {
        Self { item, position }
    }

    /// Returns the identifier of the placed item.
    pub fn id(&self) -> &str {
        self.item.id()
    }
}
