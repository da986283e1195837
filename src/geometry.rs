//! Container and item types.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an item.
pub type ItemId = String;

/// Horizontal clearance kept on each side of an item, in grid units.
///
/// The claimed span along the width and depth axes is the item dimension
/// plus `2 * CLEARANCE`; the height axis carries no clearance so items can
/// rest directly on one another.
pub const CLEARANCE: u32 = 1;

/// A rectangular storage container, sized in whole grid units.
///
/// Dimensions are fixed for one packing run. The unit of length is opaque
/// to the engine (the reference application uses inches).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    width: u32,
    height: u32,
    depth: u32,
}

impl Container {
    /// Creates a new container with the given dimensions.
    pub fn new(width: u32, height: u32, depth: u32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Returns the width (x axis).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height (y axis).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the depth (z axis).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the volume in grid cells.
    pub fn volume(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.depth as u64
    }

    /// Validates the container and returns an error if any dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(Error::InvalidBoundary(
                "Width, height and depth must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// A rectangular-cuboid item to be placed inside a [`Container`].
///
/// Items are immutable inputs to the engine; a successful placement pairs a
/// copy of the item with a position, the item itself is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    id: ItemId,
    name: String,
    color: String,
    width: u32,
    height: u32,
    depth: u32,
}

impl Item {
    /// Creates a new item with the given identifier, display name and dimensions.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        width: u32,
        height: u32,
        depth: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: "#cccccc".to_string(),
            width,
            height,
            depth,
        }
    }

    /// Sets the display color (e.g. `"#ff8800"`).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Returns the unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the width (x axis).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height (y axis).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the depth (z axis).
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Returns the horizontal footprint area (`width * depth`).
    ///
    /// The placement orchestrator sorts items by descending footprint area
    /// so large bases are placed before small ones.
    pub fn footprint_area(&self) -> u64 {
        self.width as u64 * self.depth as u64
    }

    /// Returns the volume in grid cells (clearance not included).
    pub fn volume(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.depth as u64
    }

    /// Returns the claimed span along the width axis, clearance included.
    pub fn padded_width(&self) -> u32 {
        self.width + 2 * CLEARANCE
    }

    /// Returns the claimed span along the depth axis, clearance included.
    pub fn padded_depth(&self) -> u32 {
        self.depth + 2 * CLEARANCE
    }

    /// Validates the item and returns an error if any dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(Error::InvalidGeometry(format!(
                "Dimensions for '{}' must be positive",
                self.id
            )));
        }
        Ok(())
    }
}
