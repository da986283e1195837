//! # Stowage
//!
//! Occupancy-grid placement engine for stowing rectangular-cuboid items
//! inside a fixed container.
//!
//! The engine is a greedy, deterministic heuristic: items are sorted by
//! descending footprint area and each one is committed at the first
//! admissible anchor its position search finds. It does not rotate items,
//! does not promise minimum-waste packings, and recomputes all positions
//! from scratch on every run.
//!
//! ## Features
//!
//! - Unit-cell occupancy grid with a one-unit horizontal clearance halo
//! - Two position-search strategies (raster scan, stacking-biased scan)
//! - Per-item failure isolation: unplaceable items are reported, the rest
//!   of the batch is still placed
//! - Diagnostics through the [`log`] facade (fit traces, commit contract
//!   violations, unplaceable items)
//!
//! ## Quick Start
//!
//! ```rust
//! use stowage::{Config, Container, Item, Packer, Strategy};
//!
//! let items = vec![
//!     Item::new("bin-1", "Storage bin", 4, 4, 4).with_color("#2d7dd2"),
//!     Item::new("bin-2", "Shoe box", 3, 2, 5).with_color("#f45d01"),
//! ];
//! let container = Container::new(24, 24, 24);
//!
//! let config = Config::new().with_strategy(Strategy::StackingFirst);
//! let packer = Packer::new(config);
//! let result = packer.pack(&items, &container).unwrap();
//!
//! println!(
//!     "Placed {} items, utilization: {}",
//!     result.placed_count(),
//!     result.utilization_percent()
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod packer;
pub mod placement;
pub mod result;

// Re-exports
pub use config::{Config, Strategy};
pub use error::{Error, Result};
pub use geometry::{Container, Item, ItemId, CLEARANCE};
pub use grid::OccupancyGrid;
pub use packer::Packer;
pub use placement::{PlacedItem, Position};
pub use result::PackResult;
