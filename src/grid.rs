//! Occupancy grid: the per-run lattice recording which item claims each cell.

use crate::geometry::{Container, Item, ItemId};
use crate::placement::Position;

/// Occupancy lattice with one cell per unit volume of the container.
///
/// A cell is either empty or claimed by exactly one item; a claimed
/// footprint includes the one-unit horizontal clearance halo around the
/// item body (see [`CLEARANCE`](crate::CLEARANCE)), so no two items can
/// touch in the horizontal plane while stacking vertically stays gapless.
///
/// One grid backs exactly one packing run: it is allocated fresh at the
/// start of the run, mutated only by successive [`place`](Self::place)
/// calls, and dropped when the run completes. It is never shared between
/// runs or concurrent placements.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    depth: usize,
    /// Flat (x, y, z) lattice; a claimed cell holds an index into `owners`.
    cells: Vec<Option<u32>>,
    owners: Vec<ItemId>,
}

impl OccupancyGrid {
    /// Allocates a fully-empty grid sized to the container.
    pub fn new(container: &Container) -> Self {
        let width = container.width() as usize;
        let height = container.height() as usize;
        let depth = container.depth() as usize;
        Self {
            width,
            height,
            depth,
            cells: vec![None; width * height * depth],
            owners: Vec::new(),
        }
    }

    /// Returns the grid extent along the width axis.
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// Returns the grid extent along the height axis.
    pub fn height(&self) -> u32 {
        self.height as u32
    }

    /// Returns the grid extent along the depth axis.
    pub fn depth(&self) -> u32 {
        self.depth as u32
    }

    fn cell_index(&self, x: usize, y: usize, z: usize) -> usize {
        (y * self.depth + z) * self.width + x
    }

    /// Returns the identifier of the item claiming the cell, if any.
    ///
    /// Out-of-bounds coordinates read as empty.
    pub fn occupant(&self, x: u32, y: u32, z: u32) -> Option<&str> {
        let (x, y, z) = (x as usize, y as usize, z as usize);
        if x >= self.width || y >= self.height || z >= self.depth {
            return None;
        }
        self.cells[self.cell_index(x, y, z)]
            .map(|owner| self.owners[owner as usize].as_str())
    }

    /// Returns true if the cell is claimed by some item.
    pub fn is_occupied(&self, x: u32, y: u32, z: u32) -> bool {
        self.occupant(x, y, z).is_some()
    }

    /// Tests whether the item's padded footprint fits at `anchor`.
    ///
    /// Returns true only if every cell of the `(width + 2) x height x
    /// (depth + 2)` footprint lies within the grid and is empty.
    pub fn can_place(&self, item: &Item, anchor: Position) -> bool {
        let x = anchor.x as usize;
        let y = anchor.y as usize;
        let z = anchor.z as usize;
        let span_x = item.padded_width() as usize;
        let span_y = item.height() as usize;
        let span_z = item.padded_depth() as usize;

        if x + span_x > self.width || y + span_y > self.height || z + span_z > self.depth {
            return false;
        }

        for dy in 0..span_y {
            for dz in 0..span_z {
                for dx in 0..span_x {
                    if self.cells[self.cell_index(x + dx, y + dy, z + dz)].is_some() {
                        return false;
                    }
                }
            }
        }

        log::trace!(
            "Item '{}' fits at ({}, {}, {})",
            item.name(),
            anchor.x,
            anchor.y,
            anchor.z
        );
        true
    }

    /// Claims every cell of the item's padded footprint at `anchor`.
    ///
    /// The write is unconditional and best-effort: cells outside the grid
    /// are skipped and already-claimed cells are overwritten, each logged
    /// as an error for observability. Callers must gate this behind a
    /// [`can_place`](Self::can_place) success on the same grid state;
    /// anything else corrupts earlier placements.
    pub fn place(&mut self, item: &Item, anchor: Position) {
        let owner = self.owners.len() as u32;
        self.owners.push(item.id().to_string());

        for dy in 0..item.height() as usize {
            for dz in 0..item.padded_depth() as usize {
                for dx in 0..item.padded_width() as usize {
                    let x = anchor.x as usize + dx;
                    let y = anchor.y as usize + dy;
                    let z = anchor.z as usize + dz;
                    if x >= self.width || y >= self.height || z >= self.depth {
                        log::error!(
                            "Item '{}' write out of bounds at ({}, {}, {})",
                            item.name(),
                            x,
                            y,
                            z
                        );
                        continue;
                    }
                    let idx = self.cell_index(x, y, z);
                    if self.cells[idx].is_some() {
                        log::error!(
                            "Item '{}' write into occupied cell at ({}, {}, {})",
                            item.name(),
                            x,
                            y,
                            z
                        );
                    }
                    self.cells[idx] = Some(owner);
                }
            }
        }
    }

    /// Tests whether the layer beneath `anchor` supports the item.
    ///
    /// Anchors on the floor (`y == 0`) are always supported; otherwise
    /// every cell of the item's unpadded `width x depth` footprint in the
    /// layer at `y - 1` must be occupied. Cells outside the grid count as
    /// unoccupied. Bounds admissibility is not checked here, that is
    /// [`can_place`](Self::can_place)'s job.
    pub fn is_supported(&self, item: &Item, anchor: Position) -> bool {
        if anchor.y == 0 {
            return true;
        }
        let below = anchor.y as usize - 1;
        if below >= self.height {
            return false;
        }

        for dz in 0..item.depth() as usize {
            for dx in 0..item.width() as usize {
                let x = anchor.x as usize + dx;
                let z = anchor.z as usize + dz;
                if x >= self.width || z >= self.depth {
                    return false;
                }
                if self.cells[self.cell_index(x, below, z)].is_none() {
                    return false;
                }
            }
        }
        true
    }
}
