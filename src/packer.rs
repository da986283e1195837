//! Greedy occupancy-grid packer.

use crate::config::{Config, Strategy};
use crate::geometry::{Container, Item};
use crate::grid::OccupancyGrid;
use crate::placement::{PlacedItem, Position};
use crate::result::PackResult;
use crate::Result;

use std::time::Instant;

/// Greedy placement engine for cuboid items.
///
/// One [`pack`](Self::pack) call is a pure function of the container, the
/// item batch and the configured strategy: it allocates a private
/// [`OccupancyGrid`], places items largest footprint first, and returns
/// the successful placements in placement order. Re-running with the same
/// inputs yields the identical result.
pub struct Packer {
    config: Config,
}

impl Packer {
    /// Creates a new packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Creates a packer with default configuration.
    pub fn default_config() -> Self {
        Self::new(Config::default())
    }

    /// Ascending lexicographic scan over (y, z, x), x innermost.
    fn raster_scan(&self, grid: &OccupancyGrid, item: &Item) -> Option<Position> {
        for y in 0..grid.height() {
            for z in 0..grid.depth() {
                for x in 0..grid.width() {
                    let anchor = Position::new(x, y, z);
                    if grid.can_place(item, anchor) {
                        return Some(anchor);
                    }
                }
            }
        }
        None
    }

    /// Two-phase stacking-biased scan.
    ///
    /// Phase 1 walks each horizontal column upward and takes the lowest
    /// layer that is both supported and placeable; the first unsupported
    /// layer ends the column. Phase 2 falls back to the plain raster scan
    /// only once every column is exhausted.
    fn stacking_scan(&self, grid: &OccupancyGrid, item: &Item) -> Option<Position> {
        for z in 0..grid.depth() {
            for x in 0..grid.width() {
                for y in 0..grid.height() {
                    let anchor = Position::new(x, y, z);
                    if !grid.is_supported(item, anchor) {
                        break;
                    }
                    if grid.can_place(item, anchor) {
                        return Some(anchor);
                    }
                }
            }
        }
        self.raster_scan(grid, item)
    }

    /// Finds the first admissible anchor for `item` in the current grid
    /// state, or `None` if the item cannot be placed.
    ///
    /// Ties between equally-early anchors are broken purely by the fixed
    /// scan order, so the search is deterministic for a given grid state.
    pub fn find_next_position(&self, grid: &OccupancyGrid, item: &Item) -> Option<Position> {
        match self.config.strategy {
            Strategy::RasterScan => self.raster_scan(grid, item),
            Strategy::StackingFirst => self.stacking_scan(grid, item),
        }
    }

    /// Places a batch of items inside the container, largest footprint first.
    ///
    /// Items that cannot be placed are logged, recorded in
    /// [`PackResult::unplaced`] and skipped; the rest of the batch is still
    /// processed. Returns an error only for invalid (zero) dimensions,
    /// checked up front before any placement happens.
    pub fn pack(&self, items: &[Item], container: &Container) -> Result<PackResult> {
        let start = Instant::now();

        container.validate()?;
        for item in items {
            item.validate()?;
        }

        let mut grid = OccupancyGrid::new(container);
        let mut result = PackResult::new();

        // Stable sort: equal footprints keep their input order.
        let mut ordered: Vec<&Item> = items.iter().collect();
        ordered.sort_by(|a, b| b.footprint_area().cmp(&a.footprint_area()));

        let mut placed_volume = 0u64;
        for item in ordered {
            match self.find_next_position(&grid, item) {
                Some(position) => {
                    grid.place(item, position);
                    placed_volume += item.volume();
                    result.placements.push(PlacedItem::new(item.clone(), position));
                }
                None => {
                    log::warn!("Could not place item '{}'", item.name());
                    result.unplaced.push(item.id().to_string());
                }
            }
        }

        result.utilization = placed_volume as f64 / container.volume() as f64;
        result.computation_time_ms = start.elapsed().as_millis() as u64;
        result.strategy = Some(self.config.strategy.name().to_string());

        Ok(result)
    }
}
