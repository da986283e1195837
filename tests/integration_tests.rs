//! Integration tests for stowage.

use stowage::{
    Config, Container, Item, OccupancyGrid, PackResult, Packer, PlacedItem, Position, Strategy,
};

use std::collections::HashSet;

/// Enumerates every cell of a placed item's padded footprint.
fn padded_cells(placed: &PlacedItem) -> Vec<(u32, u32, u32)> {
    let mut cells = Vec::new();
    for dy in 0..placed.item.height() {
        for dz in 0..placed.item.padded_depth() {
            for dx in 0..placed.item.padded_width() {
                cells.push((
                    placed.position.x + dx,
                    placed.position.y + dy,
                    placed.position.z + dz,
                ));
            }
        }
    }
    cells
}

/// Asserts footprints are pairwise disjoint and inside the container.
fn assert_valid_packing(result: &PackResult, container: &Container) {
    let mut claimed: HashSet<(u32, u32, u32)> = HashSet::new();
    for placed in &result.placements {
        for cell in padded_cells(placed) {
            assert!(
                cell.0 < container.width()
                    && cell.1 < container.height()
                    && cell.2 < container.depth(),
                "Cell {:?} of '{}' is out of bounds",
                cell,
                placed.id()
            );
            assert!(
                claimed.insert(cell),
                "Cell {:?} is claimed by two items",
                cell
            );
        }
    }
}

mod scenario_tests {
    use super::*;

    #[test]
    fn test_single_item_lands_at_origin() {
        let items = vec![Item::new("a", "A", 4, 4, 4)];
        let container = Container::new(10, 10, 10);

        let result = Packer::default_config().pack(&items, &container).unwrap();

        assert_eq!(result.placed_count(), 1);
        assert_eq!(result.placements[0].position, Position::new(0, 0, 0));
    }

    #[test]
    fn test_equal_footprints_spread_along_width() {
        let items = vec![
            Item::new("a", "A", 3, 5, 3),
            Item::new("b", "B", 3, 5, 3),
        ];
        let container = Container::new(10, 5, 10);

        let result = Packer::default_config().pack(&items, &container).unwrap();

        assert_eq!(result.placed_count(), 2);
        assert!(result.all_placed());
        // A's padded span covers the first five width cells, so B lands
        // right after it on the same layer.
        assert_eq!(result.placements[0].id(), "a");
        assert_eq!(result.placements[0].position, Position::new(0, 0, 0));
        assert_eq!(result.placements[1].id(), "b");
        assert_eq!(result.placements[1].position, Position::new(5, 0, 0));
        assert_valid_packing(&result, &container);
    }

    #[test]
    fn test_capacity_exhaustion() {
        let items = vec![Item::new("a", "A", 5, 5, 5)];
        let container = Container::new(2, 2, 2);

        let result = Packer::default_config().pack(&items, &container).unwrap();

        assert!(result.placements.is_empty());
        assert_eq!(result.unplaced, vec!["a".to_string()]);
    }

    #[test]
    fn test_stacking_best_effort() {
        let items = vec![
            Item::new("a", "A", 2, 1, 2),
            Item::new("b", "B", 2, 1, 2),
        ];
        let container = Container::new(4, 2, 4);

        let config = Config::new().with_strategy(Strategy::StackingFirst);
        let result = Packer::new(config).pack(&items, &container).unwrap();

        assert_eq!(result.placed_count(), 2);
        let first = &result.placements[0];
        let second = &result.placements[1];
        assert_eq!(first.id(), "a");
        assert_eq!(first.position.y, 0);

        // Whatever anchor was chosen for B must have passed both the
        // support test and the fit test against the grid state after A.
        let mut grid = OccupancyGrid::new(&container);
        grid.place(&first.item, first.position);
        assert!(grid.is_supported(&second.item, second.position));
        assert!(grid.can_place(&second.item, second.position));
    }
}

mod property_tests {
    use super::*;

    fn mixed_batch() -> Vec<Item> {
        vec![
            Item::new("crate", "Crate", 5, 3, 4),
            Item::new("box", "Box", 3, 2, 3),
            Item::new("book", "Book", 2, 1, 3),
            Item::new("cube", "Cube", 3, 3, 3),
            Item::new("slab", "Slab", 6, 1, 2),
        ]
    }

    #[test]
    fn test_determinism() {
        let items = mixed_batch();
        let container = Container::new(30, 12, 30);

        for strategy in [Strategy::RasterScan, Strategy::StackingFirst] {
            let packer = Packer::new(Config::new().with_strategy(strategy));
            let first = packer.pack(&items, &container).unwrap();
            let second = packer.pack(&items, &container).unwrap();
            assert_eq!(first.placements, second.placements);
            assert_eq!(first.unplaced, second.unplaced);
        }
    }

    #[test]
    fn test_no_overlap_and_bounds() {
        let items = mixed_batch();
        let container = Container::new(30, 12, 30);

        for strategy in [Strategy::RasterScan, Strategy::StackingFirst] {
            let packer = Packer::new(Config::new().with_strategy(strategy));
            let result = packer.pack(&items, &container).unwrap();
            assert!(result.all_placed());
            assert_valid_packing(&result, &container);
        }
    }

    #[test]
    fn test_tight_container_stays_consistent() {
        // Not everything fits; what is placed must still be disjoint.
        let items = mixed_batch();
        let container = Container::new(10, 4, 10);

        let result = Packer::default_config().pack(&items, &container).unwrap();

        assert!(result.placed_count() >= 1);
        assert!(!result.all_placed());
        assert_eq!(
            result.placed_count() + result.unplaced_count(),
            items.len()
        );
        assert_valid_packing(&result, &container);
    }

    #[test]
    fn test_stable_order_for_equal_footprints() {
        let items = vec![
            Item::new("first", "First", 3, 2, 3),
            Item::new("second", "Second", 3, 2, 3),
            Item::new("third", "Third", 3, 2, 3),
        ];
        let container = Container::new(20, 5, 10);

        let result = Packer::default_config().pack(&items, &container).unwrap();

        let order: Vec<&str> = result.placements.iter().map(|p| p.id()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sorting_is_by_descending_footprint() {
        let items = vec![
            Item::new("small", "Small", 2, 6, 2),
            Item::new("wide", "Wide", 6, 1, 6),
        ];
        let container = Container::new(20, 10, 20);

        let result = Packer::default_config().pack(&items, &container).unwrap();

        // The tall-but-narrow item sorts after the wide one: footprint
        // area ignores height.
        assert_eq!(result.placements[0].id(), "wide");
        assert_eq!(result.placements[0].position, Position::new(0, 0, 0));
    }

    #[test]
    fn test_floor_is_supported_anywhere() {
        let container = Container::new(8, 8, 8);
        let grid = OccupancyGrid::new(&container);
        let item = Item::new("a", "A", 3, 3, 3);

        for x in 0..8 {
            for z in 0..8 {
                assert!(grid.is_supported(&item, Position::new(x, 0, z)));
            }
        }
    }
}

mod strategy_tests {
    use super::*;

    #[test]
    fn test_stacking_prefers_resting_on_items() {
        let items = vec![
            Item::new("base", "Base", 4, 2, 4),
            Item::new("top", "Top", 2, 2, 2),
        ];
        let container = Container::new(10, 10, 10);

        let config = Config::new().with_strategy(Strategy::StackingFirst);
        let result = Packer::new(config).pack(&items, &container).unwrap();

        assert_eq!(result.placements[0].position, Position::new(0, 0, 0));
        // The top item rests on the base rather than spreading across
        // the floor.
        assert_eq!(result.placements[1].position, Position::new(0, 2, 0));
        assert_valid_packing(&result, &container);
    }

    #[test]
    fn test_raster_spreads_across_the_floor() {
        let items = vec![
            Item::new("base", "Base", 4, 2, 4),
            Item::new("side", "Side", 2, 2, 2),
        ];
        let container = Container::new(10, 10, 10);

        let result = Packer::default_config().pack(&items, &container).unwrap();

        // Same batch, raster scan: the second item stays on the floor.
        assert_eq!(result.placements[1].position.y, 0);
        assert_valid_packing(&result, &container);
    }

    #[test]
    fn test_stacking_settles_on_floor_when_nothing_is_stackable() {
        // Too tall to sit on the base within the container; the next
        // free floor column is the best supported anchor left.
        let items = vec![
            Item::new("base", "Base", 4, 8, 4),
            Item::new("tall", "Tall", 2, 8, 2),
        ];
        let container = Container::new(12, 10, 12);

        let config = Config::new().with_strategy(Strategy::StackingFirst);
        let result = Packer::new(config).pack(&items, &container).unwrap();

        assert_eq!(result.placed_count(), 2);
        assert_eq!(result.placements[1].position.y, 0);
        assert_valid_packing(&result, &container);
    }
}
