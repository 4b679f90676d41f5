#![allow(missing_docs)]

use super::{DIEHARD, LifeGrid, R_PENTOMINO};
use crate::fade::{FADE_MAX, FadeMap};

type Grid = LifeGrid<19, 19>;

fn live_cell_count<const W: usize, const H: usize>(grid: &LifeGrid<W, H>) -> usize {
    let mut count = 0;
    for y in 0..H {
        for x in 0..W {
            if grid.is_alive(x, y) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn isolated_cell_dies() {
    let mut grid = Grid::new();
    let mut fade_map = FadeMap::new();
    grid.set_alive(9, 9);

    grid.advance_generation(&mut fade_map);

    assert!(
        !grid.is_alive(9, 9),
        "a cell with zero live neighbors must die"
    );
    assert_eq!(live_cell_count(&grid), 0);
}

#[test]
fn block_still_life_persists() {
    let mut grid = Grid::new();
    let mut fade_map = FadeMap::new();
    grid.seed(&[(5, 5), (6, 5), (5, 6), (6, 6)]);

    for _ in 0..10 {
        grid.advance_generation(&mut fade_map);
    }

    assert!(grid.is_alive(5, 5));
    assert!(grid.is_alive(6, 5));
    assert!(grid.is_alive(5, 6));
    assert!(grid.is_alive(6, 6));
    assert_eq!(
        live_cell_count(&grid),
        4,
        "a 2x2 block must stay a 2x2 block"
    );
}

#[test]
fn neighbor_counting_wraps_toroidally() {
    // A cell on the left edge and one on the right edge of the same row are
    // neighbors, for every row.
    for y in 0..19 {
        let mut grid = Grid::new();
        grid.set_alive(0, y);
        grid.set_alive(18, y);
        assert_eq!(
            grid.count_live_neighbors(0, y),
            1,
            "left-edge cell must see the right-edge cell at row {y}"
        );
        assert_eq!(
            grid.count_live_neighbors(18, y),
            1,
            "right-edge cell must see the left-edge cell at row {y}"
        );
    }

    // Same across the top/bottom edges.
    let mut grid = Grid::new();
    grid.set_alive(4, 0);
    grid.set_alive(4, 18);
    assert_eq!(grid.count_live_neighbors(4, 0), 1);
    assert_eq!(grid.count_live_neighbors(4, 18), 1);

    // Corner diagonal: (0,0) and (18,18) wrap to touch.
    let mut grid = Grid::new();
    grid.set_alive(0, 0);
    grid.set_alive(18, 18);
    assert_eq!(grid.count_live_neighbors(0, 0), 1);
}

#[test]
fn advancement_reads_the_prior_snapshot_only() {
    // A blinker flips between a horizontal and a vertical bar. Updating
    // in place (letting one cell see a neighbor's new state) would destroy
    // it, so a correct flip proves the pass reads only the old snapshot.
    let mut grid = Grid::new();
    let mut fade_map = FadeMap::new();
    grid.seed(&[(8, 9), (9, 9), (10, 9)]);

    grid.advance_generation(&mut fade_map);

    assert!(grid.is_alive(9, 8));
    assert!(grid.is_alive(9, 9));
    assert!(grid.is_alive(9, 10));
    assert_eq!(live_cell_count(&grid), 3);

    grid.advance_generation(&mut fade_map);

    assert!(grid.is_alive(8, 9), "the blinker must flip back");
    assert!(grid.is_alive(9, 9));
    assert!(grid.is_alive(10, 9));
    assert_eq!(live_cell_count(&grid), 3);
}

#[test]
fn birth_requires_exactly_three_neighbors() {
    let mut grid = Grid::new();
    let mut fade_map = FadeMap::new();
    // Three live cells around (5,5); (5,5) itself dead.
    grid.seed(&[(4, 4), (5, 4), (6, 4)]);

    grid.advance_generation(&mut fade_map);

    assert!(grid.is_alive(5, 5), "a dead cell with 3 neighbors is born");
    assert!(
        !grid.is_alive(4, 5),
        "a dead cell with 2 neighbors stays dead"
    );
}

#[test]
fn death_marks_fade_and_survival_does_not() {
    let mut grid = Grid::new();
    let mut fade_map = FadeMap::new();
    // A block (survives) plus an isolated cell (dies).
    grid.seed(&[(2, 2), (3, 2), (2, 3), (3, 3), (12, 12)]);

    grid.advance_generation(&mut fade_map);

    assert_eq!(
        fade_map.get(12, 12),
        FADE_MAX,
        "alive→dead must set fade to 255 in the same pass"
    );
    assert_eq!(fade_map.get(2, 2), 0, "alive→alive must not touch fade");
    assert_eq!(fade_map.get(2, 3), 0);
    assert_eq!(fade_map.get(15, 4), 0, "dead→dead must not touch fade");
}

#[test]
fn seed_replaces_prior_state_exactly() {
    let mut grid = Grid::new();
    grid.seed(&[(1, 1), (2, 2), (3, 3)]);
    grid.seed(&DIEHARD);

    assert_eq!(live_cell_count(&grid), DIEHARD.len());
    for &(x, y) in &DIEHARD {
        assert!(grid.is_alive(x, y), "diehard cell ({x},{y}) must be set");
    }
    assert!(!grid.is_alive(1, 1), "seed must clear earlier live cells");
}

#[test]
fn diehard_matches_the_published_coordinates() {
    // Row/column pairs from the pattern definition, as (x, y).
    let expected = [
        (13, 9),
        (7, 10),
        (8, 10),
        (8, 11),
        (12, 11),
        (13, 11),
        (14, 11),
    ];
    assert_eq!(DIEHARD, expected);
}

#[test]
fn r_pentomino_is_centered_and_five_cells() {
    let mut grid = Grid::new();
    grid.seed(&R_PENTOMINO);
    assert_eq!(live_cell_count(&grid), 5);
    assert!(grid.is_alive(9, 10), "center cell of the R-pentomino");
}
