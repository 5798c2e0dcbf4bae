use proptest::prelude::*;
use std::collections::HashSet;

use super::*;
use crate::rule::Rule;
use crate::topology::NEIGHBOR_OFFSETS;

/// Converts a matrix of `0`/`1` into cell states.
fn states(matrix: &[Vec<u8>]) -> Vec<Vec<CellState>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|&x| CellState::try_from(x).unwrap()).collect())
        .collect()
}

/// Computes the next generation of `matrix` directly, without cells.
fn reference_step(matrix: &[Vec<CellState>], rule: &Rule) -> Vec<Vec<CellState>> {
    let n = matrix.len() as isize;
    (0..n)
        .map(|r| {
            (0..n)
                .map(|c| {
                    let live_count = NEIGHBOR_OFFSETS
                        .iter()
                        .map(|&(dr, dc)| {
                            let row = (r + dr).rem_euclid(n) as usize;
                            let col = (c + dc).rem_euclid(n) as usize;
                            matrix[row][col].to_u8()
                        })
                        .sum();
                    rule.next_state(matrix[r as usize][c as usize], live_count)
                })
                .collect()
        })
        .collect()
}

/// Runs one generation, evaluating cells in the given order instead of
/// row-major order.
fn tick_in_order(grid: &mut Grid, order: &[usize]) {
    let rule = grid.config.rule;
    for &idx in order {
        let live_count = grid.cells[idx].live_neighbors(&grid.cells);
        grid.cells[idx].evaluate_next_state(live_count, &rule);
    }
    for &idx in order.iter().rev() {
        grid.cells[idx].commit();
    }
    grid.tick_count += 1;
}

fn square_matrix(max_size: usize) -> impl Strategy<Value = Vec<Vec<u8>>> {
    (1..=max_size).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0..=1_u8, n), n))
}

#[test]
fn test_construct_empty() {
    let empty: [Vec<u8>; 0] = [];
    assert_eq!(ConstructionError::EmptyGrid, Grid::new(&empty).unwrap_err());
    assert_eq!(
        ConstructionError::EmptyGrid,
        Grid::with_config(&empty, GridConfig::default().with_debug(true)).unwrap_err()
    );
    assert_eq!(ConstructionError::EmptyGrid, "".parse::<Grid>().unwrap_err());
}

#[test]
fn test_construct_non_square() {
    assert_eq!(
        ConstructionError::NonSquareGrid {
            row: 1,
            len: 3,
            expected: 2,
        },
        Grid::new(&[vec![0, 1], vec![0, 1, 0]]).unwrap_err()
    );
    // Rectangular, but not square.
    assert!(matches!(
        Grid::new(&[[0, 1, 0], [1, 0, 1]]),
        Err(ConstructionError::NonSquareGrid { row: 0, .. })
    ));
    assert!(matches!(
        "01\n1".parse::<Grid>(),
        Err(ConstructionError::NonSquareGrid { .. })
    ));
}

#[test]
fn test_construct_invalid_state() {
    assert_eq!(
        ConstructionError::InvalidState {
            row: 1,
            col: 0,
            value: "2".to_owned(),
        },
        Grid::new(&[[0, 1], [2, 0]]).unwrap_err()
    );
    assert!(matches!(
        "010\n0#0\n010".parse::<Grid>(),
        Err(ConstructionError::InvalidState { row: 1, col: 1, .. })
    ));
}

#[test]
fn test_construct_ready() {
    let input: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 1]];
    let grid = Grid::new(&input).unwrap();
    assert_eq!(3, grid.size());
    assert_eq!(0, grid.tick_count());
    assert_eq!(states(&input), grid.current_grid());
    assert_eq!(states(&input), grid.original_grid());
    assert_eq!(3, grid.population());
    assert_eq!("010\n100\n001", grid.visual_grid());
    assert_eq!(grid.visual_grid(), grid.to_string());

    // Other input types produce the same grid.
    let from_bools = Grid::new(&[
        [false, true, false],
        [true, false, false],
        [false, false, true],
    ])
    .unwrap();
    assert_eq!(grid.current_grid(), from_bools.current_grid());
    let from_str: Grid = "\n010\n100  \n001\n\n".parse().unwrap();
    assert_eq!(grid.current_grid(), from_str.current_grid());
    let from_states = Grid::new(&grid.current_grid()).unwrap();
    assert_eq!(grid.visual_grid(), from_states.visual_grid());
}

#[test]
fn test_grid_links_toroidal_neighbors() {
    let grid = Grid::new(&vec![vec![0; 4]; 4]).unwrap();
    for cell in grid.cells() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), cell.neighbors().len());
        let positions = cell
            .neighbors()
            .iter()
            .map(|&idx| grid.position_of(idx))
            .collect::<HashSet<_>>();
        let expected = NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| {
                (
                    (cell.row() as isize + dr).rem_euclid(4) as usize,
                    (cell.col() as isize + dc).rem_euclid(4) as usize,
                )
            })
            .collect::<HashSet<_>>();
        assert_eq!(expected, positions);
    }
    // Cells are stored in row-major order.
    let cell = grid.cell(2, 3).unwrap();
    assert_eq!((2, 3), (cell.row(), cell.col()));
    assert!(grid.cell(4, 0).is_none());
    assert!(grid.cell(0, 4).is_none());
}

#[test]
fn test_1x1_grid() {
    // A single cell is all 8 of its own neighbors.
    let mut grid = Grid::new(&[[1]]).unwrap();
    assert_eq!(&[0; 8], grid.cell(0, 0).unwrap().neighbors());
    // 8 live neighbors: overpopulation.
    grid.tick();
    assert_eq!("0", grid.visual_grid());
    // 0 live neighbors: stays dead.
    grid.tick();
    assert_eq!("0", grid.visual_grid());
    assert_eq!(2, grid.tick_count());
}

#[test]
fn test_2x2_grid() {
    // Each cell sees the other cells of the 2x2 grid more than once.
    let mut grid = Grid::new(&[[1, 0], [0, 0]]).unwrap();
    let live_counts = grid
        .cells()
        .map(|cell| cell.live_neighbors(&grid.cells))
        .collect_vec();
    // (0, 0) never sees itself; (0, 1) and (1, 0) see it twice; (1, 1) sees it
    // 4 times.
    assert_eq!(vec![0, 2, 2, 4], live_counts);
    grid.tick();
    assert_eq!("00\n00", grid.visual_grid());
}

#[test]
fn test_pending_state_cleared_after_tick() {
    let mut grid = Grid::new(&[[0, 1, 0], [0, 1, 0], [0, 1, 0]]).unwrap();
    grid.tick();
    assert!(grid.cells().all(|cell| cell.pending_state().is_none()));
}

#[test]
fn test_iterate_zero() {
    let mut grid = Grid::new(&[[0, 1, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
    let before = grid.current_grid();
    grid.iterate(0);
    assert_eq!(0, grid.tick_count());
    assert_eq!(before, grid.current_grid());
}

#[test]
fn test_debug_flag_does_not_affect_simulation() {
    let input = [[0, 0, 0, 0], [0, 1, 1, 1], [1, 1, 1, 0], [0, 0, 0, 0]];
    let mut quiet = Grid::new(&input).unwrap();
    let mut loud = Grid::with_config(&input, GridConfig::default().with_debug(true)).unwrap();
    assert!(loud.config().debug);
    quiet.iterate(5);
    loud.iterate(5);
    assert_eq!(quiet.current_grid(), loud.current_grid());
    assert_eq!(quiet.tick_count(), loud.tick_count());
}

#[test]
fn test_custom_rule() {
    // Under B1/S, a single cell fills its whole neighborhood.
    let config = GridConfig::default().with_rule("B1/S".parse().unwrap());
    let mut grid = Grid::with_config(&vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]], config)
        .unwrap();
    grid.tick();
    assert_eq!("111\n101\n111", grid.visual_grid());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..Default::default()
    })]

    /// Tests that a generation depends only on the previous one.
    #[test]
    fn test_tick_matches_reference(matrix in square_matrix(12)) {
        let mut grid = Grid::new(&matrix).unwrap();
        let expected = reference_step(&grid.current_grid(), &grid.config().rule);
        grid.tick();
        prop_assert_eq!(expected, grid.current_grid());
    }

    /// Tests that the order in which cells are evaluated does not matter.
    #[test]
    fn test_evaluation_order_independent(
        (matrix, order) in square_matrix(10).prop_flat_map(|m| {
            let len = m.len() * m.len();
            (Just(m), Just((0..len).collect_vec()).prop_shuffle())
        })
    ) {
        let mut grid = Grid::new(&matrix).unwrap();
        let mut shuffled = grid.clone();
        grid.tick();
        tick_in_order(&mut shuffled, &order);
        prop_assert_eq!(grid.current_grid(), shuffled.current_grid());
    }

    /// Tests that parallel stepping produces the same generations as serial
    /// stepping.
    #[test]
    fn test_parallel_matches_serial(matrix in square_matrix(16), gens in 0_u64..8) {
        let mut serial = Grid::new(&matrix).unwrap();
        let mut parallel =
            Grid::with_config(&matrix, GridConfig::default().with_parallel(true)).unwrap();
        serial.iterate(gens);
        parallel.iterate(gens);
        prop_assert_eq!(serial.current_grid(), parallel.current_grid());
        prop_assert_eq!(serial.tick_count(), parallel.tick_count());
    }

    /// Tests that `iterate(n)` advances the generation count by exactly `n`.
    #[test]
    fn test_iterate_counts(matrix in square_matrix(6), a in 0_u64..10, b in 0_u64..10) {
        let mut grid = Grid::new(&matrix).unwrap();
        grid.iterate(a);
        prop_assert_eq!(a, grid.tick_count());
        grid.iterate(b);
        prop_assert_eq!(a + b, grid.tick_count());
        // The original matrix is never modified.
        prop_assert_eq!(states(&matrix), grid.original_grid());
    }

    /// Tests that `visual_grid()` and parsing are inverses.
    #[test]
    fn test_visual_grid_parse(matrix in square_matrix(10)) {
        let grid = Grid::new(&matrix).unwrap();
        let visual = grid.visual_grid();
        prop_assert_eq!(matrix.len(), visual.lines().count());
        let parsed: Grid = visual.parse().unwrap();
        prop_assert_eq!(grid.current_grid(), parsed.current_grid());
    }
}
