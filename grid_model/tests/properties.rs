use grid_model::{CellState, Grid, clear, cycle};
use proptest::prelude::*;

/// Shape plus a sequence of in-range activations to scribble with.
fn arb_marked_grid() -> impl Strategy<Value = Grid> {
    (1usize..8, 1usize..8)
        .prop_flat_map(|(rows, columns)| {
            (
                Just(rows),
                Just(columns),
                prop::collection::vec((0..rows, 0..columns), 0..40),
            )
        })
        .prop_map(|(rows, columns, hits)| {
            hits.into_iter().fold(clear(rows, columns), |grid, (r, c)| {
                cycle(&grid, r, c).expect("generated indices are in range")
            })
        })
}

/// A marked grid together with one in-range target cell.
fn arb_grid_and_cell() -> impl Strategy<Value = (Grid, usize, usize)> {
    arb_marked_grid().prop_flat_map(|grid| {
        let (rows, columns) = grid.shape();
        (Just(grid), 0..rows, 0..columns)
    })
}

proptest! {
    #[test]
    fn clear_has_exact_shape(rows in 0usize..12, columns in 0usize..12) {
        let grid = clear(rows, columns);
        prop_assert_eq!(grid.shape(), (rows, columns));
        prop_assert_eq!(grid.iter_rows().count(), rows);
        for row in grid.iter_rows() {
            prop_assert_eq!(row.len(), columns);
            prop_assert!(row.iter().all(|&cell| cell == CellState::Empty));
        }
    }

    #[test]
    fn cycling_visits_states_in_order((grid, r, c) in arb_grid_and_cell(), steps in 1usize..10) {
        let start = grid.get(r, c).unwrap();
        let mut current = grid;
        let mut expected = start;
        for _ in 0..steps {
            current = cycle(&current, r, c).unwrap();
            expected = expected.next();
            prop_assert_eq!(current.get(r, c), Some(expected));
        }
    }

    #[test]
    fn multiples_of_three_cycles_are_identity((grid, r, c) in arb_grid_and_cell(), k in 0usize..5) {
        let mut current = grid.clone();
        for _ in 0..3 * k {
            current = cycle(&current, r, c).unwrap();
        }
        prop_assert_eq!(current, grid);
    }

    #[test]
    fn cycle_only_touches_its_target((grid, r, c) in arb_grid_and_cell()) {
        let next = cycle(&grid, r, c).unwrap();
        prop_assert_eq!(next.shape(), grid.shape());
        for (row_index, (before, after)) in grid.iter_rows().zip(next.iter_rows()).enumerate() {
            for (column_index, (&old, &new)) in before.iter().zip(after).enumerate() {
                if (row_index, column_index) == (r, c) {
                    prop_assert_eq!(new, old.next());
                } else {
                    prop_assert_eq!(new, old);
                }
            }
        }
    }

    #[test]
    fn clear_ignores_prior_marks(grid in arb_marked_grid()) {
        let (rows, columns) = grid.shape();
        let once = clear(rows, columns);
        let twice = clear(once.rows(), once.columns());
        prop_assert!(once.is_blank());
        prop_assert_eq!(&once, &twice);
    }

    #[test]
    fn out_of_range_cycle_is_rejected(grid in arb_marked_grid(), extra_row in 0usize..4, extra_column in 0usize..4) {
        let (rows, columns) = grid.shape();
        let before = grid.clone();

        let err = cycle(&grid, rows + extra_row, 0).unwrap_err();
        prop_assert_eq!((err.rows, err.columns), (rows, columns));
        prop_assert!(cycle(&grid, 0, columns + extra_column).is_err());
        prop_assert!(cycle(&grid, rows + extra_row, columns + extra_column).is_err());
        prop_assert_eq!(grid, before);
    }
}
