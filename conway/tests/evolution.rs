//! Behavioural tests for grid evolution on known Life fixtures.

use conway::{DimensionError, Error, Grid, GridEvolver, State};

fn grid(text: &str) -> Grid {
    text.parse().expect("valid fixture")
}

#[test]
fn run_one_returns_initial_grid_unchanged() {
    let initial = grid("#..#\n.##.\n#...");
    let mut evolver = GridEvolver::from_grid(initial.clone());
    let snapshots = evolver.run(1).unwrap();
    assert_eq!(snapshots, vec![initial.clone()]);
    assert_eq!(evolver.generation(), 0);
    assert_eq!(evolver.grid(), &initial);
    assert_eq!(evolver.state(), State::Terminated);
}

#[test]
fn evolver_is_independent_of_callers_matrix() {
    let mut matrix = vec![
        vec![false, true, false],
        vec![false, true, false],
        vec![false, true, false],
    ];
    let evolver = GridEvolver::new(matrix.clone()).unwrap();
    let before: Vec<u8> = (0..3)
        .flat_map(|r| (0..3).map(move |c| (r, c)))
        .map(|(r, c)| evolver.neighbor_count(r, c).unwrap())
        .collect();

    for row in &mut matrix {
        row.fill(true);
    }

    let after: Vec<u8> = (0..3)
        .flat_map(|r| (0..3).map(move |c| (r, c)))
        .map(|(r, c)| evolver.neighbor_count(r, c).unwrap())
        .collect();
    assert_eq!(before, after);
    assert_eq!(evolver.grid().population(), 3);
}

#[test]
fn dead_cell_with_three_neighbours_is_born() {
    let mut evolver = GridEvolver::from_grid(grid("#.#\n...\n.#."));
    assert_eq!(evolver.neighbor_count(1, 1), Ok(3));
    evolver.step().unwrap();
    assert_eq!(evolver.grid().get(1, 1), Some(true));
}

#[test]
fn surrounded_dead_cell_stays_dead() {
    let mut evolver = GridEvolver::from_grid(grid("###\n#.#\n###"));
    assert_eq!(evolver.neighbor_count(1, 1), Ok(8));
    evolver.step().unwrap();
    assert_eq!(evolver.grid().get(1, 1), Some(false));
    // Corners each see two live neighbours and survive; edges see four and die.
    assert_eq!(evolver.grid().to_string(), "#.#\n...\n#.#");
}

#[test]
fn live_cell_with_two_neighbours_survives() {
    let mut evolver = GridEvolver::from_grid(grid("#..\n.#.\n..#"));
    assert_eq!(evolver.neighbor_count(1, 1), Ok(2));
    evolver.step().unwrap();
    assert_eq!(evolver.grid().get(1, 1), Some(true));
    assert_eq!(evolver.grid().population(), 1);
}

#[test]
fn block_is_a_still_life() {
    let block = grid("....\n.##.\n.##.\n....");
    let mut evolver = GridEvolver::from_grid(block.clone());
    for r in 1..=2 {
        for c in 1..=2 {
            assert_eq!(evolver.neighbor_count(r, c), Ok(3));
        }
    }
    for _ in 0..10 {
        evolver.step().unwrap();
        assert_eq!(evolver.grid(), &block);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = grid(".....\n.....\n.###.\n.....\n.....");
    let vertical = grid(".....\n..#..\n..#..\n..#..\n.....");

    let mut evolver = GridEvolver::from_grid(horizontal.clone());
    let snapshots = evolver.run(5).unwrap();
    assert_eq!(snapshots.len(), 5);
    for (k, snapshot) in snapshots.iter().enumerate() {
        let expected = if k % 2 == 0 { &horizontal } else { &vertical };
        assert_eq!(snapshot, expected, "generation {k}");
    }
}

#[test]
fn snapshots_are_independent_copies() {
    let mut evolver = GridEvolver::from_grid(grid(".....\n.....\n.###.\n.....\n....."));
    let mut snapshots = evolver.run(3).unwrap();
    assert_ne!(snapshots[0], snapshots[1]);

    snapshots[0].set(0, 0, true).unwrap();
    assert_eq!(snapshots[2].get(0, 0), Some(false));
    assert_eq!(evolver.grid().get(0, 0), Some(false));
    assert_eq!(evolver.grid(), &snapshots[2]);
}

#[test]
fn snapshot_k_equals_k_manual_steps() {
    let initial = grid(".#......\n..#.....\n###.....\n........\n........\n........");
    let snapshots = GridEvolver::from_grid(initial.clone()).run(6).unwrap();

    let mut manual = GridEvolver::from_grid(initial);
    for (k, snapshot) in snapshots.iter().enumerate() {
        assert_eq!(manual.generation(), k);
        assert_eq!(manual.grid(), snapshot);
        manual.step().unwrap();
    }
}

#[test]
fn glider_keeps_five_cells_away_from_edges() {
    let mut evolver =
        GridEvolver::from_grid(grid(".#......\n..#.....\n###.....\n........\n........\n........"));
    for _ in 0..4 {
        evolver.step().unwrap();
    }
    // After one full period the glider has moved one cell down and right.
    assert_eq!(
        evolver.grid().to_string(),
        "........\n..#.....\n...#....\n.###....\n........\n........"
    );
}

#[test]
fn run_rejects_zero_iterations() {
    let mut evolver = GridEvolver::from_grid(grid("#"));
    assert!(matches!(
        evolver.run(0),
        Err(Error::InvalidArgument { name: "iterations", .. })
    ));
}

#[test]
fn construction_rejects_empty_and_ragged_input() {
    assert_eq!(
        GridEvolver::new(Vec::new()).unwrap_err(),
        Error::InvalidDimension(DimensionError::Empty { rows: 0, cols: 0 })
    );
    assert_eq!(
        GridEvolver::new(vec![Vec::new(), Vec::new()]).unwrap_err(),
        Error::InvalidDimension(DimensionError::Empty { rows: 2, cols: 0 })
    );
    assert_eq!(
        GridEvolver::new(vec![vec![true; 3], vec![true; 3], vec![false; 4]]).unwrap_err(),
        Error::InvalidDimension(DimensionError::Ragged {
            row: 2,
            expected: 3,
            found: 4
        })
    );
}

#[test]
fn non_square_grids_keep_their_shape() {
    let mut evolver = GridEvolver::new(vec![vec![true; 7]; 2]).unwrap();
    let snapshots = evolver.run(4).unwrap();
    for snapshot in &snapshots {
        assert_eq!((snapshot.rows(), snapshot.cols()), (2, 7));
    }
}
