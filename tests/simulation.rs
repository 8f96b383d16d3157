//! End-to-end properties of the simulation through the public API

use life_grid::game_of_life::{count_live_neighbors, parse_pattern};
use life_grid::{build_grid, EdgePolicy, Grid, Settings, TickScheduler, TransitionEngine};

#[rustfmt::skip]
const BLINKER: [u8; 25] = [
    0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
    0, 1, 1, 1, 0,
    0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
];

#[test]
fn rule_table_matches_conway() {
    let expected = |alive: bool, count: u8| match (alive, count) {
        (true, c) if c < 2 => false,
        (true, 2) | (true, 3) => true,
        (true, _) => false,
        (false, 3) => true,
        (false, _) => false,
    };

    for alive in [true, false] {
        for count in 0..=8 {
            assert_eq!(TransitionEngine::next_state(alive, count), expected(alive, count));
        }
    }
}

#[test]
fn toroidal_corner_sees_opposite_corner() {
    let mut pattern = [0u8; 9];
    pattern[0] = 1;
    let grid = Grid::from_pattern(&pattern, EdgePolicy::Toroidal).unwrap();

    assert_eq!(count_live_neighbors(&grid, 2, 2), 1);
    assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
}

#[test]
fn identical_seeds_give_identical_histories() {
    let mut first = Grid::random(24, 18, EdgePolicy::Toroidal, -9_000_000_001, 0.35).unwrap();
    let mut second = Grid::random(24, 18, EdgePolicy::Toroidal, -9_000_000_001, 0.35).unwrap();
    assert_eq!(first.alive_flags(), second.alive_flags());

    for _ in 0..20 {
        TickScheduler::tick(&mut first);
        TickScheduler::tick(&mut second);
        assert_eq!(first.alive_flags(), second.alive_flags());
    }
}

#[test]
fn different_seeds_diverge() {
    let first = Grid::random(32, 32, EdgePolicy::Toroidal, 1, 0.5).unwrap();
    let second = Grid::random(32, 32, EdgePolicy::Toroidal, 2, 0.5).unwrap();
    assert_ne!(first.alive_flags(), second.alive_flags());
}

#[test]
fn dead_grid_stays_dead() {
    for policy in [EdgePolicy::Toroidal, EdgePolicy::Bounded] {
        let mut grid = Grid::new(7, 11, policy).unwrap();
        for report in TickScheduler::run(&mut grid, 10) {
            assert_eq!(report.living, 0);
        }
        assert!(grid.is_extinct());
    }
}

#[test]
fn interior_block_is_still_life() {
    for side in [4usize, 6, 9] {
        let mut pattern = vec![0u8; side * side];
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            pattern[r * side + c] = 1;
        }

        for policy in [EdgePolicy::Toroidal, EdgePolicy::Bounded] {
            let mut grid = Grid::from_pattern(&pattern, policy).unwrap();
            let original = grid.alive_flags();
            TickScheduler::run(&mut grid, 12);
            assert_eq!(grid.alive_flags(), original, "side {side}, {policy:?}");
        }
    }
}

#[test]
fn blinker_has_period_two() {
    let mut grid = Grid::from_pattern(&BLINKER, EdgePolicy::Toroidal).unwrap();
    let horizontal = grid.alive_flags();

    TickScheduler::tick(&mut grid);
    let vertical = parse_pattern("00000\n00100\n00100\n00100\n00000\n", EdgePolicy::Toroidal).unwrap();
    assert_eq!(grid.alive_flags(), vertical.alive_flags());

    TickScheduler::tick(&mut grid);
    assert_eq!(grid.alive_flags(), horizontal);
}

#[test]
fn glider_wraps_around_torus() {
    // A glider moves one cell diagonally every 4 generations, so on an 8x8
    // torus it returns to its starting position after 32.
    let content = "00100000\n10100000\n01100000\n00000000\n00000000\n00000000\n00000000\n00000000\n";
    let mut grid = parse_pattern(content, EdgePolicy::Toroidal).unwrap();
    let original = grid.alive_flags();

    TickScheduler::run(&mut grid, 4);
    assert_eq!(grid.living_count(), 5);
    assert_ne!(grid.alive_flags(), original);

    TickScheduler::run(&mut grid, 28);
    assert_eq!(grid.alive_flags(), original);
}

#[test]
fn settings_drive_grid_construction() {
    let mut settings = Settings::default();
    settings.pattern.cells = Some(BLINKER.to_vec());
    settings.grid.edge_policy = EdgePolicy::Bounded;

    let mut grid = build_grid(&settings).unwrap();
    assert_eq!(grid.edge_policy(), EdgePolicy::Bounded);
    TickScheduler::run(&mut grid, 2);
    assert_eq!(grid.alive_flags(), Grid::from_pattern(&BLINKER, EdgePolicy::Bounded).unwrap().alive_flags());
}
