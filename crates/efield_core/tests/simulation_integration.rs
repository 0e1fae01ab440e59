//! Integration tests for the simulation state
//!
//! These tests drive the state the way the application does:
//! 1. Clicks become charges through the screen → table mapping
//! 2. Ticks orbit the charges around the origin
//! 3. Resizes change the mapping for later clicks only

use approx::assert_abs_diff_eq;
use efield_core::{
    ChargeError, GridGenerator, Polarity, SimulationState, TableSpace, Vec2,
    DEFAULT_ANGULAR_STEP, MAX_CHARGES,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn state_1000x500() -> SimulationState {
    SimulationState::new(TableSpace::new(3.0, 1000, 500))
}

/// A positive charge placed right of center keeps its radius and advances by one step
#[test]
fn test_click_then_tick_advances_angle() {
    let mut state = state_1000x500();
    // 100px right of center -> (0.3, 0.0) in table space
    state.add_charge(600.0, 250.0, Polarity::Positive).unwrap();

    let before = state.charges().charges()[0].position;
    assert_abs_diff_eq!(before.x, 0.3, epsilon = 1e-6);
    assert_abs_diff_eq!(before.y, 0.0, epsilon = 1e-6);

    state.tick();

    let after = state.charges().charges()[0].position;
    assert_abs_diff_eq!(after.length(), before.length(), epsilon = 1e-6);
    assert_abs_diff_eq!(after.angle() - before.angle(), DEFAULT_ANGULAR_STEP, epsilon = 1e-6);
}

/// A charge placed exactly at canvas center sits on the origin and never moves
#[test]
fn test_click_at_center_is_stationary() {
    let mut state = state_1000x500();
    state.add_charge(500.0, 250.0, Polarity::Positive).unwrap();
    for _ in 0..10 {
        state.tick();
    }
    let p = state.charges().charges()[0].position;
    assert_abs_diff_eq!(p.x, 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-6);
}

/// Opposite charges orbit in opposite directions
#[test]
fn test_mixed_polarities_orbit_opposite_ways() {
    let mut state = state_1000x500();
    state.add_charge(750.0, 250.0, Polarity::Positive).unwrap();
    state.add_charge(750.0, 250.0, Polarity::Negative).unwrap();

    for _ in 0..25 {
        state.tick();
    }

    let charges = state.charges().charges();
    assert!(charges[0].position.y > 0.0, "positive charge should move counter-clockwise");
    assert!(charges[1].position.y < 0.0, "negative charge should move clockwise");
    assert_abs_diff_eq!(charges[0].position.y, -charges[1].position.y, epsilon = 1e-5);
}

/// Twenty clicks fill the store; the twenty-first changes nothing
#[test]
fn test_capacity_across_clicks_and_ticks() {
    let mut state = state_1000x500();
    for i in 0..MAX_CHARGES {
        let polarity = Polarity::from_modifier(i % 2 == 1);
        assert!(state.add_charge(40.0 * i as f32, 100.0, polarity).is_ok());
        state.tick();
        assert!(state.charges().len() <= MAX_CHARGES);
    }

    let snapshot = state.charges().charges().to_vec();
    let err = state.add_charge(10.0, 10.0, Polarity::Positive).unwrap_err();
    assert_eq!(err, ChargeError::CapacityExceeded { max: MAX_CHARGES });
    assert_eq!(state.charges().charges(), snapshot.as_slice());
}

/// Resizing changes where later clicks land but not existing charges
#[test]
fn test_resize_affects_new_clicks_only() {
    let mut state = state_1000x500();
    state.add_charge(0.0, 0.0, Polarity::Positive).unwrap();
    let first = state.charges().charges()[0].position;

    assert!(state.resize(1000, 1000));
    assert_eq!(state.charges().charges()[0].position, first);

    state.add_charge(0.0, 0.0, Polarity::Positive).unwrap();
    let second = state.charges().charges()[1].position;
    assert_eq!(second, Vec2::new(-1.5, 1.5));
}

/// Grid size follows the table, not the random seed
#[test]
fn test_grid_for_state_table() {
    let state = state_1000x500();
    let grid = GridGenerator::default();
    let points = grid.generate(state.table(), &mut StdRng::seed_from_u64(11));
    assert_eq!(points.len(), grid.point_count(state.table()));
    assert_eq!(points.len(), 2 * 60 * 30);
}
