//! Integration tests for whole games played through the facade crate

use sense_stetris::core::{GameState, Status};
use sense_stetris::types::{Coord, Key, GRID_HEIGHT, GRID_WIDTH, INIT_NEXT_GAME_TICK, SPAWN};

fn started() -> GameState {
    let mut game = GameState::new();
    assert!(game.step(Some(Key::Up)));
    game
}

/// Steer the active tile from the spawn column to `x` and drop it.
fn drop_in_column(game: &mut GameState, x: u8) {
    assert_eq!(game.active(), Some(SPAWN));
    let key = if x < SPAWN.x { Key::Left } else { Key::Right };
    for _ in 0..SPAWN.x.abs_diff(x) {
        game.advance_tick();
        game.step(Some(key));
    }
    game.advance_tick();
    game.step(Some(Key::Down));
}

fn fill_bottom_row(game: &mut GameState) {
    for x in 0..GRID_WIDTH {
        drop_in_column(game, x);
    }
}

/// Run the loop without input until the next game step has happened.
fn idle_until_step(game: &mut GameState) {
    for _ in 0..game.next_game_tick() {
        game.advance_tick();
        game.step(None);
    }
}

fn assert_invariants(game: &GameState) {
    let field = game.playfield();
    assert!(field.is_consistent());
    assert!(game.next_game_tick() >= 1);
    assert!(game.tick() < game.next_game_tick());
    match game.active() {
        Some(at) => {
            assert_eq!(game.status(), Status::Active);
            assert!(field.is_occupied(at));
        }
        None => assert_eq!(game.status(), Status::GameOver),
    }
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameState::new();
    assert_eq!(game.status(), Status::GameOver);
    assert_eq!(game.active(), None);
    assert_eq!(game.next_game_tick(), INIT_NEXT_GAME_TICK);

    assert!(game.step(Some(Key::Right)));
    assert_eq!(game.status(), Status::Active);
    assert_eq!(game.active(), Some(SPAWN));
    assert_eq!(game.tiles(), 1);
    assert_eq!(game.playfield().occupied_count(), 1);
    assert_invariants(&game);
}

#[test]
fn test_drop_lands_in_bottom_row() {
    let mut game = started();
    game.advance_tick();
    assert!(game.step(Some(Key::Down)));

    let bottom = Coord::new(SPAWN.x, GRID_HEIGHT - 1);
    assert!(game.playfield().is_occupied(bottom));
    assert_eq!(game.tick(), 0);
    // The landed tile is done; a new one is already waiting at the top.
    assert_eq!(game.active(), Some(SPAWN));
    assert_eq!(game.tiles(), 2);
    assert!(game.flags().tile_added);
    assert_invariants(&game);
}

#[test]
fn test_left_then_right_returns_to_column() {
    let mut game = started();
    let color = game.playfield().color(SPAWN);

    game.advance_tick();
    game.step(Some(Key::Left));
    assert_eq!(game.active(), Some(Coord::new(SPAWN.x - 1, 0)));
    assert!(!game.playfield().is_occupied(SPAWN));

    game.advance_tick();
    game.step(Some(Key::Right));
    assert_eq!(game.active(), Some(SPAWN));
    assert_eq!(game.playfield().color(SPAWN), color);
    assert_eq!(game.playfield().occupied_count(), 1);
}

#[test]
fn test_walls_stop_sideways_moves() {
    let mut game = started();
    for _ in 0..GRID_WIDTH {
        game.advance_tick();
        game.step(Some(Key::Left));
    }
    assert_eq!(game.active(), Some(Coord::new(0, 0)));

    for _ in 0..GRID_WIDTH {
        game.advance_tick();
        game.step(Some(Key::Right));
    }
    assert_eq!(game.active(), Some(Coord::new(GRID_WIDTH - 1, 0)));
    assert_invariants(&game);
}

#[test]
fn test_full_bottom_row_is_cleared() {
    let mut game = started();
    fill_bottom_row(&mut game);

    assert_eq!(game.rows(), 1);
    assert_eq!(game.score(), 1);
    assert_eq!(game.level(), 0);
    assert!(game.flags().row_clear);
    assert!(!game.playfield().is_row_full(GRID_HEIGHT - 1));
    // Everything shifted down; only the fresh tile is left.
    assert_eq!(game.playfield().occupied_count(), 1);
    assert_eq!(game.active(), Some(SPAWN));
    assert_eq!(game.tiles(), u32::from(GRID_WIDTH) + 1);
    assert_invariants(&game);
}

#[test]
fn test_two_clears_raise_the_level() {
    let mut game = started();
    fill_bottom_row(&mut game);
    fill_bottom_row(&mut game);

    assert_eq!(game.rows(), 2);
    assert_eq!(game.level(), 1);
    assert_eq!(game.score(), 2);
    assert_eq!(game.next_game_tick(), 40);

    // Level 1 clears are worth two points.
    fill_bottom_row(&mut game);
    assert_eq!(game.score(), 4);
    assert_invariants(&game);
}

#[test]
fn test_gravity_moves_one_row_per_step() {
    let mut game = started();
    idle_until_step(&mut game);
    assert_eq!(game.active(), Some(Coord::new(SPAWN.x, 1)));
    idle_until_step(&mut game);
    assert_eq!(game.active(), Some(Coord::new(SPAWN.x, 2)));
    assert_eq!(game.tiles(), 1);
}

#[test]
fn test_stacked_column_ends_and_any_key_restarts() {
    let mut game = started();
    for _ in 0..GRID_HEIGHT - 1 {
        game.advance_tick();
        game.step(Some(Key::Down));
        assert_invariants(&game);
    }
    assert_eq!(game.status(), Status::Active);

    // The last tile spawned on top of a full column; the next step cannot
    // spawn another.
    idle_until_step(&mut game);
    assert_eq!(game.status(), Status::GameOver);
    assert_eq!(game.active(), None);
    assert_eq!(game.next_game_tick(), INIT_NEXT_GAME_TICK);
    assert_invariants(&game);

    // Nothing happens until a key arrives.
    game.advance_tick();
    assert!(!game.step(None));

    assert!(game.step(Some(Key::Left)));
    assert_eq!(game.status(), Status::Active);
    assert_eq!(game.tiles(), 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.playfield().occupied_count(), 1);
    assert_invariants(&game);
}

#[test]
fn test_snapshot_matches_state() {
    let mut game = started();
    drop_in_column(&mut game, 0);

    let snap = game.snapshot();
    assert!(snap.board[GRID_HEIGHT as usize - 1][0]);
    assert!(snap.board[0][SPAWN.x as usize]);
    assert_eq!(snap.active, Some(SPAWN));
    assert_eq!(snap.tiles, 2);
    assert!(!snap.game_over());
    assert_eq!(
        Some(snap.colors[0][SPAWN.x as usize]),
        game.playfield().color(SPAWN)
    );
}
