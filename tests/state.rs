use glam::IVec2;
use snakelle::game::{next_position, Direction, GameState, GameStatus};
use snakelle::levels::{get_level, Level};
use speculoos::prelude::*;

#[test]
fn test_default_state() {
    let state = GameState::default();

    assert_that(&state.level.width).is_equal_to(16);
    assert_that(&state.level.height).is_equal_to(24);
    assert_that(&state.status).is_equal_to(GameStatus::Playing);
    assert_that(&state.last_tick_time.as_millis()).is_equal_to(0);

    // Snake: 5 segments centered on the board, body extending leftward.
    assert_that(&state.snake.direction).is_equal_to(Direction::Right);
    assert_that(&state.snake.segments.len()).is_equal_to(5);
    assert_that(&state.snake.head()).is_equal_to(IVec2::new(8, 12));
    for (i, segment) in state.snake.segments.iter().enumerate() {
        assert_that(segment).is_equal_to(IVec2::new(8 - i as i32, 12));
    }
}

#[test]
fn test_initial_segments_marked_visited() {
    let state = GameState::default();

    assert_that(&state.visited_count).is_equal_to(5);
    for segment in &state.snake.segments {
        assert_that(&state.visited.get(segment.x as u32, segment.y as u32)).is_true();
    }
    assert_that(&state.visited.count()).is_equal_to(state.visited_count);
}

#[test]
fn test_narrow_board_leaves_out_of_bounds_segments_unvisited() {
    // On a 5x5 board the 5-segment snake starts at x = 2 and extends to
    // x = -2; the two out-of-bounds segments are skipped, not rejected.
    let state = GameState::new(Level::open(5, 5));

    assert_that(&state.snake.segments.len()).is_equal_to(5);
    assert_that(&state.visited_count).is_equal_to(3);
    assert_that(&state.status).is_equal_to(GameStatus::Playing);
}

#[test]
fn test_masked_start_cells_left_unvisited() {
    // Center row blocks the two leftmost cells under the snake's body.
    let level = Level::from_rows(&["#####", "#####", "..###", "#####", "#####"], None).unwrap();
    let state = GameState::new(level);

    assert_that(&state.visited_count).is_equal_to(1);
    assert_that(&state.visited.get(2, 2)).is_true();
    assert_that(&state.visited.get(1, 2)).is_false();
    assert_that(&state.status).is_equal_to(GameStatus::Playing);
}

#[test]
fn test_contains_has_no_off_by_one() {
    let level = Level::open(16, 24);

    assert_that(&level.contains(IVec2::new(0, 0))).is_true();
    assert_that(&level.contains(IVec2::new(15, 23))).is_true();
    assert_that(&level.contains(IVec2::new(16, 0))).is_false();
    assert_that(&level.contains(IVec2::new(0, 24))).is_false();
    assert_that(&level.contains(IVec2::new(-1, 0))).is_false();
    assert_that(&level.contains(IVec2::new(0, -1))).is_false();
}

#[test]
fn test_traversable_without_mask() {
    let level = Level::open(4, 3);

    for y in 0..3 {
        for x in 0..4 {
            assert_that(&level.is_traversable(IVec2::new(x, y))).is_true();
        }
    }
    assert_that(&level.is_traversable(IVec2::new(4, 0))).is_false();
}

#[test]
fn test_traversable_follows_mask() {
    let level = Level::from_rows(&[".###.", ".###.", ".###."], None).unwrap();

    assert_that(&level.is_traversable(IVec2::new(0, 1))).is_false();
    assert_that(&level.is_traversable(IVec2::new(1, 1))).is_true();
    assert_that(&level.is_traversable(IVec2::new(4, 2))).is_false();
    assert_that(&level.is_traversable(IVec2::new(5, 0))).is_false();
}

#[test]
fn test_next_position_all_directions() {
    let pos = IVec2::new(3, 7);

    assert_that(&next_position(pos, Direction::Up)).is_equal_to(IVec2::new(3, 6));
    assert_that(&next_position(pos, Direction::Down)).is_equal_to(IVec2::new(3, 8));
    assert_that(&next_position(pos, Direction::Left)).is_equal_to(IVec2::new(2, 7));
    assert_that(&next_position(pos, Direction::Right)).is_equal_to(IVec2::new(4, 7));
    // Input is untouched.
    assert_that(&pos).is_equal_to(IVec2::new(3, 7));
}

#[test]
fn test_state_on_apple_level() {
    let state = GameState::new(get_level(1).unwrap());

    // The apple's midsection is solid, so every starting segment counts.
    assert_that(&state.visited_count).is_equal_to(5);
    assert_that(&state.level.target_cells).is_equal_to(Some(242));
}

#[test]
fn test_state_shares_level_mask() {
    let level = get_level(1).unwrap();
    let mask = level.mask.clone().unwrap();
    let state = GameState::new(level);

    assert!(std::sync::Arc::ptr_eq(&mask, state.level.mask.as_ref().unwrap()));
}
