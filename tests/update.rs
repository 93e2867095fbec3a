use glam::IVec2;
use pretty_assertions::assert_eq;
use smallvec::smallvec;
use snakelle::game::{Direction, GameState, GameStatus, Snake};
use snakelle::levels::{get_level, Level};
use snakelle::mask::CellGrid;

/// Builds a playing state by hand: a snake over the given cells (head
/// first), every segment already marked visited.
fn state_with_snake(level: Level, segments: &[IVec2], direction: Direction) -> GameState {
    let mut visited = CellGrid::new(level.width, level.height);
    let mut visited_count = 0;
    for &segment in segments {
        if !visited.get(segment.x as u32, segment.y as u32) {
            visited.set(segment.x as u32, segment.y as u32, true);
            visited_count += 1;
        }
    }

    GameState {
        level,
        snake: Snake {
            segments: segments.iter().copied().collect(),
            direction,
        },
        visited,
        visited_count,
        status: GameStatus::Playing,
        last_tick_time: std::time::Duration::ZERO,
    }
}

#[test]
fn test_snake_advances_and_keeps_length() {
    let mut state = GameState::default();
    let head_before = state.snake.head();

    state.update();

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake.head(), head_before + IVec2::X);
    assert_eq!(state.snake.segments.len(), 5);
    assert_eq!(state.visited_count, 6);
}

#[test]
fn test_board_edge_collision() {
    let mut state = GameState::default();

    // Head starts at (8, 12) on a 16-wide board; seven moves right are
    // legal, the eighth would leave the board.
    for _ in 0..7 {
        state.update();
        assert_eq!(state.status, GameStatus::Playing);
    }
    assert_eq!(state.snake.head(), IVec2::new(15, 12));

    let segments_before = state.snake.segments.clone();
    let visited_before = state.visited_count;
    state.update();

    assert_eq!(state.status, GameStatus::Lost);
    // No segment mutation occurs on a loss.
    assert_eq!(state.snake.segments, segments_before);
    assert_eq!(state.visited_count, visited_before);
}

#[test]
fn test_mask_boundary_collision() {
    // Traversable interior, blocked border column on each side.
    let level = Level::from_rows(&[".###.", ".###.", ".###."], None).unwrap();
    let mut state = state_with_snake(level, &[IVec2::new(1, 1), IVec2::new(2, 1)], Direction::Left);

    state.update();

    assert_eq!(state.status, GameStatus::Lost);
    assert_eq!(state.snake.head(), IVec2::new(1, 1));
}

#[test]
fn test_self_collision() {
    // 4-segment hook; moving up from (5,5) lands on the (5,4) segment.
    let segments = [IVec2::new(5, 5), IVec2::new(4, 5), IVec2::new(4, 4), IVec2::new(5, 4)];
    let mut state = state_with_snake(Level::open(10, 10), &segments, Direction::Up);

    state.update();

    assert_eq!(state.status, GameStatus::Lost);
    assert_eq!(state.snake.segments.as_slice(), segments.as_slice());
}

#[test]
fn test_moving_onto_vacating_tail_is_a_loss() {
    // Closing a loop onto the tail cell is a collision even though the tail
    // would be vacated this same tick.
    let segments = [IVec2::new(2, 2), IVec2::new(2, 3), IVec2::new(3, 3), IVec2::new(3, 2)];
    let mut state = state_with_snake(Level::open(10, 10), &segments, Direction::Right);

    state.update();

    assert_eq!(state.status, GameStatus::Lost);
}

#[test]
fn test_full_coverage_win_on_two_by_two() {
    let mut mask = CellGrid::new(2, 2);
    for y in 0..2 {
        for x in 0..2 {
            mask.set(x, y, true);
        }
    }
    let level = Level::from_mask(mask, None);
    assert_eq!(level.target_cells, Some(4));

    let mut state = state_with_snake(level, &[IVec2::new(0, 0)], Direction::Right);
    assert_eq!(state.visited_count, 1);

    state.update();
    assert_eq!(state.visited_count, 2);
    assert_eq!(state.status, GameStatus::Playing);

    state.change_direction(Direction::Down);
    state.update();
    assert_eq!(state.visited_count, 3);
    assert_eq!(state.status, GameStatus::Playing);

    state.change_direction(Direction::Left);
    state.update();
    assert_eq!(state.visited_count, 4);
    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(state.snake.head(), IVec2::new(0, 1));

    // Terminal: further ticks and direction changes mutate nothing.
    let snapshot = state.snake.clone();
    state.change_direction(Direction::Up);
    state.update();
    assert_eq!(state.status, GameStatus::Won);
    assert_eq!(state.snake, snapshot);
    assert_eq!(state.visited_count, 4);
}

#[test]
fn test_revisiting_keeps_coverage_monotonic() {
    let mut state = GameState::default();

    // Loop back onto (6, 12), a starting cell the tail has since vacated:
    // it is already visited, so the count must not move.
    state.change_direction(Direction::Up);
    state.update();
    assert_eq!(state.visited_count, 6);

    state.change_direction(Direction::Left);
    state.update();
    assert_eq!(state.visited_count, 7);

    state.update();
    assert_eq!(state.visited_count, 8);

    state.change_direction(Direction::Down);
    state.update();
    assert_eq!(state.visited_count, 8);
    assert!(state.visited.get(6, 12));
    assert_eq!(state.status, GameStatus::Playing);
}

#[test]
fn test_direction_change_rules() {
    let mut state = GameState::default();
    assert_eq!(state.snake.direction, Direction::Right);

    // Exact opposite is rejected.
    state.change_direction(Direction::Left);
    assert_eq!(state.snake.direction, Direction::Right);

    // Perpendicular is accepted.
    state.change_direction(Direction::Up);
    assert_eq!(state.snake.direction, Direction::Up);

    // Same direction is accepted.
    state.change_direction(Direction::Up);
    assert_eq!(state.snake.direction, Direction::Up);

    // Opposite of the new heading is rejected in turn.
    state.change_direction(Direction::Down);
    assert_eq!(state.snake.direction, Direction::Up);
}

#[test]
fn test_no_mutation_outside_playing() {
    let mut state = GameState::default();
    state.status = GameStatus::Idle;

    let snake_before = state.snake.clone();
    state.update();
    state.change_direction(Direction::Down);

    assert_eq!(state.status, GameStatus::Idle);
    assert_eq!(state.snake, snake_before);

    state.status = GameStatus::Lost;
    state.update();
    assert_eq!(state.status, GameStatus::Lost);
    assert_eq!(state.snake, snake_before);
}

#[test]
fn test_play_on_apple_level() {
    let mut state = GameState::new(get_level(1).unwrap());

    // The apple's midsection row is solid: seven moves right are legal.
    for _ in 0..7 {
        state.update();
        assert_eq!(state.status, GameStatus::Playing);
    }
    assert_eq!(state.snake.head(), IVec2::new(15, 12));
    assert_eq!(state.visited_count, 12);

    // The next cell is off the board entirely.
    state.update();
    assert_eq!(state.status, GameStatus::Lost);
}

#[test]
fn test_open_level_has_no_win_condition() {
    // Without a mask the target is undefined; covering cells never wins.
    let mut state = state_with_snake(Level::open(2, 2), &[IVec2::new(0, 0)], Direction::Right);

    state.update();
    state.change_direction(Direction::Down);
    state.update();
    state.change_direction(Direction::Left);
    state.update();

    assert_eq!(state.visited_count, 4);
    assert_eq!(state.status, GameStatus::Playing);
}

#[test]
fn test_state_with_snake_uses_smallvec() {
    // Segment storage stays inline at the seeded length.
    let snake = Snake {
        segments: smallvec![IVec2::ZERO; 5],
        direction: Direction::Right,
    };
    assert!(!snake.segments.spilled());
}
