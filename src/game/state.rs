//! Core game state: the board, the snake and the visited-cell grid.

use std::time::Duration;

use glam::IVec2;
use smallvec::SmallVec;
use strum_macros::AsRefStr;
use tracing::warn;

use crate::constants::INITIAL_SNAKE_LENGTH;
use crate::game::direction::Direction;
use crate::levels::Level;
use crate::mask::CellGrid;

/// Game status. `Won` and `Lost` are terminal: once reached, no further
/// mutation of the snake, visited grid or status occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    Idle,
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// The snake: an ordered list of segments, head first, plus its current
/// heading. Length is constant across ticks; there is no growth mechanic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    pub segments: SmallVec<[IVec2; INITIAL_SNAKE_LENGTH]>,
    pub direction: Direction,
}

impl Snake {
    /// The head segment.
    ///
    /// # Panics
    ///
    /// Panics if the snake has no segments.
    pub fn head(&self) -> IVec2 {
        self.segments[0]
    }

    /// Whether any segment occupies the given position.
    pub fn occupies(&self, pos: IVec2) -> bool {
        self.segments.iter().any(|&segment| segment == pos)
    }
}

/// Complete simulation state for one game session.
///
/// Created once per session from a [`Level`], mutated in place by the update
/// engine every tick, and discarded when a new session starts. The level's
/// mask is shared (not copied) and never mutated.
#[derive(Debug, Clone)]
pub struct GameState {
    pub level: Level,
    pub snake: Snake,
    /// Cells the snake's head has ever occupied while traversable.
    /// Monotonic: a cell never reverts to unvisited.
    pub visited: CellGrid,
    /// Count of `true` cells in `visited`, maintained incrementally so a
    /// tick never rescans the grid.
    pub visited_count: u32,
    pub status: GameStatus,
    pub last_tick_time: Duration,
}

impl GameState {
    /// Creates the initial state for a level: a centered snake of
    /// [`INITIAL_SNAKE_LENGTH`] segments heading right, its traversable
    /// starting cells already marked visited.
    ///
    /// A starting segment that falls outside the level's mask is left
    /// unvisited rather than rejected; that only happens with malformed
    /// level data, so a diagnostic is emitted and play continues.
    pub fn new(level: Level) -> Self {
        let start_x = (level.width / 2) as i32;
        let start_y = (level.height / 2) as i32;

        let segments: SmallVec<[IVec2; INITIAL_SNAKE_LENGTH]> = (0..INITIAL_SNAKE_LENGTH as i32)
            .map(|i| IVec2::new(start_x - i, start_y))
            .collect();

        let mut visited = CellGrid::new(level.width, level.height);
        let mut visited_count = 0;
        for &segment in &segments {
            if !level.is_traversable(segment) {
                warn!(x = segment.x, y = segment.y, "Initial snake segment is not traversable, leaving unvisited");
                continue;
            }
            if !visited.get(segment.x as u32, segment.y as u32) {
                visited.set(segment.x as u32, segment.y as u32, true);
                visited_count += 1;
            }
        }

        Self {
            level,
            snake: Snake {
                segments,
                direction: Direction::Right,
            },
            visited,
            visited_count,
            status: GameStatus::Playing,
            last_tick_time: Duration::ZERO,
        }
    }
}

impl Default for GameState {
    /// Initial state on the default open 16x24 board.
    fn default() -> Self {
        Self::new(Level::default())
    }
}

/// The position one cell away from `pos` in the given direction. Pure; the
/// result may be out of bounds and must be classified by the caller.
pub fn next_position(pos: IVec2, direction: Direction) -> IVec2 {
    pos + direction.as_ivec2()
}
