//! The per-tick update engine.
//!
//! All failure outcomes here are status transitions, never errors: running a
//! tick on a terminal or idle state is a no-op by design.

use tracing::debug;

use crate::game::direction::Direction;
use crate::game::state::{next_position, GameState, GameStatus};

impl GameState {
    /// Advances the simulation by one tick.
    ///
    /// The snake moves one cell in its current direction. Entering a
    /// non-traversable cell (out of bounds or outside the mask) or any
    /// currently occupied segment loses the game; the segment list is left
    /// untouched on a loss so the final state stays inspectable. Otherwise
    /// the head advances, newly covered cells are counted, and full coverage
    /// of the mask wins.
    pub fn update(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }

        let next_head = next_position(self.snake.head(), self.snake.direction);

        if !self.level.is_traversable(next_head) {
            debug!(x = next_head.x, y = next_head.y, "Snake hit the boundary");
            self.status = GameStatus::Lost;
            return;
        }

        // The tail cell about to be vacated still counts as occupied at the
        // moment of this check, so closing a loop onto the tail is a loss.
        if self.snake.occupies(next_head) {
            debug!(x = next_head.x, y = next_head.y, "Snake hit itself");
            self.status = GameStatus::Lost;
            return;
        }

        self.snake.segments.insert(0, next_head);

        if !self.visited.get(next_head.x as u32, next_head.y as u32) {
            self.visited.set(next_head.x as u32, next_head.y as u32, true);
            self.visited_count += 1;
        }

        // The win is evaluated before the tail is trimmed; the pop below
        // still runs on a winning tick and is harmless.
        if let Some(target_cells) = self.level.target_cells {
            if self.visited_count >= target_cells {
                debug!(visited = self.visited_count, "Full coverage reached");
                self.status = GameStatus::Won;
            }
        }

        self.snake.segments.pop();
    }

    /// Changes the snake's heading for the next tick.
    ///
    /// Reversing into the exact opposite direction is rejected;
    /// perpendicular and same-direction changes are always accepted. No
    /// movement or collision check happens here; those are deferred to the
    /// next tick. No-op unless the game is in progress.
    pub fn change_direction(&mut self, new_direction: Direction) {
        if self.status != GameStatus::Playing {
            return;
        }
        if new_direction == self.snake.direction.opposite() {
            return;
        }
        self.snake.direction = new_direction;
    }
}
