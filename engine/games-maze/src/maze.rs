//! Single-agent maze: walk one cell per turn, collect the reward underneath.

use engine_core::{Action, ScoreType, SinglePlayerState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{validate_board, validate_points, GameError};
use crate::grid::{on_board_actions, Coord, Points};

/// Maze game state
///
/// One character moves one cell per turn in one of four directions. Landing
/// on a reward banks its value and clears the cell. The game ends after
/// `end_turn` turns. An off-board move leaves the character in place but
/// still uses up the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeState<const H: usize, const W: usize> {
    points: Points<H, W>,
    character: Coord,
    turn: u32,
    end_turn: u32,
    game_score: ScoreType,
}

impl<const H: usize, const W: usize> MazeState<H, W> {
    /// Generate a board from `seed`: random start cell, rewards 0-9 elsewhere.
    pub fn new(seed: u64, end_turn: u32) -> Result<Self, GameError> {
        validate_board::<H, W>()?;
        if end_turn == 0 {
            return Err(GameError::ZeroLength);
        }
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let character = Coord::new(rng.gen_range(0..H), rng.gen_range(0..W));

        let mut points = [[0u8; W]; H];
        for (y, row) in points.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if character == Coord::new(y, x) {
                    continue;
                }
                *cell = rng.gen_range(0..10);
            }
        }

        Ok(Self {
            points,
            character,
            turn: 0,
            end_turn,
            game_score: 0,
        })
    }

    /// Build a board from explicit rewards and start cell.
    ///
    /// The reward under the start cell is cleared without being banked.
    pub fn from_parts(
        mut points: Points<H, W>,
        character: Coord,
        end_turn: u32,
    ) -> Result<Self, GameError> {
        validate_board::<H, W>()?;
        validate_points(&points)?;
        if !character.in_bounds::<H, W>() {
            return Err(GameError::CharacterOutOfBounds {
                y: character.y,
                x: character.x,
            });
        }
        if end_turn == 0 {
            return Err(GameError::ZeroLength);
        }
        points[character.y][character.x] = 0;

        Ok(Self {
            points,
            character,
            turn: 0,
            end_turn,
            game_score: 0,
        })
    }

    pub fn points(&self) -> &Points<H, W> {
        &self.points
    }

    pub fn character(&self) -> Coord {
        self.character
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }
}

impl<const H: usize, const W: usize> SinglePlayerState for MazeState<H, W> {
    fn is_done(&self) -> bool {
        self.turn >= self.end_turn
    }

    fn legal_actions(&self) -> Vec<Action> {
        on_board_actions::<H, W>(self.character)
    }

    fn advance(&mut self, action: Action) {
        if let Some(next) = self.character.step::<H, W>(action) {
            self.character = next;
            let point = &mut self.points[next.y][next.x];
            self.game_score += *point as ScoreType;
            *point = 0;
        }
        self.turn += 1;
    }

    fn game_score(&self) -> ScoreType {
        self.game_score
    }
}
