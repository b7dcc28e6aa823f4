//! Two-player maze where the players take turns.

use engine_core::{Action, AlternatingState, Player, ScoreRateState, ScoreType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{two_player_start, validate_board, validate_points, GameError};
use crate::grid::{on_board_actions, Character, Coord, Points};

/// Alternating maze game state
///
/// Both characters share one board. On each turn the acting player moves
/// one cell and banks the reward underneath, then the other player acts.
/// The acting player is tracked as an index into a fixed two-seat roster;
/// `legal_actions`, `score` and `winning_status` are always expressed from
/// that seat's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlternateMazeState<const H: usize, const W: usize> {
    points: Points<H, W>,
    characters: [Character; 2],
    /// Roster index of the player about to move
    acting: usize,
    turn: u32,
    end_turn: u32,
}

impl<const H: usize, const W: usize> AlternateMazeState<H, W> {
    /// Generate a board from `seed` with both players on the middle row.
    pub fn new(seed: u64, end_turn: u32) -> Result<Self, GameError> {
        let starts = two_player_start::<H, W>()?;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut points = [[0u8; W]; H];
        for (y, row) in points.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let point = rng.gen_range(0..10);
                if starts.contains(&Coord::new(y, x)) {
                    continue;
                }
                *cell = point;
            }
        }
        Self::from_parts(points, starts, end_turn)
    }

    /// Build a board from explicit rewards and start cells; the first
    /// player moves first. Rewards under the start cells are cleared.
    pub fn from_parts(
        mut points: Points<H, W>,
        starts: [Coord; 2],
        end_turn: u32,
    ) -> Result<Self, GameError> {
        validate_board::<H, W>()?;
        validate_points(&points)?;
        for start in starts {
            if !start.in_bounds::<H, W>() {
                return Err(GameError::CharacterOutOfBounds {
                    y: start.y,
                    x: start.x,
                });
            }
            points[start.y][start.x] = 0;
        }
        if end_turn == 0 {
            return Err(GameError::ZeroLength);
        }
        Ok(Self {
            points,
            characters: starts.map(Character::at),
            acting: 0,
            turn: 0,
            end_turn,
        })
    }

    pub fn points(&self) -> &Points<H, W> {
        &self.points
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Seat about to move.
    pub fn acting_player(&self) -> Player {
        if self.acting == 0 {
            Player::First
        } else {
            Player::Second
        }
    }

    /// Character in absolute seat terms.
    pub fn character(&self, player: Player) -> &Character {
        &self.characters[player.index()]
    }

    /// Banked score in absolute seat terms.
    pub fn player_score(&self, player: Player) -> ScoreType {
        self.characters[player.index()].game_score
    }

    fn acting_character(&self) -> &Character {
        &self.characters[self.acting]
    }

    fn waiting_character(&self) -> &Character {
        &self.characters[self.acting ^ 1]
    }
}

impl<const H: usize, const W: usize> AlternatingState for AlternateMazeState<H, W> {
    fn is_done(&self) -> bool {
        self.turn >= self.end_turn
    }

    fn legal_actions(&self) -> Vec<Action> {
        on_board_actions::<H, W>(self.acting_character().coord)
    }

    fn advance(&mut self, action: Action) {
        let character = &mut self.characters[self.acting];
        if let Some(next) = character.coord.step::<H, W>(action) {
            character.coord = next;
            let point = &mut self.points[next.y][next.x];
            character.game_score += *point as ScoreType;
            *point = 0;
        }
        self.turn += 1;
        self.acting ^= 1;
    }

    fn score(&self) -> ScoreType {
        self.acting_character().game_score - self.waiting_character().game_score
    }

    fn is_first_player(&self) -> bool {
        self.acting == 0
    }
}

impl<const H: usize, const W: usize> ScoreRateState for AlternateMazeState<H, W> {
    /// Share of all banked reward held by the acting player; 0.5 before
    /// anyone has scored.
    fn score_rate(&self) -> f64 {
        let own = self.acting_character().game_score;
        let total = own + self.waiting_character().game_score;
        if total == 0 {
            0.5
        } else {
            own as f64 / total as f64
        }
    }
}
