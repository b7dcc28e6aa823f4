//! Two-player maze where both players move at once.

use engine_core::{Action, Player, ScoreType, SimultaneousState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{two_player_start, validate_board, validate_points, GameError};
use crate::grid::{on_board_actions, Character, Coord, Points};

/// Simultaneous maze game state
///
/// Each turn both players pick a move, both moves are applied, and only
/// then are the rewards resolved: each player banks the reward of the cell
/// it landed on as read before any clearing, and the landed cells are
/// cleared afterwards. Two players landing on the same cell therefore both
/// bank its full value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimultaneousMazeState<const H: usize, const W: usize> {
    points: Points<H, W>,
    characters: [Character; 2],
    turn: u32,
    end_turn: u32,
}

impl<const H: usize, const W: usize> SimultaneousMazeState<H, W> {
    /// Generate a left-right mirrored board from `seed` so neither seat
    /// starts with an advantage.
    pub fn new(seed: u64, end_turn: u32) -> Result<Self, GameError> {
        let starts = two_player_start::<H, W>()?;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut points = [[0u8; W]; H];
        for (y, row) in points.iter_mut().enumerate() {
            for x in 0..W / 2 + 1 {
                let point = rng.gen_range(0..10);
                if starts.contains(&Coord::new(y, x)) {
                    continue;
                }
                row[x] = point;
                row[W - 1 - x] = point;
            }
        }
        Self::from_parts(points, starts, end_turn)
    }

    /// Build a board from explicit rewards and start cells. Rewards under
    /// the start cells are cleared.
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
            turn: 0,
            end_turn,
        })
    }

    pub fn points(&self) -> &Points<H, W> {
        &self.points
    }

    pub fn character(&self, player: Player) -> &Character {
        &self.characters[player.index()]
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }
}

impl<const H: usize, const W: usize> SimultaneousState for SimultaneousMazeState<H, W> {
    fn is_done(&self) -> bool {
        self.turn >= self.end_turn
    }

    fn legal_actions(&self, player: Player) -> Vec<Action> {
        on_board_actions::<H, W>(self.characters[player.index()].coord)
    }

    fn advance(&mut self, first: Action, second: Action) {
        for (character, action) in self.characters.iter_mut().zip([first, second]) {
            if let Some(next) = character.coord.step::<H, W>(action) {
                character.coord = next;
            }
            character.game_score += self.points[character.coord.y][character.coord.x] as ScoreType;
        }
        for character in self.characters {
            self.points[character.coord.y][character.coord.x] = 0;
        }
        self.turn += 1;
    }

    fn player_score(&self, player: Player) -> ScoreType {
        self.characters[player.index()].game_score
    }
}
