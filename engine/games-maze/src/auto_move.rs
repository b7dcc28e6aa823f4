//! Placement puzzle: choose where `N` self-moving characters start.
//!
//! Once placed, every character walks greedily to its best neighbouring
//! cell each turn, so the only decision is the starting layout. That makes
//! it a payload for hill climbing and simulated annealing rather than for
//! tree search.

use engine_core::{LocalSearchState, ScoreType};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{validate_board, validate_points, GameError};
use crate::grid::{Coord, Points, ACTION_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoMoveMazeState<const H: usize, const W: usize, const N: usize> {
    points: Points<H, W>,
    characters: [Coord; N],
    turn: u32,
    end_turn: u32,
    game_score: ScoreType,
}

impl<const H: usize, const W: usize, const N: usize> AutoMoveMazeState<H, W, N> {
    /// Generate a board from `seed` with rewards 1-9 on every cell.
    ///
    /// All characters start on (0, 0) until placed.
    pub fn new(seed: u64, end_turn: u32) -> Result<Self, GameError> {
        validate_board::<H, W>()?;
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut points = [[0u8; W]; H];
        for row in points.iter_mut() {
            for cell in row.iter_mut() {
                *cell = rng.gen_range(1..10);
            }
        }
        Self::from_parts(points, end_turn)
    }

    pub fn from_parts(points: Points<H, W>, end_turn: u32) -> Result<Self, GameError> {
        validate_board::<H, W>()?;
        validate_points(&points)?;
        if end_turn == 0 {
            return Err(GameError::ZeroLength);
        }
        Ok(Self {
            points,
            characters: [Coord::default(); N],
            turn: 0,
            end_turn,
            game_score: 0,
        })
    }

    pub fn set_character(&mut self, id: usize, coord: Coord) -> Result<(), GameError> {
        if !coord.in_bounds::<H, W>() {
            return Err(GameError::CharacterOutOfBounds {
                y: coord.y,
                x: coord.x,
            });
        }
        let slot = self
            .characters
            .get_mut(id)
            .ok_or(GameError::UnknownCharacter { id })?;
        *slot = coord;
        Ok(())
    }

    pub fn characters(&self) -> &[Coord; N] {
        &self.characters
    }

    pub fn points(&self) -> &Points<H, W> {
        &self.points
    }

    pub fn is_done(&self) -> bool {
        self.turn >= self.end_turn
    }

    /// Step to the neighbour with the highest reward. Ties go to the earlier
    /// direction in +x, -x, +y, -y order.
    fn move_character(&mut self, id: usize) {
        let from = self.characters[id];
        let mut best: Option<(u8, Coord)> = None;
        for action in 0..ACTION_COUNT {
            if let Some(next) = from.step::<H, W>(action) {
                let point = self.points[next.y][next.x];
                if best.map_or(true, |(best_point, _)| point > best_point) {
                    best = Some((point, next));
                }
            }
        }
        if let Some((_, next)) = best {
            self.characters[id] = next;
        }
    }

    /// One turn: every character moves, then each banks and clears its cell.
    fn advance(&mut self) {
        for id in 0..N {
            self.move_character(id);
        }
        for c in self.characters {
            let point = &mut self.points[c.y][c.x];
            self.game_score += *point as ScoreType;
            *point = 0;
        }
        self.turn += 1;
    }

    /// Play the placement out to the final turn.
    ///
    /// Rewards under the starting cells are cleared without being banked.
    pub fn simulate(&self) -> Self {
        let mut state = *self;
        for c in self.characters {
            state.points[c.y][c.x] = 0;
        }
        while !state.is_done() {
            state.advance();
        }
        state
    }

    /// Score banked so far by a simulated state.
    pub fn game_score(&self) -> ScoreType {
        self.game_score
    }
}

impl<const H: usize, const W: usize, const N: usize> LocalSearchState
    for AutoMoveMazeState<H, W, N>
{
    fn init(&mut self, rng: &mut ChaCha20Rng) {
        for c in self.characters.iter_mut() {
            *c = Coord::new(rng.gen_range(0..H), rng.gen_range(0..W));
        }
    }

    fn transition(&mut self, rng: &mut ChaCha20Rng) {
        if N == 0 {
            return;
        }
        let id = rng.gen_range(0..N);
        self.characters[id] = Coord::new(rng.gen_range(0..H), rng.gen_range(0..W));
    }

    fn score(&self) -> ScoreType {
        self.simulate().game_score
    }
}
