//! Single-agent maze with walls and a distance-aware evaluation.

use std::collections::VecDeque;

use engine_core::{Action, ScoreType, SinglePlayerState};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::{validate_board, validate_points, GameError};
use crate::grid::{Coord, Points, ACTION_COUNT};

/// Wall layout, `true` meaning blocked.
pub type Walls<const H: usize, const W: usize> = [[bool; W]; H];

/// Maze with impassable cells.
///
/// Plays like [`MazeState`](crate::MazeState), but `evaluate_score` adds the
/// breadth-first distance to the nearest remaining reward as a tiebreaker:
/// `score * H * W - distance`. A distance can never exceed `H * W`, so any
/// score gain outranks any distance change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallMazeState<const H: usize, const W: usize> {
    points: Points<H, W>,
    walls: Walls<H, W>,
    character: Coord,
    turn: u32,
    end_turn: u32,
    game_score: ScoreType,
}

impl<const H: usize, const W: usize> WallMazeState<H, W> {
    /// Generate rewards and a start cell from `seed` around a caller-supplied
    /// wall layout.
    pub fn new(seed: u64, walls: Walls<H, W>, end_turn: u32) -> Result<Self, GameError> {
        validate_board::<H, W>()?;
        if end_turn == 0 {
            return Err(GameError::ZeroLength);
        }
        let open: Vec<Coord> = (0..H)
            .flat_map(|y| (0..W).map(move |x| Coord::new(y, x)))
            .filter(|c| !walls[c.y][c.x])
            .collect();
        if open.is_empty() {
            return Err(GameError::NoOpenCell);
        }

        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let character = open[rng.gen_range(0..open.len())];

        let mut points = [[0u8; W]; H];
        for cell in open.iter().filter(|&&c| c != character) {
            points[cell.y][cell.x] = rng.gen_range(0..10);
        }

        Ok(Self {
            points,
            walls,
            character,
            turn: 0,
            end_turn,
            game_score: 0,
        })
    }

    /// Build a board from explicit rewards, walls and start cell.
    ///
    /// Rewards under walls and under the start cell are cleared.
    pub fn from_parts(
        mut points: Points<H, W>,
        walls: Walls<H, W>,
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
        if walls[character.y][character.x] {
            return Err(GameError::CharacterOnWall {
                y: character.y,
                x: character.x,
            });
        }
        if end_turn == 0 {
            return Err(GameError::ZeroLength);
        }
        for (row, wall_row) in points.iter_mut().zip(walls.iter()) {
            for (cell, &wall) in row.iter_mut().zip(wall_row.iter()) {
                if wall {
                    *cell = 0;
                }
            }
        }
        points[character.y][character.x] = 0;

        Ok(Self {
            points,
            walls,
            character,
            turn: 0,
            end_turn,
            game_score: 0,
        })
    }

    pub fn points(&self) -> &Points<H, W> {
        &self.points
    }

    pub fn walls(&self) -> &Walls<H, W> {
        &self.walls
    }

    pub fn character(&self) -> Coord {
        self.character
    }

    fn open_step(&self, from: Coord, action: Action) -> Option<Coord> {
        from.step::<H, W>(action).filter(|next| !self.walls[next.y][next.x])
    }

    /// Moves to the nearest cell holding a reward, or `H * W` if none is
    /// reachable.
    pub fn distance_to_nearest_point(&self) -> usize {
        let mut visited = [[false; W]; H];
        let mut queue = VecDeque::new();
        visited[self.character.y][self.character.x] = true;
        queue.push_back((self.character, 0usize));

        while let Some((coord, distance)) = queue.pop_front() {
            if self.points[coord.y][coord.x] > 0 {
                return distance;
            }
            for action in 0..ACTION_COUNT {
                if let Some(next) = self.open_step(coord, action) {
                    if !visited[next.y][next.x] {
                        visited[next.y][next.x] = true;
                        queue.push_back((next, distance + 1));
                    }
                }
            }
        }
        H * W
    }
}

impl<const H: usize, const W: usize> SinglePlayerState for WallMazeState<H, W> {
    fn is_done(&self) -> bool {
        self.turn >= self.end_turn
    }

    fn legal_actions(&self) -> Vec<Action> {
        (0..ACTION_COUNT)
            .filter(|&action| self.open_step(self.character, action).is_some())
            .collect()
    }

    fn advance(&mut self, action: Action) {
        if let Some(next) = self.open_step(self.character, action) {
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

    fn evaluate_score(&self) -> ScoreType {
        let area = (H * W) as ScoreType;
        self.game_score * area - self.distance_to_nearest_point() as ScoreType
    }
}
