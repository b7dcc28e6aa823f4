//! Grid coordinates and the four-way move set shared by every maze.

use engine_core::{Action, ScoreType};

/// Number of moves: +x, -x, +y, -y.
pub const ACTION_COUNT: usize = 4;

/// Column delta per action: right, left, down, up.
pub const DX: [isize; ACTION_COUNT] = [1, -1, 0, 0];
/// Row delta per action: right, left, down, up.
pub const DY: [isize; ACTION_COUNT] = [0, 0, 1, -1];

/// Reward values per cell, `0` meaning empty.
pub type Points<const H: usize, const W: usize> = [[u8; W]; H];

/// Row/column position on an `H x W` board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub y: usize,
    pub x: usize,
}

impl Coord {
    pub const fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Neighbour in the direction of `action`, or `None` if it leaves the board.
    #[inline]
    pub fn step<const H: usize, const W: usize>(self, action: Action) -> Option<Coord> {
        if action >= ACTION_COUNT {
            return None;
        }
        let y = self.y.checked_add_signed(DY[action])?;
        let x = self.x.checked_add_signed(DX[action])?;
        (y < H && x < W).then_some(Coord { y, x })
    }

    #[inline]
    pub fn in_bounds<const H: usize, const W: usize>(self) -> bool {
        self.y < H && self.x < W
    }
}

/// A player's piece and the reward it has banked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Character {
    pub coord: Coord,
    pub game_score: ScoreType,
}

impl Character {
    pub const fn at(coord: Coord) -> Self {
        Self {
            coord,
            game_score: 0,
        }
    }
}

/// Actions that keep `coord` on the board, in action order.
pub fn on_board_actions<const H: usize, const W: usize>(coord: Coord) -> Vec<Action> {
    (0..ACTION_COUNT)
        .filter(|&action| coord.step::<H, W>(action).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_directions() {
        let c = Coord::new(1, 1);
        assert_eq!(c.step::<3, 3>(0), Some(Coord::new(1, 2)));
        assert_eq!(c.step::<3, 3>(1), Some(Coord::new(1, 0)));
        assert_eq!(c.step::<3, 3>(2), Some(Coord::new(2, 1)));
        assert_eq!(c.step::<3, 3>(3), Some(Coord::new(0, 1)));
        assert_eq!(c.step::<3, 3>(4), None);
    }

    #[test]
    fn test_corner_actions() {
        assert_eq!(on_board_actions::<3, 3>(Coord::new(0, 0)), vec![0, 2]);
        assert_eq!(on_board_actions::<3, 3>(Coord::new(2, 2)), vec![1, 3]);
        assert_eq!(on_board_actions::<1, 1>(Coord::new(0, 0)), Vec::<Action>::new());
    }
}
