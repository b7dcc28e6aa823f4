use thiserror::Error;

/// Errors raised when a maze is built from an invalid configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("board {height}x{width} is too small: {reason}")]
    BoardTooSmall {
        height: usize,
        width: usize,
        reason: &'static str,
    },

    #[error("character at ({y}, {x}) is off the board")]
    CharacterOutOfBounds { y: usize, x: usize },

    #[error("character at ({y}, {x}) stands on a wall")]
    CharacterOnWall { y: usize, x: usize },

    #[error("cell ({y}, {x}) holds {value}, rewards must be 0-9")]
    InvalidPoint { y: usize, x: usize, value: u8 },

    #[error("no character with id {id}")]
    UnknownCharacter { id: usize },

    #[error("no open cell to place a character")]
    NoOpenCell,

    #[error("game must last at least one turn")]
    ZeroLength,
}

pub(crate) fn validate_points<const H: usize, const W: usize>(
    points: &crate::grid::Points<H, W>,
) -> Result<(), GameError> {
    for (y, row) in points.iter().enumerate() {
        for (x, &value) in row.iter().enumerate() {
            if value > 9 {
                return Err(GameError::InvalidPoint { y, x, value });
            }
        }
    }
    Ok(())
}

pub(crate) fn validate_board<const H: usize, const W: usize>() -> Result<(), GameError> {
    if H == 0 || W == 0 {
        return Err(GameError::BoardTooSmall {
            height: H,
            width: W,
            reason: "needs at least one cell",
        });
    }
    Ok(())
}

/// Starting cells for two players: either side of the middle of the middle row.
pub(crate) fn two_player_start<const H: usize, const W: usize>(
) -> Result<[crate::grid::Coord; 2], GameError> {
    if H == 0 || W < 3 {
        return Err(GameError::BoardTooSmall {
            height: H,
            width: W,
            reason: "two players need a board at least 3 cells wide",
        });
    }
    Ok([
        crate::grid::Coord::new(H / 2, W / 2 - 1),
        crate::grid::Coord::new(H / 2, W / 2 + 1),
    ])
}
