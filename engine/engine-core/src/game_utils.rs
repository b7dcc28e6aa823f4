//! Shared outcome helpers for two-player games
//!
//! Monte Carlo searches score finished games as a value in `[0, 1]`; these
//! functions keep that mapping identical across every algorithm and driver.

use crate::state::{
    AlternatingState, ScoreType, SimultaneousState, SimultaneousStatus, WinningStatus,
};

/// Value of a finished alternating game from the acting player's view.
///
/// # Returns
/// * `Some(1.0)` for a win, `Some(0.0)` for a loss, `Some(0.5)` for a draw
/// * `None` while the game is still in progress
///
/// # Example
/// ```
/// use engine_core::game_utils::status_value;
/// use engine_core::WinningStatus;
///
/// assert_eq!(status_value(WinningStatus::Win), Some(1.0));
/// assert_eq!(status_value(WinningStatus::Draw), Some(0.5));
/// assert_eq!(status_value(WinningStatus::InProgress), None);
/// ```
#[inline]
pub fn status_value(status: WinningStatus) -> Option<f64> {
    match status {
        WinningStatus::Win => Some(1.0),
        WinningStatus::Lose => Some(0.0),
        WinningStatus::Draw => Some(0.5),
        WinningStatus::InProgress => None,
    }
}

/// Value of a finished simultaneous game from the first player's view.
///
/// # Example
/// ```
/// use engine_core::game_utils::simultaneous_status_value;
/// use engine_core::SimultaneousStatus;
///
/// assert_eq!(simultaneous_status_value(SimultaneousStatus::First), Some(1.0));
/// assert_eq!(simultaneous_status_value(SimultaneousStatus::Second), Some(0.0));
/// ```
#[inline]
pub fn simultaneous_status_value(status: SimultaneousStatus) -> Option<f64> {
    match status {
        SimultaneousStatus::First => Some(1.0),
        SimultaneousStatus::Second => Some(0.0),
        SimultaneousStatus::Draw => Some(0.5),
        SimultaneousStatus::InProgress => None,
    }
}

/// Win/draw/loss value read from the sign of a score differential.
///
/// Used when a playout gets stuck on a state with no legal actions before
/// the game is over.
#[inline]
pub fn score_sign_value(score: ScoreType) -> f64 {
    match score {
        s if s > 0 => 1.0,
        s if s < 0 => 0.0,
        _ => 0.5,
    }
}

/// Win-rate point of a finished alternating game for whoever moved first.
///
/// Returns 1.0 if the first player won, 0.0 if they lost and 0.5 otherwise
/// (draws and unfinished games).
pub fn first_player_win_rate_point<S: AlternatingState>(state: &S) -> f64 {
    match status_value(state.winning_status()) {
        Some(value) if state.is_first_player() => value,
        Some(value) => 1.0 - value,
        None => 0.5,
    }
}

/// Win-rate point of a finished simultaneous game for the first player.
pub fn simultaneous_first_player_win_rate_point<S: SimultaneousState>(state: &S) -> f64 {
    simultaneous_status_value(state.winning_status()).unwrap_or(0.5)
}
