//! State contracts consumed by the search algorithms
//!
//! Every algorithm works by cloning a state, advancing the clone one step and
//! ranking the results. Implementations should therefore be small, flat and
//! cheap to clone (fixed-size grids, no nested heap containers).

use rand_chacha::ChaCha20Rng;

/// Opaque index of one legal move. Only equality matters to the searches.
pub type Action = usize;

/// Score type wide enough to accumulate game scores without overflow.
pub type ScoreType = i64;

/// Stand-in for infinity when initializing best-so-far comparisons.
pub const INF: ScoreType = 1_000_000_000;

/// Seat in a two-player game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    /// Roster index: 0 for the first player, 1 for the second.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// Outcome of an alternating game, from the acting player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinningStatus {
    Win,
    Lose,
    Draw,
    /// The game has not finished yet.
    InProgress,
}

/// Outcome of a simultaneous game, in absolute terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimultaneousStatus {
    First,
    Second,
    Draw,
    /// The game has not finished yet.
    InProgress,
}

/// Single-agent score maximization game.
///
/// `evaluate_score` is a ranking heuristic used by the beam family only. It
/// may fold a secondary tiebreaker into the raw score, scaled so any change
/// in the primary score outranks any change in the tiebreaker.
pub trait SinglePlayerState: Clone {
    fn is_done(&self) -> bool;

    /// Legal moves from this state. Empty only when the game is over, but
    /// searches tolerate an empty set mid-game.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply one move in place.
    fn advance(&mut self, action: Action);

    /// Score banked so far.
    fn game_score(&self) -> ScoreType;

    /// Heuristic estimate used to rank candidate states.
    fn evaluate_score(&self) -> ScoreType {
        self.game_score()
    }
}

/// Two-player zero-sum game where the players take turns.
///
/// Everything is expressed from the point of view of the player about to
/// move. `advance` applies that player's move and hands the turn over, so
/// after it returns `score` and `winning_status` are from the opponent's view.
pub trait AlternatingState: Clone {
    fn is_done(&self) -> bool;

    fn legal_actions(&self) -> Vec<Action>;

    /// Apply the acting player's move and swap the acting player.
    fn advance(&mut self, action: Action);

    /// Zero-sum differential: acting player score minus opponent score.
    fn score(&self) -> ScoreType;

    /// Whether the player about to move is the one who moved first in the game.
    fn is_first_player(&self) -> bool;

    /// Result from the acting player's view; `InProgress` until `is_done`.
    fn winning_status(&self) -> WinningStatus {
        if !self.is_done() {
            return WinningStatus::InProgress;
        }
        match self.score() {
            s if s > 0 => WinningStatus::Win,
            s if s < 0 => WinningStatus::Lose,
            _ => WinningStatus::Draw,
        }
    }
}

/// Alternating game that can rate a position without playing it out.
pub trait ScoreRateState: AlternatingState {
    /// Estimated chance in `[0, 1]` that the acting player wins from here.
    fn score_rate(&self) -> f64;
}

/// Two-player game where both players choose a move each turn.
pub trait SimultaneousState: Clone {
    fn is_done(&self) -> bool;

    fn legal_actions(&self, player: Player) -> Vec<Action>;

    /// Apply both moves as one turn.
    fn advance(&mut self, first: Action, second: Action);

    fn player_score(&self, player: Player) -> ScoreType;

    fn winning_status(&self) -> SimultaneousStatus {
        if !self.is_done() {
            return SimultaneousStatus::InProgress;
        }
        let first = self.player_score(Player::First);
        let second = self.player_score(Player::Second);
        if first > second {
            SimultaneousStatus::First
        } else if first < second {
            SimultaneousStatus::Second
        } else {
            SimultaneousStatus::Draw
        }
    }
}

/// Full-assignment configuration explored by hill climbing and annealing.
pub trait LocalSearchState: Clone {
    /// Replace the configuration with a uniformly random one.
    fn init(&mut self, rng: &mut ChaCha20Rng);

    /// Perturb one random component of the configuration.
    fn transition(&mut self, rng: &mut ChaCha20Rng);

    /// Objective value of the configuration. Higher is better.
    fn score(&self) -> ScoreType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Countdown {
        left: u32,
        diff: ScoreType,
    }

    impl AlternatingState for Countdown {
        fn is_done(&self) -> bool {
            self.left == 0
        }
        fn legal_actions(&self) -> Vec<Action> {
            vec![0]
        }
        fn advance(&mut self, _action: Action) {
            self.left -= 1;
            self.diff = -self.diff;
        }
        fn score(&self) -> ScoreType {
            self.diff
        }
        fn is_first_player(&self) -> bool {
            self.left % 2 == 0
        }
    }

    #[test]
    fn test_player_roster() {
        assert_eq!(Player::First.index(), 0);
        assert_eq!(Player::Second.index(), 1);
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent().opponent(), Player::Second);
    }

    #[test]
    fn test_winning_status_follows_score_sign() {
        let running = Countdown { left: 1, diff: 3 };
        assert_eq!(running.winning_status(), WinningStatus::InProgress);

        let mut state = running;
        state.advance(0);
        assert_eq!(state.winning_status(), WinningStatus::Lose);

        let draw = Countdown { left: 0, diff: 0 };
        assert_eq!(draw.winning_status(), WinningStatus::Draw);

        let won = Countdown { left: 0, diff: 2 };
        assert_eq!(won.winning_status(), WinningStatus::Win);
    }
}
