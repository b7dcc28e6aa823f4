//! Leaf evaluation for tree search.
//!
//! When a simulation reaches an unfinished leaf, the evaluator estimates its
//! value: the chance in `[0, 1]` that the player to move there wins.

use engine_core::{AlternatingState, ScoreRateState};
use rand_chacha::ChaCha20Rng;

use crate::playout::playout;

/// Trait for leaf evaluators.
///
/// Implementations:
/// - [`RolloutEvaluator`]: one random playout to the end (MCTS)
/// - [`ScoreRateEvaluator`]: the state's own score rate (Thunder)
pub trait LeafEvaluator<S: AlternatingState> {
    /// Estimate the value of an unfinished `state` for its acting player.
    fn evaluate(&mut self, state: &S) -> f64;
}

/// Random rollout evaluator that plays random moves to the end of the game.
/// Returns the game outcome as the value estimate.
#[derive(Debug)]
pub struct RolloutEvaluator<'a> {
    rng: &'a mut ChaCha20Rng,
}

impl<'a> RolloutEvaluator<'a> {
    pub fn new(rng: &'a mut ChaCha20Rng) -> Self {
        Self { rng }
    }
}

impl<S: AlternatingState> LeafEvaluator<S> for RolloutEvaluator<'_> {
    fn evaluate(&mut self, state: &S) -> f64 {
        playout(state.clone(), self.rng)
    }
}

/// Reads [`ScoreRateState::score_rate`] directly. Deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreRateEvaluator;

impl<S: ScoreRateState> LeafEvaluator<S> for ScoreRateEvaluator {
    fn evaluate(&mut self, state: &S) -> f64 {
        state.score_rate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine_core::{Action, ScoreType};
    use rand::SeedableRng;

    /// One move left; the mover wins by `lead`.
    #[derive(Clone)]
    struct LastMove {
        moved: bool,
        lead: ScoreType,
    }

    impl AlternatingState for LastMove {
        fn is_done(&self) -> bool {
            self.moved
        }
        fn legal_actions(&self) -> Vec<Action> {
            vec![0, 1]
        }
        fn advance(&mut self, _action: Action) {
            self.moved = true;
            self.lead = -self.lead;
        }
        fn score(&self) -> ScoreType {
            self.lead
        }
        fn is_first_player(&self) -> bool {
            !self.moved
        }
    }

    impl ScoreRateState for LastMove {
        fn score_rate(&self) -> f64 {
            if self.lead > 0 {
                0.9
            } else {
                0.1
            }
        }
    }

    #[test]
    fn test_rollout_reports_mover_view() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut evaluator = RolloutEvaluator::new(&mut rng);
        let winning = LastMove {
            moved: false,
            lead: 3,
        };
        let losing = LastMove {
            moved: false,
            lead: -3,
        };
        assert!((evaluator.evaluate(&winning) - 1.0).abs() < 1e-12);
        assert!(evaluator.evaluate(&losing).abs() < 1e-12);
    }

    #[test]
    fn test_score_rate_evaluator() {
        let mut evaluator = ScoreRateEvaluator;
        let state = LastMove {
            moved: false,
            lead: 2,
        };
        assert!((evaluator.evaluate(&state) - 0.9).abs() < 1e-12);
    }
}
