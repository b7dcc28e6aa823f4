//! Search configuration parameters.

/// UCB1 exploration constant for MCTS and DUCT.
pub const DEFAULT_C: f64 = 1.0;

/// MCTS leaves are expanded after this many playouts.
pub const MCTS_EXPAND_THRESHOLD: u32 = 10;

/// DUCT leaves are expanded after this many playouts.
pub const DUCT_EXPAND_THRESHOLD: u32 = 5;

/// How a visited node picks the child to descend into.
///
/// Either way, a child that has never been visited is always taken first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// Maximize `1 - w/n + c * sqrt(2 * ln(t) / n)`.
    Ucb1 { c: f64 },
    /// Maximize `1 - w/n` with no exploration term.
    Greedy,
}

/// Configuration for tree search.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsConfig {
    /// Number of simulations run by a playout-bounded search.
    pub playouts: u32,

    pub selection: Selection,

    /// A leaf is expanded once its visit count reaches this value.
    /// 1 expands on the first visit.
    pub expand_threshold: u32,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self::mcts()
    }
}

impl MctsConfig {
    /// UCB1 with random playouts, expanding late to let playout noise
    /// average out.
    pub fn mcts() -> Self {
        Self {
            playouts: 3000,
            selection: Selection::Ucb1 { c: DEFAULT_C },
            expand_threshold: MCTS_EXPAND_THRESHOLD,
        }
    }

    /// Thunder search: deterministic leaf values, so expand immediately and
    /// select greedily.
    pub fn thunder() -> Self {
        Self {
            playouts: 3000,
            selection: Selection::Greedy,
            expand_threshold: 1,
        }
    }

    /// Decoupled UCT over simultaneous moves.
    pub fn duct() -> Self {
        Self {
            playouts: 1000,
            selection: Selection::Ucb1 { c: DEFAULT_C },
            expand_threshold: DUCT_EXPAND_THRESHOLD,
        }
    }

    /// Builder pattern: set number of simulations.
    pub fn with_playouts(mut self, n: u32) -> Self {
        self.playouts = n;
        self
    }

    /// Builder pattern: select by UCB1 with exploration constant `c`.
    pub fn with_c(mut self, c: f64) -> Self {
        self.selection = Selection::Ucb1 { c };
        self
    }

    /// Builder pattern: set the expansion threshold (clamped to at least 1).
    pub fn with_expand_threshold(mut self, threshold: u32) -> Self {
        self.expand_threshold = threshold.max(1);
        self
    }

    /// Exploration constant, or 0.0 for greedy selection.
    pub fn exploration(&self) -> f64 {
        match self.selection {
            Selection::Ucb1 { c } => c,
            Selection::Greedy => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config, MctsConfig::mcts());
        assert_eq!(config.expand_threshold, 10);
        assert!((config.exploration() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_presets() {
        let thunder = MctsConfig::thunder();
        assert_eq!(thunder.selection, Selection::Greedy);
        assert_eq!(thunder.expand_threshold, 1);
        assert!(thunder.exploration().abs() < 1e-12);

        let duct = MctsConfig::duct();
        assert_eq!(duct.expand_threshold, 5);
        assert_eq!(duct.playouts, 1000);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MctsConfig::thunder()
            .with_playouts(100)
            .with_c(0.5)
            .with_expand_threshold(0);

        assert_eq!(config.playouts, 100);
        assert_eq!(config.selection, Selection::Ucb1 { c: 0.5 });
        assert_eq!(config.expand_threshold, 1);
    }
}
