//! Tree search over alternating games.
//!
//! Each simulation:
//! 1. Selection: descend from the root through expanded nodes
//! 2. Evaluation: score the leaf (terminal result or leaf evaluator)
//! 3. Backpropagation: update visit counts and values up to the root
//! 4. Expansion: add the leaf's children once it has enough visits
//!
//! The root is expanded before the first simulation. The final move is the
//! root child with the most visits.

use engine_core::{
    Action, AlternatingState, AlternatingView, Player, ScoreRateState, SimultaneousState,
    TimeKeeper,
};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::evaluator::{LeafEvaluator, RolloutEvaluator, ScoreRateEvaluator};
use crate::node::NodeId;
use crate::playout::terminal_value;
use crate::tree::MctsTree;

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Most visited root action, None if the root has no legal action
    pub action: Option<Action>,

    /// Mean value at the root, from the root player's view
    pub value: f64,

    /// Number of simulations performed
    pub simulations: u32,
}

/// Search state.
pub struct MctsSearch<S, E> {
    tree: MctsTree<S>,
    evaluator: E,
    config: MctsConfig,
}

impl<S: AlternatingState, E: LeafEvaluator<S>> MctsSearch<S, E> {
    /// Create a search rooted at `state` and expand the root.
    pub fn new(state: S, evaluator: E, config: MctsConfig) -> Self {
        let mut tree = MctsTree::new(state);
        tree.expand(tree.root());
        Self {
            tree,
            evaluator,
            config,
        }
    }

    /// Run the configured number of simulations.
    pub fn run(&mut self) -> SearchResult {
        for _ in 0..self.config.playouts {
            self.simulate();
        }
        self.result()
    }

    /// Run simulations until `keeper` expires, checking before each one.
    pub fn run_until(&mut self, keeper: &TimeKeeper) -> SearchResult {
        while !keeper.is_time_over() {
            self.simulate();
        }
        self.result()
    }

    /// Run a single simulation (select -> evaluate -> backpropagate -> expand).
    pub fn simulate(&mut self) {
        let leaf_id = self.select();
        let leaf = self.tree.get(leaf_id);

        let (value, terminal) = match terminal_value(&leaf.state) {
            Some(value) => (value, true),
            None => (self.evaluator.evaluate(&leaf.state), false),
        };

        self.tree.backpropagate(leaf_id, value);

        let leaf = self.tree.get(leaf_id);
        if !terminal && !leaf.is_expanded() && leaf.visit_count == self.config.expand_threshold {
            self.tree.expand(leaf_id);
        }
    }

    /// Descend from the root to a terminal or unexpanded node.
    fn select(&self) -> NodeId {
        let mut current = self.tree.root();
        loop {
            let node = self.tree.get(current);
            if node.state.is_done() || !node.is_expanded() {
                return current;
            }
            match self.tree.select_child(current, self.config.selection) {
                Some(child_id) => current = child_id,
                None => return current,
            }
        }
    }

    pub fn result(&self) -> SearchResult {
        let root = self.tree.get(self.tree.root());
        let result = SearchResult {
            action: self.tree.best_action().map(|(action, _)| action),
            value: root.mean_value(),
            simulations: root.visit_count,
        };
        let stats = self.tree.stats();
        debug!(
            action = ?result.action,
            value = result.value,
            simulations = result.simulations,
            nodes = stats.total_nodes,
            max_depth = stats.max_depth,
            "tree search finished"
        );
        result
    }

    /// Get the search tree (for inspection/debugging).
    pub fn tree(&self) -> &MctsTree<S> {
        &self.tree
    }
}

/// UCB1 tree search with random playouts, `playouts` simulations.
pub fn mcts_action<S: AlternatingState>(
    state: &S,
    playouts: u32,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    let config = MctsConfig::mcts().with_playouts(playouts);
    MctsSearch::new(state.clone(), RolloutEvaluator::new(rng), config)
        .run()
        .action
}

/// UCB1 tree search with random playouts until `time_threshold_ms` elapses.
///
/// The root is always expanded, so an expired deadline still yields the
/// first legal action rather than None.
pub fn mcts_action_with_time<S: AlternatingState>(
    state: &S,
    time_threshold_ms: u64,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    let keeper = TimeKeeper::new(time_threshold_ms);
    let mut search = MctsSearch::new(state.clone(), RolloutEvaluator::new(rng), MctsConfig::mcts());
    let result = search.run_until(&keeper);
    trace!(simulations = result.simulations, "mcts out of time");
    result.action
}

/// Thunder search: tree search valued by score rate, `playouts` simulations.
pub fn thunder_action<S: ScoreRateState>(state: &S, playouts: u32) -> Option<Action> {
    let config = MctsConfig::thunder().with_playouts(playouts);
    MctsSearch::new(state.clone(), ScoreRateEvaluator, config)
        .run()
        .action
}

/// Thunder search until `time_threshold_ms` elapses.
pub fn thunder_action_with_time<S: ScoreRateState>(
    state: &S,
    time_threshold_ms: u64,
) -> Option<Action> {
    let keeper = TimeKeeper::new(time_threshold_ms);
    let mut search = MctsSearch::new(state.clone(), ScoreRateEvaluator, MctsConfig::thunder());
    let result = search.run_until(&keeper);
    trace!(simulations = result.simulations, "thunder out of time");
    result.action
}

/// MCTS for one seat of a simultaneous game.
///
/// The game is searched as an alternating one in which `player` commits
/// first and the opponent answers, so the opponent is modeled as seeing
/// `player`'s move.
pub fn simultaneous_mcts_action<S: SimultaneousState>(
    state: &S,
    player: Player,
    playouts: u32,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    let view = AlternatingView::new(state.clone(), player);
    mcts_action(&view, playouts, rng)
}
