//! Decoupled UCT for simultaneous two-player games.
//!
//! Each expanded node holds a grid of children, one per (first player's
//! action, second player's action) pair. Selection picks a row for the
//! first player and a column for the second independently, each by UCB1
//! over the statistics summed along its axis. Every value in the tree is
//! from the first player's point of view; the second player's column score
//! uses the complement.

use engine_core::game_utils::simultaneous_status_value;
use engine_core::{Action, Player, SimultaneousState, TimeKeeper};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::MctsConfig;
use crate::node::NodeId;
use crate::playout::simultaneous_playout;
use crate::search::SearchResult;

#[derive(Debug, Clone)]
struct DuctNode<S> {
    parent: NodeId,
    state: S,
    /// Sum of first-player values
    value_sum: f64,
    visit_count: u32,
    /// Legal actions of each seat when expanded, indexed by `Player::index`
    actions: [Vec<Action>; 2],
    /// Row-major grid: child (i, j) lives at `i * cols + j`
    children: Vec<NodeId>,
}

impl<S> DuctNode<S> {
    fn new(parent: NodeId, state: S) -> Self {
        Self {
            parent,
            state,
            value_sum: 0.0,
            visit_count: 0,
            actions: [Vec::new(), Vec::new()],
            children: Vec::new(),
        }
    }

    fn cols(&self) -> usize {
        self.actions[1].len()
    }
}

/// Aggregate (w, n) for each row or each column of a child grid.
fn axis_totals(stats: &[(f64, u32)], rows: usize, cols: usize, player: Player) -> Vec<(f64, u32)> {
    let len = match player {
        Player::First => rows,
        Player::Second => cols,
    };
    let mut totals = vec![(0.0, 0u32); len];
    for (k, &(w, n)) in stats.iter().enumerate() {
        let slot = match player {
            Player::First => k / cols,
            Player::Second => k % cols,
        };
        totals[slot].0 += w;
        totals[slot].1 += n;
    }
    totals
}

/// Index of the first maximum under strict `>`.
fn argmax(values: impl Iterator<Item = f64>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, value) in values.enumerate() {
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((i, value));
        }
    }
    best.map(|(i, _)| i)
}

/// DUCT search state for one deciding seat.
pub struct DuctSearch<'a, S> {
    nodes: Vec<DuctNode<S>>,
    player: Player,
    config: MctsConfig,
    rng: &'a mut ChaCha20Rng,
}

impl<'a, S: SimultaneousState> DuctSearch<'a, S> {
    /// Create a search deciding for `player` and expand the root.
    pub fn new(state: S, player: Player, config: MctsConfig, rng: &'a mut ChaCha20Rng) -> Self {
        let mut search = Self {
            nodes: vec![DuctNode::new(NodeId::NONE, state)],
            player,
            config,
            rng,
        };
        search.expand(NodeId(0));
        search
    }

    fn node(&self, id: NodeId) -> &DuctNode<S> {
        &self.nodes[id.index()]
    }

    fn expand(&mut self, id: NodeId) {
        let state = self.node(id).state.clone();
        let actions = [
            state.legal_actions(Player::First),
            state.legal_actions(Player::Second),
        ];
        let mut children = Vec::with_capacity(actions[0].len() * actions[1].len());
        for &first in &actions[0] {
            for &second in &actions[1] {
                let mut next = state.clone();
                next.advance(first, second);
                children.push(NodeId(self.nodes.len() as u32));
                self.nodes.push(DuctNode::new(id, next));
            }
        }
        let node = &mut self.nodes[id.index()];
        node.actions = actions;
        node.children = children;
    }

    fn child_stats(&self, id: NodeId) -> Vec<(f64, u32)> {
        self.node(id)
            .children
            .iter()
            .map(|&c| (self.node(c).value_sum, self.node(c).visit_count))
            .collect()
    }

    /// Joint child to descend into: the first unvisited cell if any, else
    /// the best row crossed with the best column.
    fn select_child(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        if let Some(&unvisited) = node
            .children
            .iter()
            .find(|&&c| self.node(c).visit_count == 0)
        {
            return Some(unvisited);
        }

        let stats = self.child_stats(id);
        let (rows, cols) = (node.actions[0].len(), node.cols());
        let total: u32 = stats.iter().map(|&(_, n)| n).sum();
        let ln_total = (total as f64).ln();
        let c = self.config.exploration();
        let ucb1 = |value: f64, n: u32| {
            let n = n as f64;
            value / n + c * (2.0 * ln_total / n).sqrt()
        };

        let row = argmax(
            axis_totals(&stats, rows, cols, Player::First)
                .into_iter()
                .map(|(w, n)| ucb1(w, n)),
        )?;
        // Second player's value is the complement of each visit, summed:
        // n - w rather than 1 - w.
        let col = argmax(
            axis_totals(&stats, rows, cols, Player::Second)
                .into_iter()
                .map(|(w, n)| ucb1(n as f64 - w, n)),
        )?;
        node.children.get(row * cols + col).copied()
    }

    /// Run a single simulation.
    pub fn simulate(&mut self) {
        let mut leaf_id = NodeId(0);
        loop {
            let node = self.node(leaf_id);
            if node.state.is_done() || node.children.is_empty() {
                break;
            }
            match self.select_child(leaf_id) {
                Some(child_id) => leaf_id = child_id,
                None => break,
            }
        }

        let terminal = simultaneous_status_value(self.node(leaf_id).state.winning_status());
        let value = match terminal {
            Some(value) => value,
            None => {
                let state = self.node(leaf_id).state.clone();
                simultaneous_playout(state, self.rng)
            }
        };

        let mut current = leaf_id;
        while current.is_some() {
            let node = &mut self.nodes[current.index()];
            node.visit_count += 1;
            node.value_sum += value;
            current = node.parent;
        }

        let leaf = self.node(leaf_id);
        if terminal.is_none()
            && leaf.children.is_empty()
            && leaf.visit_count == self.config.expand_threshold
        {
            self.expand(leaf_id);
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

    /// Deciding seat's root action with the most visits summed over the
    /// opponent's replies, ties to the earlier action.
    pub fn result(&self) -> SearchResult {
        let root_id = NodeId(0);
        let root = self.node(root_id);
        let stats = self.child_stats(root_id);
        let totals = axis_totals(&stats, root.actions[0].len(), root.cols(), self.player);
        let action = argmax(totals.iter().map(|&(_, n)| n as f64))
            .map(|i| root.actions[self.player.index()][i]);

        let value = if root.visit_count == 0 {
            0.0
        } else {
            let first_value = root.value_sum / root.visit_count as f64;
            match self.player {
                Player::First => first_value,
                Player::Second => 1.0 - first_value,
            }
        };

        let result = SearchResult {
            action,
            value,
            simulations: root.visit_count,
        };
        debug!(
            player = ?self.player,
            action = ?result.action,
            value = result.value,
            simulations = result.simulations,
            nodes = self.nodes.len(),
            "duct finished"
        );
        result
    }
}

/// DUCT decision for `player`, `playouts` simulations.
pub fn duct_action<S: SimultaneousState>(
    state: &S,
    player: Player,
    playouts: u32,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    let config = MctsConfig::duct().with_playouts(playouts);
    DuctSearch::new(state.clone(), player, config, rng).run().action
}

/// DUCT decision for `player` until `time_threshold_ms` elapses.
pub fn duct_action_with_time<S: SimultaneousState>(
    state: &S,
    player: Player,
    time_threshold_ms: u64,
    rng: &mut ChaCha20Rng,
) -> Option<Action> {
    let keeper = TimeKeeper::new(time_threshold_ms);
    let result = DuctSearch::new(state.clone(), player, MctsConfig::duct(), rng).run_until(&keeper);
    trace!(simulations = result.simulations, "duct out of time");
    result.action
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_totals() {
        // 2 x 3 grid
        let stats = [(1.0, 2), (0.0, 1), (2.0, 3), (0.5, 1), (1.0, 1), (0.0, 2)];
        let rows = axis_totals(&stats, 2, 3, Player::First);
        assert_eq!(rows, vec![(3.0, 6), (1.5, 4)]);
        let cols = axis_totals(&stats, 2, 3, Player::Second);
        assert_eq!(cols, vec![(1.5, 3), (1.0, 2), (2.0, 5)]);
    }

    #[test]
    fn test_argmax_prefers_earlier() {
        assert_eq!(argmax([1.0, 3.0, 3.0, 2.0].into_iter()), Some(1));
        assert_eq!(argmax(std::iter::empty()), None);
    }
}
