//! Search tree node.
//!
//! Each node owns a snapshot of the game state reached by the action that
//! led to it, plus the visit statistics used for child selection. Values are
//! win rates in `[0, 1]` from the point of view of the player about to move
//! at that node.

use engine_core::Action;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node in the search tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S> {
    /// Parent node index (NONE for root)
    pub parent: NodeId,

    /// Action that led here from the parent (None for root)
    pub action: Option<Action>,

    pub state: S,

    pub visit_count: u32,

    /// Sum of backed-up values, from this node's acting player's view
    pub value_sum: f64,

    /// (action, child) pairs in `legal_actions` order. Empty until expanded.
    pub children: Vec<(Action, NodeId)>,
}

impl<S> MctsNode<S> {
    pub fn new_root(state: S) -> Self {
        Self {
            parent: NodeId::NONE,
            action: None,
            state,
            visit_count: 0,
            value_sum: 0.0,
            children: Vec::new(),
        }
    }

    pub fn new_child(parent: NodeId, action: Action, state: S) -> Self {
        Self {
            parent,
            action: Some(action),
            state,
            visit_count: 0,
            value_sum: 0.0,
            children: Vec::new(),
        }
    }

    /// Mean value w/n, or 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.value_sum / self.visit_count as f64
        }
    }

    /// Value of this node as seen by the parent, which is the opponent.
    #[inline]
    pub fn parent_value(&self) -> f64 {
        1.0 - self.mean_value()
    }

    /// UCB1 from the parent's view:
    /// `1 - w/n + c * sqrt(2 * ln(t) / n)` where `t` is the parent's total
    /// child visits.
    ///
    /// Takes pre-computed `ln(t)` so siblings share one log call. Only
    /// meaningful once the node has been visited.
    #[inline]
    pub fn ucb1_score(&self, ln_total_visits: f64, c: f64) -> f64 {
        let n = self.visit_count as f64;
        self.parent_value() + c * (2.0 * ln_total_visits / n).sqrt()
    }

    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_none() {
        assert!(NodeId::NONE.is_none());
        assert!(!NodeId::NONE.is_some());
        assert!(!NodeId(0).is_none());
        assert!(NodeId(0).is_some());
    }

    #[test]
    fn test_new_root() {
        let node = MctsNode::new_root(7u8);
        assert!(node.parent.is_none());
        assert_eq!(node.action, None);
        assert_eq!(node.visit_count, 0);
        assert!(!node.is_expanded());
    }

    #[test]
    fn test_values_flip_for_parent() {
        let mut node = MctsNode::new_child(NodeId(0), 2, ());
        assert!(node.mean_value().abs() < 1e-12);

        node.visit_count = 4;
        node.value_sum = 1.0;
        assert!((node.mean_value() - 0.25).abs() < 1e-12);
        assert!((node.parent_value() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_ucb1_score() {
        let mut node = MctsNode::new_child(NodeId(0), 0, ());
        node.visit_count = 10;
        node.value_sum = 5.0;

        // 1 - 0.5 + 1.0 * sqrt(2 * ln(100) / 10)
        let score = node.ucb1_score((100f64).ln(), 1.0);
        let expected = 0.5 + (2.0 * (100f64).ln() / 10.0).sqrt();
        assert!((score - expected).abs() < 1e-12);

        // No exploration term without a constant
        assert!((node.ucb1_score((100f64).ln(), 0.0) - 0.5).abs() < 1e-12);
    }
}
