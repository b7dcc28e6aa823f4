//! Search tree with arena allocation.
//!
//! Nodes live in one contiguous Vec and refer to each other by [`NodeId`].
//! The tree owns every node, so dropping it releases the whole search.

use engine_core::{Action, AlternatingState};

use crate::config::Selection;
use crate::node::{MctsNode, NodeId};

/// Search tree with arena-based node storage.
#[derive(Debug)]
pub struct MctsTree<S> {
    /// Arena storing all nodes
    nodes: Vec<MctsNode<S>>,

    /// Root node index (always 0)
    root: NodeId,
}

impl<S: AlternatingState> MctsTree<S> {
    pub fn new(root_state: S) -> Self {
        Self {
            nodes: vec![MctsNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &MctsNode<S> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MctsNode<S> {
        &mut self.nodes[id.index()]
    }

    fn allocate(&mut self, node: MctsNode<S>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (never true after construction).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add one child per legal action of `node_id`, in `legal_actions`
    /// order. Returns the number of children added.
    pub fn expand(&mut self, node_id: NodeId) -> usize {
        let state = self.get(node_id).state.clone();
        let legal_actions = state.legal_actions();
        let mut children = Vec::with_capacity(legal_actions.len());
        for action in legal_actions {
            let mut next = state.clone();
            next.advance(action);
            let child_id = self.allocate(MctsNode::new_child(node_id, action, next));
            children.push((action, child_id));
        }
        let added = children.len();
        self.get_mut(node_id).children = children;
        added
    }

    /// Pick the child of `node_id` to descend into.
    ///
    /// The first unvisited child wins outright. Otherwise the child with the
    /// highest score under `selection` is taken; ties go to the earlier
    /// child. Returns None for an unexpanded node.
    pub fn select_child(&self, node_id: NodeId, selection: Selection) -> Option<NodeId> {
        let node = self.get(node_id);
        if let Some(&(_, unvisited)) = node
            .children
            .iter()
            .find(|(_, id)| self.get(*id).visit_count == 0)
        {
            return Some(unvisited);
        }

        let total_visits: u32 = node
            .children
            .iter()
            .map(|(_, id)| self.get(*id).visit_count)
            .sum();
        let ln_total = (total_visits as f64).ln();

        let mut best: Option<(f64, NodeId)> = None;
        for &(_, child_id) in &node.children {
            let child = self.get(child_id);
            let score = match selection {
                Selection::Ucb1 { c } => child.ucb1_score(ln_total, c),
                Selection::Greedy => child.parent_value(),
            };
            if best.map_or(true, |(best_score, _)| score > best_score) {
                best = Some((score, child_id));
            }
        }
        best.map(|(_, id)| id)
    }

    /// Back a leaf value up to the root.
    /// Value is flipped at each level (opponent's perspective).
    pub fn backpropagate(&mut self, leaf_id: NodeId, value: f64) {
        let mut current_id = leaf_id;
        let mut current_value = value;

        while current_id.is_some() {
            let node = self.get_mut(current_id);
            node.visit_count += 1;
            node.value_sum += current_value;

            current_value = 1.0 - current_value;
            current_id = node.parent;
        }
    }

    /// Root action with the most visits, ties to the earlier action.
    /// Returns (action, visit_count) or None if the root has no children.
    pub fn best_action(&self) -> Option<(Action, u32)> {
        let mut best: Option<(Action, u32)> = None;
        for &(action, id) in &self.get(self.root).children {
            let visits = self.get(id).visit_count;
            if best.map_or(true, |(_, best_visits)| visits > best_visits) {
                best = Some((action, visits));
            }
        }
        best
    }

    /// Get statistics about the tree for debugging.
    pub fn stats(&self) -> TreeStats {
        let root = self.get(self.root);
        TreeStats {
            total_nodes: self.nodes.len(),
            root_visits: root.visit_count,
            root_value: root.mean_value(),
            max_depth: self.max_depth(),
        }
    }

    fn max_depth(&self) -> u32 {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0u32)];
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            stack.extend(self.get(id).children.iter().map(|&(_, c)| (c, depth + 1)));
        }
        max_depth
    }
}

/// Statistics about a search tree.
#[derive(Debug, Clone)]
pub struct TreeStats {
    pub total_nodes: usize,
    pub root_visits: u32,
    pub root_value: f64,
    pub max_depth: u32,
}
