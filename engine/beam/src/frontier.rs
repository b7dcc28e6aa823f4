//! Max-priority queues keyed by an explicit extraction function.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use engine_core::{Action, ScoreType, SinglePlayerState};

struct Entry<T, K> {
    key: K,
    seq: u64,
    item: T,
}

impl<T, K: Ord> PartialEq for Entry<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, K: Ord> Eq for Entry<T, K> {}

impl<T, K: Ord> PartialOrd for Entry<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, K: Ord> Ord for Entry<T, K> {
    // Higher key first; among equal keys the earlier insertion wins.
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .cmp(&other.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Priority queue that pops the item with the highest key.
///
/// The key is computed once at insertion with the function given to
/// [`Frontier::new`]. Items with equal keys come out in insertion order, so
/// every search built on a frontier is deterministic.
pub struct Frontier<T, K: Ord> {
    heap: BinaryHeap<Entry<T, K>>,
    key: fn(&T) -> K,
    next_seq: u64,
}

impl<T, K: Ord> Frontier<T, K> {
    pub fn new(key: fn(&T) -> K) -> Self {
        Self {
            heap: BinaryHeap::new(),
            key,
            next_seq: 0,
        }
    }

    pub fn push(&mut self, item: T) {
        let key = (self.key)(&item);
        self.heap.push(Entry {
            key,
            seq: self.next_seq,
            item,
        });
        self.next_seq += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|entry| entry.item)
    }

    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|entry| &entry.item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

/// A state reached during search, tagged with the root move that led to it.
#[derive(Debug, Clone)]
pub struct Candidate<S> {
    pub state: S,
    /// Cached `evaluate_score` of `state`
    pub evaluated_score: ScoreType,
    /// First move taken from the search root; `None` for the root itself
    pub first_action: Option<Action>,
}

impl<S: SinglePlayerState> Candidate<S> {
    pub fn root(state: S) -> Self {
        Self {
            evaluated_score: state.evaluate_score(),
            state,
            first_action: None,
        }
    }

    /// Successor reached by playing `action`, inheriting the root move.
    pub fn child(&self, action: Action) -> Self {
        let mut state = self.state.clone();
        state.advance(action);
        Self {
            evaluated_score: state.evaluate_score(),
            state,
            first_action: self.first_action.or(Some(action)),
        }
    }

    /// Push every successor of this candidate onto `into`.
    pub fn expand_into(&self, into: &mut CandidateFrontier<S>) {
        for action in self.state.legal_actions() {
            into.push(self.child(action));
        }
    }
}

/// Frontier of candidates ranked by evaluated score.
pub type CandidateFrontier<S> = Frontier<Candidate<S>, ScoreType>;

pub fn candidate_frontier<S>() -> CandidateFrontier<S> {
    Frontier::new(|candidate: &Candidate<S>| candidate.evaluated_score)
}
