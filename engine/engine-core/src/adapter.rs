//! Adapter layer presenting a simultaneous game as an alternating one
//!
//! One simultaneous turn becomes two alternating plies: the player the view
//! was built for picks first, then the opponent picks, and only then is the
//! underlying turn resolved with both moves. The acting seat flips after
//! every ply, so alternating algorithms (MCTS in particular) run unmodified
//! on top of any [`SimultaneousState`].
//!
//! The first pick is held as a pending action rather than applied, so the
//! underlying game's own resolution rules stay intact (for example both
//! players banking the same reward cell in one turn). The board seen by the
//! second picker is the same board the first picker saw.

use crate::state::{Action, AlternatingState, Player, ScoreType, SimultaneousState};

/// Alternating view over a simultaneous game.
///
/// The view's ply counter advances twice per underlying turn, so the game
/// ends after twice the underlying number of turns.
#[derive(Debug, Clone)]
pub struct AlternatingView<S: SimultaneousState> {
    base: S,
    /// Seat that picks first in every turn
    leader: Player,
    /// Seat about to pick
    acting: Player,
    /// Leader's pick waiting for the follower's
    pending: Option<Action>,
    ply: u32,
}

impl<S: SimultaneousState> AlternatingView<S> {
    /// Build a view in which `player` picks first.
    pub fn new(base: S, player: Player) -> Self {
        Self {
            base,
            leader: player,
            acting: player,
            pending: None,
            ply: 0,
        }
    }

    /// Underlying simultaneous state. Does not reflect a pending pick.
    pub fn base(&self) -> &S {
        &self.base
    }

    pub fn acting(&self) -> Player {
        self.acting
    }

    pub fn leader(&self) -> Player {
        self.leader
    }

    /// Leader's pick if the follower has not picked yet.
    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    /// Alternating plies played through this view.
    pub fn ply(&self) -> u32 {
        self.ply
    }
}

impl<S: SimultaneousState> AlternatingState for AlternatingView<S> {
    fn is_done(&self) -> bool {
        self.pending.is_none() && self.base.is_done()
    }

    fn legal_actions(&self) -> Vec<Action> {
        self.base.legal_actions(self.acting)
    }

    fn advance(&mut self, action: Action) {
        match self.pending.take() {
            None => self.pending = Some(action),
            Some(leader_action) => {
                let (first, second) = match self.acting {
                    Player::First => (action, leader_action),
                    Player::Second => (leader_action, action),
                };
                self.base.advance(first, second);
            }
        }
        self.acting = self.acting.opponent();
        self.ply += 1;
    }

    fn score(&self) -> ScoreType {
        self.base.player_score(self.acting) - self.base.player_score(self.acting.opponent())
    }

    fn is_first_player(&self) -> bool {
        self.acting == self.leader
    }
}

#[cfg(test)]
#[path = "adapter_tests.rs"]
mod tests;
