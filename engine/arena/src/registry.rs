//! Named AI registries.
//!
//! A registry maps a label such as `"alpha_beta"` to a boxed decision
//! function. Labels keep their registration order so listings are stable.

use engine_core::{Action, Player};
use rand_chacha::ChaCha20Rng;
use tracing::warn;

use crate::error::ArenaError;

/// Picks a move for a single-player game.
pub type SingleAi<S> = Box<dyn Fn(&S, &mut ChaCha20Rng) -> Option<Action>>;

/// Picks a move for whichever side is to act in an alternating game.
pub type AlternatingAi<S> = Box<dyn Fn(&S, &mut ChaCha20Rng) -> Option<Action>>;

/// Picks a move for the given seat of a simultaneous game.
pub type SimultaneousAi<S> = Box<dyn Fn(&S, Player, &mut ChaCha20Rng) -> Option<Action>>;

/// Improves a whole configuration for a local-search game.
pub type LocalSearchAi<S> = Box<dyn Fn(&S, &mut ChaCha20Rng) -> S>;

/// Ordered label -> AI map.
pub struct Registry<F> {
    entries: Vec<(String, F)>,
}

impl<F> Default for Registry<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<F> Registry<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ai` under `name`, replacing any previous entry in place.
    pub fn register(&mut self, name: impl Into<String>, ai: F) {
        let name = name.into();
        if let Some(slot) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            warn!(name = %name, "Overriding existing AI registration");
            slot.1 = ai;
        } else {
            self.entries.push((name, ai));
        }
    }

    /// Builder form of [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, ai: F) -> Self {
        self.register(name, ai);
        self
    }

    pub fn get(&self, name: &str) -> Result<&F, ArenaError> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ai)| ai)
            .ok_or_else(|| ArenaError::UnknownAi(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Labels in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(action: Action) -> AlternatingAi<()> {
        Box::new(move |_, _| Some(action))
    }

    #[test]
    fn test_lookup_and_order() {
        let registry = Registry::new()
            .with("zero", constant(0))
            .with("one", constant(1));

        assert_eq!(registry.names(), vec!["zero", "one"]);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains("one"));
        assert!(!registry.contains("two"));
    }

    #[test]
    fn test_unknown_label() {
        let registry: Registry<AlternatingAi<()>> = Registry::new();
        assert!(registry.is_empty());
        match registry.get("minimax") {
            Err(ArenaError::UnknownAi(name)) => assert_eq!(name, "minimax"),
            _ => panic!("expected UnknownAi"),
        }
    }

    #[test]
    fn test_reregistering_replaces_in_place() {
        use rand::SeedableRng;

        let mut registry = Registry::new()
            .with("a", constant(0))
            .with("b", constant(1));
        registry.register("a", constant(7));

        let mut rng = ChaCha20Rng::seed_from_u64(0);
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!((registry.get("a").unwrap())(&(), &mut rng), Some(7));
    }
}
