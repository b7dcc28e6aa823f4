use thiserror::Error;

/// Errors a caller can provoke when driving matches.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("no AI registered as '{0}'")]
    UnknownAi(String),

    #[error("at least one game is required")]
    NoGames,

    #[error("could not build the board for seed {seed}: {source}")]
    Setup {
        seed: u64,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
