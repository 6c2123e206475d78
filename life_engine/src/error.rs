// error.rs - Error types shared by the engine and its host

use thiserror::Error;

/// Everything that can go wrong inside the engine.
#[derive(Error, Debug)]
pub enum LifeError {
    /// The arena was asked for more slots than it has left.
    ///
    /// This is a programming error: the arena never grows, so the host is
    /// expected to treat it as fatal.
    #[error("arena exhausted: requested {requested} slots with {used} of {capacity} used")]
    ArenaExhausted {
        requested: usize,
        used: usize,
        capacity: usize,
    },

    /// A pixel surface descriptor does not describe usable memory.
    #[error("invalid pixel surface: {0}")]
    InvalidSurface(String),

    /// Configuration values that cannot drive a simulation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;
