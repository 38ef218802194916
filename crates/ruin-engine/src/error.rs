//! Error types for the expedition engine.

use thiserror::Error;

/// Result type for expedition operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur during an expedition.
///
/// The first two variants are narrative refusals: the turn loop reports them
/// to the player and carries on.
#[derive(Debug, Error)]
pub enum GameError {
    /// The player named a path that does not exist.
    #[error("That path does not exist.")]
    UnknownLocation(String),

    /// The temple stays sealed until every required artifact is held.
    #[error("The temple doors remain sealed. You sense 3 artifacts are needed... ({missing} still missing)")]
    TempleSealed {
        /// How many required artifacts the player still lacks.
        missing: usize,
    },

    /// Reading input or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The journal could not be serialized.
    #[error("chronicle export failed: {0}")]
    Chronicle(#[from] serde_json::Error),
}

impl GameError {
    /// Whether the turn loop should report this error and keep going.
    pub fn is_narrative(&self) -> bool {
        matches!(self, Self::UnknownLocation(_) | Self::TempleSealed { .. })
    }
}
