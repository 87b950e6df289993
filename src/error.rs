use thiserror::Error as ThisError;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by configuration validation and spawning.
///
/// Steady-state ticking is infallible: anything that could corrupt the
/// physics (non-finite parameters, impossible arenas) is rejected up front.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Initialization parameters that can never produce a valid simulation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Rejection sampling could not place a particle within the attempt cap.
    #[error("spawn exhausted after {attempts} placement attempts; arena too dense")]
    SpawnExhausted { attempts: u32 },

    /// Config file I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config file parse failure.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}
