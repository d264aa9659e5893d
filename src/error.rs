use thiserror::Error;

/// Result type alias for operations that can result in a HyperMindError
pub type HyperMindResult<T> = Result<T, HyperMindError>;

/// Unified error type for the hypermind engine.
///
/// The simulation itself has no fallible operations: clamping keeps every
/// metric inside its declared range and the derivation rules are total over
/// any valid metric set. The only domain error is an invalid configuration,
/// rejected synchronously at construction or when changing the tick interval.
#[derive(Error, Debug)]
pub enum HyperMindError {
    /// Rejected configuration: non-positive tick interval or an initial
    /// value outside its declared range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A handle method was called after the engine driver shut down
    #[error("Engine channel closed: {0}")]
    ChannelClosed(String),

    /// The engine driver task failed to join cleanly
    #[error("Engine driver error: {0}")]
    Driver(String),

    /// Errors related to IO operations (configuration file loading)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors related to serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for HyperMindError {
    fn from(error: serde_json::Error) -> Self {
        HyperMindError::Serialization(error.to_string())
    }
}
