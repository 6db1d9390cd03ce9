//! Error types for greet-core

use thiserror::Error;

/// Result type alias for greet operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the greeting HTTP server
#[derive(Debug, Error)]
pub enum Error {
    /// The configured address could not be bound (in use, privilege, invalid)
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Hostname and port did not form a socket address
    #[error("invalid listen address: {0}")]
    InvalidAddr(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
