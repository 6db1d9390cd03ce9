//! greet-core: core library for the greeting HTTP server
//!
//! A minimal HTTP/1.1 server built on tokio/hyper that answers every
//! request with a fixed plain-text greeting. The listening port comes
//! from the `PORT` environment variable, defaulting to 8080.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod response;
pub mod server;

// Re-exports
pub use config::{ServerConfig, DEFAULT_PORT};
pub use error::{Error, Result};
pub use server::Server;
