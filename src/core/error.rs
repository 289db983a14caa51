//! Startup errors for the server binary.

use std::net::SocketAddr;

use thiserror::Error;

/// Reasons the server can fail to start or keep running
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to load Leptos configuration: {0}")]
    Configuration(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[from] std::io::Error),
}
