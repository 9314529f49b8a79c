//! Service error types
//!
//! Handlers themselves cannot fail (they return fixed in-memory records),
//! so the taxonomy only covers startup: configuration loading, the bind
//! address, and socket I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
