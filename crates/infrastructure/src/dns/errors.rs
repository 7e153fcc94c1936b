use std::io;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),

    #[error("Failed to bind {transport} listener on {addr}: {source}")]
    Bind {
        transport: &'static str,
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("DNS server is already running")]
    AlreadyStarted,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordBuildError {
    #[error("Invalid domain name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}
