use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid nibble encoding: {0}")]
    InvalidEncoding(String),

    #[error("Invalid prefix format: {0}")]
    InvalidFormat(String),

    #[error("Name {name} is outside zone {zone}")]
    OutOfZone { name: String, zone: String },
}
