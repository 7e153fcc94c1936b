//! nibbledns domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod name;
pub mod nibble;
pub mod response_code;
pub mod zone;

pub use config::{
    CliOverrides, Config, ConfigError, DnsConfig, LoggingConfig, Protocol, ServerConfig, ZoneEntry,
};
pub use dns_query::DnsQuery;
pub use dns_record::{AnswerRecord, RecordType};
pub use errors::DomainError;
pub use nibble::{ipv6_to_nibble, nibble_to_ipv6, split_prefix, REVERSE_SUFFIX};
pub use response_code::ResponseCode;
pub use zone::{Authority, NsRecord, ResponseType, SoaRecord, ZoneConfig, ZoneRegistry};
