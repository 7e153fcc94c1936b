pub mod errors;
pub mod listener;
pub mod record_builder;
pub mod record_type_map;
pub mod server;

pub use errors::{RecordBuildError, ServerError};
pub use listener::DnsServer;
pub use record_builder::RecordBuilder;
pub use record_type_map::RecordTypeMapper;
pub use server::DnsServerHandler;
