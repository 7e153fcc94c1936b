pub mod authority;
pub mod registry;
pub mod response_type;
pub mod zone_config;

pub use authority::{Authority, NsRecord, SoaRecord};
pub use registry::ZoneRegistry;
pub use response_type::ResponseType;
pub use zone_config::ZoneConfig;
