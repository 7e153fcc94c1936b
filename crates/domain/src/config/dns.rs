use serde::{Deserialize, Serialize};

use super::server::Protocol;
use super::zones::ZoneEntry;
use crate::zone::{NsRecord, SoaRecord};

/// The `[dns]` table.
///
/// Older files put the listener's `port` and `protocol` here; they are still
/// read and moved into `[server]` when the file is loaded. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DnsConfig {
    /// Top-level zone; answers anything the more specific zones do not claim.
    #[serde(default)]
    pub domain: Option<ZoneEntry>,

    #[serde(default)]
    pub soa: SoaRecord,

    #[serde(default)]
    pub ns: NsRecord,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
}
