use super::RecordType;
use crate::name::to_fqdn;
use std::sync::Arc;

/// One question of an incoming message.
///
/// The name is stored lower-cased with a trailing dot so that zone matching
/// and answer names never depend on the client's spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: &str, record_type: RecordType) -> Self {
        Self {
            domain: to_fqdn(domain).into(),
            record_type,
        }
    }
}
