use super::RecordType;
use crate::zone::SoaRecord;
use std::fmt;
use std::net::Ipv6Addr;
use std::sync::Arc;

/// An answer produced by the resolution core.
///
/// `Display` renders the zone-file line (`<name> <ttl> IN <TYPE> <rdata>`)
/// the protocol layer turns into a wire record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerRecord {
    Aaaa {
        name: String,
        ttl: u32,
        address: Ipv6Addr,
    },
    Ptr {
        name: String,
        ttl: u32,
        target: String,
    },
    Ns {
        name: String,
        ttl: u32,
        server: String,
    },
    Soa {
        name: String,
        soa: Arc<SoaRecord>,
    },
}

impl AnswerRecord {
    pub fn name(&self) -> &str {
        match self {
            AnswerRecord::Aaaa { name, .. }
            | AnswerRecord::Ptr { name, .. }
            | AnswerRecord::Ns { name, .. }
            | AnswerRecord::Soa { name, .. } => name,
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self {
            AnswerRecord::Aaaa { .. } => RecordType::AAAA,
            AnswerRecord::Ptr { .. } => RecordType::PTR,
            AnswerRecord::Ns { .. } => RecordType::NS,
            AnswerRecord::Soa { .. } => RecordType::SOA,
        }
    }

    pub fn ttl(&self) -> u32 {
        match self {
            AnswerRecord::Aaaa { ttl, .. }
            | AnswerRecord::Ptr { ttl, .. }
            | AnswerRecord::Ns { ttl, .. } => *ttl,
            AnswerRecord::Soa { soa, .. } => soa.ttl,
        }
    }
}

impl fmt::Display for AnswerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} IN {} ", self.name(), self.ttl(), self.record_type())?;
        match self {
            AnswerRecord::Aaaa { address, .. } => write!(f, "{address}"),
            AnswerRecord::Ptr { target, .. } => f.write_str(target),
            AnswerRecord::Ns { server, .. } => f.write_str(server),
            AnswerRecord::Soa { soa, .. } => write!(
                f,
                "{} {} {} {} {} {} {}",
                soa.mname, soa.rname, soa.serial, soa.refresh, soa.retry, soa.expire, soa.minimum
            ),
        }
    }
}
