use super::errors::RecordBuildError;
use hickory_proto::rr::rdata::{AAAA, NS, PTR, SOA};
use hickory_proto::rr::{Name, RData, Record};
use nibbledns_domain::AnswerRecord;

/// Converts domain answer records into hickory wire records.
pub struct RecordBuilder;

impl RecordBuilder {
    pub fn build(answer: &AnswerRecord) -> Result<Record, RecordBuildError> {
        let owner = parse_name(answer.name())?;

        let rdata = match answer {
            AnswerRecord::Aaaa { address, .. } => RData::AAAA(AAAA(*address)),
            AnswerRecord::Ptr { target, .. } => RData::PTR(PTR(parse_name(target)?)),
            AnswerRecord::Ns { server, .. } => RData::NS(NS(parse_name(server)?)),
            AnswerRecord::Soa { soa, .. } => RData::SOA(SOA::new(
                parse_name(&soa.mname)?,
                parse_name(&soa.rname)?,
                soa.serial,
                soa.refresh,
                soa.retry,
                soa.expire,
                soa.minimum,
            )),
        };

        Ok(Record::from_rdata(owner, answer.ttl(), rdata))
    }
}

/// Parses `text` as an absolute name, whether or not it carries the trailing dot.
fn parse_name(text: &str) -> Result<Name, RecordBuildError> {
    let mut name = Name::from_ascii(text).map_err(|e| RecordBuildError::InvalidName {
        name: text.to_string(),
        reason: e.to_string(),
    })?;
    name.set_fqdn(true);
    Ok(name)
}
