use crate::services::respond;
use nibbledns_domain::{AnswerRecord, DnsQuery, RecordType, ResponseCode, ZoneConfig, ZoneRegistry};
use std::sync::Arc;
use tracing::debug;

/// Message-level result: the response code and every answer, in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryResolution {
    pub code: ResponseCode,
    pub answers: Vec<AnswerRecord>,
}

/// Resolves the questions of one message against the zone registry.
///
/// SOA and NS questions are answered here; everything else goes to the
/// zone's response strategy. When several questions set a code, the last
/// one wins.
pub struct HandleDnsQueryUseCase {
    registry: Arc<ZoneRegistry>,
}

impl HandleDnsQueryUseCase {
    pub fn new(registry: Arc<ZoneRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    /// Looks up the zone of each question and resolves it.
    ///
    /// A question outside every configured zone sets `Refused`.
    pub fn execute(&self, questions: &[DnsQuery]) -> QueryResolution {
        let mut resolution = QueryResolution::default();

        for question in questions {
            match self.registry.find(&question.domain) {
                Some(zone) => self.answer_question(question, zone, &mut resolution),
                None => {
                    debug!(name = %question.domain, "No zone for query");
                    resolution.code = ResponseCode::Refused;
                }
            }
        }

        resolution
    }

    /// Resolves every question against an already matched zone.
    pub fn execute_in_zone(&self, questions: &[DnsQuery], zone: &ZoneConfig) -> QueryResolution {
        let mut resolution = QueryResolution::default();
        for question in questions {
            self.answer_question(question, zone, &mut resolution);
        }
        resolution
    }

    fn answer_question(
        &self,
        question: &DnsQuery,
        zone: &ZoneConfig,
        resolution: &mut QueryResolution,
    ) {
        let authority = self.registry.authority();
        debug!(
            name = %question.domain,
            record_type = %question.record_type,
            zone = %zone.domain,
            "Query"
        );

        match question.record_type {
            RecordType::SOA => resolution.answers.push(authority.soa_record(&zone.domain)),
            RecordType::NS => {
                if question.domain.as_ref() == zone.domain {
                    resolution.answers.extend(authority.ns_records(&zone.domain));
                } else {
                    resolution.answers.push(authority.soa_record(&zone.domain));
                    resolution.code = ResponseCode::NXDomain;
                }
            }
            _ => {
                let response = respond(question, zone, authority);
                resolution.answers.extend(response.answers);
                resolution.code = response.code;
            }
        }
    }
}
