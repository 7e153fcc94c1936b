//! The three per-zone answering policies.
//!
//! Each zone carries its [`ResponseType`], chosen when the registry was
//! built; [`respond`] dispatches on it. An unrecognized configuration tag is
//! answered like `NxError`.

use super::name_synthesis::{get_ipv6_for_name, get_name_for_ipv6};
use nibbledns_domain::nibble::is_reverse_name;
use nibbledns_domain::{
    AnswerRecord, Authority, DnsQuery, RecordType, ResponseCode, ResponseType, ZoneConfig,
};
use tracing::debug;

/// Code and answers produced for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyResponse {
    pub code: ResponseCode,
    pub answers: Vec<AnswerRecord>,
}

impl StrategyResponse {
    fn success(answer: AnswerRecord) -> Self {
        Self {
            code: ResponseCode::NoError,
            answers: vec![answer],
        }
    }

    fn name_error(soa: AnswerRecord) -> Self {
        Self {
            code: ResponseCode::NXDomain,
            answers: vec![soa],
        }
    }
}

pub fn respond(question: &DnsQuery, zone: &ZoneConfig, authority: &Authority) -> StrategyResponse {
    match &zone.response_type {
        ResponseType::Dynamic => dynamic_response(question, zone, authority),
        ResponseType::Static => static_response(question, zone, authority),
        ResponseType::NxError => nx_error_response(question, zone, authority),
        ResponseType::Unrecognized(tag) => {
            debug!(zone = %zone.domain, tag = %tag, "Unrecognized response type, answering NXDOMAIN");
            nx_error_response(question, zone, authority)
        }
    }
}

/// Synthesizes AAAA and PTR answers from the zone prefix.
pub fn dynamic_response(
    question: &DnsQuery,
    zone: &ZoneConfig,
    authority: &Authority,
) -> StrategyResponse {
    debug!(name = %question.domain, record_type = %question.record_type, "Dynamic response");
    let name = question.domain.as_ref();

    match question.record_type {
        rt if rt.is_address_query() => {
            if is_reverse_name(name) {
                return StrategyResponse::name_error(authority.soa_record(&zone.domain));
            }
            match get_ipv6_for_name(name, zone) {
                Ok(address) => StrategyResponse::success(AnswerRecord::Aaaa {
                    name: name.to_string(),
                    ttl: authority.ttl(),
                    address,
                }),
                Err(e) => {
                    debug!(name = %name, error = %e, "Cannot synthesize address");
                    StrategyResponse::name_error(authority.soa_record(&zone.domain))
                }
            }
        }
        RecordType::PTR => {
            if !is_reverse_name(name) {
                return StrategyResponse {
                    code: ResponseCode::NoError,
                    answers: vec![authority.soa_record(&zone.domain)],
                };
            }
            match get_name_for_ipv6(name, zone) {
                Ok(target) => StrategyResponse::success(AnswerRecord::Ptr {
                    name: name.to_string(),
                    ttl: authority.ttl(),
                    target,
                }),
                Err(e) => {
                    debug!(name = %name, error = %e, "Cannot synthesize host name");
                    StrategyResponse::name_error(authority.soa_record(&zone.domain))
                }
            }
        }
        _ => StrategyResponse::name_error(authority.apex_soa_record(&zone.domain)),
    }
}

/// Answers with the zone's fixed address and host name.
pub fn static_response(
    question: &DnsQuery,
    zone: &ZoneConfig,
    authority: &Authority,
) -> StrategyResponse {
    debug!(name = %question.domain, record_type = %question.record_type, "Static response");
    let name = question.domain.as_ref();

    match question.record_type {
        rt if rt.is_address_query() => {
            if is_reverse_name(name) {
                return StrategyResponse::name_error(authority.apex_soa_record(&zone.domain));
            }
            StrategyResponse::success(AnswerRecord::Aaaa {
                name: name.to_string(),
                ttl: authority.ttl(),
                address: zone.prefix,
            })
        }
        RecordType::PTR => {
            if !is_reverse_name(name) {
                return StrategyResponse {
                    code: ResponseCode::NoError,
                    answers: vec![authority.apex_soa_record(&zone.domain)],
                };
            }
            StrategyResponse::success(AnswerRecord::Ptr {
                name: name.to_string(),
                ttl: authority.ttl(),
                target: zone.reverse_domain.clone(),
            })
        }
        _ => StrategyResponse::name_error(authority.apex_soa_record(&zone.domain)),
    }
}

/// NXDOMAIN with the top-level SOA, whatever was asked.
pub fn nx_error_response(
    question: &DnsQuery,
    zone: &ZoneConfig,
    authority: &Authority,
) -> StrategyResponse {
    debug!(name = %question.domain, record_type = %question.record_type, "NxError response");
    StrategyResponse::name_error(authority.apex_soa_record(&zone.domain))
}
