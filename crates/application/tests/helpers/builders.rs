#![allow(dead_code)]

use nibbledns_application::use_cases::HandleDnsQueryUseCase;
use nibbledns_domain::{Config, DnsQuery, RecordType, ZoneRegistry};
use std::sync::Arc;

pub const DOC_PREFIX_REVERSE: &str = "0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.";

/// Fallback `example.`, dynamic `d.example.` over 2001:db8::/64, an
/// unrecognized-type zone and one static host.
pub const ZONES_TOML: &str = r#"
    [dns.domain]
    domain = "example."

    [dns.soa]
    ttl = 600
    serial = 7
    mname = "ns1.example."
    rname = "hostmaster.example."

    [dns.ns]
    servers = ["ns1.example.", "ns2.example."]

    [subdomain."d.example."]
    prefix = "2001:db8::/64"

    [subdomain."odd.example."]
    prefix = "2001:db8:ff::/48"
    response_type = "mirror"

    [static."host.example."]
    prefix = "2001:db8::5"
"#;

pub fn registry() -> Arc<ZoneRegistry> {
    registry_from(ZONES_TOML)
}

pub fn registry_from(toml: &str) -> Arc<ZoneRegistry> {
    let config = Config::from_toml(toml).unwrap();
    Arc::new(ZoneRegistry::from_config(&config).unwrap())
}

pub fn use_case() -> HandleDnsQueryUseCase {
    HandleDnsQueryUseCase::new(registry())
}

pub fn query(name: &str, record_type: RecordType) -> DnsQuery {
    DnsQuery::new(name, record_type)
}
