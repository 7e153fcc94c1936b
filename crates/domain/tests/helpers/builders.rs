#![allow(dead_code)]

use nibbledns_domain::{Config, NsRecord, SoaRecord, ZoneEntry};

pub fn soa() -> SoaRecord {
    SoaRecord {
        mname: "ns1.example.com.".to_string(),
        rname: "hostmaster.example.com.".to_string(),
        ..SoaRecord::default()
    }
}

pub fn ns() -> NsRecord {
    NsRecord {
        servers: vec!["ns1.example.com.".to_string(), "ns2.example.com.".to_string()],
    }
}

pub fn zone_entry(prefix: &str) -> ZoneEntry {
    ZoneEntry {
        prefix: Some(prefix.to_string()),
        ..ZoneEntry::default()
    }
}

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.dns.soa = soa();
        config.dns.ns = ns();
        Self { config }
    }

    pub fn with_fallback(mut self, domain: &str, response_type: Option<&str>) -> Self {
        self.config.dns.domain = Some(ZoneEntry {
            domain: Some(domain.to_string()),
            response_type: response_type.map(str::to_string),
            ..ZoneEntry::default()
        });
        self
    }

    pub fn with_subdomain(mut self, domain: &str, entry: ZoneEntry) -> Self {
        self.config.subdomains.insert(domain.to_string(), entry);
        self
    }

    pub fn with_static(mut self, domain: &str, address: &str) -> Self {
        self.config
            .statics
            .insert(domain.to_string(), zone_entry(address));
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
