use crate::dns_record::AnswerRecord;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Start-of-authority parameters shared by every zone of the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SoaRecord {
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    #[serde(default = "default_refresh")]
    pub refresh: i32,

    #[serde(default = "default_retry")]
    pub retry: i32,

    #[serde(default = "default_expire")]
    pub expire: i32,

    #[serde(default = "default_minimum")]
    pub minimum: u32,

    #[serde(default = "default_serial")]
    pub serial: u32,

    #[serde(default)]
    pub mname: String,

    #[serde(default)]
    pub rname: String,
}

impl Default for SoaRecord {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minimum: default_minimum(),
            serial: default_serial(),
            mname: String::new(),
            rname: String::new(),
        }
    }
}

fn default_ttl() -> u32 {
    3600
}

fn default_refresh() -> i32 {
    7200
}

fn default_retry() -> i32 {
    1800
}

fn default_expire() -> i32 {
    1_209_600
}

fn default_minimum() -> u32 {
    300
}

fn default_serial() -> u32 {
    1
}

/// Nameservers announced for every zone, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NsRecord {
    #[serde(default)]
    pub servers: Vec<String>,
}

/// Authority data the dispatcher and strategies attach to responses.
#[derive(Debug, Clone)]
pub struct Authority {
    soa: Arc<SoaRecord>,
    ns: Arc<NsRecord>,
    apex: Option<String>,
}

impl Authority {
    pub fn new(soa: SoaRecord, ns: NsRecord, apex: Option<String>) -> Self {
        Self {
            soa: Arc::new(soa),
            ns: Arc::new(ns),
            apex,
        }
    }

    pub fn soa(&self) -> &Arc<SoaRecord> {
        &self.soa
    }

    pub fn nameservers(&self) -> &[String] {
        &self.ns.servers
    }

    /// Top-level zone name, when a fallback zone is configured.
    pub fn apex(&self) -> Option<&str> {
        self.apex.as_deref()
    }

    /// TTL given to every synthesized answer.
    pub fn ttl(&self) -> u32 {
        self.soa.ttl
    }

    pub fn soa_record(&self, owner: &str) -> AnswerRecord {
        AnswerRecord::Soa {
            name: owner.to_string(),
            soa: Arc::clone(&self.soa),
        }
    }

    /// SOA owned by the apex, or by `fallback_owner` without a top-level zone.
    pub fn apex_soa_record(&self, fallback_owner: &str) -> AnswerRecord {
        self.soa_record(self.apex().unwrap_or(fallback_owner))
    }

    pub fn ns_records(&self, owner: &str) -> Vec<AnswerRecord> {
        self.ns
            .servers
            .iter()
            .map(|server| AnswerRecord::Ns {
                name: owner.to_string(),
                ttl: self.ttl(),
                server: server.clone(),
            })
            .collect()
    }
}
