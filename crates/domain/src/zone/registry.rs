use super::{Authority, ResponseType, ZoneConfig};
use crate::config::{Config, ConfigError, ZoneEntry};
use crate::name::{suffixes, to_fqdn};
use std::collections::HashMap;
use std::net::Ipv6Addr;

/// Read-only map from zone name to zone configuration.
///
/// Built once from the loaded configuration; lookups never mutate it, so a
/// single instance is shared across all query handlers without locking.
#[derive(Debug, Clone)]
pub struct ZoneRegistry {
    zones: HashMap<String, ZoneConfig>,
    shadowed: Vec<ZoneConfig>,
    authority: Authority,
}

impl ZoneRegistry {
    pub fn new(authority: Authority) -> Self {
        Self {
            zones: HashMap::new(),
            shadowed: Vec::new(),
            authority,
        }
    }

    /// Builds the registry for every zone in `config`.
    ///
    /// Registration order is the fallback zone, then dynamic sub-zones, then
    /// static zones. Any malformed prefix, mask or duplicate forward name
    /// fails the whole build. Within each table entries register in name
    /// order.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let apex = config
            .dns
            .domain
            .as_ref()
            .and_then(|entry| entry.domain.as_deref())
            .map(to_fqdn);

        let authority = Authority::new(config.dns.soa.clone(), config.dns.ns.clone(), apex);
        let mut registry = Self::new(authority);

        if let Some(entry) = &config.dns.domain {
            registry.register_fallback(entry)?;
        }

        for (key, entry) in &config.subdomains {
            let name = entry.name(key);
            let (prefix, mask) = entry.parse_prefix(name)?;
            let response_type = entry.response_type_or(ResponseType::Dynamic);
            registry.register_pair(name, prefix, mask, response_type)?;
        }

        for (key, entry) in &config.statics {
            let name = entry.name(key);
            let address = entry.parse_address(name)?;
            registry.register_pair(name, address, 128, ResponseType::Static)?;
        }

        Ok(registry)
    }

    fn register_fallback(&mut self, entry: &ZoneEntry) -> Result<(), ConfigError> {
        let name = entry
            .domain
            .as_deref()
            .ok_or_else(|| ConfigError::Validation("[dns.domain] requires a domain name".into()))?;
        let response_type = entry.response_type_or(ResponseType::NxError);

        if entry.has_prefix() {
            let (prefix, mask) = entry.parse_prefix(name)?;
            return self.register_pair(name, prefix, mask, response_type);
        }
        if matches!(response_type, ResponseType::Dynamic | ResponseType::Static) {
            return Err(ConfigError::zone(
                name,
                format!("{response_type} response requires a prefix"),
            ));
        }

        let forward = to_fqdn(name);
        self.insert(ZoneConfig {
            prefix: Ipv6Addr::UNSPECIFIED,
            mask: 0,
            domain: forward,
            reverse_domain: String::new(),
            response_type,
        })
    }

    /// Registers the forward zone `domain` and its derived reverse zone.
    ///
    /// Two entries with the same prefix and mask derive the same reverse
    /// zone. The first one registered keeps it and the later one is recorded
    /// in [`ZoneRegistry::shadowed`]; only its forward half is served.
    pub fn register_pair(
        &mut self,
        domain: &str,
        prefix: Ipv6Addr,
        mask: u8,
        response_type: ResponseType,
    ) -> Result<(), ConfigError> {
        if domain.trim().trim_end_matches('.').is_empty() {
            return Err(ConfigError::zone(domain, "empty domain name"));
        }
        if mask > 128 {
            return Err(ConfigError::zone(domain, format!("mask {mask} exceeds 128")));
        }

        let (forward, reverse) = ZoneConfig::pair(domain, prefix, mask, response_type);
        self.insert(forward)?;
        if self.zones.contains_key(&reverse.domain) {
            self.shadowed.push(reverse);
            return Ok(());
        }
        self.insert(reverse)
    }

    fn insert(&mut self, zone: ZoneConfig) -> Result<(), ConfigError> {
        if self.zones.contains_key(&zone.domain) {
            return Err(ConfigError::zone(&zone.domain, "registered more than once"));
        }
        self.zones.insert(zone.domain.clone(), zone);
        Ok(())
    }

    /// Exact, case-insensitive lookup of a zone by name.
    pub fn get(&self, name: &str) -> Option<&ZoneConfig> {
        self.zones.get(&to_fqdn(name))
    }

    /// Most specific zone containing `name`.
    pub fn find(&self, name: &str) -> Option<&ZoneConfig> {
        let fqdn = to_fqdn(name);
        let zone = suffixes(&fqdn).find_map(|candidate| self.zones.get(candidate));
        zone
    }

    /// Reverse zones dropped because an earlier entry already owns the name.
    ///
    /// Each entry's `reverse_domain` is the forward zone whose PTR answers
    /// were lost.
    pub fn shadowed(&self) -> &[ZoneConfig] {
        &self.shadowed
    }

    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    pub fn zones(&self) -> impl Iterator<Item = &ZoneConfig> {
        self.zones.values()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
