use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

use super::errors::ConfigError;
use crate::nibble::split_prefix;
use crate::zone::ResponseType;

/// One zone as written in the configuration file.
///
/// `prefix` is either a bare address paired with `mask`, or CIDR text. An
/// explicit `mask` wins over the CIDR length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneEntry {
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub prefix: Option<String>,

    #[serde(default)]
    pub mask: Option<u8>,

    #[serde(default)]
    pub response_type: Option<String>,

    /// Read for compatibility and otherwise unused: the reverse zone is
    /// always derived from `prefix` and `mask`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reverse_domain: Option<String>,
}

impl ZoneEntry {
    /// Zone name: the `domain` field, else the table key it was declared under.
    pub fn name<'a>(&'a self, key: &'a str) -> &'a str {
        self.domain.as_deref().unwrap_or(key)
    }

    pub fn response_type_or(&self, default: ResponseType) -> ResponseType {
        self.response_type
            .as_deref()
            .map(ResponseType::from_tag)
            .unwrap_or(default)
    }

    pub fn has_prefix(&self) -> bool {
        self.prefix.is_some()
    }

    /// Parses the prefix address and mask of the entry named `zone`.
    pub fn parse_prefix(&self, zone: &str) -> Result<(Ipv6Addr, u8), ConfigError> {
        let (address, cidr_mask) = self.parse_address_text(zone)?;

        let mask = self
            .mask
            .or(cidr_mask)
            .ok_or_else(|| ConfigError::zone(zone, "missing mask"))?;

        if mask > 128 {
            return Err(ConfigError::zone(zone, format!("mask {mask} exceeds 128")));
        }
        if mask % 4 != 0 {
            return Err(ConfigError::zone(
                zone,
                format!("mask {mask} is not on a nibble boundary (multiple of 4)"),
            ));
        }

        Ok((address, mask))
    }

    /// Parses only the address; used by host-exact zones whose mask is fixed.
    pub fn parse_address(&self, zone: &str) -> Result<Ipv6Addr, ConfigError> {
        self.parse_address_text(zone).map(|(address, _)| address)
    }

    fn parse_address_text(&self, zone: &str) -> Result<(Ipv6Addr, Option<u8>), ConfigError> {
        let text = self
            .prefix
            .as_deref()
            .ok_or_else(|| ConfigError::zone(zone, "missing prefix"))?;

        if text.contains('/') {
            let (address, mask) =
                split_prefix(text).map_err(|e| ConfigError::zone(zone, e.to_string()))?;
            return Ok((address, Some(mask)));
        }

        text.trim()
            .parse::<Ipv6Addr>()
            .map(|address| (address, None))
            .map_err(|_| ConfigError::zone(zone, format!("invalid IPv6 prefix '{text}'")))
    }
}
