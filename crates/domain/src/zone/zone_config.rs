use super::ResponseType;
use crate::name::to_fqdn;
use crate::nibble::{ipv6_to_nibble, is_reverse_name, ADDRESS_NIBBLES, REVERSE_APEX};
use std::net::Ipv6Addr;

/// One registered zone, either the forward (host name) or the reverse
/// (`ip6.arpa.`) half of a configured entry.
///
/// Both halves carry the same prefix, mask and response type; `domain` and
/// `reverse_domain` are swapped between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    pub prefix: Ipv6Addr,
    pub mask: u8,
    pub domain: String,
    pub reverse_domain: String,
    pub response_type: ResponseType,
}

impl ZoneConfig {
    /// Builds the forward zone for `domain` and its derived reverse zone.
    ///
    /// A `/0` prefix has no nibble labels; its reverse zone is the
    /// `ip6.arpa.` apex itself.
    pub fn pair(
        domain: &str,
        prefix: Ipv6Addr,
        mask: u8,
        response_type: ResponseType,
    ) -> (ZoneConfig, ZoneConfig) {
        let forward_name = to_fqdn(domain);
        let reverse_name = reverse_zone_name(prefix, mask);

        let forward = ZoneConfig {
            prefix,
            mask,
            domain: forward_name.clone(),
            reverse_domain: reverse_name.clone(),
            response_type: response_type.clone(),
        };
        let reverse = ZoneConfig {
            prefix,
            mask,
            domain: reverse_name,
            reverse_domain: forward_name,
            response_type,
        };
        (forward, reverse)
    }

    /// Nibble name of the zone prefix.
    pub fn nibble_prefix(&self) -> String {
        ipv6_to_nibble(self.prefix, self.mask)
    }

    pub fn prefix_nibbles(&self) -> usize {
        usize::from(self.mask.min(128)) / 4
    }

    /// Nibbles left for the host part below the prefix.
    pub fn host_nibbles(&self) -> usize {
        ADDRESS_NIBBLES - self.prefix_nibbles()
    }

    pub fn is_reverse(&self) -> bool {
        is_reverse_name(&self.domain) || self.domain.eq_ignore_ascii_case(REVERSE_APEX)
    }

    /// Forward host-name zone of the pair, whichever half this is.
    pub fn forward_domain(&self) -> &str {
        if self.is_reverse() {
            &self.reverse_domain
        } else {
            &self.domain
        }
    }
}

fn reverse_zone_name(prefix: Ipv6Addr, mask: u8) -> String {
    ipv6_to_nibble(prefix, mask)
        .trim_start_matches('.')
        .to_string()
}
