//! Translation between host names in a dynamic zone and addresses in its prefix.
//!
//! The host label is the host part of the address written as a hex number:
//! in `d.example.` over `2001:db8::/64`, `1.d.example.` is `2001:db8::1` and
//! `abc.d.example.` is `2001:db8::abc`.

use nibbledns_domain::name::{strip_zone, to_fqdn};
use nibbledns_domain::nibble::{nibble_name, nibble_to_ipv6, parse_nibbles, ADDRESS_NIBBLES};
use nibbledns_domain::{DomainError, ZoneConfig};
use std::net::Ipv6Addr;

/// Synthesizes the address for a forward name inside `zone`.
pub fn get_ipv6_for_name(name: &str, zone: &ZoneConfig) -> Result<Ipv6Addr, DomainError> {
    let name = to_fqdn(name);
    let forward = zone.forward_domain();
    let host_nibbles = zone.host_nibbles();

    if host_nibbles == 0 && name == forward {
        return Ok(zone.prefix);
    }

    let digits = strip_zone(&name, forward).ok_or_else(|| DomainError::OutOfZone {
        name: name.clone(),
        zone: forward.to_string(),
    })?;

    if digits.is_empty()
        || digits.len() > host_nibbles
        || !digits.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(DomainError::InvalidEncoding(format!(
            "{name}: host label '{digits}' is not a hex number of at most {host_nibbles} digits"
        )));
    }

    let prefix_hex = format!("{:032x}", u128::from(zone.prefix));
    let full_hex = format!(
        "{}{:0>width$}",
        &prefix_hex[..zone.prefix_nibbles()],
        digits,
        width = host_nibbles
    );

    nibble_to_ipv6(&nibble_name(full_hex.chars().rev()))
}

/// Synthesizes the forward name for a full reverse name inside `zone`.
pub fn get_name_for_ipv6(name: &str, zone: &ZoneConfig) -> Result<String, DomainError> {
    let name = to_fqdn(name);
    let nibbles = parse_nibbles(&name)?;
    if nibbles.len() != ADDRESS_NIBBLES {
        return Err(DomainError::InvalidEncoding(format!(
            "{name}: {} nibbles, a full address needs {ADDRESS_NIBBLES}",
            nibbles.len()
        )));
    }

    let zone_nibbles = parse_nibbles(&zone.nibble_prefix())?;
    let host_nibbles = zone.host_nibbles();
    if nibbles[host_nibbles..] != zone_nibbles[..] {
        return Err(DomainError::OutOfZone {
            name,
            zone: zone.nibble_prefix(),
        });
    }

    let forward = zone.forward_domain();
    if host_nibbles == 0 {
        return Ok(forward.to_string());
    }

    let digits: String = nibbles[..host_nibbles]
        .iter()
        .rev()
        .map(|nibble| format!("{nibble:x}"))
        .collect();
    let digits = match digits.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    Ok(format!("{digits}.{forward}"))
}
