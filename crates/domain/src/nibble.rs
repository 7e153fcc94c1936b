//! Conversion between IPv6 addresses and their `ip6.arpa.` nibble names.
//!
//! A nibble name lists one hex digit per label, least significant digit
//! first: `2001:db8::/64` is `0.0.0.0.0.0.0.0.8.b.d.0.1.0.0.2.ip6.arpa.`.

use crate::errors::DomainError;
use std::net::Ipv6Addr;

/// Suffix shared by every IPv6 reverse name.
pub const REVERSE_SUFFIX: &str = ".ip6.arpa.";

/// Root of the IPv6 reverse tree, the zone name of a `/0` prefix.
pub const REVERSE_APEX: &str = "ip6.arpa.";

/// Number of nibbles in a full IPv6 address.
pub const ADDRESS_NIBBLES: usize = 32;

/// Encodes the leading `prefix_len / 4` nibbles of `address` as a reverse name.
///
/// A length that is not a multiple of 4 is truncated down to the nibble
/// boundary. `128` yields the full 32-label name and `0` yields the bare
/// `.ip6.arpa.` suffix.
pub fn ipv6_to_nibble(address: Ipv6Addr, prefix_len: u8) -> String {
    let keep = usize::from(prefix_len.min(128)) / 4;
    let hex = format!("{:032x}", u128::from(address));
    nibble_name(hex[..keep].chars().rev())
}

/// Decodes a (possibly partial) nibble name into an address.
///
/// Nibbles fill the address from the most significant end; anything the name
/// does not cover is zero, which turns a zone-boundary name back into its
/// prefix address. An odd nibble count leaves the low half of the last byte
/// zero.
pub fn nibble_to_ipv6(name: &str) -> Result<Ipv6Addr, DomainError> {
    let nibbles = parse_nibbles(name)?;
    Ok(Ipv6Addr::from(fold_nibbles(nibbles.iter().rev().copied())))
}

/// Splits CIDR text such as `2003::/8` into its address and mask.
pub fn split_prefix(text: &str) -> Result<(Ipv6Addr, u8), DomainError> {
    let (address, mask) = text
        .trim()
        .split_once('/')
        .ok_or_else(|| DomainError::InvalidFormat(format!("{text}: missing '/'")))?;

    let mask: u8 = mask
        .parse()
        .map_err(|_| DomainError::InvalidFormat(format!("{text}: mask is not a number")))?;
    if mask > 128 {
        return Err(DomainError::InvalidFormat(format!(
            "{text}: mask {mask} exceeds 128"
        )));
    }

    let address: Ipv6Addr = address
        .parse()
        .map_err(|_| DomainError::InvalidFormat(format!("{text}: invalid IPv6 address")))?;

    Ok((address, mask))
}

/// Returns true when `name` lives under `ip6.arpa.`.
pub fn is_reverse_name(name: &str) -> bool {
    name.len()
        .checked_sub(REVERSE_SUFFIX.len())
        .and_then(|start| name.get(start..))
        .is_some_and(|tail| tail.eq_ignore_ascii_case(REVERSE_SUFFIX))
}

/// Parses the labels of a reverse name into nibble values, in name order
/// (least significant first).
pub fn parse_nibbles(name: &str) -> Result<Vec<u8>, DomainError> {
    let labels = strip_reverse_suffix(name)?;
    if labels.is_empty() {
        return Ok(Vec::new());
    }

    let nibbles = labels
        .split('.')
        .map(|label| {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => c
                    .to_digit(16)
                    .map(|d| d as u8)
                    .ok_or_else(|| invalid_label(name, label)),
                _ => Err(invalid_label(name, label)),
            }
        })
        .collect::<Result<Vec<u8>, DomainError>>()?;

    if nibbles.len() > ADDRESS_NIBBLES {
        return Err(DomainError::InvalidEncoding(format!(
            "{name}: {} nibbles, at most {ADDRESS_NIBBLES} allowed",
            nibbles.len()
        )));
    }
    Ok(nibbles)
}

/// Builds a reverse name from hex digits given least significant first.
pub fn nibble_name(digits: impl Iterator<Item = char>) -> String {
    let mut name = String::with_capacity(ADDRESS_NIBBLES * 2 + REVERSE_SUFFIX.len());
    for (i, digit) in digits.enumerate() {
        if i > 0 {
            name.push('.');
        }
        name.push(digit.to_ascii_lowercase());
    }
    name.push_str(REVERSE_SUFFIX);
    name
}

/// Packs nibbles, most significant first, into the high end of a 128-bit value.
pub(crate) fn fold_nibbles(nibbles: impl Iterator<Item = u8>) -> u128 {
    nibbles
        .take(ADDRESS_NIBBLES)
        .enumerate()
        .fold(0u128, |acc, (i, nibble)| {
            acc | (u128::from(nibble & 0x0f) << (124 - 4 * i))
        })
}

fn strip_reverse_suffix(name: &str) -> Result<&str, DomainError> {
    if name.eq_ignore_ascii_case(REVERSE_APEX) || name.eq_ignore_ascii_case(REVERSE_SUFFIX) {
        return Ok("");
    }
    if !is_reverse_name(name) {
        return Err(DomainError::InvalidEncoding(format!(
            "{name}: missing {REVERSE_SUFFIX} suffix"
        )));
    }
    Ok(&name[..name.len() - REVERSE_SUFFIX.len()])
}

fn invalid_label(name: &str, label: &str) -> DomainError {
    DomainError::InvalidEncoding(format!("{name}: label '{label}' is not a single hex digit"))
}
