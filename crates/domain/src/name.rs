//! Helpers for fully-qualified domain names as plain strings.

/// Lower-cases a name and guarantees exactly one trailing dot.
pub fn to_fqdn(name: &str) -> String {
    let mut fqdn = name.trim().trim_end_matches('.').to_ascii_lowercase();
    fqdn.push('.');
    fqdn
}

/// Iterates over `name` and each of its parent names, ending with the root.
///
/// `"a.b.example."` yields `"a.b.example."`, `"b.example."`, `"example."`, `"."`.
pub fn suffixes(name: &str) -> impl Iterator<Item = &str> {
    let mut next = Some(name);
    std::iter::from_fn(move || {
        let current = next?;
        next = match current.find('.') {
            Some(idx) if idx + 1 < current.len() => Some(&current[idx + 1..]),
            Some(_) if current != "." => Some("."),
            _ => None,
        };
        Some(current)
    })
}

/// Returns the part of `name` in front of `.zone`, if `name` is strictly inside `zone`.
pub fn strip_zone<'a>(name: &'a str, zone: &str) -> Option<&'a str> {
    name.strip_suffix(zone)?.strip_suffix('.')
}
