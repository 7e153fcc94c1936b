use nibbledns_domain::name::{strip_zone, suffixes, to_fqdn};

#[test]
fn test_to_fqdn_lowercases_and_adds_dot() {
    assert_eq!(to_fqdn("Host.Example.COM"), "host.example.com.");
    assert_eq!(to_fqdn("example.com."), "example.com.");
    assert_eq!(to_fqdn("example.com.."), "example.com.");
}

#[test]
fn test_suffixes_walk_up_to_root() {
    let all: Vec<&str> = suffixes("a.b.example.").collect();
    assert_eq!(all, vec!["a.b.example.", "b.example.", "example.", "."]);
}

#[test]
fn test_suffixes_of_root() {
    let all: Vec<&str> = suffixes(".").collect();
    assert_eq!(all, vec!["."]);
}

#[test]
fn test_strip_zone_returns_labels_in_front() {
    assert_eq!(strip_zone("1.d.example.", "d.example."), Some("1"));
    assert_eq!(strip_zone("a.b.d.example.", "d.example."), Some("a.b"));
}

#[test]
fn test_strip_zone_requires_label_boundary() {
    assert_eq!(strip_zone("d.example.", "d.example."), None);
    assert_eq!(strip_zone("xd.example.", "d.example."), None);
    assert_eq!(strip_zone("other.", "d.example."), None);
}
