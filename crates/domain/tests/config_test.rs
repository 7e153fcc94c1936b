mod helpers;

use helpers::ConfigBuilder;
use nibbledns_domain::{Config, ConfigError, Protocol, ResponseType};

const FULL_CONFIG: &str = r#"
    [server]
    port = 5353
    bind_address = "127.0.0.1"
    protocol = "both"

    [logging]
    level = "debug"

    [dns.domain]
    domain = "example.com"
    response_type = "nxerror"

    [dns.soa]
    ttl = 600
    serial = 2024
    mname = "ns1.example.com."
    rname = "hostmaster.example.com."

    [dns.ns]
    servers = ["ns1.example.com.", "ns2.example.com."]

    [subdomain."d.example.com"]
    prefix = "2001:db8::/64"

    [subdomain.lab]
    domain = "lab.example.com"
    prefix = "2001:db8:1::"
    mask = 48
    response_type = "static"

    [static."host.example.com"]
    prefix = "2001:db8::5"
"#;

#[test]
fn test_full_config_parses() {
    let config = Config::from_toml(FULL_CONFIG).unwrap();

    assert_eq!(config.server.port, 5353);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.protocol, Protocol::Both);
    assert_eq!(config.logging.level, "debug");

    assert_eq!(config.dns.soa.ttl, 600);
    assert_eq!(config.dns.soa.serial, 2024);
    assert_eq!(config.dns.soa.refresh, 7200);
    assert_eq!(config.dns.ns.servers.len(), 2);

    assert_eq!(config.subdomains.len(), 2);
    assert_eq!(config.statics.len(), 1);
    assert_eq!(config.zone_count(), 4);
    assert!(config.validate().is_ok());
}

#[test]
fn test_defaults_when_sections_missing() {
    let config = Config::from_toml("").unwrap();

    assert_eq!(config.server.port, 53);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.protocol, Protocol::Udp);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.dns.soa.ttl, 3600);
    assert_eq!(config.dns.soa.serial, 1);
    assert_eq!(config.dns.soa.minimum, 300);
    assert!(config.dns.domain.is_none());
}

#[test]
fn test_unknown_protocol_fails_to_parse() {
    let result = Config::from_toml("[server]\nprotocol = \"quic\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_protocol_from_str() {
    assert_eq!("TCP".parse::<Protocol>().unwrap(), Protocol::Tcp);
    assert!("sctp".parse::<Protocol>().is_err());
    assert!(Protocol::Both.uses_udp() && Protocol::Both.uses_tcp());
    assert!(!Protocol::Udp.uses_tcp());
}

#[test]
fn test_listen_address_brackets_ipv6() {
    let mut config = Config::default();
    config.server.bind_address = "::".to_string();
    config.server.port = 5353;
    assert_eq!(config.server.listen_address(), "[::]:5353");

    config.server.bind_address = "127.0.0.1".to_string();
    assert_eq!(config.server.listen_address(), "127.0.0.1:5353");
}

#[test]
fn test_response_type_tags() {
    assert_eq!(ResponseType::from_tag("Dynamic"), ResponseType::Dynamic);
    assert_eq!(ResponseType::from_tag("STATIC"), ResponseType::Static);
    assert_eq!(ResponseType::from_tag("nxdomain"), ResponseType::NxError);
    assert_eq!(
        ResponseType::from_tag("forward"),
        ResponseType::Unrecognized("forward".to_string())
    );
    assert!(!ResponseType::from_tag("forward").is_recognized());
}

#[test]
fn test_legacy_dns_listener_keys_move_to_server() {
    let config = Config::from_toml(
        r#"
        [dns]
        port = 5300
        protocol = "tcp"

        [dns.domain]
        domain = "example.com"
        reverse_domain = "8.b.d.0.1.0.0.2.ip6.arpa."
    "#,
    )
    .unwrap();

    assert_eq!(config.server.port, 5300);
    assert_eq!(config.server.protocol, Protocol::Tcp);
    assert_eq!(config.dns.port, None);
    assert_eq!(config.dns.protocol, None);
    assert_eq!(
        config.dns.domain.as_ref().and_then(|d| d.reverse_domain.as_deref()),
        Some("8.b.d.0.1.0.0.2.ip6.arpa.")
    );
}

#[test]
fn test_cli_overrides_win_over_legacy_dns_keys() {
    let path = std::env::temp_dir().join(format!("nibbledns-legacy-{}.toml", std::process::id()));
    std::fs::write(&path, "[dns]\nport = 5300\n").unwrap();

    let overrides = nibbledns_domain::CliOverrides {
        port: Some(1053),
        ..Default::default()
    };
    let config = Config::load(path.to_str(), overrides).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.server.port, 1053);
}

#[test]
fn test_unknown_dns_key_fails_to_parse() {
    let result = Config::from_toml("[dns]\nbind = \"::\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    let result = Config::from_toml("[subdomain.\"d.example.\"]\nprefx = \"2001:db8::/64\"\n");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

// ── validate ───────────────────────────────────────────────────────────────

#[test]
fn test_validate_rejects_port_zero() {
    let mut config = ConfigBuilder::new().with_static("h.example.", "::1").build();
    config.server.port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_requires_soa_names() {
    let mut config = ConfigBuilder::new().with_static("h.example.", "::1").build();
    config.dns.soa.rname.clear();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_requires_a_zone() {
    let config = ConfigBuilder::new().build();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_requires_fallback_name() {
    let mut config = ConfigBuilder::new().with_fallback("example.com", None).build();
    assert!(config.validate().is_ok());

    if let Some(entry) = config.dns.domain.as_mut() {
        entry.domain = Some("  ".to_string());
    }
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

// ── load ───────────────────────────────────────────────────────────────────

#[test]
fn test_load_reads_file_and_applies_overrides() {
    let path = std::env::temp_dir().join(format!("nibbledns-config-{}.toml", std::process::id()));
    std::fs::write(&path, FULL_CONFIG).unwrap();

    let overrides = nibbledns_domain::CliOverrides {
        port: Some(1053),
        bind_address: None,
        protocol: Some(Protocol::Tcp),
        log_level: Some("warn".to_string()),
    };
    let config = Config::load(path.to_str(), overrides).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.server.port, 1053);
    assert_eq!(config.server.bind_address, "127.0.0.1");
    assert_eq!(config.server.protocol, Protocol::Tcp);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_missing_file_is_an_error() {
    let result = Config::load(
        Some("/nonexistent/nibbledns/config.toml"),
        Default::default(),
    );
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_shipped_example_config_is_valid() {
    let config = Config::from_toml(include_str!("../../../nibbledns.example.toml")).unwrap();

    assert!(config.validate().is_ok());
    assert_eq!(config.server.listen_address(), "[::]:53");
    assert_eq!(
        config
            .dns
            .domain
            .as_ref()
            .and_then(|entry| entry.response_type.as_deref()),
        Some("nxerror")
    );
}
