#![allow(dead_code)]

use nibbledns_application::use_cases::HandleDnsQueryUseCase;
use nibbledns_domain::{Config, Protocol, ZoneRegistry};
use nibbledns_infrastructure::dns::{DnsServer, DnsServerHandler};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub const ZONES_TOML: &str = r#"
    [dns.domain]
    domain = "example."

    [dns.soa]
    ttl = 600
    mname = "ns1.example."
    rname = "hostmaster.example."

    [dns.ns]
    servers = ["ns1.example.", "ns2.example."]

    [subdomain."d.example."]
    prefix = "2001:db8::/64"

    [static."host.example."]
    prefix = "2001:db8::5"
"#;

pub fn handler() -> DnsServerHandler {
    handler_from(ZONES_TOML)
}

pub fn handler_from(toml: &str) -> DnsServerHandler {
    let config = Config::from_toml(toml).unwrap();
    let registry = Arc::new(ZoneRegistry::from_config(&config).unwrap());
    DnsServerHandler::new(Arc::new(HandleDnsQueryUseCase::new(registry)))
}

pub fn loopback() -> SocketAddr {
    "127.0.0.1:0".parse().unwrap()
}

/// Starts a server on an ephemeral loopback port.
pub fn start_server(protocol: Protocol) -> (DnsServer, SocketAddr, CancellationToken) {
    start_server_with(ZONES_TOML, protocol)
}

pub fn start_server_with(
    toml: &str,
    protocol: Protocol,
) -> (DnsServer, SocketAddr, CancellationToken) {
    let shutdown = CancellationToken::new();
    let mut server = DnsServer::new(loopback(), protocol, handler_from(toml));
    let addr = server.start(shutdown.clone()).unwrap();
    (server, addr, shutdown)
}
