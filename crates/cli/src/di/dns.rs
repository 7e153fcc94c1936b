use nibbledns_application::use_cases::HandleDnsQueryUseCase;
use nibbledns_domain::{Config, ZoneRegistry};
use nibbledns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::{info, warn};

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let registry = Arc::new(ZoneRegistry::from_config(config)?);

        for zone in registry.zones() {
            if !zone.response_type.is_recognized() {
                warn!(
                    zone = %zone.domain,
                    response_type = %zone.response_type,
                    "Unrecognized response type, zone will answer NXDOMAIN"
                );
            }
        }

        for zone in registry.shadowed() {
            warn!(
                zone = %zone.domain,
                host = %zone.reverse_domain,
                "Reverse zone already registered, PTR answers keep the first host"
            );
        }

        info!(zones = registry.len(), "Zone registry loaded");

        let use_case = Arc::new(HandleDnsQueryUseCase::new(registry));
        let handler = DnsServerHandler::new(use_case);

        Ok(Self { handler })
    }
}
