use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::{Protocol, ServerConfig};
use super::zones::ZoneEntry;

const LOCAL_CONFIG_FILE: &str = "nibbledns.toml";
const SYSTEM_CONFIG_FILE: &str = "/etc/nibbledns/config.toml";
const SNAP_CONFIG_FILE: &str = "config.toml";

/// Main configuration structure for nibbledns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address, transports)
    #[serde(default)]
    pub server: ServerConfig,

    /// Top-level zone, SOA and NS data
    #[serde(default)]
    pub dns: DnsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Zones answered by address synthesis, keyed by forward domain
    #[serde(default, rename = "subdomain")]
    pub subdomains: BTreeMap<String, ZoneEntry>,

    /// Fixed host-to-address mappings, keyed by forward domain
    #[serde(default, rename = "static")]
    pub statics: BTreeMap<String, ZoneEntry>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. `$SNAP_DATA/config.toml` when running inside a snap
    /// 3. nibbledns.toml in current directory
    /// 4. /etc/nibbledns/config.toml
    /// 5. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(PathBuf::from).or_else(Self::locate_config_file) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// `[dns] port` and `[dns] protocol` replace their `[server]`
    /// counterparts when present.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let mut config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.move_legacy_listener_keys();
        Ok(config)
    }

    fn move_legacy_listener_keys(&mut self) {
        if let Some(port) = self.dns.port.take() {
            self.server.port = port;
        }
        if let Some(protocol) = self.dns.protocol.take() {
            self.server.protocol = protocol;
        }
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Find the first configuration file that exists on this host
    pub fn locate_config_file() -> Option<PathBuf> {
        let snap = std::env::var_os("SNAP_DATA").map(|dir| Path::new(&dir).join(SNAP_CONFIG_FILE));

        snap.into_iter()
            .chain([
                PathBuf::from(LOCAL_CONFIG_FILE),
                PathBuf::from(SYSTEM_CONFIG_FILE),
            ])
            .find(|candidate| candidate.exists())
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(protocol) = overrides.protocol {
            self.server.protocol = protocol;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn zone_count(&self) -> usize {
        self.dns.domain.iter().count() + self.subdomains.len() + self.statics.len()
    }

    /// Validate configuration
    ///
    /// Zone-level problems (prefixes, masks, duplicates) surface when the
    /// registry is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.dns.soa.mname.trim().is_empty() || self.dns.soa.rname.trim().is_empty() {
            return Err(ConfigError::Validation(
                "SOA mname and rname must be set".to_string(),
            ));
        }

        if self.zone_count() == 0 {
            return Err(ConfigError::Validation("No zones configured".to_string()));
        }

        if let Some(domain) = &self.dns.domain {
            if domain.domain.as_deref().map_or(true, |d| d.trim().is_empty()) {
                return Err(ConfigError::Validation(
                    "[dns.domain] requires a domain name".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub protocol: Option<Protocol>,
    pub log_level: Option<String>,
}
