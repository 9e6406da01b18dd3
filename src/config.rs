//! Configuration for DiscoKV
//!
//! Centralized configuration with sensible defaults, plus resolution of the
//! listen flags (interface / address / port) into a concrete bind address.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use crate::error::{DiscoError, Result};

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 65001;

/// Default cap on inbound request bodies (8 KiB)
pub const DEFAULT_MAX_REQUEST_SIZE: usize = 8 * 1024;

/// Main configuration for a DiscoKV server
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Already-resolved HTTP listen address
    pub listen_addr: SocketAddr,

    // -------------------------------------------------------------------------
    // Request Configuration
    // -------------------------------------------------------------------------
    /// Max size of a request body in bytes; larger bodies are rejected with 400
    pub max_request_size: usize,

    // -------------------------------------------------------------------------
    // Housekeeping
    // -------------------------------------------------------------------------
    /// How often the server logs that it is still alive
    pub heartbeat_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_PORT),
            max_request_size: DEFAULT_MAX_REQUEST_SIZE,
            heartbeat_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: SocketAddr) -> Self {
        self.config.listen_addr = addr;
        self
    }

    /// Set the maximum request body size (in bytes)
    pub fn max_request_size(mut self, size: usize) -> Self {
        self.config.max_request_size = size;
        self
    }

    /// Set the heartbeat log interval
    pub fn heartbeat_interval(mut self, interval: Duration) -> Self {
        self.config.heartbeat_interval = interval;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Listen settings as given on the command line
///
/// `interface` wins over `address`; with neither, the server listens on all
/// IPv4 addresses.
#[derive(Debug, Clone, Default)]
pub struct ListenSpec {
    pub interface: Option<String>,
    pub address: Option<String>,
    pub port: u16,
}

impl ListenSpec {
    /// Resolve into a socket address, looking up interface addresses if needed
    pub fn resolve(&self) -> Result<SocketAddr> {
        self.resolve_with(interface_addresses)
    }

    /// Resolve using a custom interface lookup (name -> addresses)
    pub fn resolve_with<F>(&self, lookup: F) -> Result<SocketAddr>
    where
        F: FnOnce(&str) -> Result<Vec<IpAddr>>,
    {
        if self.port == 0 {
            return Err(DiscoError::Config(format!("invalid listen port {}", self.port)));
        }

        let ip = match (non_empty(&self.interface), non_empty(&self.address)) {
            (Some(name), _) => lookup(name)?.into_iter().next().ok_or_else(|| {
                DiscoError::Config(format!("cannot find address for interface {}", name))
            })?,
            (None, Some(addr)) => addr.parse::<IpAddr>().map_err(|e| {
                DiscoError::Config(format!("invalid listen address {:?}: {}", addr, e))
            })?,
            (None, None) => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// All addresses bound to the named local interface, in OS order
pub fn interface_addresses(name: &str) -> Result<Vec<IpAddr>> {
    let addrs = if_addrs::get_if_addrs()?
        .into_iter()
        .filter(|iface| iface.name == name)
        .map(|iface| {
            tracing::debug!("{}: {}", iface.name, iface.ip());
            iface.ip()
        })
        .collect();
    Ok(addrs)
}
