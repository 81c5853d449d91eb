//! Server configuration

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    pub addr: IpAddr,
    /// Port to bind
    pub port: u16,
    /// Directory served as the web root
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With bind address
    #[inline]
    #[must_use]
    pub fn with_addr(mut self, addr: IpAddr) -> Self {
        self.addr = addr;
        self
    }

    /// With port
    #[inline]
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// With static asset directory
    #[inline]
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

    /// Full socket address to bind
    #[inline]
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.addr, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            static_dir: PathBuf::from("public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let config = ServerConfig::new()
            .with_addr(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
            .with_port(9000)
            .with_static_dir("assets");

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
        assert_eq!(config.static_dir, PathBuf::from("assets"));
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8000);
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }
}
