//! HTTP server configuration.

use std::net::SocketAddr;

/// Startup parameters for the HTTP listener.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Configuration binding the given socket address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
