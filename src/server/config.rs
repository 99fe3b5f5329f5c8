//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Application settings loaded from environment, CLI flags, and config files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKBOARD")]
pub struct AppSettings {
    /// Socket address to bind, e.g. `0.0.0.0:8080`.
    #[ortho_config(default = "0.0.0.0:8080".to_string())]
    pub bind_addr: String,
}

impl AppSettings {
    /// Return the configured bind address.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Construct a server configuration from a resolved bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self { bind_addr }
    }

    /// Build a configuration from application settings.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the configured bind address does not
    /// parse as a socket address.
    pub fn from_settings(settings: &AppSettings) -> std::io::Result<Self> {
        let bind_addr = settings.bind_addr().parse().map_err(|err| {
            std::io::Error::other(format!(
                "invalid bind address {:?}: {err}",
                settings.bind_addr()
            ))
        })?;
        Ok(Self::new(bind_addr))
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
