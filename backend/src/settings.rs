//! Server configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `ZOE_*` environment variables and an optional
//! configuration file, in that order of precedence.

use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;
const DEFAULT_LATENCY_MS: u64 = 400;
const DEFAULT_SEED_NAME: &str = "harvest-default";

/// Location of the bundled seed registry.
#[must_use]
pub fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("example-data")
        .join("seeds.json")
}

/// Configuration values for the mock API server.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ZOE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Simulated latency added to every `/api` request, in milliseconds.
    pub latency_ms: Option<u64>,
    /// Seed name to load from the registry.
    pub seed_name: Option<String>,
    /// Optional registry path override.
    pub registry_path: Option<PathBuf>,
    /// File holding the session cookie key; an ephemeral key is used when unset.
    pub session_key_file: Option<PathBuf>,
    /// Mark session cookies `Secure`.
    #[ortho_config(default = false)]
    pub cookie_secure: bool,
}

impl ServerSettings {
    /// Host and port to bind, falling back to `0.0.0.0:3001`.
    #[must_use]
    pub fn bind_addr(&self) -> (&str, u16) {
        (
            self.host.as_deref().unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Simulated latency; zero disables the delay.
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms.unwrap_or(DEFAULT_LATENCY_MS))
    }

    /// Return the configured seed name, falling back to the default.
    #[must_use]
    pub fn seed_name(&self) -> &str {
        self.seed_name.as_deref().unwrap_or(DEFAULT_SEED_NAME)
    }

    /// Return the configured registry path, falling back to the default.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}
