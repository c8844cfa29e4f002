//! HTTP server configuration object and helpers.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use tracing::warn;

use zoe_api::settings::ServerSettings;

/// Minimum key material accepted from a key file.
const MIN_KEY_BYTES: usize = 64;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) latency: Duration,
}

impl ServerConfig {
    /// Derive the server configuration from loaded settings.
    ///
    /// # Errors
    /// Returns [`io::Error`] when the bind address does not resolve.
    pub fn from_settings(settings: &ServerSettings) -> io::Result<Self> {
        let bind_addr = settings
            .bind_addr()
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::other("bind address did not resolve"))?;
        Ok(Self {
            key: session_key(settings.session_key_file.as_deref()),
            cookie_secure: settings.cookie_secure,
            same_site: SameSite::Lax,
            bind_addr,
            latency: settings.latency(),
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

/// Load the session key from `path`, or fall back to an ephemeral key.
///
/// Sessions signed with an ephemeral key do not survive a restart, which
/// matches the dataset being reseeded on every start.
fn session_key(path: Option<&Path>) -> Key {
    let Some(path) = path else {
        return Key::generate();
    };
    match std::fs::read(path) {
        Ok(bytes) if bytes.len() >= MIN_KEY_BYTES => Key::derive_from(&bytes),
        Ok(bytes) => {
            warn!(
                path = %path.display(),
                length = bytes.len(),
                minimum = MIN_KEY_BYTES,
                "session key too short; using temporary key"
            );
            Key::generate()
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "session key unreadable; using temporary key");
            Key::generate()
        }
    }
}
