//! Authentication primitives: login credentials and mock bearer tokens.
//!
//! Tokens are opaque strings of the form `mock_jwt_<userId>_<millis>`. They
//! are not signed; the server only reads the user id back out of them.

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use super::user::UserId;

/// Lifetime advertised for issued tokens, in seconds (one week).
pub const TOKEN_TTL_SECONDS: u64 = 604_800;

const ACCESS_PREFIX: &str = "mock_jwt_";
const REFRESH_PREFIX: &str = "mock_refresh_";

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login credentials used by authentication services.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` must be non-empty but keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use zoe_api::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(
///     "fellowship@worshipharvest.org",
///     "password123",
/// )
/// .unwrap();
/// assert_eq!(creds.username(), "fellowship@worshipharvest.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username string suitable for user lookups.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Access and refresh tokens handed out at login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    /// Bearer token for `Authorization` headers.
    pub token: String,
    /// Token exchanged at `/api/auth/refresh`.
    pub refresh_token: String,
    /// Lifetime in seconds.
    pub expires_in: u64,
}

impl TokenPair {
    /// Issue tokens for `user` stamped with `issued_at`.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use zoe_api::domain::{TokenPair, UserId, user_id_from_token};
    ///
    /// let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    /// let pair = TokenPair::issue(UserId::new(151), at);
    /// assert_eq!(pair.token, "mock_jwt_151_1700000000000");
    /// assert_eq!(user_id_from_token(&pair.token), Some(UserId::new(151)));
    /// ```
    #[must_use]
    pub fn issue(user: UserId, issued_at: DateTime<Utc>) -> Self {
        let stamp = issued_at.timestamp_millis();
        Self {
            token: format!("{ACCESS_PREFIX}{user}_{stamp}"),
            refresh_token: format!("{REFRESH_PREFIX}{user}_{stamp}"),
            expires_in: TOKEN_TTL_SECONDS,
        }
    }
}

/// Read the user id back out of an access token.
#[must_use]
pub fn user_id_from_token(token: &str) -> Option<UserId> {
    parse_token(token, ACCESS_PREFIX)
}

/// Read the user id back out of a refresh token.
#[must_use]
pub fn user_id_from_refresh_token(token: &str) -> Option<UserId> {
    parse_token(token, REFRESH_PREFIX)
}

fn parse_token(token: &str, prefix: &str) -> Option<UserId> {
    let rest = token.trim().strip_prefix(prefix)?;
    let (id, stamp) = rest.split_once('_')?;
    stamp.parse::<i64>().ok()?;
    id.parse::<u32>().ok().map(UserId::new)
}
