//! Session authentication.
//!
//! Login is a two-step challenge/response: the `salt` endpoint returns a
//! per-user salt, both [`PasswordDigest`] values are derived locally, and the
//! `login` endpoint exchanges them for a session token. The plaintext
//! password never leaves the process.

mod digest;
mod md5_crypt;

pub use digest::{DIGEST_REALM, PasswordDigest};
pub use md5_crypt::{MD5_CRYPT_MAGIC, md5_crypt};

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::api::{ApiClient, ApiError, Endpoint, LoginResponse, SaltResponse};

/// Username and password for one run.
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Username or e-mail used to log in.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated session. Only [`login`] creates one.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// The `wst` token sent with authenticated calls.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

/// Errors raised while logging in.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password is empty.
    #[error("username and password must both be set before logging in")]
    MissingCredentials,

    /// A login API step failed.
    #[error("login failed: {0}")]
    Api(#[from] ApiError),

    /// The service accepted the login but returned no token.
    #[error("login returned an empty session token")]
    MissingToken,
}

/// Performs the salt/login handshake and returns a [`Session`].
///
/// # Errors
///
/// - [`AuthError::MissingCredentials`] if either credential is empty
/// - [`AuthError::Api`] if the `salt` or `login` call fails
/// - [`AuthError::MissingToken`] if the `login` response carries no token
#[instrument(skip(api, credentials), fields(username = %credentials.username))]
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Session, AuthError> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }

    let SaltResponse { salt } = api
        .call::<SaltResponse>(
            Endpoint::Salt,
            &[("username_or_email", credentials.username.clone())],
        )
        .await?;
    debug!("salt received");

    let digest = PasswordDigest::derive(&credentials.username, &credentials.password, &salt);
    let LoginResponse { token } = api
        .call::<LoginResponse>(
            Endpoint::Login,
            &[
                ("username_or_email", credentials.username.clone()),
                ("password", digest.password),
                ("digest", digest.digest),
                ("keep_logged_in", "1".to_string()),
                ("wst", String::new()),
            ],
        )
        .await?;

    let token = token
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)?;

    info!("logged in");
    Ok(Session { token })
}

#[cfg(test)]
pub(crate) fn test_session(token: &str) -> Session {
    Session {
        token: token.to_string(),
    }
}
