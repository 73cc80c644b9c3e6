//! Login digests derived from credentials and the per-user salt.

use md5::Md5;
use sha1::{Digest, Sha1};

use super::md5_crypt::{MD5_CRYPT_MAGIC, md5_crypt};

/// Realm interposed between username and password in the HTTP-digest style hash.
pub const DIGEST_REALM: &str = "Webshare";

/// The two derived credentials sent to the `login` endpoint in place of the password.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    /// `sha1_hex(md5_crypt(password, "$1$" + salt))`
    pub password: String,
    /// `md5_hex(username + ":Webshare:" + password)`
    pub digest: String,
}

impl std::fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordDigest").finish_non_exhaustive()
    }
}

impl PasswordDigest {
    /// Derives both digests. Pure and deterministic.
    #[must_use]
    pub fn derive(username: &str, password: &str, salt: &str) -> Self {
        let crypted = md5_crypt(password.as_bytes(), &format!("{MD5_CRYPT_MAGIC}{salt}"));
        let password_hash = hex::encode(Sha1::digest(crypted.as_bytes()));
        let digest = hex::encode(Md5::digest(
            format!("{username}:{DIGEST_REALM}:{password}").as_bytes(),
        ));
        Self {
            password: password_hash,
            digest,
        }
    }
}
