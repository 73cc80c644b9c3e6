//! MD5-crypt (`$1$`) password hashing, bit-compatible with `crypt(3)`.

use md5::{Digest, Md5};

/// Magic prefix identifying the MD5-crypt scheme.
pub const MD5_CRYPT_MAGIC: &str = "$1$";

const MAX_SALT_LEN: usize = 8;
const ROUNDS: usize = 1000;
const ITOA64: &[u8; 64] = b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Hashes `password` with the MD5-crypt scheme.
///
/// `setting` is either a bare salt or a salt prefixed with `$1$`. Only the
/// first 8 bytes before any `$` are used, exactly as `crypt(3)` does.
/// Returns the full `$1$<salt>$<hash>` string.
#[must_use]
pub fn md5_crypt(password: &[u8], setting: &str) -> String {
    let salt = effective_salt(setting);
    let magic = MD5_CRYPT_MAGIC.as_bytes();

    let mut alternate = Md5::new();
    alternate.update(password);
    alternate.update(salt);
    alternate.update(password);
    let alternate = alternate.finalize();

    let mut ctx = Md5::new();
    ctx.update(password);
    ctx.update(magic);
    ctx.update(salt);
    let mut remaining = password.len();
    while remaining > 0 {
        let take = remaining.min(16);
        ctx.update(&alternate[..take]);
        remaining -= take;
    }
    let mut bits = password.len();
    while bits > 0 {
        if bits & 1 == 1 {
            ctx.update([0u8]);
        } else {
            ctx.update(&password[..1]);
        }
        bits >>= 1;
    }
    let mut digest: [u8; 16] = ctx.finalize().into();

    for round in 0..ROUNDS {
        let mut ctx = Md5::new();
        if round & 1 == 1 {
            ctx.update(password);
        } else {
            ctx.update(digest);
        }
        if round % 3 != 0 {
            ctx.update(salt);
        }
        if round % 7 != 0 {
            ctx.update(password);
        }
        if round & 1 == 1 {
            ctx.update(digest);
        } else {
            ctx.update(password);
        }
        digest = ctx.finalize().into();
    }

    let mut out = String::with_capacity(MD5_CRYPT_MAGIC.len() + salt.len() + 1 + 22);
    out.push_str(MD5_CRYPT_MAGIC);
    out.push_str(&String::from_utf8_lossy(salt));
    out.push('$');
    for (a, b, c) in [(0, 6, 12), (1, 7, 13), (2, 8, 14), (3, 9, 15), (4, 10, 5)] {
        let group = (u32::from(digest[a]) << 16) | (u32::from(digest[b]) << 8) | u32::from(digest[c]);
        push_base64(&mut out, group, 4);
    }
    push_base64(&mut out, u32::from(digest[11]), 2);
    out
}

fn effective_salt(setting: &str) -> &[u8] {
    let salt = setting.strip_prefix(MD5_CRYPT_MAGIC).unwrap_or(setting);
    let salt = salt.split('$').next().unwrap_or_default().as_bytes();
    &salt[..salt.len().min(MAX_SALT_LEN)]
}

fn push_base64(out: &mut String, mut value: u32, chars: usize) {
    for _ in 0..chars {
        out.push(char::from(ITOA64[(value & 0x3f) as usize]));
        value >>= 6;
    }
}
