//! Share URL construction for search output.

use deunicode::deunicode;

use crate::config::SHARE_BASE;

/// Builds the public share URL for a file: `<base>file/<ident>/<sanitized-name>`.
///
/// The name is transliterated to ASCII and every character outside
/// `[A-Za-z0-9 .-]` becomes `_`.
#[must_use]
pub fn share_url(ident: &str, name: &str) -> String {
    share_url_with_base(SHARE_BASE, ident, name)
}

/// Same as [`share_url`] with an explicit base (which must end in `/`).
#[must_use]
pub fn share_url_with_base(base: &str, ident: &str, name: &str) -> String {
    format!("{base}file/{ident}/{}", sanitize_display_name(name))
}

/// Transliterates `name` to ASCII and replaces disallowed characters with `_`.
#[must_use]
pub fn sanitize_display_name(name: &str) -> String {
    deunicode(name)
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, ' ' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
