//! Destination filename derivation from captured response headers.

use std::path::{Component, Path};
use std::sync::LazyLock;

use regex::Regex;

/// Pattern matching the `Content-Disposition` line of a raw header blob.
///
/// Groups: 1 = `UTF-8` charset marker, 2 = `''` language separator,
/// 3 = quoted value, 4 = bare value.
pub const CONTENT_DISPOSITION_PATTERN: &str =
    r#"(?mi)^Content-Disposition:.*filename\*?=(UTF-8)?('')?(?:"([^"]*)"|([^\s;"]+))"#;

#[allow(clippy::expect_used)]
static CONTENT_DISPOSITION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CONTENT_DISPOSITION_PATTERN).expect("Content-Disposition regex is valid") // Static pattern, safe to panic
});

/// Extracts the filename announced in a raw header blob.
///
/// Handles:
/// - `attachment; filename*=UTF-8''My%20File.zip` (percent-decoded)
/// - `attachment; filename=plain.zip` (taken as-is)
/// - `attachment; filename="quoted name.zip"`
///
/// Returns `None` when no `Content-Disposition` header carries a filename.
#[must_use]
pub fn filename_from_headers(headers: &str) -> Option<String> {
    let captures = CONTENT_DISPOSITION_REGEX.captures(headers)?;
    let value = captures.get(3).or_else(|| captures.get(4))?.as_str();
    if value.is_empty() {
        return None;
    }

    let utf8_marked = captures
        .get(1)
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case("UTF-8"));
    if utf8_marked {
        let decoded = urlencoding::decode(value).ok()?;
        Some(decoded.into_owned())
    } else {
        Some(value.to_string())
    }
}

/// Sanitizes a header-supplied filename so it stays inside the destination directory.
///
/// Replaces characters that are invalid on common filesystems:
/// / \ : * ? " < > |
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if sanitized.is_empty() {
        return "_".to_string();
    }

    if is_safe_filename_segment(&sanitized) {
        sanitized
    } else {
        sanitized
            .chars()
            .map(|c| if c == '.' { '_' } else { c })
            .collect()
    }
}

fn is_safe_filename_segment(name: &str) -> bool {
    !Path::new(name).components().any(|component| {
        matches!(
            component,
            Component::CurDir | Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    })
}
