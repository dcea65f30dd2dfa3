//! Colo label splitting.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SITE_PATTERN;
use crate::utils::compile_regex_unsafe;

static SITE_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(SITE_PATTERN, "SITE_RE"));

/// Splits a status page colo label into `(name, iata)`.
///
/// The label has the shape `"Antananarivo, Madagascar - (TNR)"`. Anything
/// between the dash and the opening parenthesis is ignored, and the name is the
/// shortest prefix that is followed by whitespace and a dash, so place names
/// with inner hyphens (`"Port-au-Prince, Haiti - (PAP)"`) survive intact.
///
/// Returns `None` if the label does not have that shape or if either part is
/// blank after trimming.
///
/// # Examples
///
/// ```
/// use colo_map::split_site_label;
///
/// assert_eq!(
///     split_site_label("Antananarivo, Madagascar - (TNR)"),
///     Some(("Antananarivo, Madagascar".to_string(), "TNR".to_string()))
/// );
/// assert_eq!(split_site_label("Antananarivo, Madagascar"), None);
/// ```
pub fn split_site_label(text: &str) -> Option<(String, String)> {
    let caps = SITE_RE.captures(text.trim())?;
    let name = caps.get(1)?.as_str().trim();
    let code = caps.get(2)?.as_str().trim();

    if name.is_empty() || code.is_empty() {
        return None;
    }

    Some((name.to_string(), code.to_string()))
}
