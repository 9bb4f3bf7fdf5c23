//! HTML theme rewriting.
//!
//! The rewriter does not parse HTML. It performs two search-and-replace passes
//! over the raw text:
//!
//! 1. **Root class injection**: the first `<html class="` gets the mode's class
//!    token prepended to its class list, so `<html class="no-js">` becomes
//!    `<html class="dark no-js">`.
//! 2. **Marked references**: any quoted value ending in a dot-extension and
//!    followed by a single space and the `AUTOLIGHTDARK` marker is pointed at
//!    the mode's variant file. The marker is dropped and the mode suffix is
//!    spliced in front of the extension:
//!
//! ```text
//! <link rel="stylesheet" href="css/main.css" AUTOLIGHTDARK>
//!                  dark  ->  href="css/main-dark.css">
//!                  auto  ->  href="css/main.css">
//! ```
//!
//! The two passes touch disjoint positions, but they always run in this order.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::Result;
use crate::mode::ThemeMode;

/// Literal opening of the root element that receives the mode class.
pub const ROOT_CLASS_OPENING: &str = "<html class=\"";

/// Marker placed after a quoted attribute value that should get a mode suffix.
pub const MARKER: &str = "AUTOLIGHTDARK";

static MARKED_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(\.[a-z0-9]+") AUTOLIGHTDARK"#).expect("marked reference pattern is valid")
});

/// Rewrites one HTML document for the given mode.
///
/// # Example
///
/// ```
/// use autolightdark_rewrite::{rewrite_html, ThemeMode};
///
/// let page = r#"<html class="no-js"><link href="main.css" AUTOLIGHTDARK></html>"#;
/// assert_eq!(
///     rewrite_html(page, ThemeMode::Light),
///     r#"<html class="light no-js"><link href="main-light.css"></html>"#
/// );
/// ```
pub fn rewrite_html(text: &str, mode: ThemeMode) -> String {
    let with_class = inject_root_class(text, mode);
    suffix_marked_references(&with_class, mode)
}

/// Rewrites one HTML document for a mode given by name.
///
/// Fails with [`RewriteError::UnsupportedMode`](crate::RewriteError::UnsupportedMode)
/// when `mode` is not `auto`, `light` or `dark`; nothing is produced in that case.
pub fn rewrite_html_named(text: &str, mode: &str) -> Result<String> {
    let mode = mode.parse::<ThemeMode>()?;
    Ok(rewrite_html(text, mode))
}

fn inject_root_class(text: &str, mode: ThemeMode) -> String {
    let replacement = format!("{}{} ", ROOT_CLASS_OPENING, mode.html_class());
    text.replacen(ROOT_CLASS_OPENING, &replacement, 1)
}

fn suffix_marked_references(text: &str, mode: ThemeMode) -> String {
    let suffix = mode.file_suffix();
    MARKED_REFERENCE
        .replace_all(text, |caps: &Captures| format!("{}{}", suffix, &caps[1]))
        .into_owned()
}
