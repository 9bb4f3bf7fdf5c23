//! Light/dark/auto theme rewriting for static HTML and CSS.
//!
//! This crate holds the text transformations behind the `autolightdark` build
//! step. Each source document is turned into three variants, one per
//! [`ThemeMode`]:
//!
//! - [`rewrite_html`] injects the mode's class into the root `<html>` element
//!   and points references marked with `AUTOLIGHTDARK` at the mode's variant
//!   files.
//! - [`rewrite_css`] copies a stylesheet verbatim for `auto` and produces
//!   light and dark copies with their `var(--name)` references replaced by the
//!   values declared in `START LIGHT` / `START DARK` blocks.
//!
//! Neither function parses its input or touches the filesystem.
//!
//! # Quick Start
//!
//! ```rust
//! use autolightdark_rewrite::{rewrite_css_document, rewrite_html, ThemeMode};
//!
//! let html = r#"<html class="page"><link href="site.css" AUTOLIGHTDARK></html>"#;
//! assert_eq!(
//!     rewrite_html(html, ThemeMode::Dark),
//!     r#"<html class="dark page"><link href="site-dark.css"></html>"#
//! );
//!
//! let css = "/* START LIGHT */\n--fg: #111;\n/* END LIGHT */\np { color: var(--fg); }\n";
//! let variants = rewrite_css_document(css);
//! assert_eq!(variants.light, "p { color: #111; }\n");
//! assert_eq!(variants.auto, css);
//! ```

mod css;
mod error;
mod html;
mod mode;

// Re-export public API
pub use css::{rewrite_css, rewrite_css_document, CssVariants, VariableTable};
pub use error::{Result, RewriteError};
pub use html::{rewrite_html, rewrite_html_named, MARKER, ROOT_CLASS_OPENING};
pub use mode::ThemeMode;
