//! Theme modes and the naming rules derived from them.
//!
//! Every source document is emitted once per [`ThemeMode`]. The mode decides
//! two things:
//!
//! | Mode    | HTML class | File suffix |
//! |---------|------------|-------------|
//! | `auto`  | `auto`     | (none)      |
//! | `light` | `light`    | `-light`    |
//! | `dark`  | `dark`     | `-dark`     |
//!
//! The auto variant keeps the original file name and leaves the choice of
//! palette to the viewer's system preference at render time.

use std::fmt;
use std::str::FromStr;

use crate::error::RewriteError;

/// The theme variant a document is being generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    /// Follows the viewer's preference; output keeps the original name.
    Auto,
    /// Light background, dark text.
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeMode {
    /// All modes, in the order the build emits them.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Auto, ThemeMode::Dark, ThemeMode::Light];

    /// The mode name, as used on the command line and in class tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Class token injected into the root `<html>` element.
    pub fn html_class(self) -> &'static str {
        self.as_str()
    }

    /// Suffix spliced into file names and marked references.
    pub fn file_suffix(self) -> &'static str {
        match self {
            ThemeMode::Auto => "",
            ThemeMode::Light => "-light",
            ThemeMode::Dark => "-dark",
        }
    }

    /// Returns the output file name for this mode.
    ///
    /// Every occurrence of `extension` (including its dot) in `file_name` gets
    /// the mode suffix in front of it. The auto mode returns the name as is.
    ///
    /// ```
    /// use autolightdark_rewrite::ThemeMode;
    ///
    /// assert_eq!(ThemeMode::Dark.variant_file_name("index.html", ".html"), "index-dark.html");
    /// assert_eq!(ThemeMode::Auto.variant_file_name("index.html", ".html"), "index.html");
    /// ```
    pub fn variant_file_name(self, file_name: &str, extension: &str) -> String {
        match self {
            ThemeMode::Auto => file_name.to_string(),
            ThemeMode::Light | ThemeMode::Dark => {
                if extension.is_empty() {
                    return file_name.to_string();
                }
                let replacement = format!("{}{}", self.file_suffix(), extension);
                file_name.replace(extension, &replacement)
            }
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = RewriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ThemeMode::Auto),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(RewriteError::UnsupportedMode(other.to_string())),
        }
    }
}
