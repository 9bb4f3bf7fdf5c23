//! Build step that turns a static site into light, dark and auto variants.
//!
//! For every HTML page and stylesheet of the site, three files are written to
//! the build directory: the auto variant under the original name, and
//! `-light` / `-dark` variants next to it. The text transformations live in
//! [`autolightdark_rewrite`]; this crate owns configuration and all file I/O.
//!
//! ```rust,no_run
//! use autolightdark::{build, BuildConfig};
//!
//! let report = build(&BuildConfig::new("."))?;
//! println!("{} variants written", report.variants_written);
//! # Ok::<(), autolightdark::BuildError>(())
//! ```

pub mod config;
pub mod driver;
pub mod error;
mod fsops;

pub use autolightdark_rewrite::ThemeMode;
pub use config::{BuildConfig, ConfigOverrides, CONFIG_FILE_NAME};
pub use driver::{build, BuildReport};
pub use error::{BuildError, Result};
