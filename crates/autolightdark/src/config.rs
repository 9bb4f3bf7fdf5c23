//! Build configuration.
//!
//! [`BuildConfig`] replaces the fixed paths of the site layout with an
//! immutable value passed to [`build`](crate::build). Its defaults reproduce
//! the layout the tool was written for:
//!
//! | Field        | Default     | Meaning                                       |
//! |--------------|-------------|-----------------------------------------------|
//! | `source_dir` | `.`         | Site root; `*.html` files are read from here  |
//! | `build_dir`  | `build`     | Output root, cleared on every run             |
//! | `copy_files` | `[CNAME]`   | Files copied verbatim                         |
//! | `copy_dirs`  | `[img]`     | Directories copied verbatim, recursively      |
//! | `css_dir`    | `css`       | Directory whose `*.css` files are rewritten   |
//!
//! Relative paths are resolved against `source_dir`.
//!
//! # Resolution Order
//!
//! 1. Built-in defaults
//! 2. A YAML file: the one given with `--config`, otherwise
//!    `autolightdark.yaml` in the source directory if it exists
//! 3. Command-line overrides (`--source`, `--out`)
//!
//! ```yaml
//! build_dir: public
//! copy_files: [CNAME, robots.txt]
//! copy_dirs: [img, fonts]
//! ```

use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::error::{BuildError, Result};

/// Name of the configuration file picked up from the source directory.
pub const CONFIG_FILE_NAME: &str = "autolightdark.yaml";

/// Where to read the site from, where to write it, and what to copy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Site root. Set from the command line, never from the file.
    #[serde(skip)]
    pub source_dir: PathBuf,
    /// Output root, relative to `source_dir` unless absolute.
    pub build_dir: PathBuf,
    /// Files copied verbatim, relative to `source_dir`.
    pub copy_files: Vec<PathBuf>,
    /// Directories copied recursively, relative to `source_dir`.
    pub copy_dirs: Vec<PathBuf>,
    /// Stylesheet directory, relative to `source_dir`.
    pub css_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            build_dir: PathBuf::from("build"),
            copy_files: vec![PathBuf::from("CNAME")],
            copy_dirs: vec![PathBuf::from("img")],
            css_dir: PathBuf::from("css"),
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_dir: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

impl BuildConfig {
    /// Creates the default configuration rooted at `source_dir`.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    /// Parses a configuration from YAML. Missing fields keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| BuildError::Config {
            path: None,
            message: e.to_string(),
        })
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| BuildError::io(path, e))?;
        serde_yaml::from_str(&content).map_err(|e| BuildError::Config {
            path: Some(path.to_path_buf()),
            message: e.to_string(),
        })
    }

    /// Builds the effective configuration from defaults, file and overrides.
    pub fn resolve(overrides: ConfigOverrides) -> Result<Self> {
        let source_dir = overrides
            .source_dir
            .unwrap_or_else(|| PathBuf::from("."));

        let config_file = match overrides.config_file {
            Some(path) => Some(path),
            None => {
                let candidate = source_dir.join(CONFIG_FILE_NAME);
                candidate.is_file().then_some(candidate)
            }
        };

        let mut config = match &config_file {
            Some(path) => {
                tracing::debug!(path = %path.display(), "Loading configuration file");
                Self::from_file(path)?
            }
            None => Self::default(),
        };
        config.source_dir = source_dir;

        if let Some(build_dir) = overrides.build_dir {
            config.build_dir = build_dir;
        }

        config.validate().map_err(|e| match e {
            BuildError::Config { path: None, message } => BuildError::Config {
                path: config_file,
                message,
            },
            other => other,
        })?;
        Ok(config)
    }

    /// Checks that every path meant to live inside the source tree does.
    pub fn validate(&self) -> Result<()> {
        let inner = self
            .copy_files
            .iter()
            .chain(&self.copy_dirs)
            .chain(std::iter::once(&self.css_dir));
        for path in inner {
            if !is_contained(path) {
                return Err(BuildError::Config {
                    path: None,
                    message: format!(
                        "'{}' must be a relative path inside the source directory",
                        path.display()
                    ),
                });
            }
        }
        if self.build_dir.as_os_str().is_empty() {
            return Err(BuildError::Config {
                path: None,
                message: "build_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Output root with `source_dir` applied.
    pub fn build_path(&self) -> PathBuf {
        self.source_dir.join(&self.build_dir)
    }

    /// Stylesheet directory with `source_dir` applied.
    pub fn css_path(&self) -> PathBuf {
        self.source_dir.join(&self.css_dir)
    }
}

fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
