//! Error types for the build driver.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Reading, writing, copying or removing a path failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An allowlisted file or directory does not exist in the source tree.
    #[error("missing input: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// The configuration file could not be read or parsed, or is invalid.
    #[error("invalid configuration{}: {message}", location(.path))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// The build directory would swallow the source tree when cleared.
    #[error("refusing to use {} as build directory: it contains the source directory {}", .build_dir.display(), .source_dir.display())]
    UnsafeBuildDir {
        build_dir: PathBuf,
        source_dir: PathBuf,
    },

    /// The build directory is, or lies inside, a path the build reads from.
    #[error("refusing to use {} as build directory: it is inside the source input {}", .build_dir.display(), .input.display())]
    BuildDirInsideInput { build_dir: PathBuf, input: PathBuf },

    /// A source file name cannot be turned into variant names.
    #[error("file name is not valid UTF-8: {}", .path.display())]
    InvalidFileName { path: PathBuf },
}

impl BuildError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        BuildError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p.display()))
        .unwrap_or_default()
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;
