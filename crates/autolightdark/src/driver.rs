//! Full site build.
//!
//! [`build`] regenerates the whole output tree on every call:
//!
//! 1. The build directory is removed and recreated.
//! 2. Allowlisted files and directories are copied verbatim.
//! 3. Each `*.html` file in the source root is written three times, once per
//!    [`ThemeMode`], through [`rewrite_html`].
//! 4. Each `*.css` file in the stylesheet directory goes through
//!    [`rewrite_css_document`] and its three variants are written.
//!
//! Auto variants keep the source name, light and dark variants get a
//! `-light` / `-dark` infix before the extension. Outputs mirror the source
//! layout. Nothing is cached between runs, so two builds of the same source
//! produce identical trees.
//!
//! A failure stops the build where it happened; files written before it stay
//! in place.

use std::path::{Component, Path, PathBuf};

use autolightdark_rewrite::{rewrite_css_document, rewrite_html, ThemeMode};
use tracing::{debug, info, warn};

use crate::config::BuildConfig;
use crate::error::{BuildError, Result};
use crate::fsops;

const HTML_EXTENSION: &str = ".html";
const CSS_EXTENSION: &str = ".css";

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Files copied verbatim, including those inside copied directories.
    pub copied_files: usize,
    /// HTML sources processed.
    pub html_sources: usize,
    /// CSS sources processed.
    pub css_sources: usize,
    /// Variant files written (three per source).
    pub variants_written: usize,
}

/// Builds the site described by `config`.
pub fn build(config: &BuildConfig) -> Result<BuildReport> {
    config.validate()?;

    let source = config.source_dir.as_path();
    let out = config.build_path();
    ensure_build_dir_is_safe(config)?;

    let mut report = BuildReport::default();

    info!(build_dir = %out.display(), "Preparing build directory");
    fsops::recreate_dir(&out)?;

    for file in &config.copy_files {
        fsops::copy_file(&source.join(file), &out.join(file))?;
        debug!(file = %file.display(), "Copied file");
        report.copied_files += 1;
    }
    for dir in &config.copy_dirs {
        let copied = fsops::copy_dir(&source.join(dir), &out.join(dir))?;
        debug!(dir = %dir.display(), files = copied, "Copied directory");
        report.copied_files += copied;
    }

    let html_files = fsops::files_with_extension(source, HTML_EXTENSION)?;
    info!(count = html_files.len(), "Generating HTML variants");
    for path in &html_files {
        report.variants_written += generate_html_variants(source, &out, path)?;
        report.html_sources += 1;
    }

    let css_out = out.join(&config.css_dir);
    fsops::create_dir(&css_out)?;
    let css_files = fsops::files_with_extension(&config.css_path(), CSS_EXTENSION)?;
    info!(count = css_files.len(), "Generating CSS variants");
    for path in &css_files {
        report.variants_written += generate_css_variants(source, &out, path)?;
        report.css_sources += 1;
    }

    Ok(report)
}

/// Writes the auto, dark and light versions of one HTML file.
///
/// Returns the number of files written.
pub fn generate_html_variants(source: &Path, out: &Path, path: &Path) -> Result<usize> {
    let text = fsops::read_text(path)?;
    let mut written = 0;
    for mode in ThemeMode::ALL {
        let target = variant_path(source, out, path, mode, HTML_EXTENSION)?;
        fsops::write_text(&target, &rewrite_html(&text, mode))?;
        debug!(output = %target.display(), %mode, "Wrote HTML variant");
        written += 1;
    }
    Ok(written)
}

/// Writes the auto, dark and light versions of one stylesheet.
///
/// Returns the number of files written.
pub fn generate_css_variants(source: &Path, out: &Path, path: &Path) -> Result<usize> {
    let text = fsops::read_text(path)?;
    let variants = rewrite_css_document(&text);
    if let Some(mode) = variants.unterminated_block {
        warn!(
            file = %path.display(),
            %mode,
            "Stylesheet ends inside a variable block; the rest of the file was treated as definitions"
        );
    }

    let mut written = 0;
    for mode in ThemeMode::ALL {
        let target = variant_path(source, out, path, mode, CSS_EXTENSION)?;
        fsops::write_text(&target, variants.get(mode))?;
        debug!(output = %target.display(), %mode, "Wrote CSS variant");
        written += 1;
    }
    Ok(written)
}

/// Maps a source file to its output path for `mode`.
///
/// The path relative to `source` is kept; only the file name changes.
pub fn variant_path(
    source: &Path,
    out: &Path,
    path: &Path,
    mode: ThemeMode,
    extension: &str,
) -> Result<PathBuf> {
    let relative = path.strip_prefix(source).unwrap_or(path);
    let name = relative
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| BuildError::InvalidFileName {
            path: path.to_path_buf(),
        })?;
    let target = out
        .join(relative)
        .with_file_name(mode.variant_file_name(name, extension));
    Ok(target)
}

/// Rejects a build directory whose removal or filling would touch the sources.
///
/// The build directory must not be the source directory or one of its
/// ancestors, and must not be, or lie inside, an allowlisted file or
/// directory or the stylesheet directory. A stylesheet directory or allowlisted
/// file resolving to the source root itself does not count; a copied
/// directory does, since it would be copied into itself.
fn ensure_build_dir_is_safe(config: &BuildConfig) -> Result<()> {
    let source_dir = resolve_path(&config.source_dir)?;
    let build_dir = resolve_path(&config.build_path())?;
    if source_dir.starts_with(&build_dir) {
        return Err(BuildError::UnsafeBuildDir {
            build_dir,
            source_dir,
        });
    }

    let read_only = config.copy_files.iter().chain(std::iter::once(&config.css_dir));
    for entry in read_only {
        let input = resolve_path(&source_dir.join(entry))?;
        if input != source_dir && build_dir.starts_with(&input) {
            return Err(BuildError::BuildDirInsideInput { build_dir, input });
        }
    }
    for entry in &config.copy_dirs {
        let input = resolve_path(&source_dir.join(entry))?;
        if build_dir.starts_with(&input) {
            return Err(BuildError::BuildDirInsideInput { build_dir, input });
        }
    }
    Ok(())
}

/// Makes `path` absolute without requiring it to exist.
///
/// Existing prefixes are canonicalized so symlinks are followed; components
/// past the last existing one are applied lexically.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let mut resolved = if path.is_absolute() {
        PathBuf::new()
    } else {
        std::env::current_dir().map_err(|e| BuildError::io(path, e))?
    };
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => {
                resolved.push(other);
                if resolved.exists() {
                    let canonical = resolved
                        .canonicalize()
                        .map_err(|e| BuildError::io(&resolved, e))?;
                    resolved = canonical;
                }
            }
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_path_html() {
        let source = Path::new("site");
        let out = Path::new("site/build");
        let path = Path::new("site/index.html");

        assert_eq!(
            variant_path(source, out, path, ThemeMode::Auto, HTML_EXTENSION).unwrap(),
            PathBuf::from("site/build/index.html")
        );
        assert_eq!(
            variant_path(source, out, path, ThemeMode::Dark, HTML_EXTENSION).unwrap(),
            PathBuf::from("site/build/index-dark.html")
        );
        assert_eq!(
            variant_path(source, out, path, ThemeMode::Light, HTML_EXTENSION).unwrap(),
            PathBuf::from("site/build/index-light.html")
        );
    }

    #[test]
    fn test_variant_path_keeps_relative_directory() {
        let path = Path::new("site/css/main.css");
        assert_eq!(
            variant_path(
                Path::new("site"),
                Path::new("out"),
                path,
                ThemeMode::Light,
                CSS_EXTENSION
            )
            .unwrap(),
            PathBuf::from("out/css/main-light.css")
        );
    }

    #[test]
    fn test_unsafe_build_dir_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        for build_dir in [".", ".."] {
            let config = BuildConfig {
                build_dir: PathBuf::from(build_dir),
                ..BuildConfig::new(tmp.path())
            };
            let err = ensure_build_dir_is_safe(&config).unwrap_err();
            assert!(matches!(err, BuildError::UnsafeBuildDir { .. }), "{}", build_dir);
        }
    }

    #[test]
    fn test_nested_build_dir_is_safe() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("build")).unwrap();
        for build_dir in ["build", "missing", "public/site"] {
            let config = BuildConfig {
                build_dir: PathBuf::from(build_dir),
                ..BuildConfig::new(tmp.path())
            };
            assert!(ensure_build_dir_is_safe(&config).is_ok(), "{}", build_dir);
        }
    }

    #[test]
    fn test_build_dir_inside_input_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(tmp.path().join("css")).unwrap();
        for build_dir in ["css", "css/out", "./img", "img/out/deeper", "CNAME"] {
            let config = BuildConfig {
                build_dir: PathBuf::from(build_dir),
                ..BuildConfig::new(tmp.path())
            };
            let err = ensure_build_dir_is_safe(&config).unwrap_err();
            assert!(
                matches!(err, BuildError::BuildDirInsideInput { .. }),
                "{}: {:?}",
                build_dir,
                err
            );
        }
    }

    #[test]
    fn test_root_css_dir_does_not_block_nested_build_dir() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = BuildConfig {
            css_dir: PathBuf::from("."),
            ..BuildConfig::new(tmp.path())
        };
        assert!(ensure_build_dir_is_safe(&config).is_ok());

        let config = BuildConfig {
            copy_dirs: vec![PathBuf::from(".")],
            ..BuildConfig::new(tmp.path())
        };
        let err = ensure_build_dir_is_safe(&config).unwrap_err();
        assert!(matches!(err, BuildError::BuildDirInsideInput { .. }));
    }

    #[test]
    fn test_resolve_path_handles_missing_tail() {
        let tmp = tempfile::TempDir::new().unwrap();
        let root = tmp.path().canonicalize().unwrap();
        assert_eq!(
            resolve_path(&tmp.path().join("a/./b/../c")).unwrap(),
            root.join("a/c")
        );
    }
}
