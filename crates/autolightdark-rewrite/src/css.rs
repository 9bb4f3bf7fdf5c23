//! CSS theme rewriting with custom-property inlining.
//!
//! A stylesheet declares its palette twice, once per mode, inside comment
//! delimited blocks:
//!
//! ```css
//! /* START LIGHT */
//! --bg: #fff;
//! --fg: #222;
//! /* END LIGHT */
//! /* START DARK */
//! --bg: #000;
//! --fg: #eee;
//! /* END DARK */
//! body { background: var(--bg); color: var(--fg); }
//! ```
//!
//! [`rewrite_css`] walks the document line by line and produces three
//! documents:
//!
//! - **auto**: the input, byte for byte.
//! - **light** / **dark**: every line outside the blocks, with each
//!   `var(--name)` defined so far for that mode replaced by its literal value.
//!   Sentinel lines and definition lines are left out.
//!
//! Inlining exists for old browsers (e-ink readers in particular) that do not
//! understand custom properties.
//!
//! # Matching rules
//!
//! - A sentinel is a line whose content, after removing every `/*` and `*/`
//!   and trimming whitespace, is exactly `START LIGHT`, `START DARK`,
//!   `END LIGHT` or `END DARK`. Either `END` closes whichever block is open.
//! - Inside a block, blank lines are skipped and lines of the form
//!   `--name: value;` define `var(--name)`. Anything else is ignored.
//! - Substitution is plain substring replacement, applied in definition
//!   order. A definition only affects lines that come after it.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::mode::ThemeMode;

static DEFINITION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(--[-a-zA-Z0-9]+): *([^;]+);").expect("definition pattern is valid")
});

/// The three documents produced from one stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariants {
    /// The unmodified input.
    pub auto: String,
    /// Light variant with light variables inlined.
    pub light: String,
    /// Dark variant with dark variables inlined.
    pub dark: String,
    /// Set when the input ended inside a `START LIGHT` / `START DARK` block.
    pub unterminated_block: Option<ThemeMode>,
}

impl CssVariants {
    /// Returns the document for the given mode.
    pub fn get(&self, mode: ThemeMode) -> &str {
        match mode {
            ThemeMode::Auto => &self.auto,
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Ordered mapping from a reference token (`var(--name)`) to its value.
///
/// Redefining a name replaces its value in place, so the substitution order
/// stays the order in which names were first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
}

impl VariableTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines `var(<name>)` as `value`, overwriting any earlier definition.
    pub fn define(&mut self, name: &str, value: &str) {
        let reference = format!("var({})", name);
        match self.entries.iter_mut().find(|(key, _)| *key == reference) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((reference, value.to_string())),
        }
    }

    /// Looks up the value stored for a reference token such as `var(--bg)`.
    pub fn get(&self, reference: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == reference)
            .map(|(_, value)| value.as_str())
    }

    /// Number of defined variables.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been defined.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(reference, value)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Replaces every known reference in `line` with its value.
    pub fn apply(&self, line: &str) -> String {
        self.entries
            .iter()
            .fold(line.to_string(), |acc, (reference, value)| {
                acc.replace(reference.as_str(), value)
            })
    }

    /// Records the definition on `line` if it has one.
    ///
    /// Returns `true` when a definition was stored.
    fn define_from_line(&mut self, line: &str) -> bool {
        match DEFINITION.captures(line.trim()) {
            Some(caps) => {
                self.define(&caps[1], &caps[2]);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    Light,
    Dark,
}

impl Block {
    fn mode(self) -> ThemeMode {
        match self {
            Block::Light => ThemeMode::Light,
            Block::Dark => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sentinel {
    Start(Block),
    End,
}

fn sentinel(line: &str) -> Option<Sentinel> {
    match line.replace("/*", "").replace("*/", "").trim() {
        "START LIGHT" => Some(Sentinel::Start(Block::Light)),
        "START DARK" => Some(Sentinel::Start(Block::Dark)),
        "END LIGHT" | "END DARK" => Some(Sentinel::End),
        _ => None,
    }
}

/// Rewrites a stylesheet given as lines.
///
/// Lines should keep their terminators; the outputs are the lines joined
/// without a separator.
///
/// # Example
///
/// ```
/// use autolightdark_rewrite::rewrite_css;
///
/// let css = [
///     "/* START DARK */\n",
///     "--bg: #000;\n",
///     "/* END DARK */\n",
///     "body { background: var(--bg); }\n",
/// ];
/// let variants = rewrite_css(css);
/// assert_eq!(variants.dark, "body { background: #000; }\n");
/// assert_eq!(variants.light, "body { background: var(--bg); }\n");
/// assert_eq!(variants.auto, css.concat());
/// ```
pub fn rewrite_css<'a, I>(lines: I) -> CssVariants
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = CssVariants::default();
    let mut light_vars = VariableTable::new();
    let mut dark_vars = VariableTable::new();
    let mut open_block: Option<Block> = None;

    for line in lines {
        out.auto.push_str(line);

        match sentinel(line) {
            Some(Sentinel::Start(block)) => {
                open_block = Some(block);
                continue;
            }
            Some(Sentinel::End) => {
                open_block = None;
                continue;
            }
            None => {}
        }

        match open_block {
            None => {
                out.light.push_str(&light_vars.apply(line));
                out.dark.push_str(&dark_vars.apply(line));
            }
            Some(block) => {
                if line.trim().is_empty() {
                    continue;
                }
                let table = match block {
                    Block::Light => &mut light_vars,
                    Block::Dark => &mut dark_vars,
                };
                table.define_from_line(line);
            }
        }
    }

    out.unterminated_block = open_block.map(Block::mode);
    out
}

/// Rewrites a whole stylesheet, splitting it into lines on `\n`.
///
/// Line terminators are preserved, so the auto output equals `text`.
pub fn rewrite_css_document(text: &str) -> CssVariants {
    rewrite_css(text.split_inclusive('\n'))
}
