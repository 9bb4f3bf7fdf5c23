//! Property-based tests for the rewriters using proptest.

use autolightdark_rewrite::{
    rewrite_css, rewrite_css_document, rewrite_html, rewrite_html_named, RewriteError, ThemeMode,
    MARKER,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn mode_strategy() -> impl Strategy<Value = ThemeMode> {
    prop_oneof![
        Just(ThemeMode::Auto),
        Just(ThemeMode::Light),
        Just(ThemeMode::Dark),
    ]
}

// Plain text that can never form `<html class="` or the marker.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-z0-9 .,;:{}()\n-]{0,80}"
}

fn css_line() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/* START LIGHT */\n".to_string()),
        Just("/* START DARK */\n".to_string()),
        Just("/* END LIGHT */\n".to_string()),
        Just("/* END DARK */\n".to_string()),
        Just("\n".to_string()),
        "--[a-z]{1,4}: [a-z0-9#]{1,6};\n",
        "[a-z]{1,4} \\{ color: var\\(--[a-z]{1,4}\\); \\}\n",
        "[a-z ]{0,12}\n",
    ]
}

// ============================================================================
// HTML properties
// ============================================================================

proptest! {
    /// Class injection adds exactly `<mode> ` after the first opening.
    #[test]
    fn class_injected_after_opening(
        before in plain_text(),
        after in plain_text(),
        mode in mode_strategy(),
    ) {
        let text = format!("{}<html class=\"{}", before, after);
        let expected = format!("{}<html class=\"{} {}", before, mode.html_class(), after);
        prop_assert_eq!(rewrite_html(&text, mode), expected);
    }

    /// Without a root opening or marker, the document is untouched.
    #[test]
    fn plain_text_is_unchanged(text in plain_text(), mode in mode_strategy()) {
        prop_assert_eq!(rewrite_html(&text, mode), text);
    }

    /// Every marked reference receives the suffix and loses the marker.
    #[test]
    fn marked_references_get_suffix(
        stems in prop::collection::vec("[a-z/]{1,8}", 1..5),
        ext in "[a-z0-9]{1,4}",
        mode in mode_strategy(),
    ) {
        let text: String = stems
            .iter()
            .map(|stem| format!("<a href=\"{}.{}\" {}>", stem, ext, MARKER))
            .collect();
        let expected: String = stems
            .iter()
            .map(|stem| format!("<a href=\"{}{}.{}\">", stem, mode.file_suffix(), ext))
            .collect();
        let out = rewrite_html(&text, mode);
        prop_assert!(!out.contains(MARKER));
        prop_assert_eq!(out, expected);
    }

    /// Unknown mode names never produce output.
    #[test]
    fn unknown_mode_names_are_rejected(name in "[a-zA-Z]{0,8}", text in plain_text()) {
        prop_assume!(!["auto", "light", "dark"].contains(&name.as_str()));
        prop_assert_eq!(
            rewrite_html_named(&text, &name),
            Err(RewriteError::UnsupportedMode(name.clone()))
        );
    }
}

// ============================================================================
// CSS properties
// ============================================================================

proptest! {
    /// The auto output is always the input, byte for byte.
    #[test]
    fn css_auto_is_identity(lines in prop::collection::vec(css_line(), 0..30)) {
        let input: String = lines.concat();
        let out = rewrite_css(lines.iter().map(String::as_str));
        prop_assert_eq!(out.auto, input);
    }

    /// Light and dark never contain more lines than the input.
    #[test]
    fn css_variants_never_grow_line_count(lines in prop::collection::vec(css_line(), 0..30)) {
        let out = rewrite_css(lines.iter().map(String::as_str));
        prop_assert!(out.light.lines().count() <= lines.len());
        prop_assert!(out.dark.lines().count() <= lines.len());
    }

    /// Sentinel lines never leak into the light or dark outputs.
    #[test]
    fn css_sentinels_are_dropped(lines in prop::collection::vec(css_line(), 0..30)) {
        let out = rewrite_css(lines.iter().map(String::as_str));
        for variant in [&out.light, &out.dark] {
            prop_assert!(!variant.contains("START LIGHT"));
            prop_assert!(!variant.contains("START DARK"));
            prop_assert!(!variant.contains("END LIGHT"));
            prop_assert!(!variant.contains("END DARK"));
        }
    }

    /// A stylesheet without blocks is copied unchanged to every variant.
    #[test]
    fn css_without_blocks_is_identity(
        lines in prop::collection::vec("[a-z]{1,4} \\{ color: var\\(--[a-z]{1,4}\\); \\}\n", 0..20),
    ) {
        let input: String = lines.concat();
        let out = rewrite_css_document(&input);
        prop_assert_eq!(&out.light, &input);
        prop_assert_eq!(&out.dark, &input);
    }

    /// Running the rewriter twice on the same input yields the same result.
    #[test]
    fn css_rewrite_is_deterministic(lines in prop::collection::vec(css_line(), 0..30)) {
        let input: String = lines.concat();
        prop_assert_eq!(rewrite_css_document(&input), rewrite_css_document(&input));
    }
}
