//! Tool name normalization.

use std::sync::LazyLock;

use regex::Regex;

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("static pattern"));

static TITLE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-_+]").expect("static pattern"));

/// Turn free text into a filesystem- and python-safe identifier.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `_` and trims underscores from both ends, so
/// `"My Tool!"` becomes `"my_tool"`. May return an empty string.
pub fn sanitize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let collapsed = NON_WORD_RUN.replace_all(&lowered, "_");
    collapsed.trim_matches('_').to_string()
}

/// Human-readable title for a tool name: `my_tool` becomes `My Tool`.
pub fn title_case(name: &str) -> String {
    let spaced = TITLE_SEPARATORS.replace_all(name, " ");
    spaced
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sanitize_collapses_runs() {
        assert_eq!(sanitize("My Tool!"), "my_tool");
        assert_eq!(sanitize("my$$$$tool"), "my_tool");
        assert_eq!(sanitize("superC00l tool"), "superc00l_tool");
        assert_eq!(sanitize("  washed   out  "), "washed_out");
        assert_eq!(sanitize("already_safe"), "already_safe");
    }

    #[test]
    fn sanitize_can_be_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("!!!"), "");
    }

    #[test]
    fn title_case_replaces_separators() {
        assert_eq!(title_case("colorado_avalanche"), "Colorado Avalanche");
        assert_eq!(title_case("my-tool+extras"), "My Tool Extras");
        assert_eq!(title_case("my_tool"), "My Tool");
        assert_eq!(title_case("LOUD_name"), "Loud Name");
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(raw in ".*") {
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitize_output_is_word_chars(raw in ".*") {
            let safe = sanitize(&raw);
            prop_assert!(safe.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            prop_assert!(!safe.starts_with('_') && !safe.ends_with('_'));
        }
    }
}
