//! Emoji name sanitization.
//!
//! Mattermost only accepts custom emoji names made of lowercase ASCII letters,
//! digits, `-` and `_`, at most 64 characters long. Names coming from other
//! chat platforms are arbitrary Unicode, so every name goes through
//! [`sanitize_emoji_name`] before it is used as the remote identifier.

use tracing::instrument;
use unidecode::unidecode;

/// Maximum length of a custom emoji name accepted by the platform.
pub const MAX_EMOJI_NAME_LEN: usize = 64;

/// Converts an arbitrary name into the platform's emoji name alphabet.
///
/// Steps, in order:
/// 1. Transliterate non-ASCII characters (`"жду"` becomes `"zhdu"`); characters
///    without a transliteration, such as pictographs outside the Basic
///    Multilingual Plane, are dropped. CJK syllables keep their trailing
///    space, so `"北京"` ends up as `"bei-jing-"`
/// 2. Lowercase
/// 3. Replace spaces with dashes
/// 4. Remove every character outside `[a-z0-9_-]`
/// 5. Truncate to [`MAX_EMOJI_NAME_LEN`] characters
///
/// The result may be empty. That is not an error here; the platform rejects
/// such names and the import reports them like any other rejected name.
///
/// # Example
///
/// ```
/// use emoji_importer_core::sanitize_emoji_name;
///
/// assert_eq!(sanitize_emoji_name("My Emoji"), "my-emoji");
/// assert_eq!(sanitize_emoji_name("жду"), "zhdu");
/// ```
#[must_use]
#[instrument(level = "trace", ret)]
pub fn sanitize_emoji_name(name: &str) -> String {
    unidecode(name)
        .to_ascii_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| is_allowed(*c))
        .take(MAX_EMOJI_NAME_LEN)
        .collect()
}

fn is_allowed(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sanitize_transliterates_cyrillic() {
        assert_eq!(sanitize_emoji_name("жду"), "zhdu");
    }

    #[test]
    fn test_sanitize_replaces_spaces_and_lowercases() {
        assert_eq!(sanitize_emoji_name("My Emoji"), "my-emoji");
    }

    #[test]
    fn test_sanitize_strips_forbidden_characters() {
        assert_eq!(sanitize_emoji_name("emoji@123"), "emoji123");
    }

    #[test]
    fn test_sanitize_removes_runs_without_separator() {
        assert_eq!(sanitize_emoji_name("a!!!b...c"), "abc");
    }

    #[test]
    fn test_sanitize_keeps_dash_and_underscore() {
        assert_eq!(sanitize_emoji_name("party_parrot-fast"), "party_parrot-fast");
    }

    #[test]
    fn test_sanitize_each_space_becomes_dash() {
        assert_eq!(sanitize_emoji_name("a  b"), "a--b");
    }

    #[test]
    fn test_sanitize_truncates_to_limit() {
        let long = "x".repeat(100);
        assert_eq!(sanitize_emoji_name(&long).len(), MAX_EMOJI_NAME_LEN);
    }

    #[test]
    fn test_sanitize_truncates_after_transliteration() {
        // Each "ж" expands to two characters before the cut.
        let name = "ж".repeat(40);
        let sanitized = sanitize_emoji_name(&name);
        assert_eq!(sanitized.len(), MAX_EMOJI_NAME_LEN);
        assert!(sanitized.starts_with("zhzh"));
    }

    #[test]
    fn test_sanitize_empty_input_yields_empty() {
        assert_eq!(sanitize_emoji_name(""), "");
    }

    #[test]
    fn test_sanitize_only_symbols_yields_empty() {
        assert_eq!(sanitize_emoji_name("@#$%^&*()"), "");
    }

    #[test]
    fn test_sanitize_is_deterministic() {
        let name = "Ünïcödé Party 🎉";
        assert_eq!(sanitize_emoji_name(name), sanitize_emoji_name(name));
    }

    #[test]
    fn test_sanitize_cjk_keeps_syllable_separators() {
        assert_eq!(sanitize_emoji_name("北京"), "bei-jing-");
        assert_eq!(sanitize_emoji_name("中文 表情"), "zhong-wen--biao-qing-");
    }

    #[test]
    fn test_sanitize_drops_pictographs() {
        assert_eq!(sanitize_emoji_name("🎉party"), "party");
        assert_eq!(sanitize_emoji_name("🎉"), "");
    }

    #[test]
    fn test_sanitize_accented_latin() {
        assert_eq!(sanitize_emoji_name("Café"), "cafe");
    }

    proptest! {
        #[test]
        fn prop_output_uses_allowed_alphabet(name in ".*") {
            let sanitized = sanitize_emoji_name(&name);
            prop_assert!(sanitized.len() <= MAX_EMOJI_NAME_LEN);
            prop_assert!(sanitized.chars().all(is_allowed));
        }

        #[test]
        fn prop_idempotent_on_own_output(name in ".*") {
            let once = sanitize_emoji_name(&name);
            prop_assert_eq!(sanitize_emoji_name(&once), once.clone());
        }

        #[test]
        fn prop_fixed_point_for_valid_names(name in "[a-z0-9_-]{0,64}") {
            prop_assert_eq!(sanitize_emoji_name(&name), name);
        }
    }
}
