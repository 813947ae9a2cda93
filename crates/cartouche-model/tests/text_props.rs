use cartouche_model::{escape_html, sanitize_field_input};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sanitize_never_leaves_markup_or_control(input in ".{0,200}") {
        let cleaned = sanitize_field_input(&input);
        prop_assert!(!cleaned.contains('<'));
        prop_assert!(!cleaned.contains('>'));
        prop_assert!(cleaned.chars().all(|c| !c.is_control()));
    }

    #[test]
    fn sanitize_is_idempotent(input in ".{0,200}") {
        let once = sanitize_field_input(&input);
        let twice = sanitize_field_input(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sanitize_never_starts_or_ends_with_space(input in ".{0,200}") {
        let cleaned = sanitize_field_input(&input);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!cleaned.contains("  "));
    }

    #[test]
    fn escape_output_has_no_raw_markup_characters(input in ".{0,200}") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
        // Every remaining ampersand opens one of the five entities we emit.
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            prop_assert!(
                rest.starts_with("&amp;")
                    || rest.starts_with("&lt;")
                    || rest.starts_with("&gt;")
                    || rest.starts_with("&quot;")
                    || rest.starts_with("&#039;")
            );
        }
    }

    #[test]
    fn escape_preserves_benign_text(input in "[a-zA-Z0-9 ]{0,80}") {
        prop_assert_eq!(escape_html(&input), input);
    }
}
