//! Unicode case folding for names and table keys.

use icu_casemap::CaseMapper;
use icu_locale_core::{LanguageIdentifier, langid};

const CZECH: LanguageIdentifier = langid!("cs");

/// Lowercase `text` using Czech case mapping rules.
pub(crate) fn lowercase(text: &str) -> String {
    CaseMapper::new().lowercase_to_string(text, &CZECH).into()
}

/// Characters stripped from both ends of a name: ASCII whitespace and NUL.
fn is_trimmed(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B')
}

/// Trim surrounding whitespace and lowercase.
///
/// Other Unicode spaces, such as U+00A0, are kept.
pub(crate) fn normalize(name: &str) -> String {
    lowercase(name.trim_matches(is_trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_czech_letters() {
        assert_eq!(lowercase("ŠTĚPÁNEK"), "štěpánek");
        assert_eq!(lowercase("ŘÍHA"), "říha");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Jana\t\n"), "jana");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_strips_nul_and_vertical_tab() {
        assert_eq!(normalize("\0Jana\x0B"), "jana");
    }

    #[test]
    fn normalize_keeps_no_break_space() {
        assert_eq!(normalize("Jana\u{a0}"), "jana\u{a0}");
    }
}
