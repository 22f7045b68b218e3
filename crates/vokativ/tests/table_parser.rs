//! Integration tests for .sfx table parsing and validation.

use vokativ::table::{RawEntry, parse_table};
use vokativ::{Gender, NameForm, SuffixTable, TableError};

fn entry(suffix: &str, value: &str) -> RawEntry {
    RawEntry {
        suffix: suffix.to_string(),
        value: value.to_string(),
    }
}

// =========================================================================
// Syntax
// =========================================================================

#[test]
fn test_single_entry() {
    let entries = parse_table(r#""ová" = "w";"#).unwrap();
    assert_eq!(entries, vec![entry("ová", "w")]);
}

#[test]
fn test_entries_keep_file_order() {
    let entries = parse_table(
        r#"
        "" = "m";
        "a" = "w";
        "ek" = "ku";
    "#,
    )
    .unwrap();
    assert_eq!(
        entries,
        vec![entry("", "m"), entry("a", "w"), entry("ek", "ku")]
    );
}

#[test]
fn test_comments_and_free_whitespace() {
    let entries = parse_table(
        r#"
        // header comment
        "a"="o" ;   // trailing comment
        "ek"
            =
            "ku";
    "#,
    )
    .unwrap();
    assert_eq!(entries, vec![entry("a", "o"), entry("ek", "ku")]);
}

#[test]
fn test_empty_value() {
    let entries = parse_table(r#""" = "";"#).unwrap();
    assert_eq!(entries, vec![entry("", "")]);
}

#[test]
fn test_escapes() {
    let entries = parse_table(r#""a\"b" = "\\";"#).unwrap();
    assert_eq!(entries, vec![entry("a\"b", "\\")]);
}

#[test]
fn test_empty_input() {
    assert!(parse_table("").unwrap().is_empty());
    assert!(parse_table("  // only a comment\n").unwrap().is_empty());
}

#[test]
fn test_missing_semicolon_reports_line() {
    let result = parse_table("\"a\" = \"w\";\n\"b\" = \"m\"\n");
    match result {
        Err(TableError::Syntax { line, column, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(column, 1);
        }
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_unquoted_key_rejected() {
    let result = parse_table(r#"a = "w";"#);
    assert!(matches!(
        result,
        Err(TableError::Syntax {
            line: 1,
            column: 1,
            ..
        })
    ));
}

#[test]
fn test_string_cannot_span_lines() {
    let result = parse_table("\"a\n\" = \"w\";");
    assert!(result.is_err());
}

#[test]
fn test_error_display_has_position() {
    let err = parse_table("\"\" = \"m\";\n  \"a\" \"w\";").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error at 2:3: unexpected character: '\"'"
    );
}

// =========================================================================
// Table Validation
// =========================================================================

#[test]
fn test_missing_fallback() {
    let result = SuffixTable::<String>::parse(r#""a" = "o";"#);
    assert_eq!(result.unwrap_err(), TableError::MissingFallback);
}

#[test]
fn test_duplicate_suffix() {
    let result = SuffixTable::<String>::parse(
        r#"
        "" = "";
        "a" = "o";
        "a" = "e";
    "#,
    );
    assert_eq!(
        result.unwrap_err(),
        TableError::DuplicateSuffix {
            suffix: "a".to_string()
        }
    );
}

#[test]
fn test_duplicate_fallback() {
    let result = SuffixTable::<String>::parse(r#""" = ""; "" = "e";"#);
    assert_eq!(
        result.unwrap_err(),
        TableError::DuplicateSuffix {
            suffix: String::new()
        }
    );
}

#[test]
fn test_uppercase_suffix_rejected() {
    let result = SuffixTable::<String>::parse(r#""" = ""; "Ová" = "w";"#);
    assert_eq!(
        result.unwrap_err(),
        TableError::NotLowercase {
            suffix: "Ová".to_string()
        }
    );
}

#[test]
fn test_unknown_gender_tag() {
    let result = SuffixTable::<Gender>::parse(r#""" = "m"; "a" = "x";"#);
    assert_eq!(
        result.unwrap_err(),
        TableError::UnknownTag {
            suffix: "a".to_string(),
            tag: "x".to_string()
        }
    );
}

#[test]
fn test_tags_decode_to_enums() {
    let genders = SuffixTable::<Gender>::parse(r#""" = "m"; "a" = "w";"#).unwrap();
    assert_eq!(genders.get("a"), Some(&Gender::Female));
    assert_eq!(genders.fallback(), &Gender::Male);

    let forms = SuffixTable::<NameForm>::parse(r#""" = "f"; "ová" = "l";"#).unwrap();
    assert_eq!(forms.get("ová"), Some(&NameForm::Surname));
    assert_eq!(forms.fallback(), &NameForm::Given);
}

#[test]
fn test_tag_round_trips_through_decoder() {
    for gender in [Gender::Male, Gender::Female] {
        let source = format!(r#""" = "{}";"#, gender.tag());
        let table = SuffixTable::<Gender>::parse(&source).unwrap();
        assert_eq!(table.fallback(), &gender);
    }
    for form in [NameForm::Given, NameForm::Surname] {
        let source = format!(r#""" = "{}";"#, form.tag());
        let table = SuffixTable::<NameForm>::parse(&source).unwrap();
        assert_eq!(table.fallback(), &form);
    }
}

// =========================================================================
// Longest Match
// =========================================================================

#[test]
fn test_longer_suffix_not_shadowed() {
    let table = SuffixTable::<Gender>::parse(
        r#"
        "" = "m";
        "a" = "m";
        "ová" = "w";
    "#,
    )
    .unwrap();
    let matched = table.longest_match("svobodová");
    assert_eq!(matched.suffix, "ová");
    assert_eq!(matched.value, &Gender::Female);

    let matched = table.longest_match("svoboda");
    assert_eq!(matched.suffix, "a");
}

#[test]
fn test_match_on_multibyte_boundary() {
    let table = SuffixTable::<String>::parse(r#""" = ""; "něk" = "ňku"; "k" = "ku";"#).unwrap();
    let matched = table.longest_match("zdeněk");
    assert_eq!(matched.suffix, "něk");
    assert_eq!(matched.value, "ňku");
}

#[test]
fn test_no_match_falls_back() {
    let table = SuffixTable::<String>::parse(r#""" = "e"; "a" = "o";"#).unwrap();
    let matched = table.longest_match("ťxyz");
    assert!(matched.is_fallback());
    assert_eq!(matched.value, "e");
}
