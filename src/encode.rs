//! Leaf-level encoding: macro identifiers and C literals.

use crate::ast::Scalar;

/// Derive a C macro identifier from a path prefix.
///
/// Uppercases the input and replaces every character that is not an ASCII
/// letter or digit with a single underscore. Consecutive underscores are
/// not collapsed, and no uniqueness is enforced; two keys may well sanitize
/// to the same name, in which case the C preprocessor's last definition
/// wins.
///
/// The transformation is idempotent, so it is safe to apply to a prefix
/// that has already been sanitized at an outer nesting level.
pub fn derive_identifier(prefix: &str) -> String {
    prefix
        .chars()
        .flat_map(char::to_uppercase)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Encode a scalar as the right-hand side of a `#define`.
///
/// Strings become quoted C string literals, booleans become `1`/`0`
/// (usable in `#if` conditions, unlike `true`/`false` in pre-C23 code),
/// null becomes `NULL`, and numbers are written in plain base-10 with no
/// suffix.
pub fn encode_literal(value: &Scalar) -> String {
    match value {
        Scalar::String(s) => encode_string(s),
        Scalar::Bool(true) => "1".to_string(),
        Scalar::Bool(false) => "0".to_string(),
        Scalar::Null => "NULL".to_string(),
        Scalar::Int(i) => i.to_string(),
        Scalar::UInt(u) => u.to_string(),
        Scalar::Float(f) => f.to_string(),
    }
}

// Backslashes must be escaped before quotes and newlines, otherwise the
// backslashes introduced by those escapes get doubled.
fn encode_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_uppercases_and_replaces() {
        assert_eq!(derive_identifier("server.host"), "SERVER_HOST");
        assert_eq!(derive_identifier("app-name"), "APP_NAME");
        assert_eq!(derive_identifier("operation()"), "OPERATION__");
        assert_eq!(derive_identifier("$schema"), "_SCHEMA");
    }

    #[test]
    fn test_identifier_keeps_digits() {
        assert_eq!(derive_identifier("vars_0_name"), "VARS_0_NAME");
    }

    #[test]
    fn test_identifier_does_not_collapse_underscores() {
        assert_eq!(derive_identifier("a--b"), "A__B");
    }

    #[test]
    fn test_identifier_replaces_non_ascii() {
        // Uppercasing happens first, then anything outside ASCII
        // alphanumerics becomes an underscore.
        assert_eq!(derive_identifier("café"), "CAF_");
    }

    #[test]
    fn test_identifier_is_idempotent() {
        for input in ["server.host", "a--b", "café", "x_0", "()[]{}"] {
            let once = derive_identifier(input);
            assert_eq!(derive_identifier(&once), once);
        }
    }

    #[test]
    fn test_encode_plain_string() {
        assert_eq!(
            encode_literal(&Scalar::String("hello".into())),
            "\"hello\""
        );
    }

    #[test]
    fn test_encode_string_escapes_in_order() {
        // A literal backslash followed by 'n' must not merge with the
        // newline escape.
        assert_eq!(
            encode_literal(&Scalar::String("a\\n\nb".into())),
            "\"a\\\\n\\nb\""
        );
        assert_eq!(
            encode_literal(&Scalar::String("say \"hi\"".into())),
            "\"say \\\"hi\\\"\""
        );
    }

    #[test]
    fn test_encode_string_round_trips() {
        // Undo the escapes the way a C compiler would and check we get the
        // original text back.
        fn unescape(lit: &str) -> String {
            let inner = lit.strip_prefix('"').and_then(|s| s.strip_suffix('"'))
                .expect("Literal should be quoted");
            let mut out = String::new();
            let mut chars = inner.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    match chars.next() {
                        Some('n') => out.push('\n'),
                        Some(other) => out.push(other),
                        None => panic!("Dangling escape"),
                    }
                } else {
                    out.push(c);
                }
            }
            out
        }

        for original in ["plain", "with \"quotes\"", "back\\slash", "line\nbreak", "\\n"] {
            let lit = encode_literal(&Scalar::String(original.into()));
            assert_eq!(unescape(&lit), original, "Round trip failed for {:?}", original);
        }
    }

    #[test]
    fn test_encode_bool() {
        assert_eq!(encode_literal(&Scalar::Bool(true)), "1");
        assert_eq!(encode_literal(&Scalar::Bool(false)), "0");
    }

    #[test]
    fn test_encode_null() {
        assert_eq!(encode_literal(&Scalar::Null), "NULL");
    }

    #[test]
    fn test_encode_numbers() {
        assert_eq!(encode_literal(&Scalar::Int(42)), "42");
        assert_eq!(encode_literal(&Scalar::Int(-7)), "-7");
        assert_eq!(encode_literal(&Scalar::Float(1.5)), "1.5");
        assert_eq!(encode_literal(&Scalar::Float(-0.25)), "-0.25");
    }

    #[test]
    fn test_encode_unsigned_keeps_every_digit() {
        assert_eq!(
            encode_literal(&Scalar::UInt(18446744073709551615)),
            "18446744073709551615"
        );
    }
}
