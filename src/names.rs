//! Identifier helpers shared by the loader and the generators.

/// `true` when every char is an ASCII letter, digit or underscore, i.e.
/// the atom text can be used verbatim inside a generated identifier.
pub fn is_safe_identifier(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Remove one layer of Erlang quoting: `'and'` -> `and`.
pub fn unquote(text: &str) -> &str {
    text.trim_matches('\'')
}

/// Enum variant name: quotes dropped, parts uppercased and joined
/// without underscores (`is_function` -> `ISFUNCTION`).
pub fn enum_name(name: &str) -> String {
    unquote(name)
        .split('_')
        .map(|part| part.to_uppercase())
        .collect()
}

/// Lowercase function name for the generated C/Rust dispatch symbols.
pub fn c_fun_name(name: &str) -> String {
    unquote(name).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_identifier() {
        let cases = [
            ("abs", true),
            ("list_to_binary", true),
            ("ERROR2", true),
            ("", true),
            ("+", false),
            ("=:=", false),
            ("'and'", false),
            ("a-b", false),
        ];
        for (input, expected) in cases {
            assert_eq!(is_safe_identifier(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_enum_and_fun_names() {
        assert_eq!(enum_name("is_function"), "ISFUNCTION");
        assert_eq!(enum_name("'andalso'"), "ANDALSO");
        assert_eq!(c_fun_name("'Abs'"), "abs");
        assert_eq!(c_fun_name("element"), "element");
    }
}
