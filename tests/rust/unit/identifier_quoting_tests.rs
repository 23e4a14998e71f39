//! Identifier quoting must keep generated text well formed whatever the schema
//! names contain.

#[cfg(test)]
mod identifier_quoting_tests {
    use graphql_cypher::utils::identifiers::{is_plain_identifier, safe_label, safe_var};

    const HOSTILE_NAMES: &[&str] = &[
        "Person",
        "O'Brien",
        "say \"hi\"",
        "back`tick",
        "``",
        "x`) DETACH DELETE (n) //",
        "名前",
        " ",
        "",
    ];

    /// Labels either stay plain or are a single backtick-quoted token
    #[test]
    fn test_labels_are_single_tokens() {
        for name in HOSTILE_NAMES {
            let quoted = safe_label(name);
            if is_plain_identifier(name) {
                assert_eq!(&quoted, name);
                continue;
            }
            assert!(quoted.starts_with('`') && quoted.ends_with('`'), "{}", quoted);
            let inner = &quoted[1..quoted.len() - 1];
            assert!(
                !inner.replace("``", "").contains('`'),
                "unescaped backtick in {}",
                quoted
            );
            assert_eq!(inner.replace("``", "`"), *name);
        }
    }

    /// Variables are always plain identifiers
    #[test]
    fn test_variables_are_plain() {
        for name in HOSTILE_NAMES {
            let var = safe_var(name);
            assert!(is_plain_identifier(&var), "{:?} -> {:?}", name, var);
        }
    }

    #[test]
    fn test_plain_names_are_untouched() {
        assert_eq!(safe_label("ACTED_IN"), "ACTED_IN");
        assert_eq!(safe_var("person_from"), "person_from");
    }
}
