//! Supplied-argument partitioning

#[cfg(test)]
mod filter_params_tests {
    use graphql_cypher::operation::{Argument, TypeRef};
    use graphql_cypher::translator::FilterParams;
    use serde_json::{json, Value};
    use std::collections::BTreeSet;

    fn arguments() -> Vec<Argument> {
        vec![
            Argument::supplied("title", TypeRef::named("String"), json!("Heat")),
            Argument::supplied("tagline", TypeRef::named("String"), Value::Null),
            Argument::supplied("year", TypeRef::list_of("Int"), json!([1995])),
            Argument::supplied("rating", TypeRef::named("Float"), json!(8.3)),
            Argument::supplied("plot", TypeRef::named("String"), Value::Null),
            Argument::declared("genre", TypeRef::named("String")),
        ]
    }

    #[test]
    fn test_partition_is_disjoint() {
        let filter = FilterParams::from_arguments(&arguments());
        for key in filter.null_params().keys() {
            assert!(!filter.non_null_params().contains_key(key), "{} on both sides", key);
        }
    }

    #[test]
    fn test_partition_covers_supplied_arguments() {
        let args = arguments();
        let filter = FilterParams::from_arguments(&args);

        let union: BTreeSet<&str> = filter
            .null_params()
            .keys()
            .chain(filter.non_null_params().keys())
            .map(String::as_str)
            .collect();
        let supplied: BTreeSet<&str> = args
            .iter()
            .filter(|arg| arg.is_supplied())
            .map(|arg| arg.name.as_str())
            .collect();

        assert_eq!(union, supplied);
        assert!(!union.contains("genre"));
    }

    #[test]
    fn test_array_params_are_a_subset_of_non_null() {
        let filter = FilterParams::from_arguments(&arguments());
        let arrays: Vec<&str> = filter.array_params().map(|(k, _)| k.as_str()).collect();
        assert_eq!(arrays, vec!["year"]);
        for key in arrays {
            assert!(filter.non_null_params().contains_key(key));
        }
    }

    #[test]
    fn test_no_arguments() {
        let filter = FilterParams::from_arguments(&[]);
        assert!(filter.is_empty());
        assert_eq!(filter.array_params().count(), 0);
    }
}
