#[cfg(test)]
mod custom_statement_tests {
    use super::super::common::{normalize, operation, translate};
    use graphql_cypher::config::TranslatorConfig;
    use graphql_cypher::selection::FlatSelectionCompiler;
    use graphql_cypher::utils::id_generation::UuidGenerator;
    use graphql_cypher::translator::classify;
    use graphql_cypher::{Kind, Translator};
    use serde_json::{json, Value};

    fn top_movies(schema_type: Value) -> Value {
        json!({
            "root": "query",
            "fieldName": "topMovies",
            "typeName": "Movie",
            "variableName": "movie",
            "schemaType": schema_type,
            "selections": [{ "name": "title" }],
            "arguments": [
                { "name": "minRating", "type": { "name": "Float" }, "value": 8.0 }
            ],
            "first": 5,
            "orderBy": [{ "field": "title", "direction": "asc" }],
            "directives": [
                { "name": "cypher", "arguments": { "statement": "MATCH (m:Movie) WHERE m.rating >= $minRating RETURN m" } }
            ]
        })
    }

    #[test]
    fn test_custom_query_node_result() {
        let query = translate(top_movies(json!({ "name": "Movie" }))).unwrap();
        assert_eq!(
            query.text(),
            "WITH apoc.cypher.runFirstColumn(\"MATCH (m:Movie) WHERE m.rating >= $minRating RETURN m\", \
             {minRating:$minRating, first:$first}, True) AS x UNWIND x AS movie \
             RETURN movie {.title} AS movie ORDER BY movie.title ASC LIMIT $first"
        );
        assert_eq!(
            Value::Object(query.parameters().clone()),
            json!({ "minRating": 8.0, "first": 5 })
        );
    }

    #[test]
    fn test_custom_query_temporal_result_is_unprojected() {
        let query = translate(top_movies(json!({ "name": "_Neo4jDateTime" }))).unwrap();
        assert!(normalize(query.text()).ends_with("UNWIND x AS movie RETURN movie LIMIT $first"));
        assert!(!query.text().contains("ORDER BY"));
    }

    #[test]
    fn test_custom_mutation() {
        let query = translate(json!({
            "root": "mutation",
            "fieldName": "rateMovie",
            "typeName": "Movie",
            "variableName": "movie",
            "schemaType": { "name": "Movie" },
            "selections": [{ "name": "title" }, { "name": "rating" }],
            "arguments": [
                { "name": "title", "type": { "name": "String" }, "value": "Heat" },
                { "name": "rating", "type": { "name": "Float" }, "value": 8.3 }
            ],
            "cypherParams": { "userId": "u-9" },
            "directives": [
                { "name": "cypher", "arguments": { "statement": "MATCH (m:Movie {title: $title}) SET m.rating = $rating RETURN m" } }
            ]
        }))
        .unwrap();

        assert_eq!(
            normalize(query.text()),
            "CALL apoc.cypher.doIt(\"MATCH (m:Movie {title: $title}) SET m.rating = $rating RETURN m\", \
             {title:$title, rating:$rating, cypherParams: $cypherParams}) YIELD value \
             WITH apoc.map.values(value, [keys(value)[0]])[0] AS movie \
             RETURN movie {.title, .rating} AS movie"
        );
        assert_eq!(
            Value::Object(query.parameters().clone()),
            json!({ "title": "Heat", "rating": 8.3, "cypherParams": { "userId": "u-9" } })
        );
    }

    #[test]
    fn test_configured_directive_names() {
        let mut json = top_movies(json!({ "name": "Movie" }));
        json["directives"] = json!([
            { "name": "query", "arguments": { "text": "MATCH (m:Movie) RETURN m" } }
        ]);
        let op = operation(json);

        let config = TranslatorConfig {
            cypher_directive: "query".to_string(),
            statement_argument: "text".to_string(),
            ..Default::default()
        };
        assert_eq!(classify(&op, &config.cypher_directive).unwrap(), Kind::CustomQuery);

        let query = Translator::new(&FlatSelectionCompiler, &UuidGenerator)
            .with_config(config)
            .translate(&op)
            .unwrap();
        assert!(query.text().contains("runFirstColumn(\"MATCH (m:Movie) RETURN m\""));
    }
}
