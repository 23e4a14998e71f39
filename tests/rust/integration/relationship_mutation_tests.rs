#[cfg(test)]
mod relationship_mutation_tests {
    use super::super::common::{normalize, translate};
    use graphql_cypher::TranslateError;
    use serde_json::{json, Value};

    fn movie_actors(field_name: &str, payload: &str) -> Value {
        json!({
            "root": "mutation",
            "fieldName": field_name,
            "typeName": "Movie",
            "variableName": "movie",
            "schemaType": { "name": payload },
            "selections": [
                { "name": "from", "selections": [{ "name": "name" }] },
                { "name": "to", "selections": [{ "name": "title" }] }
            ],
            "arguments": [
                {
                    "name": "from",
                    "type": { "name": "_PersonInput", "nonNull": true, "fields": [
                        { "name": "name", "type": { "name": "String", "nonNull": true } }
                    ]},
                    "value": { "name": "Carrie-Anne Moss" }
                },
                {
                    "name": "to",
                    "type": { "name": "_MovieInput", "nonNull": true, "fields": [
                        { "name": "title", "type": { "name": "String", "nonNull": true } }
                    ]},
                    "value": { "title": "The Matrix" }
                },
                {
                    "name": "data",
                    "type": { "name": "_ActedInInput", "fields": [
                        { "name": "roles", "type": { "name": "String", "list": true } },
                        { "name": "since", "type": { "name": "_Neo4jDateInput" } }
                    ]},
                    "value": { "roles": ["Trinity"], "since": { "formatted": "1998-01-01" } }
                }
            ],
            "directives": [
                { "name": "MutationMeta", "arguments": { "relationship": "ACTED_IN", "from": "Person", "to": "Movie" } }
            ]
        })
    }

    #[test]
    fn test_add_relationship() {
        let query = translate(movie_actors("AddMovieActors", "_AddMovieActorsPayload")).unwrap();

        assert_eq!(
            normalize(query.text()),
            "MATCH (person_from:Person {name: $from.name}) \
             MATCH (movie_to:Movie {title: $to.title}) \
             CREATE (person_from)-[acted_in_relation:ACTED_IN {roles:$data.roles, since: date($data.since)}]->(movie_to) \
             RETURN acted_in_relation { from: person_from {.name}, to: movie_to {.title} } AS _AddMovieActorsPayload"
        );
        assert_eq!(
            Value::Object(query.parameters().clone()),
            json!({
                "from": { "name": "Carrie-Anne Moss" },
                "to": { "title": "The Matrix" },
                "data": { "roles": ["Trinity"], "since": "1998-01-01" }
            })
        );
    }

    #[test]
    fn test_remove_relationship() {
        let query =
            translate(movie_actors("RemoveMovieActors", "_RemoveMovieActorsPayload")).unwrap();

        let text = normalize(query.text());
        assert!(text.contains(
            "OPTIONAL MATCH (person_from)-[person_frommovie_to:ACTED_IN]->(movie_to) DELETE person_frommovie_to"
        ));
        assert!(text.ends_with(
            "RETURN {from: _person_from {.name}, to: _movie_to {.title}} AS _RemoveMovieActorsPayload"
        ));
        assert!(!text.contains("person_frommovie_to {"));
    }

    #[test]
    fn test_add_without_mutation_meta_fails() {
        let mut json = movie_actors("AddMovieActors", "_AddMovieActorsPayload");
        json["directives"] = json!([]);
        let err = translate(json).unwrap_err();
        assert!(matches!(err, TranslateError::MissingMutationMeta { .. }));
    }

    #[test]
    fn test_mutation_meta_missing_argument_fails() {
        let mut json = movie_actors("RemoveMovieActors", "_RemoveMovieActorsPayload");
        json["directives"][0]["arguments"] = json!({ "relationship": "ACTED_IN", "to": "Movie" });
        match translate(json) {
            Err(TranslateError::MissingMutationMeta { detail, .. }) => assert!(detail.contains("'from'")),
            other => panic!("expected MissingMutationMeta, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_from_argument_fails() {
        let mut json = movie_actors("AddMovieActors", "_AddMovieActorsPayload");
        json["arguments"][0]
            .as_object_mut()
            .unwrap()
            .remove("value");
        assert_eq!(
            translate(json).unwrap_err(),
            TranslateError::MissingEndpointArgument {
                field_name: "AddMovieActors".to_string(),
                argument: "from".to_string(),
            }
        );
    }
}
