#[cfg(test)]
mod node_mutation_tests {
    use super::super::common::{normalize, translate, GENERATED_ID};
    use graphql_cypher::TranslateError;
    use serde_json::{json, Value};

    fn person_mutation(field_name: &str, arguments: Value) -> Value {
        json!({
            "root": "mutation",
            "fieldName": field_name,
            "typeName": "Person",
            "variableName": "person",
            "schemaType": { "name": "Person" },
            "selections": [{ "name": "id" }, { "name": "name" }],
            "arguments": arguments
        })
    }

    #[test]
    fn test_create_binds_generated_id_under_params() {
        let query = translate(person_mutation(
            "CreatePerson",
            json!([
                { "name": "id", "type": { "name": "ID" } },
                { "name": "name", "type": { "name": "String" }, "value": "Alice" }
            ]),
        ))
        .unwrap();

        assert_eq!(
            normalize(query.text()),
            "CREATE (person:Person {name:$params.name, id:$params.id}) RETURN person {.id, .name} AS person"
        );
        assert_eq!(
            query.parameters().get("params"),
            Some(&json!({ "name": "Alice", "id": GENERATED_ID }))
        );
        assert!(!query.text().contains(GENERATED_ID));
    }

    #[test]
    fn test_update_keeps_primary_key_in_params() {
        let query = translate(person_mutation(
            "UpdatePerson",
            json!([
                { "name": "id", "type": { "name": "ID", "nonNull": true }, "value": "p-7" },
                { "name": "name", "type": { "name": "String" }, "value": "Bob" }
            ]),
        ))
        .unwrap();

        assert_eq!(
            normalize(query.text()),
            "MATCH (person:Person {id: $params.id}) SET person += {name:$params.name} RETURN person {.id, .name} AS person"
        );
        let params = query.parameters().get("params").unwrap();
        assert_eq!(params.get("id"), Some(&json!("p-7")));
        assert!(!query.text().contains("SET person += {id"));
    }

    #[test]
    fn test_update_temporal_key_matches_in_where() {
        let query = translate(json!({
            "root": "mutation",
            "fieldName": "UpdateScreening",
            "typeName": "Screening",
            "variableName": "screening",
            "schemaType": { "name": "Screening" },
            "selections": [{ "name": "room" }],
            "arguments": [
                {
                    "name": "startsAt",
                    "type": { "name": "_Neo4jLocalDateTimeInput" },
                    "value": { "year": 2024, "month": 5, "day": 1, "hour": 20 }
                },
                { "name": "room", "type": { "name": "String" }, "value": "B" }
            ]
        }))
        .unwrap();

        let text = normalize(query.text());
        assert!(text.starts_with(
            "MATCH (screening:Screening) WHERE screening.startsAt.year = $params.startsAt.year \
             AND screening.startsAt.month = $params.startsAt.month \
             AND screening.startsAt.day = $params.startsAt.day \
             AND screening.startsAt.hour = $params.startsAt.hour"
        ));
        assert!(!text.contains("{startsAt:"));
        assert_eq!(
            query.parameters().get("params"),
            Some(&json!({ "room": "B", "startsAt": { "year": 2024, "month": 5, "day": 1, "hour": 20 } }))
        );
    }

    #[test]
    fn test_delete_projection_precedes_delete() {
        let query = translate(person_mutation(
            "DeletePerson",
            json!([{ "name": "id", "type": { "name": "ID" }, "value": "p-7" }]),
        ))
        .unwrap();

        let text = query.text();
        let projection = text.find("person {.id, .name} AS person").unwrap();
        let delete = text.find("DETACH DELETE person_toDelete").unwrap();
        assert!(projection < delete);
        assert!(text.trim_end().ends_with("RETURN person"));
        assert_eq!(Value::Object(query.parameters().clone()), json!({ "id": "p-7" }));
    }

    #[test]
    fn test_delete_without_primary_key_fails() {
        let err = translate(person_mutation(
            "DeletePerson",
            json!([{ "name": "id", "type": { "name": "ID" } }]),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            TranslateError::MissingEndpointArgument {
                field_name: "DeletePerson".to_string(),
                argument: "id".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_mutation_fails() {
        let err = translate(person_mutation("UpsertPerson", json!([]))).unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedMutationKind { .. }));
    }
}
