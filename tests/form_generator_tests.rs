use formfold::{
    generate_fields, FieldOptions, FieldOptionsMap, FieldType, FormElement, FormError,
    OptionsEntry, Schema,
};
use serde_json::json;

fn account_schema() -> Schema {
    Schema::new()
        .with_field("username", FieldType::String)
        .with_field("age", FieldType::Number)
        .with_field("isAdmin", FieldType::Boolean)
}

fn address_schema() -> Schema {
    let sub_address = Schema::new().with_field("subStreet", FieldType::String);

    let address = Schema::new()
        .with_field("street", FieldType::String)
        .with_field("city", FieldType::String)
        .with_field("code", FieldType::Number)
        .with_field("subAddress", FieldType::Object(sub_address))
        .with_field("country", FieldType::String);

    Schema::new()
        .with_field("surname", FieldType::String)
        .with_field("address", FieldType::Object(address))
        .with_field("name", FieldType::String)
}

#[test]
fn test_generate_flat_schema_with_overrides() {
    let schema = account_schema();
    let options: FieldOptionsMap = [
        (
            "username".to_string(),
            OptionsEntry::Field(FieldOptions::new().with_placeholder("Username")),
        ),
        (
            "age".to_string(),
            OptionsEntry::Field(FieldOptions::new().with_placeholder("Age")),
        ),
        (
            "isAdmin".to_string(),
            OptionsEntry::Field(
                FieldOptions::new()
                    .with_label("Is Admin?")
                    .with_field_type("radio"),
            ),
        ),
    ]
    .into();

    let elements = generate_fields(&schema, &options).unwrap();

    assert_eq!(
        serde_json::to_value(&elements).unwrap(),
        json!([
            {
                "id": "username",
                "label": "Username",
                "name": "username",
                "type": "text",
                "placeholder": "Username",
                "tag": "input"
            },
            {
                "id": "age",
                "label": "Age",
                "name": "age",
                "placeholder": "Age",
                "type": "number",
                "tag": "input",
                "inputMode": "numeric"
            },
            {
                "id": "isAdmin",
                "label": "Is Admin?",
                "name": "isAdmin",
                "tag": "input",
                "type": "radio"
            }
        ])
    );
}

#[test]
fn test_generate_nested_schema() {
    let schema = address_schema();
    let options = schema.options_builder().build();

    let elements = generate_fields(&schema, &options).unwrap();

    assert_eq!(
        serde_json::to_value(&elements).unwrap(),
        json!([
            {
                "id": "surname",
                "label": "Surname",
                "name": "surname",
                "tag": "input",
                "type": "text"
            },
            {
                "address": [
                    {
                        "id": "street",
                        "label": "Street",
                        "name": "street",
                        "tag": "input",
                        "type": "text"
                    },
                    {
                        "id": "city",
                        "label": "City",
                        "name": "city",
                        "tag": "input",
                        "type": "text"
                    },
                    {
                        "id": "code",
                        "inputMode": "numeric",
                        "label": "Code",
                        "name": "code",
                        "tag": "input",
                        "type": "number"
                    },
                    {
                        "subAddress": [
                            {
                                "id": "subStreet",
                                "label": "SubStreet",
                                "name": "subStreet",
                                "tag": "input",
                                "type": "text"
                            }
                        ]
                    },
                    {
                        "id": "country",
                        "label": "Country",
                        "name": "country",
                        "tag": "input",
                        "type": "text"
                    }
                ]
            },
            {
                "id": "name",
                "label": "Name",
                "name": "name",
                "tag": "input",
                "type": "text"
            }
        ])
    );
}

#[test]
fn test_output_preserves_declared_order() {
    let schema = account_schema();
    let elements = generate_fields(&schema, &FieldOptionsMap::new()).unwrap();

    let names: Vec<&str> = elements
        .iter()
        .map(|element| element.as_field().unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["username", "age", "isAdmin"]);
    assert_eq!(elements.len(), schema.len());
}

#[test]
fn test_nested_overrides_applied() {
    let nested: FieldOptionsMap = [(
        "street".to_string(),
        OptionsEntry::Field(FieldOptions::new().with_placeholder("Main St")),
    )]
    .into();
    let options: FieldOptionsMap = [("address".to_string(), OptionsEntry::Nested(nested))].into();

    let schema = Schema::new().with_field(
        "address",
        FieldType::Object(Schema::new().with_field("street", FieldType::String)),
    );

    let elements = generate_fields(&schema, &options).unwrap();
    let (_, group) = elements[0].as_group().unwrap();
    let street = group[0].as_field().unwrap();

    assert_eq!(street.placeholder.as_deref(), Some("Main St"));
    assert_eq!(street.label, "Street");
}

#[test]
fn test_unsupported_type_fails_whole_walk() {
    let schema = Schema::new()
        .with_field("username", FieldType::String)
        .with_field("tags", FieldType::List(Box::new(FieldType::String)));

    let result = generate_fields(&schema, &FieldOptionsMap::new());

    match result {
        Err(FormError::UnsupportedType { field, category }) => {
            assert_eq!(field, "tags");
            assert_eq!(category.as_str(), "list");
        }
        other => panic!("Expected UnsupportedType, got {other:?}"),
    }
}

#[test]
fn test_unsupported_type_inside_nested_schema() {
    let nested = Schema::new().with_field("tags", FieldType::List(Box::new(FieldType::Number)));
    let schema = Schema::new()
        .with_field("surname", FieldType::String)
        .with_field("meta", FieldType::Object(nested));

    assert!(generate_fields(&schema, &FieldOptionsMap::new()).is_err());
}

#[test]
fn test_unknown_override_keys_are_inert() {
    let schema = Schema::new().with_field("username", FieldType::String);
    let options: FieldOptionsMap = [(
        "no_such_field".to_string(),
        OptionsEntry::Field(FieldOptions::new().with_label("Ghost")),
    )]
    .into();

    let elements = generate_fields(&schema, &options).unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].as_field().unwrap().label, "Username");
}

#[test]
fn test_mismatched_override_kinds_are_ignored() {
    let schema = Schema::new()
        .with_field("username", FieldType::String)
        .with_field(
            "address",
            FieldType::Object(Schema::new().with_field("city", FieldType::String)),
        );

    // Nested map for a primitive field, flat options for an object field
    let options: FieldOptionsMap = [
        (
            "username".to_string(),
            OptionsEntry::Nested(FieldOptionsMap::new()),
        ),
        (
            "address".to_string(),
            OptionsEntry::Field(FieldOptions::new().with_label("Address")),
        ),
    ]
    .into();

    let elements = generate_fields(&schema, &options).unwrap();

    assert_eq!(elements[0].as_field().unwrap().label, "Username");
    let (name, group) = elements[1].as_group().unwrap();
    assert_eq!(name, "address");
    assert_eq!(group[0].as_field().unwrap().label, "City");
}

#[test]
fn test_generation_is_idempotent() {
    let schema = address_schema();
    let options: FieldOptionsMap = [(
        "surname".to_string(),
        OptionsEntry::Field(FieldOptions::new().with_placeholder("Surname")),
    )]
    .into();

    let first = generate_fields(&schema, &options).unwrap();
    let second = generate_fields(&schema, &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_schema_generates_empty_form() {
    let elements = generate_fields(&Schema::new(), &FieldOptionsMap::new()).unwrap();
    assert!(elements.is_empty());
}

#[test]
fn test_enum_field_generation() {
    let schema = Schema::new().with_field(
        "colors",
        FieldType::Enum {
            members: vec!["Red".to_string(), "Green".to_string(), "Blue".to_string()],
        },
    );

    let elements = generate_fields(&schema, &FieldOptionsMap::new()).unwrap();

    assert_eq!(
        serde_json::to_value(&elements).unwrap(),
        json!([
            {
                "id": "colors",
                "label": "Colors",
                "name": "colors",
                "renderAs": "select",
                "tag": "select",
                "type": "select",
                "options": ["Red", "Green", "Blue"]
            }
        ])
    );
}

#[test]
fn test_extra_override_keys_surface_in_output() {
    let schema = Schema::new().with_field("username", FieldType::String);
    let options: FieldOptionsMap = [(
        "username".to_string(),
        OptionsEntry::Field(
            FieldOptions::new()
                .with_extra("required", json!(true))
                .with_extra("autocomplete", json!("off")),
        ),
    )]
    .into();

    let elements = generate_fields(&schema, &options).unwrap();
    let value = serde_json::to_value(&elements[0]).unwrap();

    assert_eq!(value["required"], json!(true));
    assert_eq!(value["autocomplete"], json!("off"));
}

#[test]
fn test_schema_loaded_from_json_generates() {
    let schema = Schema::from_json(
        r#"{
            "fields": {
                "surname": "string",
                "address": {"object": {"fields": {"street": "string", "city": "string"}}}
            }
        }"#,
    )
    .unwrap();

    let elements = generate_fields(&schema, &FieldOptionsMap::new()).unwrap();

    assert_eq!(elements.len(), 2);
    let (name, group) = elements[1].as_group().unwrap();
    assert_eq!(name, "address");
    assert_eq!(group.len(), 2);
}

#[test]
fn test_elements_match_schema_shape() {
    let schema = address_schema();
    let elements = generate_fields(&schema, &FieldOptionsMap::new()).unwrap();

    assert!(matches!(elements[0], FormElement::Field(_)));
    assert!(matches!(elements[1], FormElement::Group { .. }));
    assert!(matches!(elements[2], FormElement::Field(_)));
}
