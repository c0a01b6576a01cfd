//! Integration tests for schema loading and sharing through the registry.

mod common;

use common::{ENTERPRISE_USER_SCHEMA_URI, USER_SCHEMA_URI};
use scim_resource::SchemaRegistry;
use scim_resource::schema::embedded;
use std::fs;

#[test]
fn embedded_schemas_are_registered() {
    let registry = common::registry();
    assert_eq!(registry.user_schema().id, USER_SCHEMA_URI);
    assert_eq!(registry.group_schema().name, "Group");
    assert_eq!(
        registry.enterprise_user_schema().id,
        ENTERPRISE_USER_SCHEMA_URI
    );
    assert_eq!(registry.get_schemas().len(), 3);
}

#[test]
fn schema_lookup_is_case_insensitive() {
    let registry = common::registry();
    let schema = registry
        .get_schema(&USER_SCHEMA_URI.to_ascii_uppercase())
        .expect("case-insensitive lookup");
    assert_eq!(schema.id, USER_SCHEMA_URI);
}

#[test]
fn loads_schemas_from_a_directory() {
    let dir = std::env::temp_dir().join(format!("scim-schemas-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("User.json"), embedded::core_user_schema()).unwrap();
    fs::write(dir.join("Group.json"), embedded::core_group_schema()).unwrap();
    fs::write(
        dir.join("EnterpriseUser.json"),
        embedded::enterprise_user_schema(),
    )
    .unwrap();

    let registry = SchemaRegistry::from_schema_dir(&dir).unwrap();
    assert_eq!(registry.user_schema().id, USER_SCHEMA_URI);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_schema_directory_is_an_error() {
    assert!(SchemaRegistry::from_schema_dir("/nonexistent/schemas").is_err());
}

#[test]
fn group_documents_resolve_against_the_group_schema() {
    let registry = common::registry();
    let group = registry
        .group_resource(serde_json::json!({
            "schemas": ["urn:ietf:params:scim:schemas:core:2.0:Group"],
            "displayName": "admins",
            "members": [
                { "value": "2819c223", "display": "Chuck Norris" }
            ]
        }))
        .unwrap();

    assert_eq!(group.required_string("displayName").unwrap(), "admins");
    let member_value = group.resolve_attribute("members.value").unwrap().clone();
    assert_eq!(
        group.get(&member_value).unwrap(),
        Some(serde_json::json!(["2819c223"]))
    );
}

#[test]
fn additional_schemas_can_be_registered() {
    let mut registry = common::registry();
    let schema = scim_resource::Schema::from_value(serde_json::json!({
        "id": "urn:example:params:scim:schemas:Device",
        "name": "Device",
        "attributes": [
            { "name": "serialNumber", "type": "string", "required": true }
        ]
    }))
    .unwrap();
    registry.add_schema(schema);

    let loaded = registry
        .get_schema("urn:example:params:scim:schemas:Device")
        .unwrap();
    assert!(loaded.resolve_attribute("serialNumber").is_ok());
}
