//! Shared fixtures for integration tests.

use scim_resource::{ResourceNode, SchemaRegistry};
use serde_json::{Value, json};

pub const USER_SCHEMA_URI: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
pub const ENTERPRISE_USER_SCHEMA_URI: &str =
    "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User";

/// A populated user document with multi-valued attributes and an enterprise
/// extension, shaped like the documents a provisioning client sends.
pub fn user_document() -> Value {
    json!({
        "schemas": [USER_SCHEMA_URI, ENTERPRISE_USER_SCHEMA_URI],
        "id": "2819c223-7f76-453a-919d-413861904646",
        "userName": "chuck",
        "nickName": "chucky",
        "title": "Mr.",
        "userType": "super user",
        "name": {
            "familyName": "Norris",
            "givenName": "Carlos",
            "middleName": "Ray"
        },
        "addresses": [
            {
                "streetAddress": "somewhere 56",
                "locality": "Bremen",
                "country": "DE"
            }
        ],
        "phoneNumbers": [
            { "value": "111-111-111111", "type": "work", "primary": false },
            { "value": "666-666-666666", "type": "home", "primary": true }
        ],
        "emails": [
            { "value": "other@norris.com", "type": "home" },
            { "value": "chuck@norris.com", "type": "work", "primary": true }
        ],
        "groups": [
            { "value": "123456", "display": "admins" },
            { "value": "654321", "display": "users" }
        ],
        "roles": [
            { "value": "123456" }
        ],
        (ENTERPRISE_USER_SCHEMA_URI): {
            "employeeNumber": "701984",
            "manager": {
                "value": "906",
                "$ref": "https://example.com/Users/906",
                "displayName": "The Boss"
            }
        }
    })
}

pub fn registry() -> SchemaRegistry {
    SchemaRegistry::new().expect("embedded schemas must load")
}

pub fn user_resource() -> ResourceNode {
    registry()
        .user_resource(user_document())
        .expect("fixture document must parse")
}
