//! Embedded core SCIM schemas.
//!
//! This module provides the core User and Group schemas plus the Enterprise
//! User extension schema embedded as static strings, eliminating the need
//! for external schema files in the common case.

/// Returns the core User schema as a JSON string.
///
/// This is the SCIM 2.0 User schema as defined in RFC 7643.
pub fn core_user_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:core:2.0:User",
  "name": "User",
  "description": "User Account",
  "attributes": [
    {
      "name": "id",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readOnly"
    },
    {
      "name": "externalId",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "userName",
      "type": "string",
      "multiValued": false,
      "required": true,
      "mutability": "readWrite"
    },
    {
      "name": "name",
      "type": "complex",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite",
      "subAttributes": [
        {
          "name": "formatted",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "familyName",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "givenName",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "middleName",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "honorificPrefix",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "honorificSuffix",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        }
      ]
    },
    {
      "name": "displayName",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "nickName",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "title",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "userType",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "active",
      "type": "boolean",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "password",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "writeOnly"
    },
    {
      "name": "emails",
      "type": "complex",
      "multiValued": true,
      "required": false,
      "mutability": "readWrite",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite",
          "canonicalValues": ["work", "home", "other"]
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        }
      ]
    },
    {
      "name": "phoneNumbers",
      "type": "complex",
      "multiValued": true,
      "required": false,
      "mutability": "readWrite",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite",
          "canonicalValues": ["work", "home", "mobile", "fax", "pager", "other"]
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        }
      ]
    },
    {
      "name": "addresses",
      "type": "complex",
      "multiValued": true,
      "required": false,
      "mutability": "readWrite",
      "subAttributes": [
        {
          "name": "formatted",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "streetAddress",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "locality",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "region",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "postalCode",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "country",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite",
          "canonicalValues": ["work", "home", "other"]
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        }
      ]
    },
    {
      "name": "groups",
      "type": "complex",
      "multiValued": true,
      "required": false,
      "mutability": "readOnly",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readOnly"
        },
        {
          "name": "$ref",
          "type": "reference",
          "multiValued": false,
          "required": false,
          "mutability": "readOnly"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readOnly"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readOnly",
          "canonicalValues": ["direct", "indirect"]
        }
      ]
    },
    {
      "name": "roles",
      "type": "complex",
      "multiValued": true,
      "required": false,
      "mutability": "readWrite",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "primary",
          "type": "boolean",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        }
      ]
    }
  ]
}"#
}

/// Returns the core Group schema as a JSON string.
pub fn core_group_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:core:2.0:Group",
  "name": "Group",
  "description": "Group",
  "attributes": [
    {
      "name": "id",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readOnly"
    },
    {
      "name": "externalId",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "displayName",
      "type": "string",
      "multiValued": false,
      "required": true,
      "mutability": "readWrite"
    },
    {
      "name": "members",
      "type": "complex",
      "multiValued": true,
      "required": false,
      "mutability": "readWrite",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "immutable"
        },
        {
          "name": "$ref",
          "type": "reference",
          "multiValued": false,
          "required": false,
          "mutability": "immutable"
        },
        {
          "name": "display",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "immutable"
        },
        {
          "name": "type",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "immutable",
          "canonicalValues": ["User", "Group"]
        }
      ]
    }
  ]
}"#
}

/// Returns the Enterprise User extension schema as a JSON string.
///
/// Extension attributes live under the schema URI key in resource documents.
pub fn enterprise_user_schema() -> &'static str {
    r#"{
  "id": "urn:ietf:params:scim:schemas:extension:enterprise:2.0:User",
  "name": "EnterpriseUser",
  "description": "Enterprise User",
  "attributes": [
    {
      "name": "employeeNumber",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "costCenter",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "organization",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "division",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "department",
      "type": "string",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite"
    },
    {
      "name": "manager",
      "type": "complex",
      "multiValued": false,
      "required": false,
      "mutability": "readWrite",
      "subAttributes": [
        {
          "name": "value",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "$ref",
          "type": "reference",
          "multiValued": false,
          "required": false,
          "mutability": "readWrite"
        },
        {
          "name": "displayName",
          "type": "string",
          "multiValued": false,
          "required": false,
          "mutability": "readOnly"
        }
      ]
    }
  ]
}"#
}
