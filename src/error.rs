//! Error types for the SCIM resource and schema model.
//!
//! Three failure kinds exist at this layer: unknown attribute paths raised
//! during schema resolution, client errors raised when a required value is
//! consumed but absent, and internal errors raised on caller misuse (guard
//! violations, value-shape breaks). Absence through an optional accessor is
//! never an error.

/// Main error type for resource and schema operations.
#[derive(Debug, thiserror::Error)]
pub enum ScimError {
    /// An attribute path did not resolve against a schema document.
    #[error("unknown attribute '{attribute}' in schema '{schema_id}'")]
    UnknownAttribute {
        attribute: String,
        schema_id: String,
    },

    /// A required field was consumed but the backing value is absent.
    ///
    /// Indicates a malformed incoming request; maps to a client-facing
    /// protocol error at the transport boundary.
    #[error("bad request: {message}")]
    BadRequest { message: String },

    /// A defect in the calling code: one-time-set guard violation or a
    /// broken value-shape assumption. Always fatal at the point of call.
    #[error("internal error: {message}")]
    Internal { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema document load errors
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Errors raised while loading a schema document.
///
/// These surface once at startup when schema JSON is parsed and the
/// definition tree is linked; a loaded schema is immutable afterwards.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema document root is not a JSON object
    #[error("schema document must be a JSON object")]
    NotAnObject,

    /// Sibling attribute names must be unique, case-insensitively
    #[error("schema '{schema_id}' declares duplicate attribute name '{attribute}'")]
    DuplicateAttributeName {
        schema_id: String,
        attribute: String,
    },

    /// A complex attribute carried no sub-attribute definitions
    #[error("complex attribute '{attribute}' must declare sub-attributes")]
    MissingSubAttributes { attribute: String },

    /// A non-complex attribute carried sub-attribute definitions
    #[error("attribute '{attribute}' of type '{data_type}' must not declare sub-attributes")]
    UnexpectedSubAttributes {
        attribute: String,
        data_type: String,
    },

    /// Nested complex attributes are not permitted by RFC 7643
    #[error("complex attribute '{attribute}' must not contain complex sub-attributes")]
    NestedComplexAttribute { attribute: String },

    /// Failure reading a schema file from disk
    #[error("failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// Schema document is not valid JSON or misses required fields
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScimError {
    /// Create an unknown-attribute error.
    pub fn unknown_attribute(attribute: impl Into<String>, schema_id: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            attribute: attribute.into(),
            schema_id: schema_id.into(),
        }
    }

    /// Create a client-facing required-field error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Create an internal/programming error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Result type aliases for convenience
pub type ScimResult<T> = Result<T, ScimError>;
pub type SchemaResult<T> = Result<T, SchemaError>;
