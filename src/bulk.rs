//! Bulk operation envelope.
//!
//! One [`BulkOperation`] represents a single entry of a bulk request or
//! response. Required fields are validated lazily, when a typed accessor is
//! invoked, not at construction: a partially populated envelope must remain
//! constructible and serializable, e.g. while building an error response
//! that references the original, possibly malformed, operation.

use crate::error::{ScimError, ScimResult};
use serde::{Deserialize, Serialize};

/// HTTP methods permitted in bulk operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// The method name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// One entry of a bulk request or response.
///
/// `method` and `path` are semantically required but stored as optional;
/// their absence surfaces only through [`method`](Self::method) and
/// [`path`](Self::path). The optional fields never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkOperation {
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<HttpMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bulk_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    /// Embedded resource payload, carried as a JSON string
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl BulkOperation {
    /// Start building a bulk operation.
    pub fn builder() -> BulkOperationBuilder {
        BulkOperationBuilder::default()
    }

    /// The HTTP method of this operation.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::BadRequest`] when no method was set.
    pub fn method(&self) -> ScimResult<HttpMethod> {
        self.method
            .ok_or_else(|| ScimError::bad_request("required attribute 'method' is missing"))
    }

    /// The resource endpoint path of this operation.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::BadRequest`] when no path was set. An empty
    /// string is a legal present value.
    pub fn path(&self) -> ScimResult<&str> {
        self.path
            .as_deref()
            .ok_or_else(|| ScimError::bad_request("required attribute 'path' is missing"))
    }

    /// The client-assigned bulk id, if any.
    pub fn bulk_id(&self) -> Option<&str> {
        self.bulk_id.as_deref()
    }

    /// The embedded resource payload, if any.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// The version token for conditional requests, if any.
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

/// Builder for [`BulkOperation`].
#[derive(Debug, Clone, Default)]
pub struct BulkOperationBuilder {
    operation: BulkOperation,
}

impl BulkOperationBuilder {
    pub fn method(mut self, method: HttpMethod) -> Self {
        self.operation.method = Some(method);
        self
    }

    pub fn bulk_id(mut self, bulk_id: impl Into<String>) -> Self {
        self.operation.bulk_id = Some(bulk_id.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.operation.path = Some(path.into());
        self
    }

    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.operation.data = Some(data.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.operation.version = Some(version.into());
        self
    }

    pub fn build(self) -> BulkOperation {
        self.operation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names_on_the_wire() {
        let json = serde_json::to_value(HttpMethod::Patch).unwrap();
        assert_eq!(json, "PATCH");
        let method: HttpMethod = serde_json::from_value(serde_json::json!("DELETE")).unwrap();
        assert_eq!(method, HttpMethod::Delete);
        assert_eq!(HttpMethod::Post.as_str(), "POST");
    }

    #[test]
    fn test_partial_envelope_serializes_without_absent_fields() {
        let operation = BulkOperation::builder().path("/Users").build();
        let json = serde_json::to_value(&operation).unwrap();
        assert_eq!(json, serde_json::json!({ "path": "/Users" }));
    }
}
