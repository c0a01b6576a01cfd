//! SCIM 2.0 resource and schema model.
//!
//! Provides the schema-driven representation of structured identity
//! resources: attribute definitions loaded from RFC 7643 schema documents,
//! case-insensitive attribute-path resolution, a generic JSON-backed
//! resource node with extension-namespace handling, and the bulk operation
//! envelope with lazily-validated required fields.
//!
//! # Core Components
//!
//! - [`Schema`] / [`AttributeDefinition`] - immutable schema documents and
//!   their attribute definition trees
//! - [`SchemaRegistry`] - loads and shares schema documents
//! - [`ResourceNode`] - one resource instance, addressed through resolved
//!   attribute definitions
//! - [`BulkOperation`] - one entry of a bulk request or response
//!
//! # Quick Start
//!
//! ```rust
//! use scim_resource::SchemaRegistry;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let mut user = registry.user_resource(json!({
//!     "schemas": ["urn:ietf:params:scim:schemas:core:2.0:User"],
//!     "userName": "jdoe",
//!     "name": { "givenName": "John", "familyName": "Doe" }
//! }))?;
//!
//! let given_name = user.resolve_attribute("name.givenName")?.clone();
//! assert_eq!(user.get(&given_name)?, Some(json!("John")));
//! assert!(user.remove(&given_name)?);
//! # Ok(())
//! # }
//! ```
//!
//! Everything here is synchronous and in-memory: transport, persistence and
//! bulk-request orchestration are external collaborators that consume these
//! types.

pub mod bulk;
pub mod error;
pub mod resource;
pub mod schema;

// Re-export commonly used types for convenience
pub use bulk::{BulkOperation, BulkOperationBuilder, HttpMethod};
pub use error::{ScimError, ScimResult, SchemaError, SchemaResult};
pub use resource::{Meta, ResourceNode};
pub use schema::{AttributeDefinition, AttributeType, Mutability, Schema, SchemaRegistry};
