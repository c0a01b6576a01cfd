//! Schema definitions and attribute-path resolution for SCIM resources.
//!
//! # Key Types
//!
//! - [`Schema`] - SCIM schema document with attributes and metadata
//! - [`AttributeDefinition`] - Individual attribute specifications
//! - [`SchemaRegistry`] - Registry for managing and sharing schemas
//!
//! # Examples
//!
//! ```rust
//! use scim_resource::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let given_name = registry.user_schema().resolve_attribute("name.givenName")?;
//! assert_eq!(given_name.path(), "name.givenName");
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod types;


// Re-export the main types for convenience
pub use registry::SchemaRegistry;
pub use types::{AttributeDefinition, AttributeType, Mutability, Schema};
