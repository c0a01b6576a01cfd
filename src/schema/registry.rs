//! Schema registry for loading, managing, and accessing SCIM schemas.
//!
//! The registry holds every loaded [`Schema`] behind an [`Arc`] so that
//! resource nodes can reference their schema documents without copying them;
//! schemas are immutable after loading and safe to share across operations.

use super::{embedded, types::Schema};
use crate::error::{ScimResult, SchemaResult};
use crate::resource::ResourceNode;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Registry for SCIM schema documents.
///
/// Always contains the core User and Group schemas plus the Enterprise User
/// extension schema; further schemas can be registered with
/// [`SchemaRegistry::add_schema`].
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    core_user_schema: Arc<Schema>,
    core_group_schema: Arc<Schema>,
    enterprise_user_schema: Arc<Schema>,
    schemas: HashMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    /// Create a new schema registry with embedded core schemas.
    ///
    /// Uses the schemas embedded in the library and doesn't require external
    /// schema files. For loading schemas from files, use `from_schema_dir()`.
    pub fn new() -> SchemaResult<Self> {
        Self::with_embedded_schemas()
    }

    /// Create a new schema registry with embedded core schemas.
    pub fn with_embedded_schemas() -> SchemaResult<Self> {
        Self::from_documents(
            Schema::from_str(embedded::core_user_schema())?,
            Schema::from_str(embedded::core_group_schema())?,
            Schema::from_str(embedded::enterprise_user_schema())?,
        )
    }

    /// Create a schema registry by loading schemas from a directory.
    ///
    /// Expects `User.json`, `Group.json` and `EnterpriseUser.json` in the
    /// given directory, each holding an RFC 7643 schema document.
    pub fn from_schema_dir<P: AsRef<Path>>(schema_dir: P) -> SchemaResult<Self> {
        let dir = schema_dir.as_ref();
        Self::from_documents(
            Self::load_schema_from_file(dir.join("User.json"))?,
            Self::load_schema_from_file(dir.join("Group.json"))?,
            Self::load_schema_from_file(dir.join("EnterpriseUser.json"))?,
        )
    }

    fn from_documents(
        core_user_schema: Schema,
        core_group_schema: Schema,
        enterprise_user_schema: Schema,
    ) -> SchemaResult<Self> {
        let core_user_schema = Arc::new(core_user_schema);
        let core_group_schema = Arc::new(core_group_schema);
        let enterprise_user_schema = Arc::new(enterprise_user_schema);

        let mut schemas = HashMap::new();
        for schema in [
            &core_user_schema,
            &core_group_schema,
            &enterprise_user_schema,
        ] {
            schemas.insert(schema.id.to_ascii_lowercase(), Arc::clone(schema));
        }

        Ok(Self {
            core_user_schema,
            core_group_schema,
            enterprise_user_schema,
            schemas,
        })
    }

    /// Load a schema from a JSON file.
    fn load_schema_from_file<P: AsRef<Path>>(path: P) -> SchemaResult<Schema> {
        let content = fs::read_to_string(&path)?;
        Schema::from_str(&content)
    }

    /// Get all registered schemas.
    pub fn get_schemas(&self) -> Vec<&Schema> {
        self.schemas.values().map(Arc::as_ref).collect()
    }

    /// Get a schema by its URI, case-insensitively.
    pub fn get_schema(&self, id: &str) -> Option<&Arc<Schema>> {
        self.schemas.get(&id.to_ascii_lowercase())
    }

    /// Get the core User schema.
    pub fn user_schema(&self) -> &Arc<Schema> {
        &self.core_user_schema
    }

    /// Get the core Group schema.
    pub fn group_schema(&self) -> &Arc<Schema> {
        &self.core_group_schema
    }

    /// Get the Enterprise User extension schema.
    pub fn enterprise_user_schema(&self) -> &Arc<Schema> {
        &self.enterprise_user_schema
    }

    /// Register an additional schema.
    ///
    /// Replaces any previously registered schema with the same URI.
    pub fn add_schema(&mut self, schema: Schema) {
        self.schemas
            .insert(schema.id.to_ascii_lowercase(), Arc::new(schema));
    }

    /// Wrap a user document in a [`ResourceNode`] bound to the core User
    /// schema with the Enterprise User extension attached.
    pub fn user_resource(&self, document: Value) -> ScimResult<ResourceNode> {
        Ok(
            ResourceNode::from_json(Arc::clone(&self.core_user_schema), document)?
                .with_extension(Arc::clone(&self.enterprise_user_schema)),
        )
    }

    /// Wrap a group document in a [`ResourceNode`] bound to the core Group
    /// schema.
    pub fn group_resource(&self, document: Value) -> ScimResult<ResourceNode> {
        ResourceNode::from_json(Arc::clone(&self.core_group_schema), document)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new().expect("failed to load embedded schemas")
    }
}
