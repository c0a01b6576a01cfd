//! Core schema type definitions for SCIM resources.
//!
//! This module contains the data structures that define SCIM schemas and
//! attribute definitions as specified in RFC 7643, plus the attribute-path
//! resolution that turns a dotted path like `name.givenName` into the
//! matching [`AttributeDefinition`].

use crate::error::{ScimError, ScimResult, SchemaError, SchemaResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A SCIM schema definition.
///
/// Represents a complete schema document with its metadata and attribute
/// definitions. A schema is built once from its JSON document, linked and
/// validated, and is immutable afterwards; it may be shared freely across
/// resource instances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schema {
    /// Unique schema identifier (URI)
    pub id: String,
    /// Human-readable schema name
    pub name: String,
    /// Schema description
    #[serde(default)]
    pub description: String,
    /// Top-level attribute definitions
    pub attributes: Vec<AttributeDefinition>,
}

/// Definition of a SCIM attribute.
///
/// Describes one addressable field of a resource type: name, data type,
/// multiplicity, mutability, required flag, canonical values and, for
/// complex types, the ordered list of sub-attribute definitions.
///
/// After the owning [`Schema`] is loaded, every definition also knows its
/// full dotted path (e.g. `emails.type`) and the URI of the schema document
/// it belongs to. Identity is the (schema URI, path) pair, compared
/// case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeDefinition {
    /// Attribute name, case-insensitive within its parent
    pub name: String,
    /// Data type of the attribute
    #[serde(rename = "type")]
    pub data_type: AttributeType,
    /// Whether this attribute can have multiple values
    #[serde(default)]
    pub multi_valued: bool,
    /// Whether this attribute is required
    #[serde(default)]
    pub required: bool,
    /// Mutability characteristics
    #[serde(default)]
    pub mutability: Mutability,
    /// Allowed values for string attributes
    #[serde(default)]
    pub canonical_values: Vec<String>,
    /// Sub-attributes for complex types
    #[serde(default)]
    pub sub_attributes: Vec<AttributeDefinition>,

    // Filled in by the linking pass after deserialization.
    #[serde(skip)]
    path: String,
    #[serde(skip)]
    schema_uri: String,
    #[serde(skip)]
    parent_multi_valued: bool,
}

/// SCIM attribute data types as defined in RFC 7643.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AttributeType {
    /// String value
    String,
    /// Boolean value
    Boolean,
    /// Decimal number
    Decimal,
    /// Integer number
    Integer,
    /// DateTime in RFC3339 format
    DateTime,
    /// URI reference
    Reference,
    /// Binary data (base64 encoded)
    Binary,
    /// Complex attribute with sub-attributes
    Complex,
}

impl AttributeType {
    /// The type name as it appears in schema documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::DateTime => "dateTime",
            Self::Reference => "reference",
            Self::Binary => "binary",
            Self::Complex => "complex",
        }
    }
}

impl Default for AttributeType {
    fn default() -> Self {
        Self::String
    }
}

/// Attribute mutability characteristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Mutability {
    /// Read-only attribute (managed by server)
    ReadOnly,
    /// Read-write attribute (can be modified by clients)
    ReadWrite,
    /// Immutable attribute (set once, never modified)
    Immutable,
    /// Write-only attribute (passwords, etc.)
    WriteOnly,
}

impl Default for Mutability {
    fn default() -> Self {
        Self::ReadWrite
    }
}

impl AttributeDefinition {
    /// Full dotted path of this attribute within its schema,
    /// e.g. `name.givenName`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// URI of the schema document this definition belongs to.
    pub fn schema_uri(&self) -> &str {
        &self.schema_uri
    }

    /// Whether this definition is a sub-attribute of a multi-valued
    /// complex attribute (e.g. `emails.type`).
    pub fn parent_multi_valued(&self) -> bool {
        self.parent_multi_valued
    }

    /// Whether this attribute is of complex type.
    pub fn is_complex(&self) -> bool {
        matches!(self.data_type, AttributeType::Complex)
    }

    /// Whether this definition addresses a sub-attribute.
    pub fn is_sub_attribute(&self) -> bool {
        self.path.contains('.')
    }

    /// Look up a direct sub-attribute by name, case-insensitively.
    pub fn find_sub_attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.sub_attributes
            .iter()
            .find(|sub| sub.name.eq_ignore_ascii_case(name))
    }

    /// Link this definition into its schema: compute the full path, stamp
    /// the owning schema URI and validate the structural invariants.
    fn link(
        &mut self,
        schema_id: &str,
        parent_path: Option<&str>,
        parent_multi_valued: bool,
    ) -> SchemaResult<()> {
        self.path = match parent_path {
            Some(parent) => format!("{}.{}", parent, self.name),
            None => self.name.clone(),
        };
        self.schema_uri = schema_id.to_string();
        self.parent_multi_valued = parent_multi_valued;

        match (self.is_complex(), self.sub_attributes.is_empty()) {
            (true, true) => {
                return Err(SchemaError::MissingSubAttributes {
                    attribute: self.path.clone(),
                });
            }
            (false, false) => {
                return Err(SchemaError::UnexpectedSubAttributes {
                    attribute: self.path.clone(),
                    data_type: self.data_type.as_str().to_string(),
                });
            }
            _ => {}
        }
        if self.is_complex() && parent_path.is_some() {
            return Err(SchemaError::NestedComplexAttribute {
                attribute: self.path.clone(),
            });
        }

        check_unique_names(&self.sub_attributes, schema_id)?;
        let path = self.path.clone();
        let multi_valued = self.multi_valued;
        for sub in &mut self.sub_attributes {
            sub.link(schema_id, Some(&path), multi_valued)?;
        }
        Ok(())
    }
}

// Identity is the (schema URI, full path) pair, case-insensitive.
impl PartialEq for AttributeDefinition {
    fn eq(&self, other: &Self) -> bool {
        self.schema_uri.eq_ignore_ascii_case(&other.schema_uri)
            && self.path.eq_ignore_ascii_case(&other.path)
    }
}

impl Eq for AttributeDefinition {}

impl Schema {
    /// Build a schema from its JSON document.
    ///
    /// Deserializes the RFC 7643 schema-description shape, computes the full
    /// path of every attribute definition and enforces the structural
    /// invariants (sub-attributes present iff complex, sibling names unique
    /// case-insensitively, no nested complex attributes).
    pub fn from_value(document: Value) -> SchemaResult<Self> {
        if !document.is_object() {
            return Err(SchemaError::NotAnObject);
        }
        let mut schema: Schema = serde_json::from_value(document)?;
        schema.link()?;
        Ok(schema)
    }

    /// Build a schema from a JSON string.
    pub fn from_str(content: &str) -> SchemaResult<Self> {
        Self::from_value(serde_json::from_str(content)?)
    }

    fn link(&mut self) -> SchemaResult<()> {
        check_unique_names(&self.attributes, &self.id)?;
        let id = self.id.clone();
        for attr in &mut self.attributes {
            attr.link(&id, None, false)?;
        }
        log::debug!(
            "loaded schema '{}' with {} top-level attributes",
            self.id,
            self.attributes.len()
        );
        Ok(())
    }

    /// Resolve a dotted attribute path to its definition, case-insensitively.
    ///
    /// The path may carry this document's own URI as a prefix
    /// (`urn:...:User:userName`); a foreign URI prefix does not resolve here.
    /// Extension delegation is the responsibility of the resource node that
    /// owns the extension schemas.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::UnknownAttribute`] when any path segment has no
    /// match; this is a caller-facing error and is never swallowed.
    pub fn resolve_attribute(&self, path: &str) -> ScimResult<&AttributeDefinition> {
        let local = self.strip_own_prefix(path);
        if local.is_empty() || local.contains(':') {
            return Err(ScimError::unknown_attribute(path, &self.id));
        }

        let mut segments = local.split('.');
        let first = segments
            .next()
            .ok_or_else(|| ScimError::unknown_attribute(path, &self.id))?;
        let mut current = self
            .find_attribute(first)
            .ok_or_else(|| ScimError::unknown_attribute(path, &self.id))?;
        for segment in segments {
            current = current
                .find_sub_attribute(segment)
                .ok_or_else(|| ScimError::unknown_attribute(path, &self.id))?;
        }
        Ok(current)
    }

    /// Look up a top-level attribute by name, case-insensitively.
    pub fn find_attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes
            .iter()
            .find(|attr| attr.name.eq_ignore_ascii_case(name))
    }

    /// Strip this document's own URI prefix (`<id>:`) if present.
    fn strip_own_prefix<'a>(&self, path: &'a str) -> &'a str {
        let prefix_len = self.id.len();
        match path.get(..prefix_len) {
            Some(prefix) if prefix.eq_ignore_ascii_case(&self.id) => {
                match path.get(prefix_len..prefix_len + 1) {
                    Some(":") => &path[prefix_len + 1..],
                    _ => path,
                }
            }
            _ => path,
        }
    }
}

/// Sibling attribute names must be unique, case-insensitively.
fn check_unique_names(attributes: &[AttributeDefinition], schema_id: &str) -> SchemaResult<()> {
    for (index, attr) in attributes.iter().enumerate() {
        let duplicate = attributes[..index]
            .iter()
            .any(|other| other.name.eq_ignore_ascii_case(&attr.name));
        if duplicate {
            return Err(SchemaError::DuplicateAttributeName {
                schema_id: schema_id.to_string(),
                attribute: attr.name.clone(),
            });
        }
    }
    Ok(())
}
