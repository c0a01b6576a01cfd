//! Generic, schema-aware SCIM resource representation.
//!
//! A [`ResourceNode`] wraps one resource document as a JSON value tree and
//! addresses attributes through the [`AttributeDefinition`]s of its schema
//! documents. The node itself is schema-agnostic: the definition passed to
//! `get`/`set`/`remove` carries the full dotted path and the owning schema
//! URI, which also selects the extension namespace to operate in.
//!
//! SCIM forbids nesting complex attributes, so an attribute path is at most
//! two segments deep (`emails.type`); the navigation code relies on that.

use crate::error::{ScimError, ScimResult};
use crate::resource::meta::Meta;
use crate::schema::{AttributeDefinition, Schema};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Arc;

/// One SCIM resource instance backed by a JSON object.
///
/// The node owns its value tree exclusively and references its schema
/// documents through shared, immutable [`Arc`]s. It is intended for exactly
/// one owning thread per request/response cycle; nothing here synchronizes
/// concurrent mutation.
#[derive(Debug, Clone)]
pub struct ResourceNode {
    schema: Arc<Schema>,
    extensions: HashMap<String, Arc<Schema>>,
    data: Map<String, Value>,
    meta_written: bool,
}

impl ResourceNode {
    /// Create an empty resource bound to a main schema.
    ///
    /// The `schemas` attribute of the document is initialized with the main
    /// schema URI.
    pub fn new(schema: Arc<Schema>) -> Self {
        let mut data = Map::new();
        data.insert(
            "schemas".to_string(),
            Value::Array(vec![Value::String(schema.id.clone())]),
        );
        Self {
            schema,
            extensions: HashMap::new(),
            data,
            meta_written: false,
        }
    }

    /// Wrap a parsed resource document.
    ///
    /// A document that already carries `meta` counts as having meta set:
    /// a later [`set_meta`](Self::set_meta) on it fails.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::BadRequest`] when the document is not a JSON
    /// object.
    pub fn from_json(schema: Arc<Schema>, document: Value) -> ScimResult<Self> {
        let Value::Object(data) = document else {
            return Err(ScimError::bad_request("resource document must be a JSON object"));
        };
        let meta_written = data.contains_key("meta");
        Ok(Self {
            schema,
            extensions: HashMap::new(),
            data,
            meta_written,
        })
    }

    /// Attach an extension schema, addressed by its URI.
    pub fn with_extension(mut self, schema: Arc<Schema>) -> Self {
        self.extensions
            .insert(schema.id.to_ascii_lowercase(), schema);
        self
    }

    /// The main schema document of this resource.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Look up an attached extension schema by URI, case-insensitively.
    pub fn extension_schema(&self, uri: &str) -> Option<&Schema> {
        self.extensions
            .get(&uri.to_ascii_lowercase())
            .map(Arc::as_ref)
    }

    /// Resolve a dotted, optionally extension-qualified attribute path.
    ///
    /// Paths are `[extensionUri:]segment(.segment)*`; since extension URIs
    /// are URNs and contain colons themselves, the attribute path starts
    /// after the last colon. Resolution within a document is delegated to
    /// the matching [`Schema`].
    pub fn resolve_attribute(&self, path: &str) -> ScimResult<&AttributeDefinition> {
        let Some(colon) = path.rfind(':') else {
            return self.schema.resolve_attribute(path);
        };
        let (uri, rest) = path.split_at(colon);
        let rest = &rest[1..];
        if uri.eq_ignore_ascii_case(&self.schema.id) {
            return self.schema.resolve_attribute(rest);
        }
        match self.extensions.get(&uri.to_ascii_lowercase()) {
            Some(extension) => extension.resolve_attribute(rest),
            None => Err(ScimError::unknown_attribute(path, uri)),
        }
    }

    /// Read the value addressed by an attribute definition.
    ///
    /// Extension attributes are looked up under their extension's URI key.
    /// Reading a sub-attribute of a multi-valued complex attribute gathers
    /// the sub-value from every array entry that carries it.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::Internal`] when the document shape contradicts
    /// the definition (e.g. an array entry that is not an object).
    pub fn get(&self, attribute: &AttributeDefinition) -> ScimResult<Option<Value>> {
        let Some(scope) = self.scope(attribute)? else {
            return Ok(None);
        };
        let (name, sub_name) = split_path(attribute.path());
        let Some(parent) = scope.get(name) else {
            return Ok(None);
        };
        let Some(sub_name) = sub_name else {
            return Ok(Some(parent.clone()));
        };
        match parent {
            Value::Object(object) => Ok(object.get(sub_name).cloned()),
            Value::Array(entries) => {
                let mut values = Vec::new();
                for entry in entries {
                    let object = entry
                        .as_object()
                        .ok_or_else(|| shape_error(attribute, "array entry is not an object"))?;
                    if let Some(value) = object.get(sub_name) {
                        values.push(value.clone());
                    }
                }
                if values.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(Value::Array(values)))
                }
            }
            _ => Err(shape_error(attribute, "parent is neither object nor array")),
        }
    }

    /// Write the value addressed by an attribute definition.
    ///
    /// Intermediate containers are created as needed. Setting a
    /// sub-attribute of a multi-valued complex attribute writes the value
    /// into **every** existing entry of the array; with no array present it
    /// is a no-op, since there are no entries to write into.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::Internal`] when the value shape contradicts the
    /// definition (array for a single-valued attribute and vice versa, or a
    /// scalar standing where a container is addressed).
    pub fn set(&mut self, attribute: &AttributeDefinition, value: Value) -> ScimResult<()> {
        let (name, sub_name) = split_path(attribute.path());

        let Some(sub_name) = sub_name else {
            if attribute.multi_valued && !value.is_array() {
                return Err(shape_error(attribute, "multi-valued attribute takes an array"));
            }
            if !attribute.multi_valued && value.is_array() {
                return Err(shape_error(attribute, "single-valued attribute takes no array"));
            }
            let scope = self.scope_mut(attribute, true)?;
            scope.insert(name.to_string(), value);
            return Ok(());
        };

        if attribute.parent_multi_valued() {
            // Fan-out: apply to every existing entry, never create the array.
            if !self.has_scope(attribute) {
                return Ok(());
            }
            let scope = self.scope_mut(attribute, false)?;
            match scope.get_mut(name) {
                None => Ok(()),
                Some(Value::Array(entries)) => {
                    log::trace!(
                        "fanning out '{}' across {} entries",
                        attribute.path(),
                        entries.len()
                    );
                    for entry in entries {
                        let object = entry.as_object_mut().ok_or_else(|| {
                            shape_error(attribute, "array entry is not an object")
                        })?;
                        object.insert(sub_name.to_string(), value.clone());
                    }
                    Ok(())
                }
                Some(_) => Err(shape_error(attribute, "multi-valued parent is not an array")),
            }
        } else {
            let scope = self.scope_mut(attribute, true)?;
            let parent = scope
                .entry(name.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            let object = parent
                .as_object_mut()
                .ok_or_else(|| shape_error(attribute, "complex parent is not an object"))?;
            object.insert(sub_name.to_string(), value);
            Ok(())
        }
    }

    /// Delete the value addressed by an attribute definition.
    ///
    /// Three removal shapes exist:
    /// - a simple or complex attribute is removed from its parent mapping,
    /// - a multi-valued complex attribute is removed as a whole array,
    /// - a sub-attribute of a multi-valued complex attribute is removed from
    ///   every array entry while the array itself stays in place.
    ///
    /// Removing the last field of an extension leaves the extension's empty
    /// object behind; nothing collapses implicitly.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, attribute: &AttributeDefinition) -> ScimResult<bool> {
        if !self.has_scope(attribute) {
            return Ok(false);
        }
        let path = attribute.path().to_string();
        let (name, sub_name) = split_path(&path);
        let scope = self.scope_mut(attribute, false)?;

        let Some(sub_name) = sub_name else {
            return Ok(scope.remove(name).is_some());
        };
        match scope.get_mut(name) {
            None => Ok(false),
            Some(Value::Object(object)) => Ok(object.remove(sub_name).is_some()),
            Some(Value::Array(entries)) => {
                let mut removed = false;
                for entry in entries.iter_mut() {
                    let object = entry
                        .as_object_mut()
                        .ok_or_else(|| shape_error(attribute, "array entry is not an object"))?;
                    removed |= object.remove(sub_name).is_some();
                }
                if removed {
                    log::trace!("removed '{}' from {} entries", path, entries.len());
                }
                Ok(removed)
            }
            Some(_) => Err(shape_error(attribute, "parent is neither object nor array")),
        }
    }

    /// Extract a single scalar usable for sort and filter comparisons.
    ///
    /// A simple attribute is returned directly. For a sub-attribute of a
    /// multi-valued complex attribute, the entry flagged `primary: true`
    /// wins; with no primary flag, the first entry is taken. Absence, at
    /// this layer, is never an error.
    pub fn get_sorting_attribute(&self, attribute: &AttributeDefinition) -> Option<Value> {
        let scope = self.scope(attribute).ok()??;
        let (name, sub_name) = split_path(attribute.path());
        let parent = scope.get(name)?;

        let Some(sub_name) = sub_name else {
            return scalar(parent);
        };
        match parent {
            Value::Object(object) => object.get(sub_name).and_then(scalar),
            Value::Array(entries) => {
                let objects: Vec<&Map<String, Value>> =
                    entries.iter().filter_map(Value::as_object).collect();
                let chosen = objects
                    .iter()
                    .find(|object| {
                        object.get("primary").and_then(Value::as_bool) == Some(true)
                    })
                    .or_else(|| objects.first());
                chosen.and_then(|object| object.get(sub_name)).and_then(scalar)
            }
            _ => None,
        }
    }

    /// Get the unique identifier of this resource.
    pub fn get_id(&self) -> Option<&str> {
        self.data.get("id").and_then(Value::as_str)
    }

    /// Set the unique identifier of this resource.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.data.insert("id".to_string(), Value::String(id.into()));
    }

    /// Get the external identifier if present.
    pub fn get_external_id(&self) -> Option<&str> {
        self.data.get("externalId").and_then(Value::as_str)
    }

    /// Set the external identifier. The empty string is a legal value.
    pub fn set_external_id(&mut self, external_id: impl Into<String>) {
        self.data
            .insert("externalId".to_string(), Value::String(external_id.into()));
    }

    /// Get the meta attribute if present.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::Json`] when a present `meta` value does not
    /// deserialize into [`Meta`].
    pub fn get_meta(&self) -> ScimResult<Option<Meta>> {
        match self.data.get("meta") {
            None => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
        }
    }

    /// Set the meta attribute. Succeeds exactly once per instance.
    ///
    /// Meta holds server-managed timestamps and location; overwriting it is
    /// a defect in the calling code, so a second call fails with
    /// [`ScimError::Internal`] regardless of the value supplied.
    pub fn set_meta(&mut self, meta: Meta) -> ScimResult<()> {
        if self.meta_written {
            return Err(ScimError::internal(
                "meta attribute has already been set on this resource",
            ));
        }
        let value = serde_json::to_value(&meta)?;
        self.data.insert("meta".to_string(), value);
        self.meta_written = true;
        Ok(())
    }

    /// Read a required top-level string attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ScimError::BadRequest`] when the attribute is absent or not
    /// a string; the empty string is a legal present value.
    pub fn required_string(&self, attribute: &str) -> ScimResult<&str> {
        match self.data.get(attribute) {
            Some(Value::String(value)) => Ok(value),
            Some(_) => Err(ScimError::bad_request(format!(
                "attribute '{attribute}' must be a string"
            ))),
            None => Err(ScimError::bad_request(format!(
                "required attribute '{attribute}' is missing"
            ))),
        }
    }

    /// Read an optional top-level string attribute. Never fails.
    pub fn optional_string(&self, attribute: &str) -> Option<&str> {
        self.data.get(attribute).and_then(Value::as_str)
    }

    /// Read an optional top-level boolean attribute. Never fails.
    pub fn optional_bool(&self, attribute: &str) -> Option<bool> {
        self.data.get(attribute).and_then(Value::as_bool)
    }

    /// The schema URIs the underlying document declares.
    pub fn declared_schemas(&self) -> Vec<&str> {
        self.data
            .get("schemas")
            .and_then(Value::as_array)
            .map(|uris| uris.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// The resource document as JSON.
    pub fn to_json(&self) -> Value {
        Value::Object(self.data.clone())
    }

    /// Consume the node and return the resource document.
    pub fn into_json(self) -> Value {
        Value::Object(self.data)
    }

    fn is_extension_attribute(&self, attribute: &AttributeDefinition) -> bool {
        !attribute.schema_uri().is_empty()
            && !attribute.schema_uri().eq_ignore_ascii_case(&self.schema.id)
    }

    /// The document key holding an extension's attributes, matched
    /// case-insensitively against the extension URI.
    fn extension_key(&self, uri: &str) -> Option<&str> {
        if let Some((key, _)) = self.data.get_key_value(uri) {
            return Some(key.as_str());
        }
        self.data
            .keys()
            .find(|key| key.eq_ignore_ascii_case(uri))
            .map(String::as_str)
    }

    /// Whether the namespace object this attribute lives in exists.
    fn has_scope(&self, attribute: &AttributeDefinition) -> bool {
        !self.is_extension_attribute(attribute)
            || self.extension_key(attribute.schema_uri()).is_some()
    }

    /// The mapping this attribute's path starts in: the document root for
    /// main-schema attributes, the extension's nested object otherwise.
    fn scope(&self, attribute: &AttributeDefinition) -> ScimResult<Option<&Map<String, Value>>> {
        if !self.is_extension_attribute(attribute) {
            return Ok(Some(&self.data));
        }
        let Some(key) = self.extension_key(attribute.schema_uri()) else {
            return Ok(None);
        };
        match self.data.get(key) {
            Some(Value::Object(object)) => Ok(Some(object)),
            _ => Err(shape_error(attribute, "extension value is not an object")),
        }
    }

    /// Mutable counterpart of [`scope`](Self::scope); creates the extension
    /// object when `create` is set. Callers check [`has_scope`](Self::has_scope)
    /// first when they must not create.
    fn scope_mut(
        &mut self,
        attribute: &AttributeDefinition,
        create: bool,
    ) -> ScimResult<&mut Map<String, Value>> {
        if !self.is_extension_attribute(attribute) {
            return Ok(&mut self.data);
        }
        let key = match self.extension_key(attribute.schema_uri()) {
            Some(key) => key.to_string(),
            None => {
                let uri = attribute.schema_uri().to_string();
                if create {
                    self.data.insert(uri.clone(), Value::Object(Map::new()));
                }
                uri
            }
        };
        match self.data.get_mut(&key) {
            Some(Value::Object(object)) => Ok(object),
            Some(_) => Err(shape_error(attribute, "extension value is not an object")),
            None => Err(ScimError::internal(format!(
                "extension '{key}' is not present on this resource"
            ))),
        }
    }
}

/// Split a full attribute path into its attribute name and optional
/// sub-attribute name. Paths never exceed two segments.
fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((name, sub_name)) => (name, Some(sub_name)),
        None => (path, None),
    }
}

/// Scalars only; containers never act as sorting values.
fn scalar(value: &Value) -> Option<Value> {
    match value {
        Value::Array(_) | Value::Object(_) | Value::Null => None,
        other => Some(other.clone()),
    }
}

fn shape_error(attribute: &AttributeDefinition, detail: &str) -> ScimError {
    ScimError::internal(format!(
        "attribute '{}' has an unexpected value shape: {detail}",
        attribute.path()
    ))
}
