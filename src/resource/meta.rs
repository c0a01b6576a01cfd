//! Meta value object for SCIM resource metadata.
//!
//! Meta carries the system-managed metadata every SCIM resource exposes:
//! resource type, creation and modification timestamps, location URI and an
//! opaque version token. Timestamps are serialized in RFC 3339 format.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// SCIM meta attribute as defined in RFC 7643.
///
/// Meta is assigned by the server, never by clients; [`ResourceNode::set_meta`]
/// enforces that it is written at most once per resource instance.
///
/// [`ResourceNode::set_meta`]: crate::resource::ResourceNode::set_meta
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// The resource type this metadata belongs to (e.g. "User")
    pub resource_type: String,
    /// Resource creation timestamp
    pub created: DateTime<Utc>,
    /// Resource last modification timestamp
    pub last_modified: DateTime<Utc>,
    /// Location URI of the resource
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Opaque version token (ETag format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Meta {
    /// Create a new Meta with full attributes.
    pub fn new(
        resource_type: impl Into<String>,
        created: DateTime<Utc>,
        last_modified: DateTime<Utc>,
        location: Option<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            created,
            last_modified,
            location,
            version,
        }
    }

    /// Create metadata for a freshly created resource.
    ///
    /// Both timestamps are set to the current instant; location and version
    /// can be attached afterwards once the resource id is known.
    pub fn new_for_creation(resource_type: impl Into<String>) -> Self {
        let now = Utc::now();
        Self::new(resource_type, now, now, None, None)
    }

    /// Attach a location URI.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Attach a version token.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Return a copy with `lastModified` advanced to the current instant.
    pub fn with_updated_timestamp(&self) -> Self {
        let mut updated = self.clone();
        updated.last_modified = Utc::now();
        updated
    }

    /// Build the canonical location URI for a resource.
    pub fn generate_location(base_url: &str, resource_type: &str, id: &str) -> String {
        format!("{}/{}s/{}", base_url.trim_end_matches('/'), resource_type, id)
    }

    /// Derive a weak ETag version token from resource content.
    ///
    /// Hashes the content and keeps the first 8 bytes for short tokens.
    pub fn generate_version(content: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(content);
        let hash = hasher.finalize();
        format!("W/\"{}\"", BASE64.encode(&hash[..8]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_names() {
        let meta = Meta::new_for_creation("User")
            .with_location("https://example.com/Users/123")
            .with_version("W/\"1\"");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["resourceType"], "User");
        assert!(json["created"].is_string());
        assert!(json["lastModified"].is_string());
        assert_eq!(json["location"], "https://example.com/Users/123");
        assert_eq!(json["version"], "W/\"1\"");
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let meta = Meta::new_for_creation("Group");
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("location").is_none());
        assert!(json.get("version").is_none());
    }

    #[test]
    fn test_generate_location() {
        let location = Meta::generate_location("https://example.com/", "User", "2819c223");
        assert_eq!(location, "https://example.com/Users/2819c223");
    }

    #[test]
    fn test_generate_version_is_deterministic() {
        let a = Meta::generate_version(br#"{"id":"123"}"#);
        let b = Meta::generate_version(br#"{"id":"123"}"#);
        let c = Meta::generate_version(br#"{"id":"456"}"#);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.starts_with("W/\""));
    }

    #[test]
    fn test_updated_timestamp_advances_last_modified_only() {
        let meta = Meta::new_for_creation("User");
        let updated = meta.with_updated_timestamp();
        assert_eq!(updated.created, meta.created);
        assert!(updated.last_modified >= meta.last_modified);
        assert_eq!(updated.resource_type, meta.resource_type);
    }

    #[test]
    fn test_round_trips_through_json() {
        let meta = Meta::new_for_creation("User").with_version("W/\"9\"");
        let json = serde_json::to_value(&meta).unwrap();
        let back: Meta = serde_json::from_value(json).unwrap();
        assert_eq!(meta, back);
    }
}
