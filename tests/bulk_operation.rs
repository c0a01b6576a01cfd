//! Integration tests for the bulk operation envelope: builder round-trips,
//! the wire shape, and lazy validation of the required fields.

mod common;

use scim_resource::{BulkOperation, HttpMethod, ScimError};
use serde_json::json;
use uuid::Uuid;

#[test]
fn builder_get_and_set_values() {
    let bulk_id = Uuid::new_v4().to_string();
    let data = serde_json::to_string(&common::user_document()).unwrap();

    let operation = BulkOperation::builder()
        .method(HttpMethod::Post)
        .bulk_id(bulk_id.clone())
        .path("/Users")
        .data(data.clone())
        .build();

    assert_eq!(operation.method().unwrap(), HttpMethod::Post);
    assert_eq!(operation.bulk_id(), Some(bulk_id.as_str()));
    assert_eq!(operation.path().unwrap(), "/Users");
    assert_eq!(operation.data(), Some(data.as_str()));
    assert_eq!(operation.version(), None);
}

#[test]
fn serializes_to_the_wire_shape() {
    let operation = BulkOperation::builder()
        .method(HttpMethod::Put)
        .bulk_id("qwerty")
        .path("/Users/2819c223")
        .data(r#"{"userName":"jdoe"}"#)
        .version("W/\"3694e05e9dff590\"")
        .build();

    let wire = serde_json::to_value(&operation).unwrap();
    assert_eq!(
        wire,
        json!({
            "method": "PUT",
            "bulkId": "qwerty",
            "path": "/Users/2819c223",
            "data": "{\"userName\":\"jdoe\"}",
            "version": "W/\"3694e05e9dff590\""
        })
    );
}

#[test]
fn deserializes_from_the_wire_shape() {
    let operation: BulkOperation = serde_json::from_value(json!({
        "method": "DELETE",
        "path": "/Users/2819c223",
        "version": "W/\"1\""
    }))
    .unwrap();

    assert_eq!(operation.method().unwrap(), HttpMethod::Delete);
    assert_eq!(operation.path().unwrap(), "/Users/2819c223");
    assert_eq!(operation.version(), Some("W/\"1\""));
    assert_eq!(operation.bulk_id(), None);
    assert_eq!(operation.data(), None);
}

#[test]
fn required_accessors_fail_when_unset() {
    let operation = BulkOperation::default();

    let error = operation.method().unwrap_err();
    assert!(matches!(error, ScimError::BadRequest { .. }));

    let error = operation.path().unwrap_err();
    assert!(matches!(error, ScimError::BadRequest { .. }));
}

#[test]
fn optional_accessors_never_fail() {
    let operation = BulkOperation::builder()
        .method(HttpMethod::Post)
        .path("/Users")
        .build();

    assert_eq!(operation.bulk_id(), None);
    assert_eq!(operation.data(), None);
    assert_eq!(operation.version(), None);
    assert_eq!(operation.method().unwrap(), HttpMethod::Post);
    assert_eq!(operation.path().unwrap(), "/Users");
}

#[test]
fn empty_path_is_present_not_absent() {
    let operation = BulkOperation::builder().path("").build();
    assert_eq!(operation.path().unwrap(), "");
}

#[test]
fn partial_envelope_survives_a_serde_round_trip() {
    let operation = BulkOperation::builder().bulk_id("qwerty").build();
    let wire = serde_json::to_value(&operation).unwrap();
    let back: BulkOperation = serde_json::from_value(wire).unwrap();
    assert_eq!(operation, back);
    assert!(back.method().is_err());
}
