//! Domain DTOs for the items API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently
//! so the client is not coupled to Axum internals. Integration tests catch
//! any schema drift between the two crates. Ids are opaque strings: the
//! server accepts client-supplied ids and may assign one when the client
//! omits it, so the client never interprets their contents.

use serde::{Deserialize, Serialize};

/// A single item in the remote collection.
///
/// `id` is optional at creation time and required once persisted; after the
/// server has acknowledged an item, its id is the stable key used for update
/// and delete addressing. A `None` id is omitted from the serialized JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }
}

/// Request payload for updating an existing item. The target is addressed by
/// the URL path; the body repeats the id alongside the new name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    pub id: String,
    pub name: String,
}

/// Response payload for a delete. `success: false` means the server kept the
/// item and the caller must not remove it locally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_with_id_serializes_both_fields() {
        let item = Item::new("1", "first");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "first");
    }

    #[test]
    fn item_without_id_omits_the_field() {
        let item = Item {
            id: None,
            name: "draft".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["name"], "draft");
    }

    #[test]
    fn item_deserializes_without_id() {
        let item: Item = serde_json::from_str(r#"{"name":"anonymous"}"#).unwrap();
        assert!(item.id.is_none());
        assert_eq!(item.name, "anonymous");
    }

    #[test]
    fn item_rejects_missing_name() {
        let result: Result<Item, _> = serde_json::from_str(r#"{"id":"1"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn delete_response_roundtrips() {
        let parsed: DeleteResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.success);
        let parsed: DeleteResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!parsed.success);
    }
}
