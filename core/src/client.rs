//! Stateless HTTP request builder and response parser for the items API.
//!
//! # Design
//! `ItemClient` holds only a validated `base_url` and carries no mutable
//! state between calls. Each CRUD operation is split into a `build_*` method
//! that produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual round trip, keeping the
//! core deterministic and free of I/O dependencies.
//!
//! URL validation happens in `new` (base URL scheme) and in the `build_*`
//! methods that splice an id into the path; both fail synchronously, before
//! any request could be issued.

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{DeleteResponse, Item, UpdateItem};

/// Path segment of the remote collection resource.
const COLLECTION_PATH: &str = "User_func1";

/// Synchronous, stateless client for the items API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. The caller is responsible for executing the HTTP
/// round trip between `build_*` and `parse_*`.
#[derive(Debug, Clone)]
pub struct ItemClient {
    base_url: String,
}

impl ItemClient {
    /// Construct a client for the collection resource rooted at `base_url`.
    ///
    /// A base URL without an `http://` or `https://` scheme cannot address
    /// the resource and is rejected here, before any operation runs.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ApiError::InvalidUrl(format!(
                "base URL must start with http:// or https://, got {base_url:?}"
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn build_fetch_all(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{COLLECTION_PATH}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create(&self, item: &Item) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(item).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/{COLLECTION_PATH}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_update(&self, id: &str, name: &str) -> Result<HttpRequest, ApiError> {
        let id = validate_id(id)?;
        let payload = UpdateItem {
            id: id.to_string(),
            name: name.to_string(),
        };
        let body = serde_json::to_string(&payload)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/{COLLECTION_PATH}/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete(&self, id: &str) -> Result<HttpRequest, ApiError> {
        let id = validate_id(id)?;
        Ok(HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{COLLECTION_PATH}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        })
    }

    pub fn parse_fetch_all(&self, response: HttpResponse) -> Result<Vec<Item>, ApiError> {
        parse_json_body(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_json_body(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Item, ApiError> {
        parse_json_body(response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<DeleteResponse, ApiError> {
        parse_json_body(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Reject ids that would change the shape of the resource path.
fn validate_id(id: &str) -> Result<&str, ApiError> {
    if id.is_empty() {
        return Err(ApiError::InvalidUrl("item id is empty".to_string()));
    }
    if id.contains(['/', '?', '#']) || id.contains(char::is_whitespace) {
        return Err(ApiError::InvalidUrl(format!(
            "item id {id:?} cannot form a resource path"
        )));
    }
    Ok(id)
}

/// Check the status, require a body, and deserialize it.
///
/// Every endpoint answers 200 on success; 404 gets its own variant because
/// callers distinguish "the item does not exist" from "the server returned
/// an unexpected status."
fn parse_json_body<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if response.status != 200 {
        if response.status == 404 {
            return Err(ApiError::NotFound);
        }
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    if response.body.is_empty() {
        return Err(ApiError::MissingBody);
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}
