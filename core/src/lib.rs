//! Synchronous client core for the items service.
//!
//! # Overview
//! Builds `HttpRequest` values, parses `HttpResponse` values, and keeps the
//! in-memory item collection, all without touching the network
//! (host-does-IO pattern). The caller executes the actual HTTP round trip,
//! making the core fully deterministic and testable.
//!
//! # Design
//! - `ItemClient` is stateless — it holds only a validated `base_url`. Each
//!   CRUD operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `ItemStore` owns the collection and is the only place state changes:
//!   fetch replaces wholesale, update swaps in place, delete removes on a
//!   confirmed `success`, create never mutates. A monotonic fetch sequence
//!   keeps stale responses from overwriting newer state.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod types;

pub use client::ItemClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{FetchSeq, ItemStore, StoreEvent};
pub use types::{DeleteResponse, Item, UpdateItem};
