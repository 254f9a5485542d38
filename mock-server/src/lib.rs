//! In-memory implementation of the remote items collection resource.
//!
//! The collection lives in an ordered `Vec` so list responses preserve
//! insertion order. Delete answers 200 with a `{success: bool}` body in
//! both outcomes; only an applied removal carries `success: true`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Deserialize)]
pub struct UpdateItem {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

pub type Db = Arc<RwLock<Vec<Item>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/User_func1", get(list_items).post(create_item))
        .route(
            "/User_func1/{id}",
            axum::routing::put(update_item).delete(delete_item),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_items(State(db): State<Db>) -> Json<Vec<Item>> {
    let items = db.read().await;
    Json(items.clone())
}

/// Create an item. The client may supply the id; when it does not, the
/// server assigns a fresh one. A duplicate id is a conflict.
async fn create_item(
    State(db): State<Db>,
    Json(input): Json<Item>,
) -> Result<Json<Item>, StatusCode> {
    let mut items = db.write().await;
    let id = input.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    if items.iter().any(|item| item.id.as_deref() == Some(&id)) {
        return Err(StatusCode::CONFLICT);
    }
    let item = Item {
        id: Some(id),
        name: input.name,
    };
    items.push(item.clone());
    Ok(Json(item))
}

/// Rename the item addressed by the path. The body repeats the id; a body
/// id that disagrees with the path is rejected.
async fn update_item(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, StatusCode> {
    if input.id != id {
        return Err(StatusCode::BAD_REQUEST);
    }
    let mut items = db.write().await;
    let item = items
        .iter_mut()
        .find(|item| item.id.as_deref() == Some(&id))
        .ok_or(StatusCode::NOT_FOUND)?;
    item.name = input.name;
    Ok(Json(item.clone()))
}

async fn delete_item(State(db): State<Db>, Path(id): Path<String>) -> Json<DeleteResponse> {
    let mut items = db.write().await;
    let before = items.len();
    items.retain(|item| item.id.as_deref() != Some(&id));
    Json(DeleteResponse {
        success: items.len() < before,
    })
}
