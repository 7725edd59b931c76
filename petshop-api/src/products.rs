use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::MutexGuard;

use petshop_catalog::{Catalog, Product, ProductDraft, ProductFilter, ProductPatch};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub productos: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct ProductMessageResponse {
    pub mensaje: String,
    pub producto: Product,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub mensaje: String,
}

// ============================================================================
// Routes
// ============================================================================

pub fn routes() -> Router<AppState> {
    let collection = get(list_products).post(create_product);
    let item = get(get_product)
        .put(update_product)
        .patch(patch_product)
        .delete(delete_product);

    // Both the bare and the trailing-slash collection paths are served
    Router::new()
        .route("/productos", collection.clone())
        .route("/productos/", collection)
        .route("/productos/{id}", item)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /productos/?nombre=&categoria=
pub async fn list_products(
    State(state): State<AppState>,
    Query(mut filter): Query<ProductFilter>,
) -> Result<Json<ProductListResponse>, AppError> {
    // Empty query values behave as absent filters
    if filter.name.as_deref() == Some("") {
        filter.name = None;
    }
    if filter.category.as_deref() == Some("") {
        filter.category = None;
    }

    let catalog = lock_catalog(&state)?;
    let productos = catalog.list(&filter);

    Ok(Json(ProductListResponse { productos }))
}

/// GET /productos/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, AppError> {
    let catalog = lock_catalog(&state)?;
    let producto = catalog.get(id)?;

    Ok(Json(producto))
}

/// POST /productos/
pub async fn create_product(
    State(state): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<ProductMessageResponse>), AppError> {
    let mut catalog = lock_catalog(&state)?;
    let producto = catalog.create(draft);

    tracing::info!(id = producto.id, "product created");
    Ok((
        StatusCode::CREATED,
        Json(ProductMessageResponse {
            mensaje: "Producto creado".to_string(),
            producto,
        }),
    ))
}

/// PUT /productos/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<ProductMessageResponse>, AppError> {
    let mut catalog = lock_catalog(&state)?;
    let producto = catalog.replace(id, draft)?;

    tracing::info!(id, "product updated");
    Ok(Json(ProductMessageResponse {
        mensaje: "Producto actualizado".to_string(),
        producto,
    }))
}

/// PATCH /productos/{id}
pub async fn patch_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductMessageResponse>, AppError> {
    let mut catalog = lock_catalog(&state)?;
    let producto = catalog.apply_patch(id, patch)?;

    tracing::info!(id, "product patched");
    Ok(Json(ProductMessageResponse {
        mensaje: "Producto actualizado parcialmente".to_string(),
        producto,
    }))
}

/// DELETE /productos/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<MessageResponse>, AppError> {
    let mut catalog = lock_catalog(&state)?;
    catalog.remove(id)?;

    tracing::info!(id, "product deleted");
    Ok(Json(MessageResponse {
        mensaje: "Producto eliminado".to_string(),
    }))
}

fn lock_catalog(state: &AppState) -> Result<MutexGuard<'_, Catalog>, AppError> {
    state
        .catalog
        .lock()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("catalog lock poisoned")))
}
