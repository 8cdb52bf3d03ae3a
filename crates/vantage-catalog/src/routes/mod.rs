//! One router per catalog resource, merged into the catalog router.

pub mod account_types;
pub mod accounts;
pub mod activations;
pub mod clients;
pub mod currencies;
pub mod document_types;
pub mod priorities;

use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::CatalogState;

/// All catalog resource routes with their shared state applied
pub fn catalog_router(state: CatalogState) -> Router {
    Router::new()
        .merge(clients::router())
        .merge(document_types::router())
        .merge(account_types::router())
        .merge(currencies::router())
        .merge(priorities::router())
        .merge(accounts::router())
        .merge(activations::router())
        .with_state(state)
}

/// 201 response with a Location header pointing at the new row
pub(crate) fn created<T: Serialize>(location: String, body: T) -> impl IntoResponse {
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(body))
}
