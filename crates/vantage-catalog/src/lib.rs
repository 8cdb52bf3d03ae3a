//! Catalog resources served over HTTP: entities, DTOs, the in-memory
//! store, and one axum router per resource.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod model;
pub mod reject;
pub mod routes;
pub mod state;
pub mod store;

pub use reject::Rejection;
pub use routes::catalog_router;
pub use state::CatalogState;
