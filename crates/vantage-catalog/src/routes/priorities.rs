use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use vantage_core::{DuplicateFieldFailure, FieldRule, FieldValidationFailure, ResourceFailure, check_fields};

use crate::reject::Rejection;
use crate::routes::created;
use crate::state::CatalogState;

use crate::model::Priority;

const RESOURCE: &str = "Priority";

const NAME: FieldRule = FieldRule::new("name").bounds(3, 70);
const DESCRIPTION: FieldRule = FieldRule::new("description").bounds(3, 70);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug)]
struct ValidPriority {
    name: String,
    description: String,
}

impl PriorityRequest {
    fn validate(self) -> Result<ValidPriority, FieldValidationFailure> {
        check_fields([
            (&NAME, self.name.as_deref()),
            (&DESCRIPTION, self.description.as_deref()),
        ])?;
        Ok(ValidPriority {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        })
    }
}

fn check_duplicate_name(
    state: &CatalogState,
    name: &str,
    exclude_id: Option<i64>,
) -> Result<(), DuplicateFieldFailure> {
    let taken = state
        .priorities()
        .any(|p| p.name == name && Some(p.id_priority) != exclude_id);
    if taken {
        return Err(DuplicateFieldFailure::new("name", name));
    }
    Ok(())
}

async fn find_all(State(state): State<CatalogState>) -> Json<Vec<Priority>> {
    Json(state.priorities().list())
}

async fn find_by_id(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<Priority>, Rejection> {
    let priority = state
        .priorities()
        .get(id)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, id))?;
    Ok(Json(priority))
}

async fn create(
    State(state): State<CatalogState>,
    Json(request): Json<PriorityRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let valid = request.validate()?;
    check_duplicate_name(&state, &valid.name, None)?;

    let priority = state.priorities().insert_with(|id| Priority {
        id_priority: id,
        name: valid.name,
        description: valid.description,
    });
    tracing::debug!(id = priority.id_priority, "priority created");
    Ok(created(format!("/priorities/{}", priority.id_priority), priority))
}

async fn update(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    Json(request): Json<PriorityRequest>,
) -> Result<Json<Priority>, Rejection> {
    let valid = request.validate()?;
    check_duplicate_name(&state, &valid.name, Some(id))?;

    let updated = state
        .priorities()
        .update(id, |priority| {
            priority.name = valid.name;
            priority.description = valid.description;
        })
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "update"))?;
    Ok(Json(updated))
}

async fn delete(State(state): State<CatalogState>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    state
        .priorities()
        .remove(id)
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "delete"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<CatalogState> {
    Router::new()
        .route("/priorities", routing::get(find_all).post(create))
        .route(
            "/priorities/{id}",
            routing::get(find_by_id).put(update).delete(delete),
        )
}
