use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use vantage_core::{
    DuplicateFieldFailure, FieldConstraintKind, FieldRule, FieldValidationFailure, ResourceFailure,
    check_fields,
};

use crate::model::AccountType;
use crate::reject::Rejection;
use crate::routes::created;
use crate::state::CatalogState;

const RESOURCE: &str = "AccountType";

const CODE: FieldRule = FieldRule::new("code").bounds(2, 20);
const DESCRIPTION: FieldRule = FieldRule::new("description").bounds(3, 100);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountTypeRequest {
    pub code: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

struct ValidAccountType {
    code: String,
    description: String,
    active: bool,
}

impl AccountTypeRequest {
    fn validate(self) -> Result<ValidAccountType, FieldValidationFailure> {
        check_fields([
            (&CODE, self.code.as_deref()),
            (&DESCRIPTION, self.description.as_deref()),
        ])?;
        let active = self.active.ok_or_else(|| FieldValidationFailure {
            field_name: "active".to_owned(),
            invalid_value: String::new(),
            kind: FieldConstraintKind::Required,
        })?;
        Ok(ValidAccountType {
            code: self.code.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            active,
        })
    }
}

fn check_duplicate_code(
    state: &CatalogState,
    code: &str,
    exclude_id: Option<i64>,
) -> Result<(), DuplicateFieldFailure> {
    let taken = state
        .account_types()
        .any(|a| a.code == code && Some(a.id_account_type) != exclude_id);
    if taken {
        return Err(DuplicateFieldFailure::new("code", code));
    }
    Ok(())
}

async fn find_all(State(state): State<CatalogState>) -> Json<Vec<AccountType>> {
    Json(state.account_types().list())
}

async fn find_by_id(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountType>, Rejection> {
    let account_type = state
        .account_types()
        .get(id)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, id))?;
    Ok(Json(account_type))
}

async fn create(
    State(state): State<CatalogState>,
    Json(request): Json<AccountTypeRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let valid = request.validate()?;
    check_duplicate_code(&state, &valid.code, None)?;

    let account_type = state.account_types().insert_with(|id| AccountType {
        id_account_type: id,
        code: valid.code,
        description: valid.description,
        active: valid.active,
    });
    tracing::debug!(id = account_type.id_account_type, "account type created");
    Ok(created(
        format!("/account-types/{}", account_type.id_account_type),
        account_type,
    ))
}

async fn update(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    Json(request): Json<AccountTypeRequest>,
) -> Result<Json<AccountType>, Rejection> {
    let valid = request.validate()?;
    check_duplicate_code(&state, &valid.code, Some(id))?;

    let updated = state
        .account_types()
        .update(id, |account_type| {
            account_type.code = valid.code;
            account_type.description = valid.description;
            account_type.active = valid.active;
        })
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "update"))?;
    Ok(Json(updated))
}

async fn delete(State(state): State<CatalogState>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    state
        .account_types()
        .remove(id)
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "delete"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<CatalogState> {
    Router::new()
        .route("/account-types", routing::get(find_all).post(create))
        .route(
            "/account-types/{id}",
            routing::get(find_by_id).put(update).delete(delete),
        )
}
