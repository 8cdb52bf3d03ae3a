use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use vantage_core::{
    DuplicateFieldFailure, FieldConstraintKind, FieldRule, FieldValidationFailure, ResourceFailure,
    check_fields,
};

use crate::model::DocumentType;
use crate::reject::Rejection;
use crate::routes::created;
use crate::state::CatalogState;

const RESOURCE: &str = "DocumentType";

const CODE: FieldRule = FieldRule::new("code").bounds(2, 20);
const DESCRIPTION: FieldRule = FieldRule::new("description").bounds(3, 100);
const VALIDATION_PATTERN: FieldRule = FieldRule::new("validationPattern").optional().bounds(0, 100);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTypeRequest {
    pub code: Option<String>,
    pub description: Option<String>,
    pub validation_pattern: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub active: Option<bool>,
}

#[derive(Debug)]
struct ValidDocumentType {
    code: String,
    description: String,
    validation_pattern: Option<String>,
    min_length: Option<u32>,
    max_length: Option<u32>,
    active: bool,
}

impl DocumentTypeRequest {
    fn validate(self) -> Result<ValidDocumentType, FieldValidationFailure> {
        check_fields([
            (&CODE, self.code.as_deref()),
            (&DESCRIPTION, self.description.as_deref()),
            (&VALIDATION_PATTERN, self.validation_pattern.as_deref()),
        ])?;
        let active = self.active.ok_or_else(|| FieldValidationFailure {
            field_name: "active".to_owned(),
            invalid_value: String::new(),
            kind: FieldConstraintKind::Required,
        })?;
        Ok(ValidDocumentType {
            code: self.code.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            validation_pattern: self.validation_pattern,
            min_length: self.min_length,
            max_length: self.max_length,
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
        .document_types()
        .any(|d| d.code == code && Some(d.id_document_type) != exclude_id);
    if taken {
        return Err(DuplicateFieldFailure::new("code", code));
    }
    Ok(())
}

async fn find_all(State(state): State<CatalogState>) -> Json<Vec<DocumentType>> {
    Json(state.document_types().list())
}

async fn find_by_id(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<DocumentType>, Rejection> {
    let document_type = state
        .document_types()
        .get(id)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, id))?;
    Ok(Json(document_type))
}

async fn create(
    State(state): State<CatalogState>,
    Json(request): Json<DocumentTypeRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let valid = request.validate()?;
    check_duplicate_code(&state, &valid.code, None)?;

    let document_type = state.document_types().insert_with(|id| DocumentType {
        id_document_type: id,
        code: valid.code,
        description: valid.description,
        validation_pattern: valid.validation_pattern,
        min_length: valid.min_length,
        max_length: valid.max_length,
        active: valid.active,
    });
    tracing::debug!(id = document_type.id_document_type, "document type created");
    Ok(created(
        format!("/document-types/{}", document_type.id_document_type),
        document_type,
    ))
}

async fn update(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    Json(request): Json<DocumentTypeRequest>,
) -> Result<Json<DocumentType>, Rejection> {
    let valid = request.validate()?;
    check_duplicate_code(&state, &valid.code, Some(id))?;

    let updated = state
        .document_types()
        .update(id, |document_type| {
            document_type.code = valid.code;
            document_type.description = valid.description;
            document_type.validation_pattern = valid.validation_pattern;
            document_type.min_length = valid.min_length;
            document_type.max_length = valid.max_length;
            document_type.active = valid.active;
        })
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "update"))?;
    Ok(Json(updated))
}

async fn delete(State(state): State<CatalogState>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    state
        .document_types()
        .remove(id)
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "delete"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<CatalogState> {
    Router::new()
        .route("/document-types", routing::get(find_all).post(create))
        .route(
            "/document-types/{id}",
            routing::get(find_by_id).put(update).delete(delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Subtype;

    #[test]
    fn missing_active_flag_is_a_required_failure() {
        let failure = DocumentTypeRequest {
            code: Some("DNI".to_owned()),
            description: Some("National identity document".to_owned()),
            validation_pattern: None,
            min_length: None,
            max_length: None,
            active: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(failure.field_name, "active");
        assert_eq!(failure.subtype(), Subtype::FieldRequired);
    }

    #[test]
    fn optional_pattern_is_only_bounded_when_present() {
        let base = |pattern: Option<String>| DocumentTypeRequest {
            code: Some("CC".to_owned()),
            description: Some("Citizen card".to_owned()),
            validation_pattern: pattern,
            min_length: Some(6),
            max_length: Some(10),
            active: Some(true),
        };
        assert!(base(None).validate().is_ok());
        assert!(base(Some("^[0-9]+$".to_owned())).validate().is_ok());
        let failure = base(Some("x".repeat(101))).validate().unwrap_err();
        assert_eq!(failure.field_name, "validationPattern");
        assert_eq!(failure.subtype(), Subtype::LengthTooLong);
    }
}
