use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use vantage_core::{
    DuplicateFieldFailure, FieldConstraintKind, FieldRule, FieldValidationFailure, ResourceFailure,
    check_fields,
};

use crate::model::Client;
use crate::reject::Rejection;
use crate::routes::created;
use crate::state::CatalogState;

const RESOURCE: &str = "Client";

const FIRST_NAME: FieldRule = FieldRule::new("firstName").bounds(2, 50);
const LAST_NAME: FieldRule = FieldRule::new("lastName").bounds(2, 50);
const DOCUMENT_NUMBER: FieldRule = FieldRule::new("documentNumber").bounds(3, 20);
const EMAIL: FieldRule = FieldRule::new("email")
    .bounds(0, 100)
    .custom(email_shape_ok, "Email must be valid");
const PHONE: FieldRule = FieldRule::new("phone")
    .bounds(7, 20)
    .custom(phone_chars_ok, "Phone must contain only valid characters");

fn email_shape_ok(value: &str) -> bool {
    value.contains('@')
}

// Optional leading '+', then digits, spaces, hyphens and parentheses
fn phone_chars_ok(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')'))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub id_document_type: Option<i64>,
    pub document_number: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug)]
struct ValidClient {
    first_name: String,
    last_name: String,
    id_document_type: i64,
    document_number: String,
    email: String,
    phone: String,
}

impl ClientRequest {
    fn validate(self) -> Result<ValidClient, FieldValidationFailure> {
        check_fields([
            (&FIRST_NAME, self.first_name.as_deref()),
            (&LAST_NAME, self.last_name.as_deref()),
        ])?;
        let id_document_type = self.id_document_type.ok_or_else(|| FieldValidationFailure {
            field_name: "idDocumentType".to_owned(),
            invalid_value: String::new(),
            kind: FieldConstraintKind::Required,
        })?;
        check_fields([
            (&DOCUMENT_NUMBER, self.document_number.as_deref()),
            (&EMAIL, self.email.as_deref()),
            (&PHONE, self.phone.as_deref()),
        ])?;
        Ok(ValidClient {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            id_document_type,
            document_number: self.document_number.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
        })
    }
}

fn check_duplicates(
    state: &CatalogState,
    valid: &ValidClient,
    exclude_id: Option<i64>,
) -> Result<(), DuplicateFieldFailure> {
    let email_taken = state
        .clients()
        .any(|c| c.email == valid.email && Some(c.id_client) != exclude_id);
    if email_taken {
        return Err(DuplicateFieldFailure::new("email", &valid.email));
    }
    let number_taken = state
        .clients()
        .any(|c| c.document_number == valid.document_number && Some(c.id_client) != exclude_id);
    if number_taken {
        return Err(DuplicateFieldFailure::new("documentNumber", &valid.document_number));
    }
    Ok(())
}

fn check_document_type_exists(state: &CatalogState, id: i64) -> Result<(), ResourceFailure> {
    if state.document_types().get(id).is_none() {
        return Err(ResourceFailure::not_found_by_id("DocumentType", id));
    }
    Ok(())
}

async fn find_all(State(state): State<CatalogState>) -> Json<Vec<Client>> {
    Json(state.clients().list())
}

async fn find_by_id(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<Client>, Rejection> {
    let client = state
        .clients()
        .get(id)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, id))?;
    Ok(Json(client))
}

async fn create(
    State(state): State<CatalogState>,
    Json(request): Json<ClientRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let valid = request.validate()?;
    check_duplicates(&state, &valid, None)?;
    check_document_type_exists(&state, valid.id_document_type)?;

    let client = state.clients().insert_with(|id| Client {
        id_client: id,
        first_name: valid.first_name,
        last_name: valid.last_name,
        id_document_type: valid.id_document_type,
        document_number: valid.document_number,
        email: valid.email,
        phone: valid.phone,
    });
    tracing::debug!(id = client.id_client, "client created");
    Ok(created(format!("/clients/{}", client.id_client), client))
}

async fn update(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    Json(request): Json<ClientRequest>,
) -> Result<Json<Client>, Rejection> {
    let valid = request.validate()?;
    check_duplicates(&state, &valid, Some(id))?;
    check_document_type_exists(&state, valid.id_document_type)?;

    let updated = state
        .clients()
        .update(id, |client| {
            client.first_name = valid.first_name;
            client.last_name = valid.last_name;
            client.id_document_type = valid.id_document_type;
            client.document_number = valid.document_number;
            client.email = valid.email;
            client.phone = valid.phone;
        })
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "update"))?;
    Ok(Json(updated))
}

async fn delete(State(state): State<CatalogState>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    state
        .clients()
        .remove(id)
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "delete"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<CatalogState> {
    Router::new()
        .route("/clients", routing::get(find_all).post(create))
        .route(
            "/clients/{id}",
            routing::get(find_by_id).put(update).delete(delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Subtype;

    fn request() -> ClientRequest {
        ClientRequest {
            first_name: Some("Ada".to_owned()),
            last_name: Some("Lovelace".to_owned()),
            id_document_type: Some(1),
            document_number: Some("12345678".to_owned()),
            email: Some("ada@example.com".to_owned()),
            phone: Some("+57 300-123-4567".to_owned()),
        }
    }

    #[test]
    fn well_formed_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn email_without_at_sign_degrades_to_generic_validation() {
        let mut r = request();
        r.email = Some("not-an-email".to_owned());
        let failure = r.validate().unwrap_err();
        assert_eq!(failure.subtype(), Subtype::GenericValidation);
        assert_eq!(failure.message(), "Email must be valid");
    }

    #[test]
    fn phone_rejects_letters_but_allows_separators() {
        let mut r = request();
        r.phone = Some("30012345a".to_owned());
        let failure = r.validate().unwrap_err();
        assert_eq!(failure.message(), "Phone must contain only valid characters");

        let mut r = request();
        r.phone = Some("(300) 123-4567".to_owned());
        assert!(r.validate().is_ok());
    }

    #[test]
    fn missing_document_type_reference_is_required() {
        let mut r = request();
        r.id_document_type = None;
        let failure = r.validate().unwrap_err();
        assert_eq!(failure.field_name, "idDocumentType");
        assert_eq!(failure.subtype(), Subtype::FieldRequired);
    }
}
