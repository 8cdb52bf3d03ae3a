use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use jiff::Timestamp;
use serde::Deserialize;
use vantage_accounts::{
    ALREADY_ACTIVE_REASON, AccountStatus, ActivationStatus, match_owner,
};
use vantage_core::{
    FieldConstraintKind, FieldRule, FieldValidationFailure, ResourceFailure, check_fields,
};

use crate::model::AccountActivation;
use crate::reject::Rejection;
use crate::routes::created;
use crate::state::CatalogState;

const RESOURCE: &str = "AccountActivation";

const DOCUMENT_NUMBER: FieldRule = FieldRule::new("documentNumberProvided").bounds(3, 20);
const ACCOUNT_NUMBER: FieldRule = FieldRule::new("accountNumberProvided").bounds(10, 20);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRequest {
    pub id_document_type_provided: Option<i64>,
    pub document_number_provided: Option<String>,
    pub account_number_provided: Option<String>,
}

pub(crate) struct ValidActivation {
    pub id_document_type_provided: i64,
    pub document_number_provided: String,
    pub account_number_provided: String,
}

impl ActivationRequest {
    fn validate(self) -> Result<ValidActivation, FieldValidationFailure> {
        let id_document_type_provided =
            self.id_document_type_provided
                .ok_or_else(|| FieldValidationFailure {
                    field_name: "idDocumentTypeProvided".to_owned(),
                    invalid_value: String::new(),
                    kind: FieldConstraintKind::Required,
                })?;
        check_fields([
            (&DOCUMENT_NUMBER, self.document_number_provided.as_deref()),
            (&ACCOUNT_NUMBER, self.account_number_provided.as_deref()),
        ])?;
        Ok(ValidActivation {
            id_document_type_provided,
            document_number_provided: self.document_number_provided.unwrap_or_default(),
            account_number_provided: self.account_number_provided.unwrap_or_default(),
        })
    }
}

/// Run one activation attempt and record it.
///
/// The owner identity is compared against the claim; the account's
/// status flip and the audit insert happen under the account's entry
/// lock, so two concurrent attempts cannot both succeed.
pub(crate) fn perform_activation(
    state: &CatalogState,
    claim: &ValidActivation,
) -> Result<AccountActivation, ResourceFailure> {
    let account = state
        .accounts()
        .find(|a| a.account_number == claim.account_number_provided)
        .ok_or_else(|| {
            ResourceFailure::not_found_by_id("Account", &claim.account_number_provided)
        })?;
    if state
        .document_types()
        .get(claim.id_document_type_provided)
        .is_none()
    {
        return Err(ResourceFailure::not_found_by_id(
            "DocumentType",
            claim.id_document_type_provided,
        ));
    }
    let owner = state
        .clients()
        .get(account.id_client)
        .ok_or_else(|| ResourceFailure::not_found_by_id("Client", account.id_client))?;

    let now = Timestamp::now();
    let mut recorded = None;

    state.accounts().update(account.id_account, |acct| {
        let (status, reason) = if acct.status == AccountStatus::Active {
            (ActivationStatus::Failed, Some(ALREADY_ACTIVE_REASON.to_owned()))
        } else {
            match match_owner(
                owner.id_document_type,
                &owner.document_number,
                claim.id_document_type_provided,
                &claim.document_number_provided,
            ) {
                Ok(()) => (ActivationStatus::Success, None),
                Err(mismatch) => (ActivationStatus::Failed, Some(mismatch.phrase().to_owned())),
            }
        };

        if status == ActivationStatus::Success {
            acct.status = AccountStatus::Active;
            acct.activated_date = Some(now);
        }

        recorded = Some(state.activations().insert_with(|id| AccountActivation {
            id_account_activation: id,
            id_account: acct.id_account,
            id_document_type_provided: claim.id_document_type_provided,
            document_number_provided: claim.document_number_provided.clone(),
            account_number_provided: claim.account_number_provided.clone(),
            activation_status: status,
            error_reason: reason,
            attempt_date: now,
        }));
    });

    // The account can only vanish between the lookup and the locked
    // update if a concurrent delete won the race
    recorded.ok_or_else(|| {
        ResourceFailure::not_found_by_id("Account", &claim.account_number_provided)
    })
}

async fn find_all(State(state): State<CatalogState>) -> Json<Vec<AccountActivation>> {
    Json(state.activations().list())
}

async fn find_by_id(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<AccountActivation>, Rejection> {
    let activation = state
        .activations()
        .get(id)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, id))?;
    Ok(Json(activation))
}

async fn activate(
    State(state): State<CatalogState>,
    Json(request): Json<ActivationRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let claim = request.validate()?;
    let activation = perform_activation(&state, &claim)?;
    tracing::info!(
        id = activation.id_account_activation,
        account = activation.id_account,
        status = ?activation.activation_status,
        "activation attempt recorded"
    );
    Ok(created(
        format!("/account-activations/{}", activation.id_account_activation),
        activation,
    ))
}

async fn delete(State(state): State<CatalogState>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    state
        .activations()
        .remove(id)
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "delete"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<CatalogState> {
    Router::new()
        .route("/account-activations", routing::get(find_all))
        .route("/account-activations/activate", routing::post(activate))
        .route(
            "/account-activations/{id}",
            routing::get(find_by_id).delete(delete),
        )
}
