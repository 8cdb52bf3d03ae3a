use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use jiff::Timestamp;
use serde::Deserialize;
use vantage_accounts::AccountStatus;
use vantage_core::{FieldConstraintKind, FieldValidationFailure, ResourceFailure};

use crate::model::{Account, AccountType, Client, Currency};
use crate::reject::Rejection;
use crate::routes::created;
use crate::state::CatalogState;

const RESOURCE: &str = "Account";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub id_client: Option<i64>,
    pub id_account_type: Option<i64>,
    pub id_currency: Option<i64>,
    pub balance: Option<f64>,
}

#[derive(Debug)]
struct ValidAccount {
    id_client: i64,
    id_account_type: i64,
    id_currency: i64,
    balance: Option<f64>,
}

fn required_id(field: &str, value: Option<i64>) -> Result<i64, FieldValidationFailure> {
    value.ok_or_else(|| FieldValidationFailure {
        field_name: field.to_owned(),
        invalid_value: String::new(),
        kind: FieldConstraintKind::Required,
    })
}

impl AccountRequest {
    fn validate(self) -> Result<ValidAccount, FieldValidationFailure> {
        let id_client = required_id("idClient", self.id_client)?;
        let id_account_type = required_id("idAccountType", self.id_account_type)?;
        let id_currency = required_id("idCurrency", self.id_currency)?;

        if let Some(balance) = self.balance
            && balance < 0.0
        {
            return Err(FieldValidationFailure {
                field_name: "balance".to_owned(),
                invalid_value: balance.to_string(),
                kind: FieldConstraintKind::Other {
                    message: "Balance must be greater than or equal to 0".to_owned(),
                },
            });
        }

        Ok(ValidAccount {
            id_client,
            id_account_type,
            id_currency,
            balance: self.balance,
        })
    }
}

/// Resolve the referenced client, account type and currency, failing
/// with the missing resource's own type name
fn resolve_references(
    state: &CatalogState,
    valid: &ValidAccount,
) -> Result<(Client, AccountType, Currency), ResourceFailure> {
    let client = state
        .clients()
        .get(valid.id_client)
        .ok_or_else(|| ResourceFailure::not_found_by_id("Client", valid.id_client))?;
    let account_type = state
        .account_types()
        .get(valid.id_account_type)
        .ok_or_else(|| ResourceFailure::not_found_by_id("AccountType", valid.id_account_type))?;
    let currency = state
        .currencies()
        .get(valid.id_currency)
        .ok_or_else(|| ResourceFailure::not_found_by_id("Currency", valid.id_currency))?;
    Ok((client, account_type, currency))
}

async fn find_all(State(state): State<CatalogState>) -> Json<Vec<Account>> {
    Json(state.accounts().list())
}

async fn find_by_id(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<Account>, Rejection> {
    let account = state
        .accounts()
        .get(id)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, id))?;
    Ok(Json(account))
}

async fn find_by_account_number(
    State(state): State<CatalogState>,
    Path(account_number): Path<String>,
) -> Result<Json<Account>, Rejection> {
    let account = state
        .accounts()
        .find(|a| a.account_number == account_number)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, &account_number))?;
    Ok(Json(account))
}

async fn create(
    State(state): State<CatalogState>,
    Json(request): Json<AccountRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let valid = request.validate()?;
    let (_, account_type, currency) = resolve_references(&state, &valid)?;

    // The number is fixed at creation and never regenerated
    let account_number = vantage_accounts::number::generate(&account_type.code, &currency.code);

    let account = state.accounts().insert_with(|id| Account {
        id_account: id,
        account_number,
        id_client: valid.id_client,
        id_account_type: valid.id_account_type,
        id_currency: valid.id_currency,
        balance: valid.balance.unwrap_or(0.0),
        status: AccountStatus::Inactive,
        created_date: Timestamp::now(),
        activated_date: None,
    });
    tracing::info!(
        id = account.id_account,
        account_number = %account.account_number,
        "account created inactive"
    );
    Ok(created(format!("/accounts/{}", account.id_account), account))
}

async fn update(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    Json(request): Json<AccountRequest>,
) -> Result<Json<Account>, Rejection> {
    let valid = request.validate()?;
    resolve_references(&state, &valid)?;

    let updated = state
        .accounts()
        .update(id, |account| {
            account.id_client = valid.id_client;
            account.id_account_type = valid.id_account_type;
            account.id_currency = valid.id_currency;
            if let Some(balance) = valid.balance {
                account.balance = balance;
            }
        })
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "update"))?;
    Ok(Json(updated))
}

async fn delete(State(state): State<CatalogState>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    state
        .accounts()
        .remove(id)
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "delete"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<CatalogState> {
    Router::new()
        .route("/accounts", routing::get(find_all).post(create))
        .route(
            "/accounts/by-account-number/{account_number}",
            routing::get(find_by_account_number),
        )
        .route(
            "/accounts/{id}",
            routing::get(find_by_id).put(update).delete(delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Subtype;

    #[test]
    fn reference_ids_are_required_in_order() {
        let failure = AccountRequest {
            id_client: None,
            id_account_type: Some(1),
            id_currency: Some(1),
            balance: None,
        }
        .validate()
        .unwrap_err();
        assert_eq!(failure.field_name, "idClient");
        assert_eq!(failure.subtype(), Subtype::FieldRequired);
    }

    #[test]
    fn negative_balance_is_rejected() {
        let failure = AccountRequest {
            id_client: Some(1),
            id_account_type: Some(1),
            id_currency: Some(1),
            balance: Some(-0.01),
        }
        .validate()
        .unwrap_err();
        assert_eq!(failure.subtype(), Subtype::GenericValidation);
        assert_eq!(failure.message(), "Balance must be greater than or equal to 0");
    }

    #[test]
    fn missing_references_fail_with_their_own_type_name() {
        let state = CatalogState::new();
        let valid = ValidAccount {
            id_client: 1,
            id_account_type: 1,
            id_currency: 1,
            balance: None,
        };
        let failure = resolve_references(&state, &valid).unwrap_err();
        assert_eq!(failure.resource_type, "Client");
        assert_eq!(failure.subtype(), Subtype::NotFoundById);
    }
}
