use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Deserialize;
use vantage_core::{
    DuplicateFieldFailure, FieldConstraintKind, FieldRule, FieldValidationFailure, ResourceFailure,
    check_fields,
};

use crate::model::Currency;
use crate::reject::Rejection;
use crate::routes::created;
use crate::state::CatalogState;

const RESOURCE: &str = "Currency";

// ISO 4217 codes are exactly three characters
const CODE: FieldRule = FieldRule::new("code").bounds(3, 3);
const NAME: FieldRule = FieldRule::new("name").bounds(3, 50);
const SYMBOL: FieldRule = FieldRule::new("symbol").bounds(1, 5);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug)]
struct ValidCurrency {
    code: String,
    name: String,
    symbol: String,
    active: bool,
}

impl CurrencyRequest {
    fn validate(self) -> Result<ValidCurrency, FieldValidationFailure> {
        check_fields([
            (&CODE, self.code.as_deref()),
            (&NAME, self.name.as_deref()),
            (&SYMBOL, self.symbol.as_deref()),
        ])?;
        let active = self.active.ok_or_else(|| FieldValidationFailure {
            field_name: "active".to_owned(),
            invalid_value: String::new(),
            kind: FieldConstraintKind::Required,
        })?;
        Ok(ValidCurrency {
            code: self.code.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            symbol: self.symbol.unwrap_or_default(),
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
        .currencies()
        .any(|c| c.code == code && Some(c.id_currency) != exclude_id);
    if taken {
        return Err(DuplicateFieldFailure::new("code", code));
    }
    Ok(())
}

async fn find_all(State(state): State<CatalogState>) -> Json<Vec<Currency>> {
    Json(state.currencies().list())
}

async fn find_by_id(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
) -> Result<Json<Currency>, Rejection> {
    let currency = state
        .currencies()
        .get(id)
        .ok_or_else(|| ResourceFailure::not_found_by_id(RESOURCE, id))?;
    Ok(Json(currency))
}

async fn create(
    State(state): State<CatalogState>,
    Json(request): Json<CurrencyRequest>,
) -> Result<impl IntoResponse, Rejection> {
    let valid = request.validate()?;
    check_duplicate_code(&state, &valid.code, None)?;

    let currency = state.currencies().insert_with(|id| Currency {
        id_currency: id,
        code: valid.code,
        name: valid.name,
        symbol: valid.symbol,
        active: valid.active,
    });
    tracing::debug!(id = currency.id_currency, "currency created");
    Ok(created(format!("/currencies/{}", currency.id_currency), currency))
}

async fn update(
    State(state): State<CatalogState>,
    Path(id): Path<i64>,
    Json(request): Json<CurrencyRequest>,
) -> Result<Json<Currency>, Rejection> {
    let valid = request.validate()?;
    check_duplicate_code(&state, &valid.code, Some(id))?;

    let updated = state
        .currencies()
        .update(id, |currency| {
            currency.code = valid.code;
            currency.name = valid.name;
            currency.symbol = valid.symbol;
            currency.active = valid.active;
        })
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "update"))?;
    Ok(Json(updated))
}

async fn delete(State(state): State<CatalogState>, Path(id): Path<i64>) -> Result<StatusCode, Rejection> {
    state
        .currencies()
        .remove(id)
        .ok_or_else(|| ResourceFailure::not_found_after_operation(RESOURCE, id, "delete"))?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<CatalogState> {
    Router::new()
        .route("/currencies", routing::get(find_all).post(create))
        .route(
            "/currencies/{id}",
            routing::get(find_by_id).put(update).delete(delete),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_core::Subtype;

    #[test]
    fn code_must_be_exactly_three_characters() {
        let base = |code: &str| CurrencyRequest {
            code: Some(code.to_owned()),
            name: Some("US Dollar".to_owned()),
            symbol: Some("$".to_owned()),
            active: Some(true),
        };
        assert!(base("USD").validate().is_ok());
        assert_eq!(base("US").validate().unwrap_err().subtype(), Subtype::LengthTooShort);
        assert_eq!(base("USDX").validate().unwrap_err().subtype(), Subtype::LengthTooLong);
    }
}
