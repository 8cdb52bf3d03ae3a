//! Catalog entities as stored and served.
//!
//! Wire names are camelCase. Entities serialize directly as response
//! bodies; request DTOs live next to their handlers.

use jiff::Timestamp;
use serde::Serialize;
use vantage_accounts::{AccountStatus, ActivationStatus};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id_client: i64,
    pub first_name: String,
    pub last_name: String,
    pub id_document_type: i64,
    pub document_number: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentType {
    pub id_document_type: i64,
    pub code: String,
    pub description: String,
    pub validation_pattern: Option<String>,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountType {
    pub id_account_type: i64,
    pub code: String,
    pub description: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id_currency: i64,
    pub code: String,
    pub name: String,
    pub symbol: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
    pub id_priority: i64,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id_account: i64,
    pub account_number: String,
    pub id_client: i64,
    pub id_account_type: i64,
    pub id_currency: i64,
    pub balance: f64,
    pub status: AccountStatus,
    pub created_date: Timestamp,
    pub activated_date: Option<Timestamp>,
}

/// One activation attempt, successful or failed.
///
/// The failure reason is kept for audit only and never serialized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountActivation {
    pub id_account_activation: i64,
    pub id_account: i64,
    pub id_document_type_provided: i64,
    pub document_number_provided: String,
    pub account_number_provided: String,
    pub activation_status: ActivationStatus,
    #[serde(skip_serializing)]
    pub error_reason: Option<String>,
    pub attempt_date: Timestamp,
}
