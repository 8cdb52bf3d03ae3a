//! Activation identity matching.
//!
//! The matcher compares the identity supplied with an activation
//! request against the account owner's stored identity and produces
//! one of three fixed reason phrases on mismatch. Every attempt is
//! recorded, so the phrases are part of the audit contract.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Inactive,
    Active,
}

/// Terminal outcome of one activation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivationStatus {
    Success,
    Failed,
}

/// Which part of the supplied identity disagreed with the owner's
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchReason {
    Both,
    DocumentType,
    DocumentNumber,
}

impl MismatchReason {
    /// The fixed phrase stored on the failed attempt record
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Both => "Type document and document number do not match account owner",
            Self::DocumentType => "Type document does not match account owner",
            Self::DocumentNumber => "Document number does not match account owner",
        }
    }
}

/// Reason recorded when an activation targets an already active account
pub const ALREADY_ACTIVE_REASON: &str = "Account is already active";

/// Compare the supplied identity against the account owner's.
///
/// Both the document-type id and the document number must match
/// exactly; the number comparison is case sensitive.
pub fn match_owner(
    owner_document_type_id: i64,
    owner_document_number: &str,
    provided_document_type_id: i64,
    provided_document_number: &str,
) -> Result<(), MismatchReason> {
    let type_matches = owner_document_type_id == provided_document_type_id;
    let number_matches = owner_document_number == provided_document_number;

    match (type_matches, number_matches) {
        (true, true) => Ok(()),
        (false, false) => Err(MismatchReason::Both),
        (false, true) => Err(MismatchReason::DocumentType),
        (true, false) => Err(MismatchReason::DocumentNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_match_succeeds() {
        assert_eq!(match_owner(1, "12345678", 1, "12345678"), Ok(()));
    }

    #[test]
    fn each_mismatch_yields_its_fixed_phrase() {
        assert_eq!(
            match_owner(1, "12345678", 2, "99999999").unwrap_err().phrase(),
            "Type document and document number do not match account owner"
        );
        assert_eq!(
            match_owner(1, "12345678", 2, "12345678").unwrap_err().phrase(),
            "Type document does not match account owner"
        );
        assert_eq!(
            match_owner(1, "12345678", 1, "99999999").unwrap_err().phrase(),
            "Document number does not match account owner"
        );
    }

    #[test]
    fn document_number_comparison_is_case_sensitive() {
        assert_eq!(
            match_owner(1, "AB123", 1, "ab123").unwrap_err(),
            MismatchReason::DocumentNumber
        );
    }

    #[test]
    fn statuses_serialize_screaming() {
        assert_eq!(serde_json::to_value(AccountStatus::Inactive).unwrap(), "INACTIVE");
        assert_eq!(serde_json::to_value(ActivationStatus::Success).unwrap(), "SUCCESS");
        assert_eq!(serde_json::to_value(ActivationStatus::Failed).unwrap(), "FAILED");
    }
}
