#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Error classification and request-integrity engine.
//!
//! Everything that can go wrong in the API is normalized into a closed
//! taxonomy (type → subtype) and rendered as a single uniform error
//! document with navigational links. This crate is framework-free: the
//! server layer converts [`Failure`] values into actual HTTP responses.

pub mod document;
pub mod failure;
pub mod field;
pub mod header;
pub mod taxonomy;

pub use document::{ErrorDocument, ErrorEnvelope, ErrorLink, build};
pub use failure::{
    DuplicateFieldFailure, Failure, FieldConstraintKind, FieldValidationFailure, HeaderFailure,
    HeaderFailureKind, ResourceFailure, ResourceFailureKind,
};
pub use field::{Constraint, FieldRule, Violation, check_fields};
pub use header::validate_header;
pub use taxonomy::{ErrorType, Subtype, SubtypeInfo, catalog};
