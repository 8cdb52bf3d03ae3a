//! Uniform error documents with navigational links.
//!
//! The builder is pure: the same failure and request context always
//! yield a structurally identical document (the timestamp is an input,
//! not a side effect).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use jiff::Timestamp;
use regex::Regex;
use serde::Serialize;

use crate::failure::{Failure, ResourceFailureKind};
use crate::header;

/// A named navigation target embedded in an error document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorLink {
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl ErrorLink {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: None,
        }
    }

    pub fn with_method(href: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            method: Some(method.into()),
        }
    }
}

/// Details block for header, body-validation and duplicate failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDetails {
    pub problematic_field: String,
    pub invalid_value: String,
    pub correct_format: String,
}

/// Details block for resource-not-found failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetails {
    pub resource_type: String,
    pub search_criteria: String,
    pub search_value: String,
    pub suggestion: String,
}

/// Failure-specific portion of the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    Field(FieldDetails),
    Resource(ResourceDetails),
}

/// The wire-format description of one failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDocument {
    pub timestamp: Timestamp,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    pub type_code: &'static str,
    #[serde(rename = "type")]
    pub error_type: &'static str,
    pub subtype_code: &'static str,
    pub subtype: &'static str,
    pub details: ErrorDetails,
    pub path: String,
    pub documentation_url: String,
    #[serde(rename = "_links")]
    pub links: BTreeMap<String, ErrorLink>,
}

/// Top-level error response body: `{"errors": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub errors: ErrorDocument,
}

impl From<ErrorDocument> for ErrorEnvelope {
    fn from(errors: ErrorDocument) -> Self {
        Self { errors }
    }
}

fn trailing_id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\d+$").expect("must be valid regex"))
}

/// Strip a trailing numeric id segment: `/priorities/5` → `/priorities`
pub fn base_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_owned();
    }
    let trimmed = path.strip_suffix('/').unwrap_or(path);
    trailing_id_pattern().replace(trimmed, "").into_owned()
}

const fn status_label(status: u16) -> &'static str {
    match status {
        404 => "Not Found",
        409 => "Conflict",
        _ => "Bad Request",
    }
}

/// Build the uniform error document for any typed failure.
///
/// `path` and `method` come from the request context; `now` is injected
/// so rendering stays deterministic under test.
pub fn build(
    failure: &Failure,
    path: &str,
    method: &str,
    now: Timestamp,
    docs_base: &str,
) -> ErrorDocument {
    let subtype = failure.subtype();
    let status = subtype.status();
    let documentation_url = subtype.documentation_url(docs_base);

    let mut links = BTreeMap::new();
    links.insert("self".to_owned(), ErrorLink::with_method(path, method));
    links.insert("documentation".to_owned(), ErrorLink::new(&documentation_url));

    let (message, details) = match failure {
        Failure::Header(f) => (
            f.message(),
            ErrorDetails::Field(FieldDetails {
                problematic_field: f.header_name.clone(),
                invalid_value: f.supplied_value.clone(),
                correct_format: header::CORRECT_FORMAT_MESSAGE.to_owned(),
            }),
        ),
        Failure::Resource(f) => {
            let base = base_path(path);
            match &f.kind {
                ResourceFailureKind::NotFoundById => {
                    links.insert("collection".to_owned(), ErrorLink::with_method(&base, "GET"));
                }
                ResourceFailureKind::NotFoundAfterOperation { .. } => {
                    links.insert("collection".to_owned(), ErrorLink::with_method(&base, "GET"));
                    links.insert("create".to_owned(), ErrorLink::with_method(&base, "POST"));
                }
                ResourceFailureKind::EndpointNotFound => {
                    links.insert("api-root".to_owned(), ErrorLink::new("/"));
                }
            }
            let message = if f.kind == ResourceFailureKind::EndpointNotFound {
                format!("No endpoint found for {method} {path}")
            } else {
                f.message()
            };
            (
                message,
                ErrorDetails::Resource(ResourceDetails {
                    resource_type: f.resource_type.clone(),
                    search_criteria: f.search_criteria.clone(),
                    search_value: f.search_value.clone(),
                    suggestion: f.suggestion(),
                }),
            )
        }
        Failure::Duplicate(f) => (
            f.to_string(),
            ErrorDetails::Field(FieldDetails {
                problematic_field: f.field_name.clone(),
                invalid_value: f.field_value.clone(),
                correct_format: f.constraint().to_owned(),
            }),
        ),
        Failure::FieldValidation(f) => (
            f.message(),
            ErrorDetails::Field(FieldDetails {
                problematic_field: f.field_name.clone(),
                invalid_value: f.invalid_value.clone(),
                correct_format: f.constraint(),
            }),
        ),
    };

    ErrorDocument {
        timestamp: now,
        status,
        error: status_label(status),
        message,
        type_code: subtype.error_type().code(),
        error_type: subtype.error_type().label(),
        subtype_code: subtype.code(),
        subtype: subtype.name(),
        details,
        path: path.to_owned(),
        documentation_url,
        links,
    }
}
