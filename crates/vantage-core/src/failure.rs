use http::StatusCode;
use thiserror::Error;

use crate::header;
use crate::taxonomy::Subtype;

/// What went wrong with a request header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFailureKind {
    Missing,
    TooShort,
    TooLong,
    InvalidFormat,
}

/// A header that failed the integrity gate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct HeaderFailure {
    pub kind: HeaderFailureKind,
    pub header_name: String,
    /// The value as supplied; for a missing header this records the
    /// fixed "missing or null" marker text
    pub supplied_value: String,
}

impl HeaderFailure {
    pub fn missing(header_name: impl Into<String>) -> Self {
        Self {
            kind: HeaderFailureKind::Missing,
            header_name: header_name.into(),
            supplied_value: header::MISSING_VALUE_TEXT.to_owned(),
        }
    }

    pub fn too_short(header_name: impl Into<String>, supplied_value: impl Into<String>) -> Self {
        Self {
            kind: HeaderFailureKind::TooShort,
            header_name: header_name.into(),
            supplied_value: supplied_value.into(),
        }
    }

    pub fn too_long(header_name: impl Into<String>, supplied_value: impl Into<String>) -> Self {
        Self {
            kind: HeaderFailureKind::TooLong,
            header_name: header_name.into(),
            supplied_value: supplied_value.into(),
        }
    }

    pub fn invalid_format(header_name: impl Into<String>, supplied_value: impl Into<String>) -> Self {
        Self {
            kind: HeaderFailureKind::InvalidFormat,
            header_name: header_name.into(),
            supplied_value: supplied_value.into(),
        }
    }

    pub const fn subtype(&self) -> Subtype {
        match self.kind {
            HeaderFailureKind::Missing => Subtype::MissingHeader,
            HeaderFailureKind::TooShort => Subtype::HeaderTooShort,
            HeaderFailureKind::TooLong => Subtype::HeaderTooLong,
            HeaderFailureKind::InvalidFormat => Subtype::InvalidHeaderFormat,
        }
    }

    pub fn message(&self) -> String {
        let h = &self.header_name;
        match self.kind {
            HeaderFailureKind::Missing => format!("Missing {h} header"),
            HeaderFailureKind::TooShort => format!("{h} header is too short"),
            HeaderFailureKind::TooLong => format!("{h} header is too long"),
            HeaderFailureKind::InvalidFormat => {
                format!("Invalid {h} header; does not comply with the UUID format")
            }
        }
    }
}

/// How a resource lookup failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceFailureKind {
    /// Lookup-by-id missed on the read path
    NotFoundById,
    /// Existence re-check missed immediately before a mutation; the
    /// operation name ("update", "delete") is kept for audit clarity
    NotFoundAfterOperation { operation: String },
    /// No route matched the request at all
    EndpointNotFound,
}

/// A resource that could not be found
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct ResourceFailure {
    pub kind: ResourceFailureKind,
    pub resource_type: String,
    pub search_criteria: String,
    pub search_value: String,
}

impl ResourceFailure {
    pub fn not_found_by_id(resource_type: impl Into<String>, id: impl ToString) -> Self {
        Self {
            kind: ResourceFailureKind::NotFoundById,
            resource_type: resource_type.into(),
            search_criteria: "id".to_owned(),
            search_value: id.to_string(),
        }
    }

    pub fn not_found_after_operation(
        resource_type: impl Into<String>,
        id: impl ToString,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            kind: ResourceFailureKind::NotFoundAfterOperation {
                operation: operation.into(),
            },
            resource_type: resource_type.into(),
            search_criteria: "id".to_owned(),
            search_value: id.to_string(),
        }
    }

    pub fn endpoint_not_found(path: impl Into<String>) -> Self {
        Self {
            kind: ResourceFailureKind::EndpointNotFound,
            resource_type: "Endpoint".to_owned(),
            search_criteria: "URL path".to_owned(),
            search_value: path.into(),
        }
    }

    pub const fn subtype(&self) -> Subtype {
        match self.kind {
            ResourceFailureKind::NotFoundById => Subtype::NotFoundById,
            ResourceFailureKind::NotFoundAfterOperation { .. } => Subtype::NotFoundAfterOperation,
            ResourceFailureKind::EndpointNotFound => Subtype::EndpointNotFound,
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            ResourceFailureKind::NotFoundById => {
                format!("{} with ID {} not found", self.resource_type, self.search_value)
            }
            ResourceFailureKind::NotFoundAfterOperation { operation } => format!(
                "Cannot {operation} {} with ID {}: resource not found",
                self.resource_type, self.search_value
            ),
            ResourceFailureKind::EndpointNotFound => {
                format!("No endpoint found for {}", self.search_value)
            }
        }
    }

    /// Human hint attached to the error document's details block
    pub fn suggestion(&self) -> String {
        match &self.kind {
            ResourceFailureKind::NotFoundById => format!(
                "Verify that the ID exists or check the available resources at GET /{}s",
                self.resource_type.to_lowercase()
            ),
            ResourceFailureKind::NotFoundAfterOperation { operation } => format!(
                "The resource may have been deleted or the ID is incorrect. \
                 Verify the resource exists before attempting to {operation} it."
            ),
            ResourceFailureKind::EndpointNotFound => {
                "Verify the URL path is correct. Check available endpoints in the API documentation."
                    .to_owned()
            }
        }
    }
}

/// A unique-field pre-check that found an existing value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate value '{field_value}' detected for field '{field_name}'")]
pub struct DuplicateFieldFailure {
    pub field_name: String,
    pub field_value: String,
}

impl DuplicateFieldFailure {
    pub fn new(field_name: impl Into<String>, field_value: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            field_value: field_value.into(),
        }
    }

    pub fn constraint(&self) -> &'static str {
        "Value already exists in database"
    }
}

/// The specific constraint a body field violated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldConstraintKind {
    Required,
    Empty,
    TooShort { min: usize },
    TooLong { max: usize },
    /// Constraint kinds outside the taxonomy degrade to the reserved
    /// generic subtype instead of crashing the request
    Other { message: String },
}

/// A request-body field that failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.message())]
pub struct FieldValidationFailure {
    pub field_name: String,
    pub invalid_value: String,
    pub kind: FieldConstraintKind,
}

impl FieldValidationFailure {
    pub const fn subtype(&self) -> Subtype {
        match self.kind {
            FieldConstraintKind::Required => Subtype::FieldRequired,
            FieldConstraintKind::Empty => Subtype::FieldEmpty,
            FieldConstraintKind::TooShort { .. } => Subtype::LengthTooShort,
            FieldConstraintKind::TooLong { .. } => Subtype::LengthTooLong,
            FieldConstraintKind::Other { .. } => Subtype::GenericValidation,
        }
    }

    pub fn message(&self) -> String {
        let f = &self.field_name;
        match &self.kind {
            FieldConstraintKind::Required => format!("Field '{f}' is required and cannot be null"),
            FieldConstraintKind::Empty => format!("Field '{f}' cannot be empty"),
            FieldConstraintKind::TooShort { min } => {
                format!("Field '{f}' length is below minimum ({min} characters required)")
            }
            FieldConstraintKind::TooLong { max } => {
                format!("Field '{f}' length exceeds maximum ({max} characters allowed)")
            }
            FieldConstraintKind::Other { message } => message.clone(),
        }
    }

    /// The constraint text surfaced as `correctFormat` in the details block
    pub fn constraint(&self) -> String {
        match &self.kind {
            FieldConstraintKind::Required => "Field is required and cannot be null".to_owned(),
            FieldConstraintKind::Empty => "Field cannot be empty".to_owned(),
            FieldConstraintKind::TooShort { min } => format!("Minimum length is {min} characters"),
            FieldConstraintKind::TooLong { max } => format!("Maximum length is {max} characters"),
            FieldConstraintKind::Other { message } => message.clone(),
        }
    }
}

/// Closed sum of every failure this service can report.
///
/// Constructed at the point of detection, rendered exactly once at the
/// outer boundary, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    #[error(transparent)]
    Header(#[from] HeaderFailure),
    #[error(transparent)]
    Resource(#[from] ResourceFailure),
    #[error(transparent)]
    Duplicate(#[from] DuplicateFieldFailure),
    #[error(transparent)]
    FieldValidation(#[from] FieldValidationFailure),
}

impl Failure {
    pub const fn subtype(&self) -> Subtype {
        match self {
            Self::Header(f) => f.subtype(),
            Self::Resource(f) => f.subtype(),
            Self::Duplicate(_) => Subtype::DuplicateValue,
            Self::FieldValidation(f) => f.subtype(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.subtype().status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}
