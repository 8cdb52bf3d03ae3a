use serde::Serialize;

/// Top-level error category. Each category owns a closed set of subtypes
/// and maps to a fixed HTTP status class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Request header failed the integrity gate (400)
    Header,
    /// Requested resource does not exist (404)
    Resource,
    /// Request body failed validation (400, or 409 for duplicates)
    Validation,
}

impl ErrorType {
    /// Machine-readable type code (`TYP-00x`)
    pub const fn code(self) -> &'static str {
        match self {
            Self::Header => "TYP-001",
            Self::Resource => "TYP-002",
            Self::Validation => "TYP-003",
        }
    }

    /// Snake-case label used in error documents
    pub const fn label(self) -> &'static str {
        match self {
            Self::Header => "header_error",
            Self::Resource => "resource_not_found",
            Self::Validation => "request_body_validation_error",
        }
    }
}

/// Specific error cause within a type.
///
/// Subtype codes are never reused across categories; the mapping from
/// subtype to type is total and fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    MissingHeader,
    HeaderTooShort,
    HeaderTooLong,
    InvalidHeaderFormat,
    NotFoundById,
    NotFoundAfterOperation,
    EndpointNotFound,
    /// Reserved subtype for constraint kinds outside the taxonomy
    GenericValidation,
    FieldRequired,
    FieldEmpty,
    LengthTooShort,
    LengthTooLong,
    DuplicateValue,
}

impl Subtype {
    /// Machine-readable subtype code (`HDR-00x`, `RNF-00x`, `RBV-00x`)
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingHeader => "HDR-001",
            Self::HeaderTooShort => "HDR-002",
            Self::HeaderTooLong => "HDR-003",
            Self::InvalidHeaderFormat => "HDR-004",
            Self::NotFoundById => "RNF-001",
            Self::NotFoundAfterOperation => "RNF-002",
            Self::EndpointNotFound => "RNF-003",
            Self::GenericValidation => "RBV-000",
            Self::FieldRequired => "RBV-001",
            Self::FieldEmpty => "RBV-002",
            Self::LengthTooShort => "RBV-003",
            Self::LengthTooLong => "RBV-004",
            Self::DuplicateValue => "RBV-005",
        }
    }

    /// Snake-case subtype name used in error documents
    pub const fn name(self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::HeaderTooShort => "header_length_too_short",
            Self::HeaderTooLong => "header_length_too_long",
            Self::InvalidHeaderFormat => "invalid_header_format",
            Self::NotFoundById => "resource_not_found_by_id",
            Self::NotFoundAfterOperation => "resource_not_found_after_operation",
            Self::EndpointNotFound => "endpoint_not_found",
            Self::GenericValidation => "validation_error",
            Self::FieldRequired => "required_field_missing",
            Self::FieldEmpty => "field_value_empty",
            Self::LengthTooShort => "field_length_below_minimum",
            Self::LengthTooLong => "field_length_exceeds_maximum",
            Self::DuplicateValue => "duplicate_value_detected",
        }
    }

    /// The type this subtype belongs to
    pub const fn error_type(self) -> ErrorType {
        match self {
            Self::MissingHeader
            | Self::HeaderTooShort
            | Self::HeaderTooLong
            | Self::InvalidHeaderFormat => ErrorType::Header,
            Self::NotFoundById | Self::NotFoundAfterOperation | Self::EndpointNotFound => {
                ErrorType::Resource
            }
            Self::GenericValidation
            | Self::FieldRequired
            | Self::FieldEmpty
            | Self::LengthTooShort
            | Self::LengthTooLong
            | Self::DuplicateValue => ErrorType::Validation,
        }
    }

    /// HTTP status rendered for this subtype
    pub const fn status(self) -> u16 {
        match self.error_type() {
            ErrorType::Header => 400,
            ErrorType::Resource => 404,
            ErrorType::Validation => match self {
                Self::DuplicateValue => 409,
                _ => 400,
            },
        }
    }

    /// Resolvable documentation URL: `<base><code>`
    pub fn documentation_url(self, docs_base: &str) -> String {
        format!("{docs_base}{}", self.code())
    }
}

/// Immutable descriptor for one catalog entry, served read-only by the
/// error-code documentation endpoint.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtypeInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub type_code: &'static str,
    #[serde(rename = "type")]
    pub type_label: &'static str,
    pub status: u16,
}

const ALL_SUBTYPES: [Subtype; 13] = [
    Subtype::MissingHeader,
    Subtype::HeaderTooShort,
    Subtype::HeaderTooLong,
    Subtype::InvalidHeaderFormat,
    Subtype::NotFoundById,
    Subtype::NotFoundAfterOperation,
    Subtype::EndpointNotFound,
    Subtype::GenericValidation,
    Subtype::FieldRequired,
    Subtype::FieldEmpty,
    Subtype::LengthTooShort,
    Subtype::LengthTooLong,
    Subtype::DuplicateValue,
];

const fn info(s: Subtype) -> SubtypeInfo {
    SubtypeInfo {
        code: s.code(),
        name: s.name(),
        type_code: s.error_type().code(),
        type_label: s.error_type().label(),
        status: s.status(),
    }
}

static CATALOG: [SubtypeInfo; 13] = {
    let mut out = [info(Subtype::MissingHeader); 13];
    let mut i = 0;
    while i < ALL_SUBTYPES.len() {
        out[i] = info(ALL_SUBTYPES[i]);
        i += 1;
    }
    out
};

/// The full error catalog, constructed once at compile time
pub fn catalog() -> &'static [SubtypeInfo] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtype_codes_are_unique() {
        let mut codes: Vec<_> = ALL_SUBTYPES.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ALL_SUBTYPES.len());
    }

    #[test]
    fn every_subtype_belongs_to_one_type() {
        for s in ALL_SUBTYPES {
            let prefix = &s.code()[..3];
            let expected = match s.error_type() {
                ErrorType::Header => "HDR",
                ErrorType::Resource => "RNF",
                ErrorType::Validation => "RBV",
            };
            assert_eq!(prefix, expected, "{}", s.code());
        }
    }

    #[test]
    fn duplicate_is_conflict_all_other_validation_is_bad_request() {
        assert_eq!(Subtype::DuplicateValue.status(), 409);
        assert_eq!(Subtype::FieldRequired.status(), 400);
        assert_eq!(Subtype::GenericValidation.status(), 400);
        assert_eq!(Subtype::NotFoundById.status(), 404);
    }

    #[test]
    fn documentation_url_appends_code() {
        let url = Subtype::MissingHeader.documentation_url("http://localhost:8080/api/docs#/");
        assert_eq!(url, "http://localhost:8080/api/docs#/HDR-001");
    }

    #[test]
    fn catalog_covers_all_subtypes() {
        assert_eq!(catalog().len(), 13);
        assert!(catalog().iter().any(|i| i.code == "RBV-005" && i.status == 409));
    }
}
