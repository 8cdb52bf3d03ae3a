//! Translation of generic field-constraint violations into the taxonomy.
//!
//! Bounds are declared per field instead of being scraped from whatever
//! validation framework raised the violation, which keeps the translator
//! framework-free. Only the first violation across a body is reported;
//! the rest are dropped.

use crate::failure::{FieldConstraintKind, FieldValidationFailure};

/// The raw constraint a field was checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Value must be present
    NotNull,
    /// Value must be non-empty
    NotEmpty,
    /// Character length must fall inside `[min, max]`
    Size { min: usize, max: usize },
    /// Anything else; carries the raw constraint message
    Other { message: String },
}

/// One field-constraint violation as raised by the validation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: String,
    pub value: Option<String>,
    pub constraint: Constraint,
}

/// Map a violation into the taxonomy.
///
/// A size violation is split by inspecting the actual value length
/// against the declared bounds: one constraint kind expresses two
/// distinct user-facing problems (too short vs too long).
pub fn translate(violation: &Violation) -> FieldValidationFailure {
    let invalid_value = violation.value.clone().unwrap_or_default();
    let kind = match &violation.constraint {
        Constraint::NotNull => FieldConstraintKind::Required,
        Constraint::NotEmpty => FieldConstraintKind::Empty,
        Constraint::Size { min, max } => {
            let actual = invalid_value.chars().count();
            if actual < *min {
                FieldConstraintKind::TooShort { min: *min }
            } else {
                FieldConstraintKind::TooLong { max: *max }
            }
        }
        Constraint::Other { message } => FieldConstraintKind::Other {
            message: message.clone(),
        },
    };
    FieldValidationFailure {
        field_name: violation.field.clone(),
        invalid_value,
        kind,
    }
}

/// Declared validation rules for one request-body field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub required: bool,
    pub non_empty: bool,
    pub bounds: Option<(usize, usize)>,
    /// Extra predicate with its constraint message; failures degrade to
    /// the reserved generic subtype
    pub custom: Option<(fn(&str) -> bool, &'static str)>,
}

impl FieldRule {
    pub const fn new(field: &'static str) -> Self {
        Self {
            field,
            required: true,
            non_empty: true,
            bounds: None,
            custom: None,
        }
    }

    pub const fn bounds(mut self, min: usize, max: usize) -> Self {
        self.bounds = Some((min, max));
        self
    }

    pub const fn optional(mut self) -> Self {
        self.required = false;
        self.non_empty = false;
        self
    }

    pub const fn custom(mut self, check: fn(&str) -> bool, message: &'static str) -> Self {
        self.custom = Some((check, message));
        self
    }

    /// Check a submitted value against this rule, yielding the first
    /// violated constraint
    fn check(&self, value: Option<&str>) -> Result<(), Violation> {
        let violation = |value: Option<&str>, constraint| Violation {
            field: self.field.to_owned(),
            value: value.map(ToOwned::to_owned),
            constraint,
        };

        let Some(value) = value else {
            if self.required {
                return Err(violation(None, Constraint::NotNull));
            }
            return Ok(());
        };

        if self.non_empty && value.is_empty() {
            return Err(violation(Some(value), Constraint::NotEmpty));
        }

        if let Some((min, max)) = self.bounds {
            let actual = value.chars().count();
            if actual < min || actual > max {
                return Err(violation(Some(value), Constraint::Size { min, max }));
            }
        }

        if let Some((check, message)) = self.custom
            && !check(value)
        {
            return Err(violation(
                Some(value),
                Constraint::Other {
                    message: message.to_owned(),
                },
            ));
        }

        Ok(())
    }
}

/// Run rules in declaration order and translate the first violation.
///
/// Returns `Ok(())` when every field passes.
pub fn check_fields<'a>(
    fields: impl IntoIterator<Item = (&'a FieldRule, Option<&'a str>)>,
) -> Result<(), FieldValidationFailure> {
    for (rule, value) in fields {
        if let Err(violation) = rule.check(value) {
            return Err(translate(&violation));
        }
    }
    Ok(())
}
