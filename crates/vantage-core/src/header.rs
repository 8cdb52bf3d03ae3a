use std::sync::OnceLock;

use regex::Regex;

use crate::failure::HeaderFailure;

/// Correlation id propagated across services
pub const X_CORRELATION_ID: &str = "x-correlation-id";
/// Unique id of this request
pub const X_REQUEST_ID: &str = "x-request-id";
/// Business transaction id
pub const X_TRANSACTION_ID: &str = "x-transaction-id";

/// Headers the gate requires on every non-exempt route, validated in
/// this order
pub const REQUIRED_HEADERS: [&str; 3] = [X_CORRELATION_ID, X_REQUEST_ID, X_TRANSACTION_ID];

/// Exact length of a canonical UUID with hyphens
pub const UUID_LENGTH: usize = 36;

/// Fixed hint surfaced as `correctFormat` for every header failure
pub const CORRECT_FORMAT_MESSAGE: &str =
    "The value should be a valid UUID with exactly 36 characters.";

/// Marker recorded as the invalid value when the header is absent
pub const MISSING_VALUE_TEXT: &str = "Header value is missing or null";

fn uuid_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .expect("must be valid regex")
    })
}

/// Validate one header value: presence, then length, then format.
///
/// The first failed check wins. Length is checked before the pattern so
/// a short or long value reports its real problem instead of a generic
/// format mismatch.
pub fn validate_header(header_name: &str, value: Option<&str>) -> Result<(), HeaderFailure> {
    let value = match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => return Err(HeaderFailure::missing(header_name)),
    };

    let length = value.chars().count();
    if length < UUID_LENGTH {
        return Err(HeaderFailure::too_short(header_name, value));
    }
    if length > UUID_LENGTH {
        return Err(HeaderFailure::too_long(header_name, value));
    }

    if !uuid_pattern().is_match(value) {
        return Err(HeaderFailure::invalid_format(header_name, value));
    }

    Ok(())
}
