//! Shared test harness: config builder and a running test server.

pub mod config;
pub mod server;

/// Canonical valid values for the three required headers
pub const VALID_HEADERS: [(&str, &str); 3] = [
    ("x-correlation-id", "123e4567-e89b-12d3-a456-426614174000"),
    ("x-request-id", "223e4567-e89b-12d3-a456-426614174001"),
    ("x-transaction-id", "323e4567-e89b-12d3-a456-426614174002"),
];
