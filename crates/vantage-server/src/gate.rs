//! Request-integrity gate.
//!
//! Applied outside the router, so every request, matched or not, is
//! checked before any business logic runs. The three required headers
//! are validated in fixed order and the first failure short-circuits.

use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use vantage_catalog::Rejection;
use vantage_config::GateConfig;
use vantage_core::header::REQUIRED_HEADERS;
use vantage_core::validate_header;

pub async fn gate_middleware(config: Arc<GateConfig>, request: Request, next: Next) -> Response {
    if config.is_exempt(request.uri().path()) {
        return next.run(request).await;
    }

    for name in REQUIRED_HEADERS {
        let value = request.headers().get(name).and_then(|v| v.to_str().ok());
        if let Err(failure) = validate_header(name, value) {
            tracing::debug!(header = name, subtype = failure.subtype().code(), "header gate rejected request");
            return Rejection::from(failure).into_response();
        }
    }

    next.run(request).await
}
