//! Failure rendering.
//!
//! Handlers and the gate smuggle a typed [`Failure`] out through the
//! response extensions; this middleware owns the request path and
//! method and turns the failure into the error document exactly once.

use std::sync::Arc;

use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use jiff::Timestamp;
use vantage_core::{ErrorEnvelope, Failure, document};

pub async fn render_failure(docs_base: Arc<str>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let method = request.method().as_str().to_owned();

    let mut response = next.run(request).await;

    if let Some(failure) = response.extensions_mut().remove::<Failure>() {
        let status = failure.status();
        let doc = document::build(&failure, &path, &method, Timestamp::now(), &docs_base);
        tracing::debug!(
            subtype = doc.subtype_code,
            status = status.as_u16(),
            %path,
            "rendering error document"
        );
        return (status, Json(ErrorEnvelope::from(doc))).into_response();
    }

    response
}
