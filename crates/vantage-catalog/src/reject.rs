//! Bridging typed failures into axum responses.
//!
//! Handlers never render error bodies themselves. A [`Rejection`]
//! carries the failure out through the response extensions; the
//! server's rendering middleware, which owns the request path and
//! method, turns it into the error document exactly once.

use axum::response::{IntoResponse, Response};
use vantage_core::{
    DuplicateFieldFailure, Failure, FieldValidationFailure, HeaderFailure, ResourceFailure,
};

#[derive(Debug)]
pub struct Rejection(pub Failure);

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let mut response = self.0.status().into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

impl From<Failure> for Rejection {
    fn from(failure: Failure) -> Self {
        Self(failure)
    }
}

impl From<HeaderFailure> for Rejection {
    fn from(failure: HeaderFailure) -> Self {
        Self(failure.into())
    }
}

impl From<ResourceFailure> for Rejection {
    fn from(failure: ResourceFailure) -> Self {
        Self(failure.into())
    }
}

impl From<DuplicateFieldFailure> for Rejection {
    fn from(failure: DuplicateFieldFailure) -> Self {
        Self(failure.into())
    }
}

impl From<FieldValidationFailure> for Rejection {
    fn from(failure: FieldValidationFailure) -> Self {
        Self(failure.into())
    }
}
