use axum::http::Uri;
use vantage_catalog::Rejection;
use vantage_core::ResourceFailure;

/// No route matched; reported through the taxonomy like any other failure
pub async fn endpoint_not_found(uri: Uri) -> Rejection {
    ResourceFailure::endpoint_not_found(uri.path()).into()
}
