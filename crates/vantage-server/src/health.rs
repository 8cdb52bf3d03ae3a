/// Liveness probe, exempt from the header gate
pub async fn health_handler() -> &'static str {
    "OK"
}
