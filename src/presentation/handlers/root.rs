/// Liveness text for a quick `curl`.
pub async fn root_handler() -> &'static str {
    "Hello World!"
}
