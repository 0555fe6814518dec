/// GET / - plain-text greeting
pub async fn index() -> &'static str {
    "Hola mundo desde Axum"
}
