use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

// Liveness only, the upstream is not probed.
#[get("/health")]
pub async fn health_handler() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "OK", "message": "Server is running" }))
}
