use crate::models::ErrorResponse;
use rocket::http::Status;
use rocket::response::content::RawHtml;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catch, get, Request};

const INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub fn index() -> RawHtml<&'static str> {
    RawHtml(INDEX_HTML)
}

/// Keeps framework-level errors (unknown route, oversized body) in the same
/// `{"error": ...}` shape as the handlers.
#[catch(default)]
pub fn json_catcher(code: Status, request: &Request<'_>) -> status::Custom<Json<ErrorResponse>> {
    log::warn!("{} {} -> {}", request.method(), request.uri(), code);
    status::Custom(
        code,
        Json(ErrorResponse {
            error: code.reason().unwrap_or("Unknown error").to_string(),
        }),
    )
}
