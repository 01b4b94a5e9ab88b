use crate::api::{parse_body, required_field, MAX_SUMMARY_INPUT_CHARS};
use crate::models::{ApiError, ApiResponse, SummarizeRequest};
use crate::services::summary_service::{summarize_text, SummaryStyle};
use crate::utils::truncate_chars;
use crate::AppState;
use log::{error, info};
use rocket::serde::json::{self, Json};
use rocket::{post, State};

#[post("/summarize", data = "<body>")]
pub async fn summarize(
    state: &State<AppState>,
    body: Result<Json<SummarizeRequest>, json::Error<'_>>,
) -> Result<Json<ApiResponse>, ApiError> {
    let request = parse_body(body)?;
    let text = required_field(request.text.as_deref())
        .ok_or_else(|| ApiError::bad_request("Text is required"))?;
    let style = SummaryStyle::from_json(request.summary_type.as_ref());

    let text = truncate_chars(text, MAX_SUMMARY_INPUT_CHARS);

    let summary = summarize_text(state.generator.as_ref(), text, &style)
        .await
        .map_err(|e| {
            error!("Summarization failed: {e}");
            ApiError::internal(e.to_string())
        })?;
    info!("Summarized {} chars as {style:?}", text.chars().count());

    Ok(Json(ApiResponse {
        success: true,
        summary: Some(summary),
        ..Default::default()
    }))
}
