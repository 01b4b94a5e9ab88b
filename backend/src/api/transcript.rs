use crate::api::{parse_body, required_field};
use crate::models::{ApiError, ApiResponse, TranscribeRequest};
use crate::services::summary_service::{summarize_text, SummaryStyle};
use crate::services::transcript_service::get_transcript_text;
use crate::utils::extract_youtube_video_id;
use crate::AppState;
use log::{error, info};
use rocket::serde::json::{self, Json};
use rocket::{post, State};

fn video_id_from(request: &TranscribeRequest) -> Result<String, ApiError> {
    let url = required_field(request.url.as_deref())
        .ok_or_else(|| ApiError::bad_request("URL is required"))?;

    extract_youtube_video_id(url).ok_or_else(|| {
        info!("Rejected URL without a video id: {url}");
        ApiError::bad_request("Invalid YouTube URL")
    })
}

#[post("/transcribe", data = "<body>")]
pub async fn transcribe(
    state: &State<AppState>,
    body: Result<Json<TranscribeRequest>, json::Error<'_>>,
) -> Result<Json<ApiResponse>, ApiError> {
    let request = parse_body(body)?;
    let video_id = video_id_from(&request)?;

    let transcript = get_transcript_text(
        state.transcripts.as_ref(),
        &video_id,
        &state.transcript_languages,
    )
    .await;
    info!("Transcribed video {video_id} ({} chars)", transcript.chars().count());

    Ok(Json(ApiResponse {
        success: true,
        video_id: Some(video_id),
        transcript: Some(transcript),
        ..Default::default()
    }))
}

/// Summarizes whatever text came back, including a failure message.
#[post("/transcribe-and-summarize", data = "<body>")]
pub async fn transcribe_and_summarize(
    state: &State<AppState>,
    body: Result<Json<TranscribeRequest>, json::Error<'_>>,
) -> Result<Json<ApiResponse>, ApiError> {
    let request = parse_body(body)?;
    let video_id = video_id_from(&request)?;
    let style = SummaryStyle::from_json(request.summary_type.as_ref());

    let transcript = get_transcript_text(
        state.transcripts.as_ref(),
        &video_id,
        &state.transcript_languages,
    )
    .await;

    let summary = summarize_text(state.generator.as_ref(), &transcript, &style)
        .await
        .map_err(|e| {
            error!("Summarization failed for video {video_id}: {e}");
            ApiError::internal(e.to_string())
        })?;
    info!("Transcribed and summarized video {video_id} as {style:?}");

    Ok(Json(ApiResponse {
        success: true,
        video_id: Some(video_id),
        transcript: Some(transcript),
        summary: Some(summary),
    }))
}
