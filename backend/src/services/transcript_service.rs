use log::{info, warn};
use yt_transcript_rs::api::YouTubeTranscriptApi;
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};

/// Why a transcript could not be produced. The `Display` text is what callers
/// see in place of the transcript.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscriptFailure {
    #[error("Transcript is disabled for this video.")]
    Disabled,
    #[error("No transcript available for this video.")]
    NotFound,
    #[error("Could not retrieve transcript. YouTube may have blocked the request.")]
    Blocked,
    #[error("Unexpected error fetching transcript: {0}")]
    Unexpected(String),
}

impl From<CouldNotRetrieveTranscript> for TranscriptFailure {
    fn from(err: CouldNotRetrieveTranscript) -> Self {
        match err.reason {
            Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled) => Self::Disabled,
            Some(CouldNotRetrieveTranscriptReason::NoTranscriptFound { .. }) => Self::NotFound,
            _ => Self::Blocked,
        }
    }
}

#[rocket::async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the caption track for `video_id` in the first available language
    /// of `languages`, joined into one string.
    async fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<String, TranscriptFailure>;
}

/// Scrapes captions straight from YouTube. One upstream call per request, no retries.
#[derive(Debug, Default)]
pub struct YtTranscriptProvider;

#[rocket::async_trait]
impl TranscriptProvider for YtTranscriptProvider {
    async fn fetch_transcript(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<String, TranscriptFailure> {
        let languages: Vec<&str> = languages.iter().map(String::as_str).collect();

        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptFailure::Unexpected(e.to_string()))?;

        let transcript = api.fetch_transcript(video_id, &languages, false).await?;

        let parts = transcript.parts();
        info!("Fetched {} captions for video ID: {video_id}", parts.len());

        Ok(parts
            .iter()
            .map(|snippet| snippet.text.as_str())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Never fails: provider failures come back as their human readable text so
/// the route can still answer 200 with it in the `transcript` field.
pub async fn get_transcript_text(
    provider: &dyn TranscriptProvider,
    video_id: &str,
    languages: &[String],
) -> String {
    match provider.fetch_transcript(video_id, languages).await {
        Ok(text) => text,
        Err(failure) => {
            warn!("Failed to fetch transcript for video ID {video_id}: {failure:?}");
            failure.to_string()
        }
    }
}
