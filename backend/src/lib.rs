#[macro_use]
extern crate rocket;

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::AppConfig;
use crate::services::summary_service::{GeminiClient, TextGenerator};
use crate::services::transcript_service::{TranscriptProvider, YtTranscriptProvider};
use rocket::data::{Limits, ToByteUnit};
use rocket::{Build, Config, Rocket};
use std::sync::Arc;

/// JSON body cap in MiB. Long text is truncated by the handlers, so the
/// body limit only has to stop absurd payloads.
pub const JSON_BODY_LIMIT_MIB: u64 = 64;

pub struct AppState {
    pub transcripts: Arc<dyn TranscriptProvider>,
    pub generator: Arc<dyn TextGenerator>,
    pub transcript_languages: Vec<String>,
}

pub fn create_app_state(config: &AppConfig) -> AppState {
    let gemini = GeminiClient::new(&config.gemini_api_key, &config.gemini_model)
        .with_base_url(&config.gemini_base_url);
    log::info!(
        "Using Gemini model {} with transcript languages {:?}",
        gemini.model(),
        config.transcript_languages
    );

    AppState {
        transcripts: Arc::new(YtTranscriptProvider),
        generator: Arc::new(gemini),
        transcript_languages: config.transcript_languages.clone(),
    }
}

/// Routes and catchers over `state`, without fairings.
pub fn build_rocket(state: AppState) -> Rocket<Build> {
    let figment = Config::figment().merge((
        "limits",
        Limits::default().limit("json", JSON_BODY_LIMIT_MIB.mebibytes()),
    ));

    rocket::custom(figment)
        .manage(state)
        .mount("/", routes![api::index])
        .mount(
            "/api",
            routes![api::transcribe, api::summarize, api::transcribe_and_summarize],
        )
        .register("/", catchers![api::json_catcher])
}
