pub mod summary_service;
pub mod transcript_service;
