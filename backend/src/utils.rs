use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tried in order; the first capture wins.
    static ref VIDEO_ID_PATTERNS: [Regex; 4] = [
        Regex::new(r"v=([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"be/([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"embed/([a-zA-Z0-9_-]{11})").unwrap(),
        Regex::new(r"^([a-zA-Z0-9_-]{11})$").unwrap(),
    ];
}

/// Extract the 11 character video id from a watch, short-link or embed URL,
/// or from a bare id.
pub fn extract_youtube_video_id(url: &str) -> Option<String> {
    VIDEO_ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
    })
}

/// Cut `text` down to at most `max_chars` characters (not bytes).
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
