//! Link classification.
//!
//! Maps a pasted link to the grocery template it should produce. This is a
//! pure function over the input text: malformed input is simply
//! [`LinkKind::Unrecognized`], never an error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Keywords that identify the one video recipe the mock extractor knows.
const KNOWN_RECIPE_KEYWORDS: &[&str] = &["buounn_bmy4", "masala", "paneer"];

/// Hosts whose links are treated as short-form social recipes.
const SOCIAL_KEYWORDS: &[&str] = &["tiktok", "instagram"];

/// Outcome bucket for a pasted link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Video link for a recipe the extractor has a full template for
    KnownRecipeVideo,
    /// Any other video link
    GenericVideo,
    /// TikTok or Instagram link without a video id
    Social,
    Unrecognized,
}

impl LinkKind {
    pub fn is_video(&self) -> bool {
        matches!(self, LinkKind::KnownRecipeVideo | LinkKind::GenericVideo)
    }
}

/// Result of classifying a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkClassification {
    pub kind: LinkKind,
    /// Video id, present exactly when `kind` is a video bucket
    pub video_id: Option<String>,
}

impl LinkClassification {
    /// Thumbnail for video links.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.video_id
            .as_ref()
            .map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
    }
}

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?:v=|be/|embed/|shorts/)([^&#\n]+)").expect("video id pattern is valid")
    })
}

/// Extracts a video id from a link.
///
/// Recognizes the id after `v=`, `be/`, `embed/` or `shorts/` (in any case)
/// and returns the first one found, up to the next `&`, `#` or newline.
///
/// # Examples
///
/// ```
/// # use tavolo_core::extract_video_id;
/// assert_eq!(
///     extract_video_id("https://youtu.be/abc123?t=4"),
///     Some("abc123?t=4".to_string())
/// );
/// assert_eq!(extract_video_id("plain-text-no-url"), None);
/// ```
pub fn extract_video_id(text: &str) -> Option<String> {
    video_id_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Classifies a pasted link.
pub fn classify_link(text: &str) -> LinkClassification {
    let lower = text.to_lowercase();
    let video_id = extract_video_id(text);

    let kind = if video_id.is_some() {
        if KNOWN_RECIPE_KEYWORDS.iter().any(|k| lower.contains(k)) {
            LinkKind::KnownRecipeVideo
        } else {
            LinkKind::GenericVideo
        }
    } else if SOCIAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
        LinkKind::Social
    } else {
        LinkKind::Unrecognized
    };

    log::debug!("Classified link as {kind:?} (video id: {video_id:?})");
    LinkClassification { kind, video_id }
}
