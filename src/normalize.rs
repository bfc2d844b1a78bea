use std::sync::LazyLock;

use chrono::Local;
use rand::prelude::*;
use regex::Regex;

use crate::catalog::{self, ImageAsset, VideoAsset};
use crate::parse::ParsedPost;
use crate::request::IMAGE_SLOTS;
use crate::settings::Settings;

const ELLIPSIS: &str = "...";
const DEFAULT_THUMBNAIL: &str = "/assets/og-image.png";

/// A ParsedPost with every site constraint enforced: title ceiling, slug,
/// media markers resolved, and the run date fixed.
#[derive(Debug, Clone)]
pub struct NormalizedPost {
    pub title: String,
    pub meta_description: String,
    pub keywords: String,
    pub read_time: u32,
    pub content: String,
    pub excerpt: Option<String>,
    pub slug: String,
    /// Run date, `YYYY-MM-DD`.
    pub date: String,
    /// Thumbnail for the index card: first substituted image, else the og-image.
    pub thumbnail: String,
}

pub fn normalize(parsed: ParsedPost, category: &str, settings: &Settings) -> NormalizedPost {
    let mut rng = rand::rng();
    let images: Vec<ImageAsset> = catalog::images_for(category)
        .choose_multiple(&mut rng, IMAGE_SLOTS)
        .copied()
        .collect();
    let video = catalog::videos_for(category).choose(&mut rng).copied();

    let title = enforce_title(&parsed.title, settings.title_max_chars);
    let slug = derive_slug(&title, settings.slug_max_words);
    let content = substitute_media(&parsed.content, &images, video.as_ref());
    let thumbnail = images
        .first()
        .map(|img| img.url.to_string())
        .unwrap_or_else(|| DEFAULT_THUMBNAIL.to_string());

    NormalizedPost {
        title,
        meta_description: parsed.meta_description,
        keywords: parsed.keywords,
        read_time: parsed.read_time,
        content,
        excerpt: parsed.excerpt,
        slug,
        date: Local::now().format("%Y-%m-%d").to_string(),
        thumbnail,
    }
}

/// Truncate an over-long title at a word boundary and append an ellipsis.
/// The result is always within `max_chars`.
pub fn enforce_title(title: &str, max_chars: usize) -> String {
    let title = title.trim();
    if title.chars().count() <= max_chars {
        return title.to_string();
    }
    let budget = max_chars.saturating_sub(ELLIPSIS.len());
    let prefix: String = title.chars().take(budget).collect();
    let cut = match prefix.rfind(' ') {
        Some(idx) => prefix[..idx].trim_end(),
        None => prefix.as_str(),
    };
    format!("{cut}{ELLIPSIS}")
}

/// Lowercase the title, keep ascii-alphanumeric word runs, hyphen-join the
/// first `max_words` of them. Never empty, no edge hyphens.
pub fn derive_slug(title: &str, max_words: usize) -> String {
    let lower = title.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .take(max_words)
        .collect();
    if words.is_empty() {
        "post".to_string()
    } else {
        words.join("-")
    }
}

static LEFTOVER_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:IMAGE_\d+|VIDEO)\]\n?").unwrap());

/// Replace `[IMAGE_n]` and `[VIDEO]` markers with media fragments, then strip
/// any marker that had no fragment to fill it. Nothing bracketed survives.
pub fn substitute_media(
    content: &str,
    images: &[ImageAsset],
    video: Option<&VideoAsset>,
) -> String {
    let mut out = content.to_string();
    for (i, image) in images.iter().enumerate() {
        let marker = format!("[IMAGE_{}]", i + 1);
        out = out.replace(&marker, &image_fragment(image));
    }
    if let Some(video) = video {
        out = out.replace("[VIDEO]", &video_fragment(video));
    }
    LEFTOVER_MARKER_RE.replace_all(&out, "").into_owned()
}

fn image_fragment(image: &ImageAsset) -> String {
    format!(
        "<figure class=\"post-media\">\
         <img src=\"{}\" alt=\"{}\" loading=\"lazy\">\
         <figcaption>{}</figcaption>\
         </figure>",
        image.url, image.alt, image.caption
    )
}

fn video_fragment(video: &VideoAsset) -> String {
    format!(
        "<figure class=\"post-media\">\
         <iframe src=\"{}\" allowfullscreen></iframe>\
         <figcaption>{}</figcaption>\
         </figure>",
        video.embed_url, video.caption
    )
}

// ── Tests ──
