use crate::catalog::{self, TopicSpec};
use crate::settings::Settings;

/// How many `[IMAGE_n]` slots the prompt asks the model to place.
pub const IMAGE_SLOTS: usize = 2;

/// Everything the prompt needs, fixed before the single service call.
#[derive(Debug)]
pub struct GenerationRequest {
    pub topic: TopicSpec,
    pub word_range: (u32, u32),
    pub section_range: (u32, u32),
    pub title_max_chars: usize,
    pub free_feature: &'static str,
    pub premium_feature: &'static str,
    pub json_response: bool,
}

impl GenerationRequest {
    pub fn new(topic: TopicSpec, settings: &Settings, json_response: bool) -> Self {
        let (free_feature, premium_feature) = catalog::random_features();
        GenerationRequest {
            topic,
            word_range: (800, 1200),
            section_range: (3, 5),
            title_max_chars: settings.title_max_chars,
            free_feature,
            premium_feature,
            json_response,
        }
    }

    /// Render the full natural-language instruction for the generation service.
    pub fn prompt(&self) -> String {
        let format_block = if self.json_response {
            self.json_format_block()
        } else {
            self.labeled_format_block()
        };

        format!(
            "You are a health and wellness content writer for SteadiDay, a mobile app for adults 50+.\n\
             \n\
             Write a blog post about: \"{topic}\"\n\
             \n\
             TARGET AUDIENCE:\n\
             - Adults aged 50 and older\n\
             - People interested in maintaining health and independence\n\
             - Those who may be managing medications or health conditions\n\
             - People who appreciate practical, actionable advice\n\
             \n\
             BLOG REQUIREMENTS:\n\
             1. Title: Engaging, clear, SEO-friendly, and UNDER {title_max} CHARACTERS (this is critical for SEO)\n\
             2. Length: {min_words}-{max_words} words\n\
             3. Tone: Warm, encouraging, respectful (never condescending)\n\
             4. Structure:\n\
             \x20  - Compelling introduction\n\
             \x20  - {min_sections}-{max_sections} main sections with clear subheadings\n\
             \x20  - Practical, actionable tips\n\
             \x20  - Natural mention of how SteadiDay's {free_feature} or {premium_feature} can help\n\
             \x20  - Encouraging conclusion\n\
             \n\
             5. Include:\n\
             \x20  - At least one relevant statistic with source\n\
             \x20  - Real-world examples readers can relate to\n\
             \x20  - Simple, clear language\n\
             \x20  - The markers {image_markers} where an illustrative photo fits, and [VIDEO] where a short video fits\n\
             \n\
             {format_block}\n\
             \n\
             Remember: Help the reader genuinely, position SteadiDay as a helpful tool, not the focus.",
            topic = self.topic.topic,
            title_max = self.title_max_chars,
            min_words = self.word_range.0,
            max_words = self.word_range.1,
            min_sections = self.section_range.0,
            max_sections = self.section_range.1,
            free_feature = self.free_feature,
            premium_feature = self.premium_feature,
            image_markers = image_marker_list(),
        )
    }

    fn labeled_format_block(&self) -> String {
        format!(
            "FORMAT YOUR RESPONSE EXACTLY LIKE THIS:\n\
             TITLE: Your Title Here (MUST be under {} characters)\n\
             META_DESCRIPTION: 150-160 character description for SEO\n\
             KEYWORDS: keyword1, keyword2, keyword3\n\
             READ_TIME: X\n\
             \n\
             CONTENT:\n\
             [Your blog post content in HTML format - use <h2>, <h3>, <p>, <ul>, <li>, <blockquote> tags]",
            self.title_max_chars
        )
    }

    fn json_format_block(&self) -> String {
        "RESPOND WITH A SINGLE JSON OBJECT AND NOTHING ELSE, with these keys:\n\
         {\"title\": \"...\", \"meta_description\": \"...\", \"keywords\": \"...\", \
         \"read_time\": 5, \"content\": \"...HTML...\", \"excerpt\": \"...\"}"
            .to_string()
    }
}

fn image_marker_list() -> String {
    (1..=IMAGE_SLOTS)
        .map(|i| format!("[IMAGE_{i}]"))
        .collect::<Vec<_>>()
        .join(" and ")
}

// ── Tests ──
