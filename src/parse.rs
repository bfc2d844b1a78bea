use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

pub const DEFAULT_READ_TIME: u32 = 5;

/// Best-effort structured view of the model's response. Every field has an
/// independent fallback, so the labeled parse can never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPost {
    pub title: String,
    pub meta_description: String,
    pub keywords: String,
    pub read_time: u32,
    pub content: String,
    pub excerpt: Option<String>,
}

// Labels anchor on line start so a label echoed inside body prose is ignored.
static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^TITLE:[ \t]*(.+)$").unwrap());
static META_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^META_DESCRIPTION:[ \t]*(.+)$").unwrap());
static KEYWORDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^KEYWORDS:[ \t]*(.+)$").unwrap());
static READ_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^READ_TIME:[ \t]*(\d+)").unwrap());
static CONTENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)^CONTENT:\s*(.+)").unwrap());

/// Tolerant label-prefixed extraction. Missing fields fall back per field:
/// topic for the title, a generic topic sentence for the meta description,
/// the target keyword for keywords, 5 minutes for read time, and the whole
/// raw response for content.
pub fn parse_labeled(raw: &str, topic: &str, keyword: &str) -> ParsedPost {
    let field = |re: &Regex| {
        re.captures(raw)
            .map(|caps| caps[1].trim().to_string())
            .filter(|v| !v.is_empty())
    };

    let title = field(&TITLE_RE).unwrap_or_else(|| topic.to_string());
    let meta_description =
        field(&META_RE).unwrap_or_else(|| format!("Learn about {topic} - tips for adults 50+"));
    let keywords = field(&KEYWORDS_RE).unwrap_or_else(|| keyword.to_string());
    let read_time = READ_TIME_RE
        .captures(raw)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_READ_TIME);
    let content = CONTENT_RE
        .captures(raw)
        .map(|caps| caps[1].trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| raw.trim().to_string());

    ParsedPost {
        title,
        meta_description,
        keywords,
        read_time,
        content,
        excerpt: None,
    }
}

#[derive(Deserialize)]
struct JsonPost {
    title: String,
    meta_description: String,
    keywords: String,
    #[serde(default = "default_read_time")]
    read_time: u32,
    content: String,
    #[serde(default)]
    excerpt: Option<String>,
}

fn default_read_time() -> u32 {
    DEFAULT_READ_TIME
}

/// Strict variant: the response must be a JSON object with fixed keys,
/// optionally wrapped in a code fence. The only fatal parse path.
pub fn parse_json(raw: &str) -> Result<ParsedPost> {
    let body = strip_code_fence(raw);
    let post: JsonPost =
        serde_json::from_str(body).context("generation service did not return valid JSON")?;
    Ok(ParsedPost {
        title: post.title,
        meta_description: post.meta_description,
        keywords: post.keywords,
        read_time: post.read_time,
        content: post.content,
        excerpt: post.excerpt,
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the fence line (which may carry a language tag) and the closing fence.
    let body = rest.split_once('\n').map(|(_, b)| b).unwrap_or("");
    body.trim_end().trim_end_matches("```").trim()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_parses_all_fields() {
        let raw = "TITLE: Walking for Health\n\
                   META_DESCRIPTION: How to start walking safely after 50.\n\
                   KEYWORDS: walking, seniors, exercise\n\
                   READ_TIME: 6\n\
                   \n\
                   CONTENT:\n\
                   <h2>Start Small</h2>\n<p>Ten minutes counts.</p>";
        let post = parse_labeled(raw, "Walking", "walking seniors");
        assert_eq!(post.title, "Walking for Health");
        assert_eq!(post.meta_description, "How to start walking safely after 50.");
        assert_eq!(post.keywords, "walking, seniors, exercise");
        assert_eq!(post.read_time, 6);
        assert!(post.content.starts_with("<h2>Start Small</h2>"));
        assert!(!post.content.contains("CONTENT:"));
    }

    #[test]
    fn missing_labels_fall_back_per_field() {
        let raw = "TITLE: Five Tips\nCONTENT:\nHello";
        let post = parse_labeled(raw, "staying hydrated", "hydration tips elderly");
        assert_eq!(post.title, "Five Tips");
        assert_eq!(
            post.meta_description,
            "Learn about staying hydrated - tips for adults 50+"
        );
        assert_eq!(post.keywords, "hydration tips elderly");
        assert_eq!(post.read_time, DEFAULT_READ_TIME);
        assert_eq!(post.content, "Hello");
    }

    #[test]
    fn no_labels_at_all_still_yields_a_post() {
        let raw = "Just some prose the model produced instead of the format.";
        let post = parse_labeled(raw, "fall prevention", "fall prevention seniors");
        assert_eq!(post.title, "fall prevention");
        assert_eq!(post.content, raw);
    }

    #[test]
    fn label_echoed_mid_line_is_not_matched() {
        let raw = "CONTENT:\n<p>The model wrote TITLE: by accident here.</p>";
        let post = parse_labeled(raw, "topic", "kw");
        // Mid-line echo must not become the title
        assert_eq!(post.title, "topic");
        assert!(post.content.contains("TITLE: by accident"));
    }

    #[test]
    fn json_variant_parses_fenced_object() {
        let raw = "```json\n{\"title\": \"T\", \"meta_description\": \"M\", \
                   \"keywords\": \"k1, k2\", \"content\": \"<p>Body</p>\", \
                   \"excerpt\": \"Short.\"}\n```";
        let post = parse_json(raw).unwrap();
        assert_eq!(post.title, "T");
        assert_eq!(post.read_time, DEFAULT_READ_TIME);
        assert_eq!(post.excerpt.as_deref(), Some("Short."));
    }

    #[test]
    fn json_variant_fails_hard_on_prose() {
        assert!(parse_json("Sorry, I can't produce JSON today.").is_err());
    }
}
