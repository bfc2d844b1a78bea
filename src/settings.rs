use anyhow::{Context, Result};
use config::Config;
use serde::Deserialize;

/// Site and generation settings. Defaults match production; any field can be
/// overridden with a `BLOG_*` environment variable (e.g. `BLOG_TITLE_MAX_CHARS=55`).
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Custom domain. Canonical URLs are always built from this.
    pub website_url: String,
    /// Hosting fallback URL. Kept here so nobody reintroduces it by accident:
    /// it must never appear in a canonical URL (duplicate-content penalty).
    pub pages_url: String,
    pub blog_dir: String,
    pub title_max_chars: usize,
    pub slug_max_words: usize,
    pub model: String,
    pub max_tokens: u32,
    pub api_base: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let cfg = Config::builder()
            .set_default("website_url", "https://www.steadiday.com")?
            .set_default("pages_url", "https://steadiday.github.io/steadiday")?
            .set_default("blog_dir", "blog")?
            .set_default("title_max_chars", 60)?
            .set_default("slug_max_words", 6)?
            .set_default("model", "claude-sonnet-4-20250514")?
            .set_default("max_tokens", 3000)?
            .set_default("api_base", "https://api.anthropic.com")?
            .add_source(config::Environment::with_prefix("BLOG").try_parsing(true))
            .build()?;
        cfg.try_deserialize().context("invalid BLOG_* settings")
    }

    pub fn blog_base_url(&self) -> String {
        format!("{}/blog", self.website_url)
    }
}

#[cfg(test)]
impl Default for Settings {
    fn default() -> Self {
        Settings {
            website_url: "https://www.steadiday.com".to_string(),
            pages_url: "https://steadiday.github.io/steadiday".to_string(),
            blog_dir: "blog".to_string(),
            title_max_chars: 60,
            slug_max_words: 6,
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 3000,
            api_base: "https://api.anthropic.com".to_string(),
        }
    }
}

// ── Tests ──
