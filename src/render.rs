use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use crate::normalize::NormalizedPost;
use crate::settings::Settings;

const POST_TEMPLATE: &str = include_str!("../templates/post.html");

/// The final artifact: full document plus where it lives.
#[derive(Debug, Clone)]
pub struct RenderedPost {
    pub post: NormalizedPost,
    pub html: String,
    pub filename: String,
    pub canonical_url: String,
}

/// Pure merge of a normalized post into the page template.
/// The canonical URL is built from the custom domain only; `pages_url`
/// must never leak into the document. Fields are substituted verbatim,
/// without HTML escaping (exact parity with the published site).
pub fn render(post: NormalizedPost, settings: &Settings) -> Result<RenderedPost> {
    let filename = format!("{}-{}.html", post.date, post.slug);
    let canonical_url = format!("{}/{}", settings.blog_base_url(), filename);

    let date = NaiveDate::parse_from_str(&post.date, "%Y-%m-%d")
        .with_context(|| format!("bad post date {:?}", post.date))?;
    let formatted_date = date.format("%B %d, %Y").to_string();
    let iso_date = format!("{}T00:00:00", post.date);
    let year = date.year().to_string();
    let read_time = post.read_time.to_string();

    let html = fill(
        POST_TEMPLATE,
        &[
            ("title", &post.title),
            ("meta_description", &post.meta_description),
            ("keywords", &post.keywords),
            ("canonical_url", &canonical_url),
            ("website_url", &settings.website_url),
            ("iso_date", &iso_date),
            ("formatted_date", &formatted_date),
            ("read_time", &read_time),
            ("content", &post.content),
            ("year", &year),
        ],
    );

    Ok(RenderedPost {
        post,
        html,
        filename,
        canonical_url,
    })
}

/// Named-placeholder substitution: every `{name}` token is replaced verbatim.
fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{name}}}"), value);
    }
    out
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> NormalizedPost {
        NormalizedPost {
            title: "Five Tips".to_string(),
            meta_description: "A short description.".to_string(),
            keywords: "tips, seniors".to_string(),
            read_time: 5,
            content: "<p>Hello</p>".to_string(),
            excerpt: None,
            slug: "five-tips".to_string(),
            date: "2026-08-30".to_string(),
            thumbnail: "/assets/blog/morning-tea.jpg".to_string(),
        }
    }

    #[test]
    fn filename_is_date_then_slug() {
        let rendered = render(sample_post(), &Settings::default()).unwrap();
        assert_eq!(rendered.filename, "2026-08-30-five-tips.html");
    }

    #[test]
    fn canonical_url_uses_custom_domain_only() {
        let settings = Settings::default();
        let rendered = render(sample_post(), &settings).unwrap();
        assert_eq!(
            rendered.canonical_url,
            "https://www.steadiday.com/blog/2026-08-30-five-tips.html"
        );
        // The hosting fallback must never appear anywhere in the document
        assert!(!rendered.html.contains(&settings.pages_url));
        assert!(!rendered.html.contains("github.io"));
    }

    #[test]
    fn document_declares_exactly_one_canonical_url() {
        let rendered = render(sample_post(), &Settings::default()).unwrap();
        let needle = format!("<link rel=\"canonical\" href=\"{}\">", rendered.canonical_url);
        assert_eq!(rendered.html.matches(&needle).count(), 1);
        assert_eq!(rendered.html.matches("rel=\"canonical\"").count(), 1);
    }

    #[test]
    fn all_placeholders_are_filled() {
        let rendered = render(sample_post(), &Settings::default()).unwrap();
        for token in [
            "{title}",
            "{meta_description}",
            "{keywords}",
            "{canonical_url}",
            "{website_url}",
            "{iso_date}",
            "{formatted_date}",
            "{read_time}",
            "{content}",
            "{year}",
        ] {
            assert!(!rendered.html.contains(token), "unfilled {token}");
        }
        assert!(rendered.html.contains("<p>Hello</p>"));
        assert!(rendered.html.contains("August 30, 2026"));
        assert!(rendered.html.contains("&copy; 2026"));
    }

    #[test]
    fn fields_are_substituted_verbatim() {
        let mut post = sample_post();
        post.title = "Ampersands & Angles <kept>".to_string();
        let rendered = render(post, &Settings::default()).unwrap();
        assert!(rendered.html.contains("Ampersands & Angles <kept>"));
    }
}
