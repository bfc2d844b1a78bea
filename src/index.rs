use std::fs;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;
use tracing::warn;

use crate::render::RenderedPost;

/// Sentinel in blog/index.html after which new cards are spliced.
pub const ENTRIES_MARKER: &str = "<!--BLOG_ENTRIES_START-->";

const FEATURED_CLASS: &str = "class=\"blog-card featured\"";
const PLAIN_CLASS: &str = "class=\"blog-card\"";

/// Build the summary card for a post. The new card is always featured; the
/// patch demotes whichever card held that status before.
pub fn entry_card(rendered: &RenderedPost) -> String {
    let post = &rendered.post;
    let excerpt = post.excerpt.as_deref().unwrap_or(&post.meta_description);
    let formatted_date = NaiveDate::parse_from_str(&post.date, "%Y-%m-%d")
        .map(|d| d.format("%B %d, %Y").to_string())
        .unwrap_or_else(|_| post.date.clone());

    format!(
        "<article {FEATURED_CLASS}>\n\
         \x20   <a href=\"{filename}\" class=\"blog-card-link\">\n\
         \x20       <img class=\"blog-card-thumb\" src=\"{thumbnail}\" alt=\"\" loading=\"lazy\">\n\
         \x20       <div class=\"blog-card-body\">\n\
         \x20           <h2>{title}</h2>\n\
         \x20           <p class=\"blog-card-meta\">{formatted_date} &bull; {read_time} min read</p>\n\
         \x20           <p class=\"blog-card-excerpt\">{excerpt}</p>\n\
         \x20       </div>\n\
         \x20   </a>\n\
         </article>",
        filename = rendered.filename,
        thumbnail = post.thumbnail,
        title = post.title,
        read_time = post.read_time,
    )
}

/// Textual patch: demote the current featured card, then splice the new card
/// directly after the marker so the newest post lists first. Returns None when
/// the marker is absent; the marker itself is never moved or duplicated.
pub fn patch(index_html: &str, card: &str) -> Option<String> {
    let demoted = index_html.replace(FEATURED_CLASS, PLAIN_CLASS);
    let marker_end = demoted.find(ENTRIES_MARKER)? + ENTRIES_MARKER.len();

    let mut out = String::with_capacity(demoted.len() + card.len() + 2);
    out.push_str(&demoted[..marker_end]);
    out.push('\n');
    out.push_str(card);
    out.push_str(&demoted[marker_end..]);
    Some(out)
}

/// Best-effort read-modify-write of blog/index.html. A missing file or missing
/// marker logs a warning and succeeds: the index never blocks post creation.
/// Single-writer assumption; concurrent runs are out of scope.
pub fn apply(blog_dir: &Path, rendered: &RenderedPost) -> Result<()> {
    let index_path = blog_dir.join("index.html");
    let existing = match fs::read_to_string(&index_path) {
        Ok(html) => html,
        Err(err) => {
            warn!(path = %index_path.display(), error = %err, "blog index missing; skipping index update");
            return Ok(());
        }
    };

    match patch(&existing, &entry_card(rendered)) {
        Some(updated) => {
            fs::write(&index_path, updated)?;
            println!("Updated index: {}", index_path.display());
        }
        None => {
            warn!(marker = ENTRIES_MARKER, "marker not found in blog index; skipping index update");
        }
    }
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizedPost;
    use crate::render;
    use crate::settings::Settings;

    const INDEX_FIXTURE: &str = "<html><body>\n\
        <main class=\"blog-list\">\n\
        <!--BLOG_ENTRIES_START-->\n\
        </main>\n\
        </body></html>";

    fn rendered(slug: &str, title: &str) -> RenderedPost {
        let post = NormalizedPost {
            title: title.to_string(),
            meta_description: format!("About {title}."),
            keywords: "kw".to_string(),
            read_time: 5,
            content: "<p>Body</p>".to_string(),
            excerpt: None,
            slug: slug.to_string(),
            date: "2026-08-30".to_string(),
            thumbnail: "/assets/og-image.png".to_string(),
        };
        render::render(post, &Settings::default()).unwrap()
    }

    #[test]
    fn card_inserted_after_marker_as_featured() {
        let card = entry_card(&rendered("five-tips", "Five Tips"));
        let patched = patch(INDEX_FIXTURE, &card).unwrap();
        let marker_pos = patched.find(ENTRIES_MARKER).unwrap();
        let card_pos = patched.find(FEATURED_CLASS).unwrap();
        assert!(card_pos > marker_pos);
        assert!(patched.contains("2026-08-30-five-tips.html"));
    }

    #[test]
    fn two_updates_leave_one_featured_newest_first() {
        let first = entry_card(&rendered("first-post", "First Post"));
        let second = entry_card(&rendered("second-post", "Second Post"));

        let once = patch(INDEX_FIXTURE, &first).unwrap();
        let twice = patch(&once, &second).unwrap();

        assert_eq!(twice.matches(FEATURED_CLASS).count(), 1);
        assert_eq!(twice.matches("<article ").count(), 2);
        assert_eq!(twice.matches(ENTRIES_MARKER).count(), 1);

        let marker_pos = twice.find(ENTRIES_MARKER).unwrap();
        let second_pos = twice.find("second-post").unwrap();
        let first_pos = twice.find("first-post").unwrap();
        assert!(marker_pos < second_pos);
        assert!(second_pos < first_pos);
    }

    #[test]
    fn missing_marker_returns_none() {
        let card = entry_card(&rendered("a-post", "A Post"));
        assert!(patch("<html><body>no marker here</body></html>", &card).is_none());
    }

    #[test]
    fn apply_tolerates_missing_index_file() {
        let dir = tempfile::tempdir().unwrap();
        let post = rendered("lonely-post", "Lonely Post");
        apply(dir.path(), &post).unwrap();
        assert!(!dir.path().join("index.html").exists());
    }

    #[test]
    fn apply_patches_index_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let index_path = dir.path().join("index.html");
        fs::write(&index_path, INDEX_FIXTURE).unwrap();

        apply(dir.path(), &rendered("on-disk", "On Disk")).unwrap();

        let updated = fs::read_to_string(&index_path).unwrap();
        assert!(updated.contains("2026-08-30-on-disk.html"));
        assert_eq!(updated.matches(FEATURED_CLASS).count(), 1);
    }
}
