mod api;
mod catalog;
mod index;
mod normalize;
mod parse;
mod render;
mod request;
mod settings;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use catalog::TopicSpec;
use render::RenderedPost;
use request::GenerationRequest;

#[derive(Parser)]
#[command(name = "generate_blog", about = "SteadiDay blog post generator")]
struct Cli {
    /// Topic override; a random catalog topic is used when omitted
    topic: Option<String>,

    /// Ask the model for a JSON object and parse it strictly
    #[arg(long)]
    json_response: bool,

    /// Directory holding the posts and the blog index
    #[arg(long)]
    blog_dir: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = settings::Settings::load()?;

    println!("SteadiDay Blog Generator");
    println!("========================\n");
    println!("Website URL: {}", settings.website_url);
    println!("Blog base URL: {}\n", settings.blog_base_url());

    let topic = match cli.topic.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => {
            println!("Topic (override): {}", t);
            TopicSpec::custom(t)
        }
        _ => {
            let t = catalog::random_topic();
            println!("Topic (random): {}", t.topic);
            t
        }
    };

    let gen_request = GenerationRequest::new(topic.clone(), &settings, cli.json_response);
    info!(topic = %topic.topic, category = %topic.category, json = cli.json_response, "requesting draft");
    println!("Generating blog content...");
    let raw = api::generate(&settings, &gen_request.prompt())?;

    // The labeled parse always succeeds; the JSON variant is the one fatal path.
    let parsed = if cli.json_response {
        parse::parse_json(&raw)?
    } else {
        parse::parse_labeled(&raw, &topic.topic, &topic.keyword)
    };
    println!(
        "Title: {} ({} chars)",
        parsed.title,
        parsed.title.chars().count()
    );

    let normalized = normalize::normalize(parsed, &topic.category, &settings);
    let rendered = render::render(normalized, &settings)?;
    println!("Canonical URL: {}", rendered.canonical_url);

    let blog_dir = cli
        .blog_dir
        .unwrap_or_else(|| PathBuf::from(&settings.blog_dir));
    fs::create_dir_all(&blog_dir)
        .with_context(|| format!("cannot create blog dir {}", blog_dir.display()))?;
    let post_path = blog_dir.join(&rendered.filename);
    fs::write(&post_path, &rendered.html)
        .with_context(|| format!("cannot write {}", post_path.display()))?;
    println!("Saved: {}", post_path.display());

    // Post file first, index second: a crash in between leaves a post that is
    // simply not listed yet. The index patch never fails the run.
    index::apply(&blog_dir, &rendered)?;

    emit_ci_outputs(&rendered)?;

    println!("\nDone.");
    Ok(())
}

/// key=value lines for CI: appended to the GITHUB_ENV file when set,
/// printed to stdout otherwise.
fn emit_ci_outputs(rendered: &RenderedPost) -> Result<()> {
    let pairs = [
        ("BLOG_TITLE", rendered.post.title.as_str()),
        ("BLOG_SLUG", rendered.post.slug.as_str()),
        ("BLOG_DATE", rendered.post.date.as_str()),
        ("BLOG_FILENAME", rendered.filename.as_str()),
    ];

    match std::env::var("GITHUB_ENV") {
        Ok(path) if !path.is_empty() => {
            let mut file = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("cannot open GITHUB_ENV file {path}"))?;
            for (key, value) in pairs {
                writeln!(file, "{key}={value}")?;
            }
        }
        _ => {
            for (key, value) in pairs {
                println!("[ENV] {key}={value}");
            }
        }
    }
    Ok(())
}
