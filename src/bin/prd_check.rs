use anyhow::{bail, Context, Result};
use prd_generator_lib::{generate_prd, PrdSettings, ProjectMetadata, StoryParser};
use std::env;
use std::path::Path;

const USAGE: &str =
    "Usage: prd_check <stories_path> [--json] [--settings <file.toml>] [--metadata <file.toml>]";

struct Args {
    stories_path: String,
    json: bool,
    settings_path: Option<String>,
    metadata_path: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut stories_path = None;
    let mut json = false;
    let mut settings_path = None;
    let mut metadata_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--settings" => settings_path = Some(args.next().context("--settings needs a path")?),
            "--metadata" => metadata_path = Some(args.next().context("--metadata needs a path")?),
            flag if flag.starts_with("--") => bail!("unknown flag {}\n{}", flag, USAGE),
            _ => stories_path = Some(arg),
        }
    }

    Ok(Args {
        stories_path: stories_path.context(USAGE)?,
        json,
        settings_path,
        metadata_path,
    })
}

fn load_metadata(path: Option<&str>) -> Result<ProjectMetadata> {
    let mut metadata = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read metadata file {}", path))?;
            ProjectMetadata::from_toml_str(&content)
                .with_context(|| format!("Invalid metadata in {}", path))?
        }
        None => ProjectMetadata::default(),
    };

    // The generation date is owned by the caller, never by the library
    if metadata.date.is_none() {
        metadata.date = Some(chrono::Local::now().date_naive());
    }
    Ok(metadata)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;

    let settings = match args.settings_path.as_deref() {
        Some(path) => PrdSettings::load(Path::new(path))?,
        None => PrdSettings::default(),
    };
    let parser = StoryParser::with_settings(settings.parser)?;
    let metadata = load_metadata(args.metadata_path.as_deref())?;

    let raw_text = std::fs::read_to_string(&args.stories_path)
        .with_context(|| format!("Failed to read stories from {}", args.stories_path))?;

    let stories = parser.parse(&raw_text);
    let sections = generate_prd(&stories, &metadata);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    println!("Parsed {} stories from {}", stories.len(), args.stories_path);
    for (idx, story) in stories.iter().enumerate() {
        let points = story
            .story_points
            .map(|p| p.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  US-{:03} [{}] {} (points={}, criteria={})",
            idx + 1,
            story.priority,
            story.title,
            points,
            story.acceptance_criteria.len()
        );
    }

    println!("Sections:");
    for section in &sections {
        println!("  {} ({} chars)", section.title, section.content.chars().count());
    }

    Ok(())
}
