//! Read-only inspection commands: `profile`, `list`, `show`, `slugs`, `check`.
//!
//! Each command builds a fresh [`ContentLoader`] and prints to stdout.
//! `show` exits non-zero when the project does not exist, like `ctx get`.

use anyhow::Result;

use crate::analytics::{AnalyticsEvent, AnalyticsSink, Props};
use crate::config::Config;
use crate::conventions;
use crate::loader::ContentLoader;
use crate::models::Category;

fn loader(config: &Config) -> Result<ContentLoader> {
    ContentLoader::new(&config.content.root)
}

pub fn run_profile(config: &Config, sink: &dyn AnalyticsSink) -> Result<()> {
    let Some(profile) = loader(config)?.load_profile() else {
        println!("No profile found.");
        return Ok(());
    };
    sink.track(&AnalyticsEvent::PortfolioOpened, None);

    println!("--- Profile ---");
    println!("name:     {}", profile.meta.title);
    if !profile.meta.subtitle.is_empty() {
        println!("title:    {}", profile.meta.subtitle);
    }
    if let Some(ref tagline) = profile.meta.tagline {
        println!("tagline:  {}", tagline);
    }

    if let Some(about) = profile.about() {
        println!();
        println!("--- {} ---", about.title);
        if let Some(ref intro) = about.intro {
            println!("{}", intro);
        }
        for paragraph in &about.body {
            println!("{}", paragraph);
        }
        for highlight in about.highlights.as_deref().unwrap_or(&[]) {
            println!("  - {}", highlight);
        }
    }

    let links = profile.links.entries();
    if !links.is_empty() {
        println!();
        println!("--- Links ---");
        for (kind, url) in links {
            println!("{:<10} {}", kind.label(), url);
        }
    }

    Ok(())
}

pub fn run_list(config: &Config, category: Option<Category>) -> Result<()> {
    let loader = loader(config)?;
    let projects = match category {
        Some(c) => loader.load_projects_by_category(c),
        None => loader.load_all_projects(),
    };

    if projects.is_empty() {
        println!("No projects found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<24} {:<32} {:<24} {:>6} {:>5}",
        "CATEGORY", "SLUG", "TITLE", "STATUS", "IMAGES", "VIDEO"
    );
    println!("{}", "-".repeat(106));
    for p in &projects {
        println!(
            "{:<10} {:<24} {:<32} {:<24} {:>6} {:>5}",
            p.category.as_str(),
            p.slug,
            p.title,
            p.status_display(),
            p.images.len(),
            if p.has_video() { "yes" } else { "no" }
        );
    }
    println!();
    println!("{} project(s)", projects.len());

    Ok(())
}

/// Full project record as JSON.
pub fn run_show(
    config: &Config,
    category: Category,
    slug: &str,
    sink: &dyn AnalyticsSink,
) -> Result<()> {
    let project = match loader(config)?.find_project_by_slug(category, slug) {
        Some(p) => p,
        None => {
            eprintln!("Error: project not found: {}/{}", category, slug);
            std::process::exit(1);
        }
    };

    let mut props = Props::new();
    props.insert("category".to_string(), category.to_string());
    sink.track(&AnalyticsEvent::ViewProject(project.slug.clone()), Some(&props));

    println!("{}", serde_json::to_string_pretty(&project)?);
    Ok(())
}

pub fn run_slugs(config: &Config) -> Result<()> {
    for address in loader(config)?.list_all_slugs() {
        println!("{}", address);
    }
    Ok(())
}

/// Content problems worth fixing before a build. Informational only.
pub fn run_check(config: &Config) -> Result<()> {
    let loader = loader(config)?;
    let mut problems = 0usize;

    if loader.load_profile().is_none() {
        println!("warning: no readable profile (myCV.json)");
        problems += 1;
    }

    for mismatch in loader.category_mismatches() {
        println!(
            "warning: {}/{} declares category '{}'; using '{}'",
            mismatch.directory.root_dir(),
            mismatch.folder,
            mismatch.declared,
            mismatch.directory
        );
        problems += 1;
    }

    for category in Category::ALL {
        let folders = loader.list_project_folders(category);
        let projects = loader.load_projects_by_category(category);
        for folder in &folders {
            let prefix = conventions::url_prefix(category, folder);
            let loaded = projects.iter().any(|p| p.folder_path == prefix);
            if !loaded {
                println!(
                    "warning: {}/{} has no usable content.json",
                    category.root_dir(),
                    folder
                );
                problems += 1;
            }
        }
        for project in projects.iter().filter(|p| !p.has_media()) {
            println!("note: {} has no preview media", project.address());
        }
    }

    if problems == 0 {
        println!("ok");
    } else {
        println!("{} problem(s)", problems);
    }
    Ok(())
}
