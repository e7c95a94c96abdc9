//! Export the loaded catalog as JSON for the static site build.
//!
//! Produces a single document holding the profile, every normalized
//! project, and the list of addressable `(category, slug)` pages. The
//! `digest` is a SHA-256 over the serialized projects so a build can tell
//! whether anything changed since the last export.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

use crate::config::Config;
use crate::loader::ContentLoader;
use crate::models::{NormalizedProject, Profile, ProjectAddress};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub generated_at: DateTime<Utc>,
    pub digest: String,
    pub profile: Option<Profile>,
    pub projects: Vec<NormalizedProject>,
    pub slugs: Vec<ProjectAddress>,
}

/// Hex SHA-256 of the projects as serialized JSON.
pub fn projects_digest(projects: &[NormalizedProject]) -> Result<String> {
    let bytes = serde_json::to_vec(projects)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

pub fn build_catalog(loader: &ContentLoader) -> Result<Catalog> {
    let projects = loader.load_all_projects();
    let slugs = projects.iter().map(NormalizedProject::address).collect();
    let digest = projects_digest(&projects)?;

    Ok(Catalog {
        generated_at: Utc::now(),
        digest,
        profile: loader.load_profile(),
        projects,
        slugs,
    })
}

/// Export the catalog as pretty JSON.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub fn run_export(config: &Config, output: Option<&Path>) -> Result<()> {
    let loader = ContentLoader::new(&config.content.root)?;
    let catalog = build_catalog(&loader)?;
    let json = serde_json::to_string_pretty(&catalog)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), digest = %catalog.digest, "catalog written");
            eprintln!(
                "Exported {} projects{} to {}",
                catalog.projects.len(),
                if catalog.profile.is_some() {
                    " and profile"
                } else {
                    ""
                },
                path.display()
            );
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}
