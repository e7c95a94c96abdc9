//! The content loader: profile, project folders, and normalized projects.
//!
//! Every operation here is best-effort. A missing, unreadable, or malformed
//! file turns into `None` (single lookups) or is dropped from the result
//! (collections), with a `tracing` diagnostic. Nothing returned by
//! [`ContentLoader`] is an error except construction.
//!
//! # Example
//!
//! ```no_run
//! use folio::loader::ContentLoader;
//! use folio::models::Category;
//!
//! let loader = ContentLoader::new("public")?;
//! for project in loader.load_projects_by_category(Category::Apps) {
//!     println!("{} -> {:?}", project.slug, project.thumbnail_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::conventions::{self, DESCRIPTOR_FILE, PROFILE_FILE};
use crate::discover::{self, MediaScanner};
use crate::error::LoadError;
use crate::models::{
    Category, NormalizedProject, Profile, ProjectAddress, ProjectDescriptor, ProjectImage,
};

/// A project whose descriptor claims a different category than the
/// directory it lives in. The directory wins; this is reported so the
/// content can be fixed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMismatch {
    pub folder: String,
    pub directory: Category,
    pub declared: String,
}

pub struct ContentLoader {
    root: PathBuf,
    scanner: MediaScanner,
}

/// Read and parse a JSON file, classifying every failure.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    if !path.is_file() {
        return Err(LoadError::MissingFile(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Loader boundary: expected absence is quiet, anything else is a warning.
fn absorb<T>(result: Result<T, LoadError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) if e.is_absence() => {
            debug!(error = %e, "content absent");
            None
        }
        Err(e) => {
            warn!(error = %e, "content skipped");
            None
        }
    }
}

impl ContentLoader {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            scanner: MediaScanner::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn category_root(&self, category: Category) -> PathBuf {
        self.root.join(category.root_dir())
    }

    pub fn load_profile(&self) -> Option<Profile> {
        absorb(read_json(&self.root.join(PROFILE_FILE)))
    }

    /// Non-hidden subdirectories of the category root, sorted by name.
    /// Empty when the root does not exist.
    pub fn list_project_folders(&self, category: Category) -> Vec<String> {
        absorb(discover::list_subdirectories(&self.category_root(category))).unwrap_or_default()
    }

    fn read_descriptor(&self, folder: &str, category: Category) -> Option<ProjectDescriptor> {
        let path = self.category_root(category).join(folder).join(DESCRIPTOR_FILE);
        absorb(read_json(&path))
    }

    pub fn load_project(&self, folder: &str, category: Category) -> Option<NormalizedProject> {
        let descriptor = self.read_descriptor(folder, category)?;
        let project_dir = self.category_root(category).join(folder);
        let media = self.scanner.discover(&project_dir);
        let folder_path = conventions::url_prefix(category, folder);

        if descriptor.meta.disagrees_with(category) {
            warn!(
                folder,
                directory = %category,
                declared = descriptor.meta.category.as_deref().unwrap_or_default(),
                "descriptor category disagrees with directory; using directory"
            );
        }

        let video_url = media
            .videos
            .first()
            .map(|video| format!("{}/{}", folder_path, video));

        let images: Vec<ProjectImage> = media
            .images
            .iter()
            .enumerate()
            .map(|(i, image)| ProjectImage {
                src: format!("{}/{}", folder_path, image),
                alt: format!("{} screenshot {}", descriptor.meta.title, i + 1),
            })
            .collect();

        let thumbnail_url = images.first().map(|image| image.src.clone());

        let ProjectDescriptor {
            meta,
            content,
            status,
            links,
            ..
        } = descriptor;

        Some(NormalizedProject {
            slug: meta.slug,
            category,
            title: meta.title,
            subtitle: meta.subtitle,
            short_description: meta.short_description,
            kind: meta.kind,
            video_url,
            images,
            thumbnail_url,
            content,
            status,
            links,
            folder_path,
        })
    }

    pub fn load_projects_by_category(&self, category: Category) -> Vec<NormalizedProject> {
        let projects: Vec<NormalizedProject> = self
            .list_project_folders(category)
            .iter()
            .filter_map(|folder| self.load_project(folder, category))
            .collect();
        debug!(category = %category, count = projects.len(), "projects loaded");
        projects
    }

    /// Websites first, then apps.
    pub fn load_all_projects(&self) -> Vec<NormalizedProject> {
        Category::ALL
            .iter()
            .flat_map(|category| self.load_projects_by_category(*category))
            .collect()
    }

    /// First project in `category` with a matching slug.
    pub fn find_project_by_slug(&self, category: Category, slug: &str) -> Option<NormalizedProject> {
        self.load_projects_by_category(category)
            .into_iter()
            .find(|p| p.slug == slug)
    }

    pub fn list_all_slugs(&self) -> Vec<ProjectAddress> {
        self.load_all_projects()
            .iter()
            .map(NormalizedProject::address)
            .collect()
    }

    /// Projects whose descriptor `meta.category` differs from the directory
    /// they were loaded from. Descriptors without a category are not
    /// reported.
    pub fn category_mismatches(&self) -> Vec<CategoryMismatch> {
        let mut mismatches = Vec::new();
        for category in Category::ALL {
            for folder in self.list_project_folders(category) {
                let Some(descriptor) = self.read_descriptor(&folder, category) else {
                    continue;
                };
                if !descriptor.meta.disagrees_with(category) {
                    continue;
                }
                mismatches.push(CategoryMismatch {
                    folder,
                    directory: category,
                    declared: descriptor.meta.category.unwrap_or_default(),
                });
            }
        }
        mismatches
    }
}
