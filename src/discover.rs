//! Directory listings and media discovery for project folders.
//!
//! Listings are one level deep and sorted by file name, so the same tree
//! always yields the same order. A missing directory is reported as
//! [`LoadError::MissingDirectory`]; individual entries that cannot be
//! inspected are skipped with a warning.

use std::path::Path;

use globset::GlobSet;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::conventions::{self, MediaKind, MediaRule, MEDIA_RULES, PREVIEW_DIR};
use crate::error::LoadError;

/// Media paths relative to the project folder (`Preview/a.png`,
/// `Preview/Video/demo.mp4`), in precedence order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscoveredMedia {
    pub images: Vec<String>,
    pub videos: Vec<String>,
}

/// What to keep from a one-level listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

fn list_entries(dir: &Path, kind: EntryKind) -> Result<Vec<String>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::MissingDirectory(dir.to_path_buf()));
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    let mut names = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        let keep = match kind {
            EntryKind::Dir => entry.file_type().is_dir(),
            EntryKind::File => entry.file_type().is_file(),
        };
        if !keep {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non UTF-8 name");
            continue;
        };
        if conventions::is_hidden(name) {
            continue;
        }
        names.push(name.to_string());
    }

    Ok(names)
}

/// Immediate, non-hidden subdirectories of `dir`.
pub fn list_subdirectories(dir: &Path) -> Result<Vec<String>, LoadError> {
    list_entries(dir, EntryKind::Dir)
}

/// Non-hidden files directly in `dir` whose name matches `set`.
pub fn list_files_matching(dir: &Path, set: &GlobSet) -> Result<Vec<String>, LoadError> {
    Ok(list_entries(dir, EntryKind::File)?
        .into_iter()
        .filter(|name| set.is_match(name))
        .collect())
}

/// Applies [`MEDIA_RULES`] to a project folder.
pub struct MediaScanner {
    rules: Vec<(MediaRule, GlobSet)>,
}

impl MediaScanner {
    pub fn new() -> Result<Self, globset::Error> {
        let mut rules = Vec::with_capacity(MEDIA_RULES.len());
        for rule in MEDIA_RULES {
            rules.push((*rule, conventions::extension_set(rule.extensions)?));
        }
        Ok(Self { rules })
    }

    /// Never fails: a missing `Preview` folder or an unreadable rule
    /// directory contributes nothing.
    pub fn discover(&self, project_dir: &Path) -> DiscoveredMedia {
        let mut media = DiscoveredMedia::default();

        if !project_dir.join(PREVIEW_DIR).is_dir() {
            debug!(project = %project_dir.display(), "no Preview folder");
            return media;
        }

        for (rule, set) in &self.rules {
            let dir = rule
                .dir
                .iter()
                .fold(project_dir.to_path_buf(), |path, part| path.join(part));

            let files = match list_files_matching(&dir, set) {
                Ok(files) => files,
                Err(e) if e.is_absence() => continue,
                Err(e) => {
                    warn!(error = %e, "media directory skipped");
                    continue;
                }
            };

            let url_dir = rule.url_dir();
            let target = match rule.kind {
                MediaKind::Image => &mut media.images,
                MediaKind::Video => &mut media.videos,
            };
            target.extend(files.into_iter().map(|f| format!("{}/{}", url_dir, f)));
        }

        media
    }
}
