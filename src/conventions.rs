//! The on-disk layout of the public content tree.
//!
//! ```text
//! <public_root>/myCV.json
//! <public_root>/<Websites|Apps>/<Folder>/content.json
//! <public_root>/<Websites|Apps>/<Folder>/Preview/*.{png,jpg,jpeg,gif,webp}
//! <public_root>/<Websites|Apps>/<Folder>/Preview/Video/*.{mp4,mov,webm,avi,m4v}
//! <public_root>/<Websites|Apps>/<Folder>/Preview/*.{mp4,mov,webm,avi,m4v}
//! ```
//!
//! The layout is fixed. Everything the loader knows about it lives here so
//! it can be read and tested without touching JSON parsing.

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

use crate::models::Category;

pub const PROFILE_FILE: &str = "myCV.json";
pub const DESCRIPTOR_FILE: &str = "content.json";
pub const PREVIEW_DIR: &str = "Preview";

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "avi", "m4v"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// One place media is looked for: a directory (relative to the project
/// folder) and the extensions accepted there.
#[derive(Debug, Clone, Copy)]
pub struct MediaRule {
    pub kind: MediaKind,
    pub dir: &'static [&'static str],
    pub extensions: &'static [&'static str],
}

impl MediaRule {
    /// Relative URL path of the rule's directory, e.g. `Preview/Video`.
    pub fn url_dir(&self) -> String {
        self.dir.join("/")
    }
}

/// Scan order. Within a kind, earlier rules win: the first video found
/// under `Preview/Video` beats any video sitting directly in `Preview`.
pub const MEDIA_RULES: &[MediaRule] = &[
    MediaRule {
        kind: MediaKind::Image,
        dir: &[PREVIEW_DIR],
        extensions: IMAGE_EXTENSIONS,
    },
    MediaRule {
        kind: MediaKind::Video,
        dir: &[PREVIEW_DIR, "Video"],
        extensions: VIDEO_EXTENSIONS,
    },
    MediaRule {
        kind: MediaKind::Video,
        dir: &[PREVIEW_DIR],
        extensions: VIDEO_EXTENSIONS,
    },
];

/// Public URL prefix of a project folder: `/Websites/<folder>` or
/// `/Apps/<folder>`.
pub fn url_prefix(category: Category, folder: &str) -> String {
    format!("/{}/{}", category.root_dir(), folder)
}

/// Case-insensitive match on file names ending in any of `extensions`.
pub fn extension_set(extensions: &[&str]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for ext in extensions {
        let glob = GlobBuilder::new(&format!("*.{}", ext))
            .case_insensitive(true)
            .literal_separator(true)
            .build()?;
        builder.add(glob);
    }
    builder.build()
}

/// Dot-files and dot-directories are never content.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
