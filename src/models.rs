//! Data types for the profile, project descriptors, and the normalized
//! project records handed to the presentation layer.
//!
//! Field names follow the on-disk JSON exactly (camelCase), so existing
//! `myCV.json` and `content.json` files parse without changes. Optional
//! fields stay `Option` all the way through: a section without `bullets`
//! is different from a section with an empty `bullets` list, and both
//! survive loading unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Content files write `null` where a value is absent; treat it like a
/// missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Which catalog a project belongs to. Derived from the directory the
/// project was found under, never from the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Websites,
    Apps,
}

impl Category {
    /// Load order used by [`crate::loader::ContentLoader::load_all_projects`].
    pub const ALL: [Category; 2] = [Category::Websites, Category::Apps];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Websites => "websites",
            Category::Apps => "apps",
        }
    }

    /// Directory name under the public root.
    pub fn root_dir(&self) -> &'static str {
        match self {
            Category::Websites => "Websites",
            Category::Apps => "Apps",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "websites" => Ok(Category::Websites),
            "apps" => Ok(Category::Apps),
            other => Err(format!(
                "unknown category '{}'. Must be websites or apps.",
                other
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Profile (myCV.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMeta {
    pub slug: String,
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

/// A freeform profile section. Only the `about` variant exists today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights: Option<Vec<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: Vec<String>,
}

impl ProfileSection {
    pub fn is_about(&self) -> bool {
        self.kind == "about"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Contact link kinds shown in the hero and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Github,
    Linkedin,
    Email,
}

impl ContactKind {
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Github => "GitHub",
            ContactKind::Linkedin => "LinkedIn",
            ContactKind::Email => "Email",
        }
    }
}

impl ProfileLinks {
    /// Present, non-empty links in display order.
    pub fn entries(&self) -> Vec<(ContactKind, &str)> {
        [
            (ContactKind::Github, self.github.as_deref()),
            (ContactKind::Linkedin, self.linkedin.as_deref()),
            (ContactKind::Email, self.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(kind, url)| url.filter(|u| !u.is_empty()).map(|u| (kind, u)))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub meta: ProfileMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ProfileSection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: ProfileLinks,
}

impl Profile {
    pub fn about(&self) -> Option<&ProfileSection> {
        self.content.iter().find(|s| s.is_about())
    }
}

// ---------------------------------------------------------------------------
// Project descriptor (content.json)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// As written in the file. Kept raw so a typo or a disagreement with
    /// the containing directory can be reported instead of failing the load.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub short_description: String,
}

impl ProjectMeta {
    pub fn declared_category(&self) -> Option<Result<Category, String>> {
        self.category.as_deref().map(str::parse::<Category>)
    }

    /// A declared category that names the other catalog, or no catalog at
    /// all. Case is ignored; an absent category never disagrees.
    pub fn disagrees_with(&self, directory: Category) -> bool {
        self.declared_category()
            .is_some_and(|declared| declared != Ok(directory))
    }
}

/// The descriptor's own media block. Superseded by discovery; parsed only
/// so descriptors that carry it stay valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescriptorMedia {
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    pub meta: ProjectMeta,
    #[serde(default, deserialize_with = "null_as_default")]
    pub media: DescriptorMedia,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<ContentSection>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Links,
}

// ---------------------------------------------------------------------------
// Content sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_end: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Subsection>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subsection {
    pub subtitle: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_end: Option<Vec<String>>,
}

/// Subsection body: authors write either one paragraph or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    One(String),
    Many(Vec<String>),
}

impl Body {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Body::One(s) => std::slice::from_ref(s),
            Body::Many(v) => v,
        }
    }
}

/// Presence-checked view of a [`ContentSection`].
///
/// Absent and empty lists both come out as empty slices, so a renderer only
/// ever asks `is_empty()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView<'a> {
    pub kind: &'a str,
    pub title: &'a str,
    pub body: &'a [String],
    pub bullets: &'a [String],
    pub body_end: &'a [String],
    pub subsections: Vec<SubsectionView<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubsectionView<'a> {
    pub subtitle: &'a str,
    pub body: &'a [String],
    pub items: &'a [String],
    pub body_end: &'a [String],
}

impl SectionView<'_> {
    /// Nothing below the heading would render.
    pub fn is_blank(&self) -> bool {
        self.body.is_empty()
            && self.bullets.is_empty()
            && self.body_end.is_empty()
            && self.subsections.is_empty()
    }
}

fn present(list: &Option<Vec<String>>) -> &[String] {
    list.as_deref().unwrap_or(&[])
}

impl ContentSection {
    pub fn normalized(&self) -> SectionView<'_> {
        SectionView {
            kind: &self.kind,
            title: &self.title,
            body: present(&self.body),
            bullets: present(&self.bullets),
            body_end: present(&self.body_end),
            subsections: self
                .sections
                .as_deref()
                .unwrap_or(&[])
                .iter()
                .map(Subsection::normalized)
                .collect(),
        }
    }
}

impl Subsection {
    pub fn normalized(&self) -> SubsectionView<'_> {
        SubsectionView {
            subtitle: &self.subtitle,
            body: self.body.as_ref().map(Body::as_slice).unwrap_or(&[]),
            items: present(&self.items),
            body_end: present(&self.body_end),
        }
    }
}

// ---------------------------------------------------------------------------
// Status and links
// ---------------------------------------------------------------------------

/// Lifecycle stage. Unknown values are kept verbatim and displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stage {
    Production,
    AdvancedDevelopment,
    InDevelopment,
    Paused,
    Sunset,
    Archived,
    Other(String),
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Production => "production",
            Stage::AdvancedDevelopment => "advanced-development",
            Stage::InDevelopment => "in-development",
            Stage::Paused => "paused",
            Stage::Sunset => "sunset",
            Stage::Archived => "archived",
            Stage::Other(raw) => raw,
        }
    }

    /// Badge text for the project card and detail page.
    pub fn display(&self) -> &str {
        match self {
            Stage::Production => "🟢 Live in Production",
            Stage::AdvancedDevelopment => "🔵 Advanced Development",
            Stage::InDevelopment => "🔵 In Development",
            Stage::Paused => "🟠 Paused",
            Stage::Sunset => "🟠 Sunset",
            Stage::Archived => "⚪ Archived",
            Stage::Other(raw) => raw,
        }
    }
}

impl From<String> for Stage {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "production" => Stage::Production,
            "advanced-development" => Stage::AdvancedDevelopment,
            "in-development" => Stage::InDevelopment,
            "paused" => Stage::Paused,
            "sunset" => Stage::Sunset,
            "archived" => Stage::Archived,
            _ => Stage::Other(raw),
        }
    }
}

impl From<Stage> for String {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub stage: Stage,
    #[serde(default, deserialize_with = "null_as_default")]
    pub live: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_deployment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Status text for a possibly-missing status record.
pub fn status_display(status: Option<&Status>) -> &str {
    status.map(|s| s.stage.display()).unwrap_or("")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_store: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_study: Option<String>,
}

impl Links {
    /// Labelled links that are present and non-empty, in display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("Website", self.website.as_deref()),
            ("Source", self.github.as_deref()),
            ("App Store", self.app_store.as_deref()),
            ("Play Store", self.play_store.as_deref()),
            ("Case Study", self.case_study.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.filter(|u| !u.is_empty()).map(|u| (label, u)))
        .collect()
    }

    /// When true the whole links block is suppressed.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

// ---------------------------------------------------------------------------
// Normalized project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectImage {
    pub src: String,
    pub alt: String,
}

/// Descriptor metadata joined with media resolved from the `Preview` folder.
/// Rebuilt on every load.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProject {
    pub slug: String,
    pub category: Category,
    pub title: String,
    pub subtitle: Option<String>,
    pub short_description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub video_url: Option<String>,
    pub images: Vec<ProjectImage>,
    pub thumbnail_url: Option<String>,
    pub content: Vec<ContentSection>,
    pub status: Option<Status>,
    pub links: Links,
    pub folder_path: String,
}

impl NormalizedProject {
    pub fn has_video(&self) -> bool {
        self.video_url.is_some()
    }

    pub fn has_images(&self) -> bool {
        !self.images.is_empty()
    }

    pub fn has_media(&self) -> bool {
        self.has_video() || self.has_images()
    }

    pub fn address(&self) -> ProjectAddress {
        ProjectAddress {
            category: self.category,
            slug: self.slug.clone(),
        }
    }

    pub fn status_display(&self) -> &str {
        status_display(self.status.as_ref())
    }
}

/// `(category, slug)` key of a project detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectAddress {
    pub category: Category,
    pub slug: String,
}

impl fmt::Display for ProjectAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.slug)
    }
}
