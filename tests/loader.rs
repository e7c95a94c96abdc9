//! Loader behaviour over real content trees built in a temp directory.

use std::fs;
use std::path::Path;

use folio::error::LoadError;
use folio::loader::ContentLoader;
use folio::models::{Body, Category, Stage};
use tempfile::TempDir;

const FULL_DESCRIPTOR: &str = r#"{
  "meta": {
    "slug": "field-notes",
    "title": "Field Notes",
    "subtitle": "Offline-first journaling",
    "category": "apps",
    "type": "mobile-app",
    "shortDescription": "A notebook that syncs when it can."
  },
  "media": { "video": "Preview/old.mp4", "images": ["Preview/old.png"] },
  "content": [
    {
      "type": "overview",
      "title": "Overview",
      "body": ["First paragraph.", "Second paragraph."],
      "bullets": ["Offline", "Encrypted"],
      "bodyEnd": ["Closing words."]
    },
    {
      "type": "architecture",
      "title": "Architecture",
      "sections": [
        { "subtitle": "Sync", "body": "CRDT based.", "items": ["merge", "replay"] },
        { "subtitle": "Storage", "body": ["SQLite", "Blob store"], "bodyEnd": ["More later."] }
      ]
    }
  ],
  "status": {
    "stage": "advanced-development",
    "live": false,
    "usedBy": "beta testers",
    "criticality": "low",
    "storeDeployment": "TestFlight"
  },
  "links": {
    "website": null,
    "github": "https://git.example/field-notes",
    "appStore": "https://apps.example/field-notes",
    "playStore": null,
    "caseStudy": null
  }
}"#;

fn write(path: &Path, contents: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn minimal_descriptor(slug: &str, title: &str) -> String {
    format!(
        r#"{{"meta": {{"slug": "{}", "title": "{}", "type": "web", "shortDescription": "s"}},
            "content": [], "status": {{"stage": "production", "live": true}}, "links": {{}}}}"#,
        slug, title
    )
}

fn project(root: &Path, category_dir: &str, folder: &str, slug: &str) {
    write(
        &root.join(category_dir).join(folder).join("content.json"),
        &minimal_descriptor(slug, folder),
    );
}

#[test]
fn folder_without_descriptor_is_excluded() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Websites", "Shop", "shop");
    fs::create_dir_all(tmp.path().join("Websites").join("Draft").join("Preview")).unwrap();

    let loader = ContentLoader::new(tmp.path()).unwrap();
    assert_eq!(loader.list_project_folders(Category::Websites), vec!["Draft", "Shop"]);

    let projects = loader.load_projects_by_category(Category::Websites);
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].slug, "shop");
}

#[test]
fn hidden_folders_are_not_projects() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Apps", ".Archived", "archived");
    project(tmp.path(), "Apps", "Tracker", "tracker");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    assert_eq!(loader.list_project_folders(Category::Apps), vec!["Tracker"]);
}

#[test]
fn no_preview_folder_means_no_media() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Apps", "Tracker", "tracker");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let p = loader.find_project_by_slug(Category::Apps, "tracker").unwrap();
    assert_eq!(p.video_url, None);
    assert!(p.images.is_empty());
    assert_eq!(p.thumbnail_url, None);
}

#[test]
fn video_subfolder_wins_over_preview() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Websites", "Shop", "shop");
    let preview = tmp.path().join("Websites").join("Shop").join("Preview");
    write(&preview.join("Video").join("a.mp4"), "v");
    write(&preview.join("b.mov"), "v");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let p = loader.find_project_by_slug(Category::Websites, "shop").unwrap();
    assert_eq!(
        p.video_url.as_deref(),
        Some("/Websites/Shop/Preview/Video/a.mp4")
    );
    assert!(p.has_video());
}

#[test]
fn video_directly_in_preview_is_used_when_no_subfolder() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Apps", "Tracker", "tracker");
    write(
        &tmp.path().join("Apps").join("Tracker").join("Preview").join("demo.M4V"),
        "v",
    );

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let p = loader.find_project_by_slug(Category::Apps, "tracker").unwrap();
    assert_eq!(p.video_url.as_deref(), Some("/Apps/Tracker/Preview/demo.M4V"));
}

#[test]
fn images_thumbnail_and_alt_text() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Websites", "Shop", "shop");
    let preview = tmp.path().join("Websites").join("Shop").join("Preview");
    write(&preview.join("x.png"), "i");
    write(&preview.join("y.jpg"), "i");
    write(&preview.join(".thumb.png"), "i");
    write(&preview.join("readme.md"), "i");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let p = loader.find_project_by_slug(Category::Websites, "shop").unwrap();

    assert_eq!(p.images.len(), 2);
    assert_eq!(p.images[0].src, "/Websites/Shop/Preview/x.png");
    assert_eq!(p.thumbnail_url.as_deref(), Some("/Websites/Shop/Preview/x.png"));
    assert_eq!(p.images[0].alt, "Shop screenshot 1");
    assert!(p.images[1].alt.ends_with("screenshot 2"));
    assert_eq!(p.video_url, None);
}

#[test]
fn all_projects_is_websites_then_apps() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Apps", "Alpha", "alpha-app");
    project(tmp.path(), "Websites", "Zeta", "zeta-site");
    project(tmp.path(), "Websites", "Beta", "beta-site");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let websites = loader.load_projects_by_category(Category::Websites);
    let apps = loader.load_projects_by_category(Category::Apps);
    let all = loader.load_all_projects();

    assert_eq!(all.len(), websites.len() + apps.len());
    let categories: Vec<Category> = all.iter().map(|p| p.category).collect();
    assert_eq!(
        categories,
        vec![Category::Websites, Category::Websites, Category::Apps]
    );

    let slugs: Vec<String> = loader.list_all_slugs().iter().map(|a| a.to_string()).collect();
    assert_eq!(
        slugs,
        vec!["websites/beta-site", "websites/zeta-site", "apps/alpha-app"]
    );
}

#[test]
fn find_nonexistent_slug_is_none() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Apps", "Tracker", "tracker");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    assert!(loader.find_project_by_slug(Category::Apps, "nonexistent").is_none());
    // Slugs are scoped to their category.
    assert!(loader.find_project_by_slug(Category::Websites, "tracker").is_none());
}

#[test]
fn duplicate_slug_first_folder_wins() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Websites", "A-Original", "shop");
    project(tmp.path(), "Websites", "B-Copy", "shop");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let p = loader.find_project_by_slug(Category::Websites, "shop").unwrap();
    assert_eq!(p.folder_path, "/Websites/A-Original");
}

#[test]
fn descriptor_fields_pass_through_unchanged() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp.path().join("Apps").join("FieldNotes").join("content.json"),
        FULL_DESCRIPTOR,
    );

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let p = loader.find_project_by_slug(Category::Apps, "field-notes").unwrap();

    assert_eq!(p.title, "Field Notes");
    assert_eq!(p.subtitle.as_deref(), Some("Offline-first journaling"));
    assert_eq!(p.short_description, "A notebook that syncs when it can.");
    assert_eq!(p.kind, "mobile-app");

    assert_eq!(p.content.len(), 2);
    assert_eq!(p.content[0].bullets.as_ref().unwrap().len(), 2);
    assert_eq!(
        p.content[0].body_end.as_deref(),
        Some(&["Closing words.".to_string()][..])
    );
    assert!(p.content[0].sections.is_none());
    let subs = p.content[1].sections.as_ref().unwrap();
    assert_eq!(subs[0].body, Some(Body::One("CRDT based.".to_string())));
    assert_eq!(subs[1].body.as_ref().unwrap().as_slice().len(), 2);

    let status = p.status.as_ref().unwrap();
    assert_eq!(status.stage, Stage::AdvancedDevelopment);
    assert!(!status.live);
    assert_eq!(status.store_deployment.as_deref(), Some("TestFlight"));
    assert_eq!(p.status_display(), "🔵 Advanced Development");

    assert_eq!(p.links.github.as_deref(), Some("https://git.example/field-notes"));
    assert_eq!(p.links.website, None);
    assert_eq!(p.links.entries().len(), 2);

    // The descriptor's own media block is ignored.
    assert!(p.images.is_empty());
    assert_eq!(p.video_url, None);

    // Section JSON survives a serialize round trip with the same shape.
    let original: serde_json::Value = serde_json::from_str(FULL_DESCRIPTOR).unwrap();
    let normalized = serde_json::to_value(&p).unwrap();
    assert_eq!(normalized["content"], original["content"]);
    assert_eq!(normalized["status"], original["status"]);
}

#[test]
fn malformed_descriptor_does_not_block_siblings() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Apps", "Alpha", "alpha");
    write(
        &tmp.path().join("Apps").join("Broken").join("content.json"),
        "{ \"meta\": { \"slug\": ",
    );
    project(tmp.path(), "Apps", "Gamma", "gamma");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let slugs: Vec<String> = loader
        .load_projects_by_category(Category::Apps)
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(slugs, vec!["alpha", "gamma"]);
}

#[test]
fn profile_loads_and_degrades() {
    let tmp = TempDir::new().unwrap();
    let loader = ContentLoader::new(tmp.path()).unwrap();
    assert!(loader.load_profile().is_none());

    write(&tmp.path().join("myCV.json"), "not json");
    assert!(loader.load_profile().is_none());

    write(
        &tmp.path().join("myCV.json"),
        r#"{
          "meta": {"slug": "me", "title": "Ada Example", "subtitle": "Engineer",
                   "category": "profile", "type": "cv", "shortDescription": "Builds things",
                   "tagline": "Small tools, sharp edges"},
          "content": [{"type": "about", "title": "About", "intro": "Hi.",
                       "highlights": ["Rust", "Mobile"], "body": ["Para one."]}],
          "links": {"github": "https://git.example/ada", "email": "ada@example.com"}
        }"#,
    );
    let profile = loader.load_profile().unwrap();
    assert_eq!(profile.meta.title, "Ada Example");
    assert_eq!(profile.meta.tagline.as_deref(), Some("Small tools, sharp edges"));
    let about = profile.about().unwrap();
    assert_eq!(about.highlights.as_ref().unwrap().len(), 2);
    assert_eq!(profile.links.entries().len(), 2);
    assert_eq!(profile.links.linkedin, None);
}

#[test]
fn category_comes_from_directory_not_descriptor() {
    let tmp = TempDir::new().unwrap();
    // Declares "apps" but lives under Websites/.
    write(
        &tmp.path().join("Websites").join("FieldNotes").join("content.json"),
        FULL_DESCRIPTOR,
    );

    let loader = ContentLoader::new(tmp.path()).unwrap();
    assert!(loader.find_project_by_slug(Category::Apps, "field-notes").is_none());
    let p = loader
        .find_project_by_slug(Category::Websites, "field-notes")
        .unwrap();
    assert_eq!(p.category, Category::Websites);

    let mismatches = loader.category_mismatches();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].folder, "FieldNotes");
    assert_eq!(mismatches[0].declared, "apps");
}

#[test]
fn hidden_videos_are_never_selected() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Websites", "Shop", "shop");
    let preview = tmp.path().join("Websites").join("Shop").join("Preview");
    write(&preview.join("Video").join(".a.mp4"), "v");
    write(&preview.join(".a.mov"), "v");
    write(&preview.join("b.mov"), "v");

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let p = loader.find_project_by_slug(Category::Websites, "shop").unwrap();
    assert_eq!(p.video_url.as_deref(), Some("/Websites/Shop/Preview/b.mov"));

    fs::remove_file(preview.join("b.mov")).unwrap();
    let p = loader.find_project_by_slug(Category::Websites, "shop").unwrap();
    assert_eq!(p.video_url, None);
}

#[test]
fn null_fields_in_descriptor_still_load() {
    let cases = [
        ("links", r#""links": null"#),
        ("media", r#""media": null"#),
        ("media.images", r#""media": {"video": null, "images": null}"#),
        ("content", r#""content": null"#),
    ];

    for (field, fragment) in cases {
        let tmp = TempDir::new().unwrap();
        write(
            &tmp.path().join("Apps").join("P").join("content.json"),
            &format!(
                r#"{{"meta": {{"slug": "p", "title": "P", "subtitle": null, "type": "app",
                              "shortDescription": "s"}},
                    "status": {{"stage": "paused", "live": false}},
                    {}}}"#,
                fragment
            ),
        );
        write(
            &tmp.path().join("Apps").join("P").join("Preview").join("shot.png"),
            "i",
        );

        let loader = ContentLoader::new(tmp.path()).unwrap();
        let p = loader
            .find_project_by_slug(Category::Apps, "p")
            .unwrap_or_else(|| panic!("project with null {} was dropped", field));
        assert_eq!(p.thumbnail_url.as_deref(), Some("/Apps/P/Preview/shot.png"));
        assert_eq!(p.status_display(), "🟠 Paused");
    }
}

#[test]
fn profile_with_null_meta_strings_loads() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp.path().join("myCV.json"),
        r#"{"meta": {"slug": "me", "title": "Me", "subtitle": null, "category": null,
                     "type": null, "shortDescription": null},
            "content": null, "links": null}"#,
    );

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let profile = loader.load_profile().unwrap();
    assert_eq!(profile.meta.title, "Me");
    assert!(profile.content.is_empty());
    assert!(profile.links.entries().is_empty());
}

#[test]
fn unreadable_descriptor_does_not_block_siblings() {
    let tmp = TempDir::new().unwrap();
    project(tmp.path(), "Websites", "Alpha", "alpha");
    let broken = tmp.path().join("Websites").join("Broken").join("content.json");
    fs::create_dir_all(broken.parent().unwrap()).unwrap();
    fs::write(&broken, [0xc3, 0x28, 0xff, 0xfe]).unwrap();
    project(tmp.path(), "Websites", "Gamma", "gamma");

    let err = folio::loader::read_json::<serde_json::Value>(&broken).unwrap_err();
    assert!(matches!(err, LoadError::UnreadableFile { .. }));

    let loader = ContentLoader::new(tmp.path()).unwrap();
    let slugs: Vec<String> = loader
        .load_projects_by_category(Category::Websites)
        .into_iter()
        .map(|p| p.slug)
        .collect();
    assert_eq!(slugs, vec!["alpha", "gamma"]);
}
