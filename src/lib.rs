//! # Folio
//!
//! Build-time content loader for a portfolio site.
//!
//! Folio reads a `public/` tree by convention: a profile in `myCV.json`,
//! one folder per project under `Websites/` and `Apps/`, each with a
//! `content.json` descriptor and an optional `Preview/` folder of
//! screenshots and videos. It turns that tree into normalized project
//! records for the presentation layer and can export them as JSON.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌────────────────────┐
//! │  public/     │──▶│   Loader     │──▶│ NormalizedProject  │
//! │ JSON + media │   │ parse+scan   │   │ Profile            │
//! └──────────────┘   └──────────────┘   └─────────┬──────────┘
//!                                                 │
//!                           ┌─────────────────────┤
//!                           ▼                     ▼
//!                      ┌──────────┐         ┌──────────┐
//!                      │   CLI    │         │  Export  │
//!                      │ (folio)  │         │  (JSON)  │
//!                      └──────────┘         └──────────┘
//! ```
//!
//! Loading is best-effort: a broken project disappears from the catalog
//! instead of failing the build.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Profile, descriptor, and normalized project types |
//! | [`conventions`] | Fixed directory and extension layout |
//! | [`discover`] | Directory listings and media discovery |
//! | [`loader`] | Profile and project loading |
//! | [`analytics`] | Event names and sinks |
//! | [`export`] | Catalog JSON export |
//! | [`inspect`] | Inspection commands |
//! | [`error`] | Load failure taxonomy |

pub mod analytics;
pub mod config;
pub mod conventions;
pub mod discover;
pub mod error;
pub mod export;
pub mod inspect;
pub mod loader;
pub mod models;
