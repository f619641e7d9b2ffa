//! # Pagesmith
//!
//! The core of a section-based website builder. A project is a small tree:
//!
//! ```text
//! Project ("Acme")
//! ├── Page  home   [home page, order 0]
//! │   ├── SectionInstance  header-simple-001  (order 0)
//! │   └── SectionInstance  hero-modern-001    (order 1)
//! └── Page  about  [order 1]
//!     └── SectionInstance  about-team-002     (order 0)
//! ```
//!
//! Users build pages by placing sections from a fixed catalog of templates,
//! edit their content, reorder and duplicate them, then export the project
//! as standalone static HTML styled by a theme.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | The entity tree and its stored record shape |
//! | [`content`] | Typed section payloads, one variant per template |
//! | [`catalog`] | The 16 built-in section templates and their default content |
//! | [`store`] | `ProjectStore`: every mutation, selection, and the invariants they keep |
//! | [`storage`] | The `Storage` trait plus in-memory and JSON-file adapters |
//! | [`migrate`] | Upgrades flat-section records to the paged shape on load |
//! | [`naming`] | Slug normalization and validation, copy-slug derivation |
//! | [`theme`] | Built-in themes, CSS variable and font URL generation |
//! | [`export`] | Deterministic static HTML rendering with Maud |
//! | [`config`] | `pagesmith.toml` loading, merging, and validation |
//! | [`ids`] | Id generation behind a trait so tests get stable ids |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Store As Sole Writer
//!
//! Nothing but [`store::ProjectStore`] mutates projects or talks to storage.
//! Each mutation works on a copy of the project, saves it, and only then
//! swaps it in, so the in-memory tree never runs ahead of what is stored.
//!
//! ## Typed Section Content
//!
//! On disk a section is a `templateId` plus an opaque `data` object. In
//! memory it is a [`content::SectionContent`] enum, so the exporter's
//! dispatch is an exhaustive `match`. Records from other versions that do not
//! parse survive as `Unknown` and export as a comment marker.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): malformed markup
//! is a build error and every interpolated string is escaped.

pub mod catalog;
pub mod config;
pub mod content;
pub mod export;
pub mod ids;
pub mod migrate;
pub mod naming;
pub mod output;
pub mod storage;
pub mod store;
pub mod theme;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
