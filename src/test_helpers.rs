//! Shared test utilities for the pagesmith test suite.
//!
//! Stores come pre-loaded with deterministic ids, and lookups panic with a
//! list of what *was* there, so a failing test says more than `None`.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (mut store, project_id, home_id) = store_with_selected_home();
//! let hero = add(&mut store, HERO_MODERN);
//!
//! let page = store.current_page().unwrap();
//! assert_eq!(section_layout(page), vec![(hero, 0)]);
//! ```

use chrono::{DateTime, Utc};

use crate::ids::SequentialIds;
use crate::storage::MemoryStorage;
use crate::store::{NewPage, NewProject, PagePatch, ProjectStore};
use crate::types::{Page, Project, SectionInstance};

// =========================================================================
// Store setup
// =========================================================================

/// An empty, loaded in-memory store with `id-N` ids.
pub fn loaded_store() -> ProjectStore<MemoryStorage> {
    let mut store = ProjectStore::new(MemoryStorage::new()).with_ids(SequentialIds::default());
    store.load().unwrap();
    store
}

/// A store holding one project "Acme" with its home page selected.
///
/// Returns `(store, project_id, home_page_id)`.
pub fn store_with_selected_home() -> (ProjectStore<MemoryStorage>, String, String) {
    let mut store = loaded_store();
    let project = store.create_project(NewProject::named("Acme")).unwrap();
    let home_id = project.pages[0].id.clone();
    store.set_current_project(Some(&project.id));
    store.set_current_page(Some(&home_id));
    (store, project.id, home_id)
}

/// Append a section from `template_id` to the current page, returning its id.
pub fn add(store: &mut ProjectStore<MemoryStorage>, template_id: &str) -> String {
    store
        .add_section_from_template(template_id, None, None)
        .unwrap()
        .unwrap_or_else(|| panic!("no section added for {template_id}; is a page selected?"))
        .id
}

pub fn new_page(name: &str, slug: &str) -> NewPage {
    NewPage {
        name: name.to_string(),
        slug: slug.to_string(),
        ..Default::default()
    }
}

pub fn slug_patch(slug: &str) -> PagePatch {
    PagePatch {
        slug: Some(slug.to_string()),
        ..Default::default()
    }
}

pub fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .unwrap()
        .with_timezone(&Utc)
}

// =========================================================================
// Lookup helpers
// =========================================================================

/// Find a page by slug. Panics with the available slugs if not found.
pub fn find_page<'a>(project: &'a Project, slug: &str) -> &'a Page {
    project.page_by_slug(slug).unwrap_or_else(|| {
        let slugs: Vec<&str> = project.pages.iter().map(|p| p.slug.as_str()).collect();
        panic!("page '{slug}' not found in '{}'. Available: {slugs:?}", project.name)
    })
}

/// Find a section by id. Panics with the available ids if not found.
pub fn find_section<'a>(page: &'a Page, section_id: &str) -> &'a SectionInstance {
    page.section(section_id).unwrap_or_else(|| {
        let ids: Vec<&str> = page.sections.iter().map(|s| s.id.as_str()).collect();
        panic!("section '{section_id}' not found on '{}'. Available: {ids:?}", page.slug)
    })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// `(slug, order)` for every page, in vector order.
pub fn page_layout(project: &Project) -> Vec<(String, u32)> {
    project
        .pages
        .iter()
        .map(|p| (p.slug.clone(), p.order))
        .collect()
}

/// `(id, order)` for every section, in vector order.
pub fn section_layout(page: &Page) -> Vec<(String, u32)> {
    page.sections
        .iter()
        .map(|s| (s.id.clone(), s.order))
        .collect()
}
