//! The project store: single owner and writer of the entity tree.
//!
//! A [`ProjectStore`] holds every loaded [`Project`], the current selection,
//! and the [`Storage`] it persists to. All edits go through it.
//!
//! ## Lifecycle
//!
//! A fresh store is *loading*: it rejects mutations with
//! [`StoreError::Loading`] until [`ProjectStore::load`] has read, migrated,
//! and sorted every stored project and seeded the template catalog.
//! [`ProjectStore::open`] does both steps.
//!
//! ## Mutation discipline
//!
//! Every mutation edits a clone of the affected project, writes the clone to
//! storage, and only then swaps it into memory. A failed write leaves the
//! in-memory tree exactly as it was.
//!
//! ## Errors vs. no-ops
//!
//! - Bad user input (empty names, bad slugs) → [`StoreError::Validation`].
//! - Deleting the home page → [`StoreError::HomePageProtected`].
//! - Storage faults → [`StoreError::Storage`].
//! - Stale references (unknown project, page, section, or template ids) are
//!   logged and ignored, so a UI holding an outdated id never crashes.
//!   [`ProjectStore::create_page`] is the one exception: it must hand back a
//!   page, so an unknown project is [`StoreError::ProjectNotFound`].
//!
//! ## Selection
//!
//! The current project and page are held as ids, never copies, so readers
//! always see the committed state. Section operations act on the current
//! page only.

use crate::catalog;
use crate::content::SectionContent;
use crate::ids::{IdGenerator, RandomIds};
use crate::migrate::{MigrationDefaults, migrate_project};
use crate::naming::{self, HOME_SLUG, ValidationError};
use crate::storage::{Storage, StorageError};
use crate::theme::DEFAULT_THEME_ID;
use crate::types::{Page, Project, SectionInstance, SectionTemplate};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Cannot delete the home page")]
    HomePageProtected,
    #[error("Project not found: {0}")]
    ProjectNotFound(String),
    #[error("Projects are still loading")]
    Loading,
}

const PLACEHOLDER_THUMBNAILS: [&str; 4] = [
    "https://images.pexels.com/photos/3184292/pexels-photo-3184292.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=1",
    "https://images.pexels.com/photos/3184360/pexels-photo-3184360.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=1",
    "https://images.pexels.com/photos/3184398/pexels-photo-3184398.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=1",
    "https://images.pexels.com/photos/3184418/pexels-photo-3184418.jpeg?auto=compress&cs=tinysrgb&w=400&h=300&dpr=1",
];

/// Thumbnail for a new project, chosen from the project id.
pub fn placeholder_thumbnail(project_id: &str) -> &'static str {
    let pick = project_id.bytes().map(usize::from).sum::<usize>() % PLACEHOLDER_THUMBNAILS.len();
    PLACEHOLDER_THUMBNAILS[pick]
}

/// Defaults applied to new and migrated projects.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub default_category: String,
    pub default_theme: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            default_category: "business".into(),
            default_theme: DEFAULT_THEME_ID.into(),
        }
    }
}

/// Input to [`ProjectStore::create_project`].
#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    /// Slugified before use; falls back to the name.
    pub website_url: Option<String>,
    pub category: Option<String>,
    pub seo_keywords: Vec<String>,
    pub logo: Option<String>,
    pub favicon: Option<String>,
    pub theme_id: Option<String>,
}

impl NewProject {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Partial update for a project. `None` leaves a field alone; for optional
/// fields `Some(None)` clears them.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub website_url: Option<String>,
    pub category: Option<String>,
    pub seo_keywords: Option<Vec<String>>,
    pub logo: Option<Option<String>>,
    pub favicon: Option<Option<String>>,
    pub theme_id: Option<String>,
    pub is_published: Option<bool>,
    pub publish_url: Option<Option<String>>,
    pub thumbnail: Option<Option<String>>,
}

impl ProjectPatch {
    fn apply(self, project: &mut Project) -> Result<(), ValidationError> {
        if let Some(name) = self.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::EmptyProjectName);
            }
            project.name = name.to_string();
        }
        if let Some(url) = self.website_url {
            project.website_url = naming::slugify(&url);
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(category) = self.category {
            project.category = category;
        }
        if let Some(keywords) = self.seo_keywords {
            project.seo_keywords = keywords;
        }
        if let Some(logo) = self.logo {
            project.logo = logo;
        }
        if let Some(favicon) = self.favicon {
            project.favicon = favicon;
        }
        if let Some(theme_id) = self.theme_id {
            project.theme_id = theme_id;
        }
        if let Some(published) = self.is_published {
            project.is_published = published;
        }
        if let Some(url) = self.publish_url {
            project.publish_url = url;
        }
        if let Some(thumbnail) = self.thumbnail {
            project.thumbnail = thumbnail;
        }
        Ok(())
    }
}

/// Input to [`ProjectStore::create_page`].
#[derive(Debug, Clone, Default)]
pub struct NewPage {
    pub name: String,
    /// Normalized with [`naming::slugify`], then validated.
    pub slug: String,
    /// Defaults to the name.
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial update for a page.
#[derive(Debug, Clone, Default)]
pub struct PagePatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub is_published: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

/// Where to put a new section, relative to an existing order index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertPosition {
    pub index: u32,
    pub placement: Placement,
}

impl InsertPosition {
    pub fn above(index: u32) -> Self {
        Self {
            index,
            placement: Placement::Above,
        }
    }

    pub fn below(index: u32) -> Self {
        Self {
            index,
            placement: Placement::Below,
        }
    }

    /// The `order` the new section takes, before clamping to the section
    /// count.
    pub fn target_order(self) -> u32 {
        match self.placement {
            Placement::Above => self.index,
            Placement::Below => self.index.saturating_add(1),
        }
    }
}

/// Summary of [`ProjectStore::load`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub projects: usize,
    pub migrated: usize,
    pub templates_seeded: usize,
}

fn is_permutation<'a>(current: impl Iterator<Item = &'a str>, proposed: &[&str]) -> bool {
    let mut current: Vec<&str> = current.collect();
    let mut proposed: Vec<&str> = proposed.to_vec();
    current.sort_unstable();
    proposed.sort_unstable();
    current == proposed
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub struct ProjectStore<S: Storage> {
    storage: S,
    ids: Box<dyn IdGenerator>,
    settings: StoreSettings,
    /// Most recently created first.
    projects: Vec<Project>,
    current_project: Option<String>,
    current_page: Option<String>,
    loading: bool,
}

impl<S: Storage> ProjectStore<S> {
    /// An unloaded store with random ids and default settings.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            ids: Box::new(RandomIds),
            settings: StoreSettings::default(),
            projects: Vec::new(),
            current_project: None,
            current_page: None,
            loading: true,
        }
    }

    pub fn with_ids(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_settings(mut self, settings: StoreSettings) -> Self {
        self.settings = settings;
        self
    }

    /// [`new`](Self::new) followed by [`load`](Self::load).
    pub fn open(storage: S) -> Result<Self, StoreError> {
        let mut store = Self::new(storage);
        store.load()?;
        Ok(store)
    }

    /// Read, migrate, and sort every stored project; seed the template
    /// catalog if storage has none. Replaces any in-memory state and clears
    /// the selection.
    pub fn load(&mut self) -> Result<LoadReport, StoreError> {
        self.loading = true;
        let records = self.storage.get_all_projects()?;
        let defaults = MigrationDefaults {
            category: &self.settings.default_category,
            theme_id: &self.settings.default_theme,
            now: Utc::now(),
        };

        let mut projects = Vec::with_capacity(records.len());
        let mut migrated = 0;
        for record in records {
            let out = migrate_project(record, self.ids.as_mut(), &defaults);
            if out.migrated {
                info!(project_id = %out.project.id, "Migrated legacy project to pages");
                self.storage.save_project(&out.project)?;
                migrated += 1;
            }
            let mut project = out.project;
            project.sort_pages();
            for page in &mut project.pages {
                page.sort_sections();
            }
            projects.push(project);
        }
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut templates_seeded = 0;
        if self.storage.get_section_templates()?.is_empty() {
            for template in catalog::templates() {
                self.storage.save_section_template(template)?;
            }
            templates_seeded = catalog::templates().len();
        }

        let report = LoadReport {
            projects: projects.len(),
            migrated,
            templates_seeded,
        };
        self.projects = projects;
        self.current_project = None;
        self.current_page = None;
        self.loading = false;
        info!(
            projects = report.projects,
            migrated = report.migrated,
            templates_seeded = report.templates_seeded,
            "Loaded projects"
        );
        Ok(report)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    pub fn current_project(&self) -> Option<&Project> {
        self.project(self.current_project.as_deref()?)
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current_project()?.page(self.current_page.as_deref()?)
    }

    pub fn templates(&self) -> &'static [SectionTemplate] {
        catalog::templates()
    }

    pub fn get_section_template(&self, template_id: &str) -> Option<&'static SectionTemplate> {
        catalog::find(template_id)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn ensure_ready(&self) -> Result<(), StoreError> {
        if self.loading {
            return Err(StoreError::Loading);
        }
        Ok(())
    }

    fn cloned_project(&self, project_id: &str) -> Option<Project> {
        self.project(project_id).cloned()
    }

    /// Persist, then replace the in-memory copy.
    fn commit(&mut self, project: Project) -> Result<(), StoreError> {
        self.storage.save_project(&project)?;
        if let Some(slot) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *slot = project;
        }
        Ok(())
    }

    fn commit_page(
        &mut self,
        mut project: Project,
        page_id: &str,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        if let Some(page) = project.page_mut(page_id) {
            page.sort_sections();
            page.touch(now);
        }
        project.touch(now);
        self.commit(project)
    }

    /// A working copy of the current project plus the current page id.
    fn selected_page(&self, action: &str) -> Option<(Project, String)> {
        let (Some(project_id), Some(page_id)) =
            (self.current_project.as_deref(), self.current_page.as_deref())
        else {
            warn!(action, "No current project or page selected");
            return None;
        };
        let project = self.project(project_id)?;
        project.page(page_id)?;
        Some((project.clone(), page_id.to_string()))
    }

    // ------------------------------------------------------------------
    // Projects
    // ------------------------------------------------------------------

    /// Create a project with its home page and put it at the front of the
    /// list.
    pub fn create_project(&mut self, new: NewProject) -> Result<Project, StoreError> {
        self.ensure_ready()?;
        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyProjectName.into());
        }
        let url_source = new
            .website_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(&name);
        let website_url = naming::slugify(url_source);
        let description = trimmed(new.description);
        let now = Utc::now();
        let id = self.ids.next_id();

        let home = Page {
            id: self.ids.next_id(),
            name: "Home".into(),
            slug: HOME_SLUG.into(),
            title: name.clone(),
            description: description.clone(),
            sections: Vec::new(),
            is_home_page: true,
            is_published: true,
            order: 0,
            created_at: now,
            updated_at: now,
        };
        let project = Project {
            thumbnail: Some(placeholder_thumbnail(&id).to_string()),
            id,
            name,
            description,
            website_url,
            category: trimmed(new.category)
                .unwrap_or_else(|| self.settings.default_category.clone()),
            seo_keywords: new.seo_keywords,
            logo: trimmed(new.logo),
            favicon: trimmed(new.favicon),
            pages: vec![home],
            theme_id: trimmed(new.theme_id).unwrap_or_else(|| self.settings.default_theme.clone()),
            created_at: now,
            updated_at: now,
            is_published: false,
            publish_url: None,
        };

        self.storage.save_project(&project)?;
        self.projects.insert(0, project.clone());
        info!(project_id = %project.id, name = %project.name, "Created project");
        Ok(project)
    }

    pub fn delete_project(&mut self, project_id: &str) -> Result<(), StoreError> {
        self.ensure_ready()?;
        self.storage.delete_project(project_id)?;
        let before = self.projects.len();
        self.projects.retain(|p| p.id != project_id);
        if self.projects.len() == before {
            warn!(project_id, "Deleted project was not loaded");
        }
        if self.current_project.as_deref() == Some(project_id) {
            self.current_project = None;
            self.current_page = None;
        }
        info!(project_id, "Deleted project");
        Ok(())
    }

    pub fn update_project(&mut self, project_id: &str, patch: ProjectPatch) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let Some(mut project) = self.cloned_project(project_id) else {
            warn!(project_id, "Update for unknown project ignored");
            return Ok(());
        };
        patch.apply(&mut project)?;
        project.touch(Utc::now());
        self.commit(project)?;
        info!(project_id, "Updated project");
        Ok(())
    }

    /// Select a project, or clear the selection with `None`. Switching to a
    /// different project clears the page selection.
    pub fn set_current_project(&mut self, project_id: Option<&str>) {
        match project_id {
            None => {
                self.current_project = None;
                self.current_page = None;
            }
            Some(id) if self.project(id).is_some() => {
                if self.current_project.as_deref() != Some(id) {
                    self.current_page = None;
                }
                self.current_project = Some(id.to_string());
            }
            Some(id) => warn!(project_id = id, "Cannot select unknown project"),
        }
    }

    /// Select a page of the current project, or clear with `None`.
    pub fn set_current_page(&mut self, page_id: Option<&str>) {
        match page_id {
            None => self.current_page = None,
            Some(id) => {
                let known = self.current_project().is_some_and(|p| p.page(id).is_some());
                if known {
                    self.current_page = Some(id.to_string());
                } else {
                    warn!(page_id = id, "Cannot select a page outside the current project");
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // Pages
    // ------------------------------------------------------------------

    /// Append an unpublished page. The slug is normalized, then must be
    /// well-formed and unused in the project.
    pub fn create_page(&mut self, project_id: &str, new: NewPage) -> Result<Page, StoreError> {
        self.ensure_ready()?;
        let mut project = self
            .cloned_project(project_id)
            .ok_or_else(|| StoreError::ProjectNotFound(project_id.to_string()))?;

        let name = new.name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyPageName.into());
        }
        let slug = naming::slugify(&new.slug);
        naming::validate_page_slug(&slug, project.pages.iter().map(|p| p.slug.as_str()))?;

        let now = Utc::now();
        let page = Page {
            id: self.ids.next_id(),
            title: trimmed(new.title).unwrap_or_else(|| name.clone()),
            name,
            slug,
            description: trimmed(new.description),
            sections: Vec::new(),
            is_home_page: false,
            is_published: false,
            order: project.pages.len() as u32,
            created_at: now,
            updated_at: now,
        };
        project.pages.push(page.clone());
        project.sort_pages();
        project.touch(now);
        self.commit(project)?;
        info!(project_id, page_id = %page.id, slug = %page.slug, "Created page");
        Ok(page)
    }

    pub fn update_page(
        &mut self,
        project_id: &str,
        page_id: &str,
        patch: PagePatch,
    ) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let Some(mut project) = self.cloned_project(project_id) else {
            warn!(project_id, "Page update for unknown project ignored");
            return Ok(());
        };
        let taken: Vec<String> = project
            .pages
            .iter()
            .filter(|p| p.id != page_id)
            .map(|p| p.slug.clone())
            .collect();
        let Some(page) = project.page_mut(page_id) else {
            warn!(project_id, page_id, "Update for unknown page ignored");
            return Ok(());
        };

        if let Some(name) = patch.name {
            let name = name.trim();
            if name.is_empty() {
                return Err(ValidationError::EmptyPageName.into());
            }
            page.name = name.to_string();
        }
        if let Some(slug) = patch.slug {
            let slug = naming::slugify(&slug);
            if page.is_home_page {
                if slug != page.slug {
                    return Err(ValidationError::HomeSlugLocked.into());
                }
            } else {
                naming::validate_page_slug(&slug, taken.iter().map(String::as_str))?;
                page.slug = slug;
            }
        }
        if let Some(title) = patch.title {
            page.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            page.description = description;
        }
        if let Some(published) = patch.is_published {
            page.is_published = published;
        }

        let now = Utc::now();
        page.touch(now);
        project.touch(now);
        self.commit(project)?;
        info!(project_id, page_id, "Updated page");
        Ok(())
    }

    /// Remove a page and renumber the rest `0..n`. The home page is
    /// protected. A deleted current page falls back to the home page.
    pub fn delete_page(&mut self, project_id: &str, page_id: &str) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let Some(mut project) = self.cloned_project(project_id) else {
            warn!(project_id, "Page delete for unknown project ignored");
            return Ok(());
        };
        let Some(target) = project.page(page_id) else {
            warn!(project_id, page_id, "Delete for unknown page ignored");
            return Ok(());
        };
        if target.is_home_page {
            return Err(StoreError::HomePageProtected);
        }

        let now = Utc::now();
        project.pages.retain(|p| p.id != page_id);
        project.renumber_pages(now);
        project.touch(now);
        let home_id = project.home_page().map(|p| p.id.clone());
        self.commit(project)?;

        if self.current_page.as_deref() == Some(page_id) {
            self.current_page = if self.current_project.as_deref() == Some(project_id) {
                home_id
            } else {
                None
            };
        }
        info!(project_id, page_id, "Deleted page");
        Ok(())
    }

    /// Reassign page order from a full id sequence. Anything other than a
    /// permutation of the current page ids is ignored.
    pub fn reorder_pages(&mut self, project_id: &str, page_ids: &[&str]) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let Some(mut project) = self.cloned_project(project_id) else {
            warn!(project_id, "Page reorder for unknown project ignored");
            return Ok(());
        };
        if !is_permutation(project.pages.iter().map(|p| p.id.as_str()), page_ids) {
            warn!(project_id, "Page reorder is not a permutation of the current pages");
            return Ok(());
        }

        let now = Utc::now();
        for page in &mut project.pages {
            if let Some(index) = page_ids.iter().position(|id| *id == page.id) {
                page.order = index as u32;
                page.touch(now);
            }
        }
        project.sort_pages();
        project.touch(now);
        self.commit(project)?;
        info!(project_id, "Reordered pages");
        Ok(())
    }

    /// Copy a page and all its sections under fresh ids, appended last.
    pub fn duplicate_page(
        &mut self,
        project_id: &str,
        page_id: &str,
    ) -> Result<Option<Page>, StoreError> {
        self.ensure_ready()?;
        let Some(mut project) = self.cloned_project(project_id) else {
            warn!(project_id, "Page duplicate for unknown project ignored");
            return Ok(None);
        };
        let Some(source) = project.page(page_id).cloned() else {
            warn!(project_id, page_id, "Duplicate of unknown page ignored");
            return Ok(None);
        };

        let now = Utc::now();
        let slug = naming::copy_slug(&source.slug, |candidate| {
            project.page_by_slug(candidate).is_some()
        });
        let sections = source
            .sections
            .iter()
            .map(|section| SectionInstance {
                id: self.ids.next_id(),
                content: section.content.clone(),
                order: section.order,
                created_at: now,
                updated_at: now,
            })
            .collect();
        let page = Page {
            id: self.ids.next_id(),
            name: format!("{} (Copy)", source.name),
            slug,
            title: format!("{} (Copy)", source.title),
            description: source.description.clone(),
            sections,
            is_home_page: false,
            is_published: source.is_published,
            order: project.pages.len() as u32,
            created_at: now,
            updated_at: now,
        };
        project.pages.push(page.clone());
        project.sort_pages();
        project.touch(now);
        self.commit(project)?;
        info!(project_id, source = page_id, page_id = %page.id, "Duplicated page");
        Ok(Some(page))
    }

    // ------------------------------------------------------------------
    // Sections (current page)
    // ------------------------------------------------------------------

    /// Place a new section from a catalog template on the current page.
    ///
    /// With no position the section goes last. Otherwise it takes the
    /// position's target order and every section at or after that order
    /// shifts up by one.
    pub fn add_section_from_template(
        &mut self,
        template_id: &str,
        content: Option<SectionContent>,
        position: Option<InsertPosition>,
    ) -> Result<Option<SectionInstance>, StoreError> {
        self.ensure_ready()?;
        let Some((mut project, page_id)) = self.selected_page("add section") else {
            return Ok(None);
        };
        let Some(template) = catalog::find(template_id) else {
            error!(template_id, "Template not found");
            return Ok(None);
        };
        let content = match content {
            Some(c) if c.template_id() != template_id => {
                return Err(ValidationError::TemplateMismatch {
                    expected: template_id.to_string(),
                    found: c.template_id().to_string(),
                }
                .into());
            }
            Some(c) => c,
            None => template.default_content.clone(),
        };

        let now = Utc::now();
        let id = self.ids.next_id();
        let Some(page) = project.page_mut(&page_id) else {
            return Ok(None);
        };
        // Orders stay contiguous, so the section count is the end.
        let end = page.sections.len() as u32;
        let order = match position {
            Some(position) => {
                let target = position.target_order().min(end);
                for section in &mut page.sections {
                    if section.order >= target {
                        section.order += 1;
                        section.updated_at = now;
                    }
                }
                target
            }
            None => end,
        };
        let section = SectionInstance {
            id,
            content,
            order,
            created_at: now,
            updated_at: now,
        };
        page.sections.push(section.clone());
        self.commit_page(project, &page_id, now)?;
        info!(template_id, section_id = %section.id, order, "Added section");
        Ok(Some(section))
    }

    /// Replace a section's content. The new content must be for the same
    /// template.
    pub fn update_section_data(
        &mut self,
        section_id: &str,
        content: SectionContent,
    ) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let Some((mut project, page_id)) = self.selected_page("update section") else {
            return Ok(());
        };
        let now = Utc::now();
        let Some(section) = project
            .page_mut(&page_id)
            .and_then(|page| page.sections.iter_mut().find(|s| s.id == section_id))
        else {
            warn!(section_id, "Update for unknown section ignored");
            return Ok(());
        };
        if section.template_id() != content.template_id() {
            return Err(ValidationError::TemplateMismatch {
                expected: section.template_id().to_string(),
                found: content.template_id().to_string(),
            }
            .into());
        }
        section.content = content;
        section.updated_at = now;
        self.commit_page(project, &page_id, now)?;
        info!(section_id, "Updated section");
        Ok(())
    }

    /// Remove a section and renumber the rest `0..n`.
    pub fn delete_section(&mut self, section_id: &str) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let Some((mut project, page_id)) = self.selected_page("delete section") else {
            return Ok(());
        };
        let Some(page) = project.page_mut(&page_id) else {
            return Ok(());
        };
        if page.section(section_id).is_none() {
            warn!(section_id, "Delete for unknown section ignored");
            return Ok(());
        }
        let now = Utc::now();
        page.sections.retain(|s| s.id != section_id);
        page.renumber_sections(now);
        self.commit_page(project, &page_id, now)?;
        info!(section_id, "Deleted section");
        Ok(())
    }

    /// Reassign section order from a full id sequence. Anything other than
    /// a permutation of the current page's section ids is ignored.
    pub fn reorder_sections(&mut self, section_ids: &[&str]) -> Result<(), StoreError> {
        self.ensure_ready()?;
        let Some((mut project, page_id)) = self.selected_page("reorder sections") else {
            return Ok(());
        };
        let Some(page) = project.page_mut(&page_id) else {
            return Ok(());
        };
        if !is_permutation(page.sections.iter().map(|s| s.id.as_str()), section_ids) {
            warn!(page_id = %page_id, "Section reorder is not a permutation of the current sections");
            return Ok(());
        }
        let now = Utc::now();
        for section in &mut page.sections {
            if let Some(index) = section_ids.iter().position(|id| *id == section.id) {
                section.order = index as u32;
                section.updated_at = now;
            }
        }
        self.commit_page(project, &page_id, now)?;
        info!(page_id = %page_id, "Reordered sections");
        Ok(())
    }

    /// Copy a section directly after itself; later siblings shift by one.
    pub fn duplicate_section(
        &mut self,
        section_id: &str,
    ) -> Result<Option<SectionInstance>, StoreError> {
        self.ensure_ready()?;
        let Some((mut project, page_id)) = self.selected_page("duplicate section") else {
            return Ok(None);
        };
        let now = Utc::now();
        let id = self.ids.next_id();
        let Some(page) = project.page_mut(&page_id) else {
            return Ok(None);
        };
        let Some(source) = page.section(section_id).cloned() else {
            warn!(section_id, "Duplicate of unknown section ignored");
            return Ok(None);
        };
        for section in &mut page.sections {
            if section.order > source.order {
                section.order += 1;
                section.updated_at = now;
            }
        }
        let copy = SectionInstance {
            id,
            content: source.content,
            order: source.order + 1,
            created_at: now,
            updated_at: now,
        };
        page.sections.push(copy.clone());
        self.commit_page(project, &page_id, now)?;
        info!(source = section_id, section_id = %copy.id, "Duplicated section");
        Ok(Some(copy))
    }

    // ------------------------------------------------------------------
    // Everything
    // ------------------------------------------------------------------

    /// Delete every stored project and reset to an empty, unselected state.
    /// Templates stay.
    pub fn clear_all_data(&mut self) -> Result<(), StoreError> {
        self.ensure_ready()?;
        for record in self.storage.get_all_projects()? {
            self.storage.delete_project(&record.id)?;
        }
        self.projects.clear();
        self.current_project = None;
        self.current_page = None;
        info!("Cleared all project data");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HERO_MODERN, HeroModernContent, CONTACT_FORM, ContactFormContent};
    use crate::ids::SequentialIds;
    use crate::storage::MemoryStorage;
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn new_store_is_loading_and_rejects_mutations() {
        let mut store = ProjectStore::new(MemoryStorage::new());
        assert!(store.is_loading());
        let err = store.create_project(NewProject::named("Acme")).unwrap_err();
        assert!(matches!(err, StoreError::Loading));
        store.load().unwrap();
        assert!(!store.is_loading());
    }

    #[test]
    fn load_seeds_templates_once() {
        let mut store = ProjectStore::new(MemoryStorage::new());
        let first = store.load().unwrap();
        assert_eq!(first.templates_seeded, 16);
        assert_eq!(store.storage().template_count(), 16);

        let second = store.load().unwrap();
        assert_eq!(second.templates_seeded, 0);
    }

    #[test]
    fn load_migrates_and_writes_back_legacy_records() {
        let mut storage = MemoryStorage::new();
        storage
            .seed_project_value(json!({
                "id": "legacy",
                "name": "Old Shop",
                "createdAt": "2022-01-01T00:00:00Z",
                "sections": [{
                    "id": "s1", "templateId": "hero-modern-001", "data": {"title": "Hi"},
                    "order": 0, "createdAt": "2022-01-01T00:00:00Z",
                    "updatedAt": "2022-01-01T00:00:00Z"
                }]
            }))
            .unwrap();

        let mut store = ProjectStore::new(storage).with_ids(SequentialIds::new("m"));
        let report = store.load().unwrap();

        assert_eq!(report.migrated, 1);
        let project = store.project("legacy").unwrap();
        assert_eq!(project.pages.len(), 1);
        assert_eq!(project.pages[0].sections[0].id, "s1");

        let stored = store.storage().project_value("legacy").unwrap();
        assert!(stored.get("pages").is_some());
        assert!(stored.get("sections").is_none());

        // Already migrated on the next load.
        assert_eq!(store.load().unwrap().migrated, 0);
    }

    #[test]
    fn load_sorts_most_recent_first() {
        let mut storage = MemoryStorage::new();
        for (id, created) in [
            ("older", "2023-01-01T00:00:00Z"),
            ("newest", "2024-06-01T00:00:00Z"),
            ("middle", "2023-09-01T00:00:00Z"),
        ] {
            storage
                .seed_project_value(json!({"id": id, "name": id, "createdAt": created}))
                .unwrap();
        }
        let store = ProjectStore::open(storage).unwrap();
        let ids: Vec<&str> = store.projects().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["newest", "middle", "older"]);
    }

    #[test]
    fn reload_reproduces_tree() {
        let (mut store, project_id, _) = store_with_selected_home();
        store
            .add_section_from_template(HERO_MODERN, None, None)
            .unwrap();
        let before = store.project(&project_id).unwrap().clone();

        let reopened = ProjectStore::open(store.into_storage()).unwrap();
        assert_eq!(reopened.project(&project_id), Some(&before));
    }

    // =========================================================================
    // Projects
    // =========================================================================

    #[test]
    fn create_project_builds_home_page() {
        let mut store = loaded_store();
        let project = store
            .create_project(NewProject {
                name: "  My Great Site ".into(),
                description: Some("Things".into()),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(project.name, "My Great Site");
        assert_eq!(project.website_url, "my-great-site");
        assert_eq!(project.category, "business");
        assert_eq!(project.theme_id, "modern-blue");
        assert!(!project.is_published);
        assert!(PLACEHOLDER_THUMBNAILS.contains(&project.thumbnail.as_deref().unwrap()));

        let home = find_page(&project, HOME_SLUG);
        assert!(home.is_home_page);
        assert!(home.is_published);
        assert_eq!(home.order, 0);
        assert_eq!(home.title, "My Great Site");
        assert_eq!(home.description.as_deref(), Some("Things"));
    }

    #[test]
    fn create_project_slugifies_given_url() {
        let mut store = loaded_store();
        let project = store
            .create_project(NewProject {
                name: "Acme".into(),
                website_url: Some("Acme Tools!".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(project.website_url, "acme-tools");
    }

    #[test]
    fn create_project_requires_name() {
        let mut store = loaded_store();
        let err = store.create_project(NewProject::named("   ")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::EmptyProjectName)
        ));
        assert!(store.projects().is_empty());
    }

    #[test]
    fn create_project_prepends() {
        let mut store = loaded_store();
        store.create_project(NewProject::named("First")).unwrap();
        store.create_project(NewProject::named("Second")).unwrap();
        let names: Vec<&str> = store.projects().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First"]);
    }

    #[test]
    fn store_settings_drive_defaults() {
        let mut store = ProjectStore::new(MemoryStorage::new())
            .with_settings(StoreSettings {
                default_category: "portfolio".into(),
                default_theme: "forest-green".into(),
            });
        store.load().unwrap();
        let project = store.create_project(NewProject::named("Gallery")).unwrap();
        assert_eq!(project.category, "portfolio");
        assert_eq!(project.theme_id, "forest-green");
    }

    #[test]
    fn update_project_merges_and_refreshes_selection() {
        let (mut store, project_id, _) = store_with_selected_home();
        store
            .update_project(
                &project_id,
                ProjectPatch {
                    name: Some("Acme Corp".into()),
                    seo_keywords: Some(vec!["tools".into()]),
                    logo: Some(Some("logo.png".into())),
                    ..Default::default()
                },
            )
            .unwrap();
        let current = store.current_project().unwrap();
        assert_eq!(current.name, "Acme Corp");
        assert_eq!(current.seo_keywords, vec!["tools".to_string()]);
        assert_eq!(current.logo.as_deref(), Some("logo.png"));
        assert!(current.updated_at >= current.created_at);
    }

    #[test]
    fn update_unknown_project_is_noop() {
        let mut store = loaded_store();
        store
            .update_project("ghost", ProjectPatch::default())
            .unwrap();
        assert!(store.projects().is_empty());
    }

    #[test]
    fn delete_project_clears_selection() {
        let (mut store, project_id, _) = store_with_selected_home();
        store.delete_project(&project_id).unwrap();
        assert!(store.current_project().is_none());
        assert!(store.current_page().is_none());
        assert!(store.projects().is_empty());
        assert_eq!(store.storage().project_count(), 0);
    }

    #[test]
    fn switching_project_clears_page() {
        let (mut store, _, _) = store_with_selected_home();
        let other = store.create_project(NewProject::named("Other")).unwrap();
        store.set_current_project(Some(&other.id));
        assert_eq!(store.current_project().map(|p| p.id.as_str()), Some(other.id.as_str()));
        assert!(store.current_page().is_none());
    }

    #[test]
    fn cannot_select_foreign_page() {
        let (mut store, _, home_id) = store_with_selected_home();
        let other = store.create_project(NewProject::named("Other")).unwrap();
        store.set_current_page(Some(&other.pages[0].id));
        assert_eq!(store.current_page().map(|p| p.id.as_str()), Some(home_id.as_str()));
    }

    // =========================================================================
    // Pages
    // =========================================================================

    #[test]
    fn acme_scenario() {
        let mut store = loaded_store();
        let acme = store.create_project(NewProject::named("Acme")).unwrap();
        let home = find_page(&acme, HOME_SLUG);
        assert_eq!(home.name, "Home");
        assert_eq!(home.order, 0);
        assert!(home.is_published);
        let home_id = home.id.clone();

        let about = store
            .create_page(&acme.id, new_page("About", "about"))
            .unwrap();
        assert_eq!(about.order, 1);
        assert!(!about.is_published);

        let err = store
            .create_page(&acme.id, new_page("About again", "about"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::SlugTaken)));
        assert_eq!(store.project(&acme.id).unwrap().pages.len(), 2);

        store.delete_page(&acme.id, &about.id).unwrap();
        assert_eq!(store.project(&acme.id).unwrap().pages.len(), 1);

        let err = store.delete_page(&acme.id, &home_id).unwrap_err();
        assert!(matches!(err, StoreError::HomePageProtected));
        assert_eq!(store.project(&acme.id).unwrap().pages.len(), 1);
    }

    #[test]
    fn create_page_unknown_project_is_error() {
        let mut store = loaded_store();
        let err = store.create_page("ghost", new_page("About", "about")).unwrap_err();
        assert!(matches!(err, StoreError::ProjectNotFound(id) if id == "ghost"));
    }

    #[test]
    fn create_page_normalizes_and_validates_slug() {
        let (mut store, project_id, _) = store_with_selected_home();
        let page = store
            .create_page(&project_id, new_page("Our Team", "Our Team"))
            .unwrap();
        assert_eq!(page.slug, "our-team");
        assert_eq!(page.title, "Our Team");

        let err = store.create_page(&project_id, new_page("X", "x")).unwrap_err();
        assert_eq!(err.to_string(), "URL must be at least 2 characters long");

        let err = store.create_page(&project_id, new_page("Blank", "!!")).unwrap_err();
        assert_eq!(err.to_string(), "Page URL is required");

        let err = store.create_page(&project_id, new_page("  ", "contact")).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a page name");
    }

    #[test]
    fn update_page_validates_slug() {
        let (mut store, project_id, home_id) = store_with_selected_home();
        let about = store.create_page(&project_id, new_page("About", "about")).unwrap();
        let blog = store.create_page(&project_id, new_page("Blog", "blog")).unwrap();

        let err = store
            .update_page(&project_id, &blog.id, slug_patch("about"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::SlugTaken)));

        // Keeping its own slug is fine.
        store
            .update_page(&project_id, &about.id, slug_patch("about"))
            .unwrap();

        let err = store
            .update_page(&project_id, &home_id, slug_patch("start"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(ValidationError::HomeSlugLocked)));

        store
            .update_page(
                &project_id,
                &blog.id,
                PagePatch {
                    slug: Some("News".into()),
                    title: Some("Latest news".into()),
                    is_published: Some(true),
                    ..Default::default()
                },
            )
            .unwrap();
        let project = store.project(&project_id).unwrap();
        let news = find_page(project, "news");
        assert_eq!(news.title, "Latest news");
        assert!(news.is_published);
    }

    #[test]
    fn delete_selected_page_falls_back_to_home() {
        let (mut store, project_id, home_id) = store_with_selected_home();
        let about = store.create_page(&project_id, new_page("About", "about")).unwrap();
        store.create_page(&project_id, new_page("Blog", "blog")).unwrap();
        store.set_current_page(Some(&about.id));

        store.delete_page(&project_id, &about.id).unwrap();

        assert_eq!(store.current_page().map(|p| p.id.as_str()), Some(home_id.as_str()));
        assert_eq!(
            page_layout(store.project(&project_id).unwrap()),
            vec![("home".to_string(), 0), ("blog".to_string(), 1)]
        );

        let project = store.project(&project_id).unwrap();
        assert_eq!(find_page(project, "blog").updated_at, project.updated_at);
    }

    #[test]
    fn reorder_pages_assigns_index_order() {
        let (mut store, project_id, home_id) = store_with_selected_home();
        let about = store.create_page(&project_id, new_page("About", "about")).unwrap();
        let blog = store.create_page(&project_id, new_page("Blog", "blog")).unwrap();

        store
            .reorder_pages(&project_id, &[blog.id.as_str(), home_id.as_str(), about.id.as_str()])
            .unwrap();
        assert_eq!(
            page_layout(store.project(&project_id).unwrap()),
            vec![
                ("blog".to_string(), 0),
                ("home".to_string(), 1),
                ("about".to_string(), 2)
            ]
        );
    }

    #[test]
    fn reorder_pages_ignores_non_permutations() {
        let (mut store, project_id, home_id) = store_with_selected_home();
        let about = store.create_page(&project_id, new_page("About", "about")).unwrap();
        let before = store.project(&project_id).unwrap().clone();

        store.reorder_pages(&project_id, &[about.id.as_str()]).unwrap();
        store
            .reorder_pages(&project_id, &[about.id.as_str(), about.id.as_str()])
            .unwrap();
        store
            .reorder_pages(&project_id, &[about.id.as_str(), home_id.as_str(), "ghost"])
            .unwrap();

        assert_eq!(store.project(&project_id), Some(&before));
    }

    #[test]
    fn duplicate_page_copies_with_fresh_ids() {
        let (mut store, project_id, _) = store_with_selected_home();
        let about = store.create_page(&project_id, new_page("About", "about")).unwrap();
        store.set_current_page(Some(&about.id));
        store.add_section_from_template(HERO_MODERN, None, None).unwrap();
        store.add_section_from_template(CONTACT_FORM, None, None).unwrap();
        let source = store.current_page().unwrap().clone();

        let copy = store.duplicate_page(&project_id, &about.id).unwrap().unwrap();

        assert_ne!(copy.id, source.id);
        assert_eq!(copy.slug, "about-copy");
        assert_eq!(copy.name, "About (Copy)");
        assert!(!copy.is_home_page);
        assert_eq!(copy.order, 2);
        assert_eq!(copy.sections.len(), 2);
        for (a, b) in copy.sections.iter().zip(&source.sections) {
            assert_ne!(a.id, b.id);
            assert_eq!(a.content, b.content);
            assert_eq!(a.order, b.order);
        }
        // Source untouched.
        assert_eq!(store.project(&project_id).unwrap().page(&about.id), Some(&source));

        let second = store.duplicate_page(&project_id, &about.id).unwrap().unwrap();
        assert_eq!(second.slug, "about-copy-2");
    }

    #[test]
    fn duplicate_home_page_is_not_home() {
        let (mut store, project_id, home_id) = store_with_selected_home();
        let copy = store.duplicate_page(&project_id, &home_id).unwrap().unwrap();
        assert_eq!(copy.slug, "home-copy");
        let project = store.project(&project_id).unwrap();
        assert_eq!(project.pages.iter().filter(|p| p.is_home_page).count(), 1);
    }

    #[test]
    fn duplicate_unknown_page_is_none() {
        let (mut store, project_id, _) = store_with_selected_home();
        assert!(store.duplicate_page(&project_id, "ghost").unwrap().is_none());
    }

    // =========================================================================
    // Sections
    // =========================================================================

    #[test]
    fn insertion_scenario() {
        let (mut store, _, _) = store_with_selected_home();
        let first = store
            .add_section_from_template(HERO_MODERN, None, None)
            .unwrap()
            .unwrap();
        let page = store.current_page().unwrap();
        assert_eq!(page.sections.len(), 1);
        assert_eq!(page.sections[0].order, 0);
        assert_eq!(
            Some(&page.sections[0].content),
            store.get_section_template(HERO_MODERN).map(|t| &t.default_content)
        );

        let second = store
            .add_section_from_template(CONTACT_FORM, None, Some(InsertPosition::above(0)))
            .unwrap()
            .unwrap();
        assert_eq!(second.order, 0);
        assert_eq!(
            section_layout(store.current_page().unwrap()),
            vec![(second.id.clone(), 0), (first.id.clone(), 1)]
        );
    }

    #[test]
    fn insert_below_shifts_later_sections() {
        let (mut store, _, _) = store_with_selected_home();
        let a = add(&mut store, HERO_MODERN);
        let b = add(&mut store, HERO_MODERN);
        let c = store
            .add_section_from_template(CONTACT_FORM, None, Some(InsertPosition::below(0)))
            .unwrap()
            .unwrap();
        assert_eq!(
            section_layout(store.current_page().unwrap()),
            vec![(a, 0), (c.id, 1), (b, 2)]
        );
    }

    #[test]
    fn insert_past_end_lands_last_and_append_follows() {
        let (mut store, _, _) = store_with_selected_home();
        let a = add(&mut store, HERO_MODERN);
        let b = add(&mut store, CONTACT_FORM);
        let far = store
            .add_section_from_template(CONTACT_FORM, None, Some(InsertPosition::above(9)))
            .unwrap()
            .unwrap();
        assert_eq!(far.order, 2);

        let appended = add(&mut store, HERO_MODERN);
        assert_eq!(
            section_layout(store.current_page().unwrap()),
            vec![(a, 0), (b, 1), (far.id, 2), (appended, 3)]
        );
    }

    #[test]
    fn shifted_sections_are_touched() {
        let (mut store, _, _) = store_with_selected_home();
        let a = add(&mut store, HERO_MODERN);
        let b = add(&mut store, CONTACT_FORM);
        let before = find_section(store.current_page().unwrap(), &a).updated_at;

        let inserted = store
            .add_section_from_template(CONTACT_FORM, None, Some(InsertPosition::above(1)))
            .unwrap()
            .unwrap();
        let page = store.current_page().unwrap();
        assert_eq!(find_section(page, &a).updated_at, before);
        assert_eq!(find_section(page, &b).updated_at, inserted.created_at);
    }

    #[test]
    fn add_section_uses_custom_content() {
        let (mut store, _, _) = store_with_selected_home();
        let content = SectionContent::HeroModern(HeroModernContent {
            title: "Custom".into(),
            ..Default::default()
        });
        let section = store
            .add_section_from_template(HERO_MODERN, Some(content.clone()), None)
            .unwrap()
            .unwrap();
        assert_eq!(section.content, content);
    }

    #[test]
    fn add_section_rejects_mismatched_content() {
        let (mut store, _, _) = store_with_selected_home();
        let err = store
            .add_section_from_template(
                HERO_MODERN,
                Some(SectionContent::ContactForm(ContactFormContent::default())),
                None,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::TemplateMismatch { .. })
        ));
        assert!(store.current_page().unwrap().sections.is_empty());
    }

    #[test]
    fn add_section_without_selection_is_noop() {
        let mut store = loaded_store();
        store.create_project(NewProject::named("Acme")).unwrap();
        assert!(store.add_section_from_template(HERO_MODERN, None, None).unwrap().is_none());
    }

    #[test]
    fn add_section_unknown_template_is_noop() {
        let (mut store, _, _) = store_with_selected_home();
        assert!(store.add_section_from_template("nope-001", None, None).unwrap().is_none());
        assert!(store.current_page().unwrap().sections.is_empty());
    }

    #[test]
    fn update_section_data_replaces_content() {
        let (mut store, project_id, _) = store_with_selected_home();
        let id = add(&mut store, CONTACT_FORM);
        let content = SectionContent::ContactForm(ContactFormContent {
            email: "sales@acme.test".into(),
            ..Default::default()
        });
        store.update_section_data(&id, content.clone()).unwrap();
        assert_eq!(find_section(store.current_page().unwrap(), &id).content, content);
        assert_eq!(
            store.storage().project_value(&project_id).unwrap()["pages"][0]["sections"][0]["data"]["email"],
            json!("sales@acme.test")
        );

        let err = store
            .update_section_data(&id, SectionContent::HeroModern(Default::default()))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::TemplateMismatch { .. })
        ));
    }

    #[test]
    fn delete_section_renumbers_contiguously() {
        let (mut store, _, _) = store_with_selected_home();
        let a = add(&mut store, HERO_MODERN);
        let b = add(&mut store, CONTACT_FORM);
        let c = add(&mut store, HERO_MODERN);
        let d = add(&mut store, CONTACT_FORM);

        let untouched = find_section(store.current_page().unwrap(), &a).updated_at;
        store.delete_section(&b).unwrap();
        let page = store.current_page().unwrap();
        assert_eq!(
            section_layout(page),
            vec![(a.clone(), 0), (c.clone(), 1), (d.clone(), 2)]
        );
        assert_eq!(find_section(page, &a).updated_at, untouched);
        assert_eq!(find_section(page, &c).updated_at, page.updated_at);
        assert_eq!(find_section(page, &d).updated_at, page.updated_at);
    }

    #[test]
    fn duplicate_section_inserts_after_original() {
        let (mut store, _, _) = store_with_selected_home();
        let a = add(&mut store, HERO_MODERN);
        let b = add(&mut store, CONTACT_FORM);
        let c = add(&mut store, HERO_MODERN);
        let original = find_section(store.current_page().unwrap(), &b).clone();

        let copy = store.duplicate_section(&b).unwrap().unwrap();

        assert_ne!(copy.id, b);
        assert_eq!(copy.content, original.content);
        assert_eq!(
            section_layout(store.current_page().unwrap()),
            vec![(a, 0), (b.clone(), 1), (copy.id, 2), (c, 3)]
        );
        assert_eq!(find_section(store.current_page().unwrap(), &b), &original);
    }

    #[test]
    fn reorder_sections_ignores_non_permutation() {
        let (mut store, _, _) = store_with_selected_home();
        let a = add(&mut store, HERO_MODERN);
        let b = add(&mut store, CONTACT_FORM);
        store.reorder_sections(&[a.as_str(), b.as_str(), a.as_str()]).unwrap();
        assert_eq!(
            section_layout(store.current_page().unwrap()),
            vec![(a.clone(), 0), (b.clone(), 1)]
        );
        store.reorder_sections(&[b.as_str(), a.as_str()]).unwrap();
        assert_eq!(
            section_layout(store.current_page().unwrap()),
            vec![(b, 0), (a, 1)]
        );
    }

    #[test]
    fn section_ops_bump_page_and_project_timestamps() {
        let (mut store, _, _) = store_with_selected_home();
        let before = store.current_project().unwrap().updated_at;
        add(&mut store, HERO_MODERN);
        let project = store.current_project().unwrap();
        assert!(project.updated_at >= before);
        assert_eq!(project.updated_at, project.pages[0].updated_at);
    }

    // =========================================================================
    // Persistence discipline
    // =========================================================================

    /// Memory storage whose project writes can be switched off.
    struct FlakyStorage {
        inner: MemoryStorage,
        fail: Rc<Cell<bool>>,
    }

    impl Storage for FlakyStorage {
        fn get_all_projects(&self) -> Result<Vec<crate::types::ProjectRecord>, StorageError> {
            self.inner.get_all_projects()
        }
        fn save_project(&mut self, project: &Project) -> Result<(), StorageError> {
            if self.fail.get() {
                return Err(StorageError::Io(std::io::Error::other("disk full")));
            }
            self.inner.save_project(project)
        }
        fn delete_project(&mut self, project_id: &str) -> Result<(), StorageError> {
            self.inner.delete_project(project_id)
        }
        fn get_section_templates(&self) -> Result<Vec<SectionTemplate>, StorageError> {
            self.inner.get_section_templates()
        }
        fn save_section_template(&mut self, template: &SectionTemplate) -> Result<(), StorageError> {
            self.inner.save_section_template(template)
        }
    }

    #[test]
    fn storage_failure_leaves_memory_untouched() {
        let fail = Rc::new(Cell::new(false));
        let storage = FlakyStorage {
            inner: MemoryStorage::new(),
            fail: Rc::clone(&fail),
        };
        let mut store = ProjectStore::open(storage).unwrap();
        let project = store.create_project(NewProject::named("Acme")).unwrap();
        let before = store.project(&project.id).unwrap().clone();

        fail.set(true);
        let err = store
            .create_page(&project.id, new_page("About", "about"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert!(store.create_project(NewProject::named("Other")).is_err());

        assert_eq!(store.project(&project.id), Some(&before));
        assert_eq!(store.projects().len(), 1);
    }

    #[test]
    fn clear_all_data_empties_store_and_storage() {
        let (mut store, _, _) = store_with_selected_home();
        store.create_project(NewProject::named("Second")).unwrap();
        store.clear_all_data().unwrap();
        assert!(store.projects().is_empty());
        assert!(store.current_project().is_none());
        assert_eq!(store.storage().project_count(), 0);
        assert_eq!(store.storage().template_count(), 16);
    }

    #[test]
    fn thumbnail_pick_is_stable() {
        assert_eq!(placeholder_thumbnail("abc"), placeholder_thumbnail("abc"));
    }

    proptest! {
        #[test]
        fn reorder_sections_applies_any_permutation(
            perm in (1usize..7).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
        ) {
            let (mut store, _, _) = store_with_selected_home();
            let ids: Vec<String> = (0..perm.len()).map(|_| add(&mut store, HERO_MODERN)).collect();
            let wanted: Vec<&str> = perm.iter().map(|&i| ids[i].as_str()).collect();

            store.reorder_sections(&wanted).unwrap();

            let layout = section_layout(store.current_page().unwrap());
            let expected: Vec<(String, u32)> = wanted
                .iter()
                .enumerate()
                .map(|(i, id)| (id.to_string(), i as u32))
                .collect();
            prop_assert_eq!(layout, expected);
        }

        #[test]
        fn reorder_pages_applies_any_permutation(
            perm in (1usize..6).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
        ) {
            let (mut store, project_id, home_id) = store_with_selected_home();
            let mut ids = vec![home_id];
            for i in 1..perm.len() {
                let page = store
                    .create_page(&project_id, new_page(&format!("Page {i}"), &format!("page-{i}")))
                    .unwrap();
                ids.push(page.id);
            }
            let wanted: Vec<&str> = perm.iter().map(|&i| ids[i].as_str()).collect();

            store.reorder_pages(&project_id, &wanted).unwrap();

            let project = store.project(&project_id).unwrap();
            let got: Vec<(&str, u32)> = project.pages.iter().map(|p| (p.id.as_str(), p.order)).collect();
            let expected: Vec<(&str, u32)> = wanted.iter().enumerate().map(|(i, id)| (*id, i as u32)).collect();
            prop_assert_eq!(got, expected);
            prop_assert_eq!(project.pages.iter().filter(|p| p.is_home_page).count(), 1);
        }
    }
}
