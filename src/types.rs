//! The entity tree: Project → Page → SectionInstance.
//!
//! These are the types persisted by the storage adapter and rendered by the
//! exporter. Keys serialize in camelCase (`websiteUrl`, `isHomePage`,
//! `templateId`), matching the record shape every adapter reads and writes.
//!
//! Ownership is strict: a project owns its pages, a page owns its sections.
//! Sections point at their template by id only; templates live in the
//! [`catalog`](crate::catalog) and are never owned by a section.

use crate::content::SectionContent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Slug-safe path prefix for the published site.
    pub website_url: String,
    pub category: String,
    #[serde(default)]
    pub seo_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Kept sorted by `order`. Exactly one page is the home page.
    pub pages: Vec<Page>,
    pub theme_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl Project {
    pub fn home_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.is_home_page)
    }

    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == page_id)
    }

    pub fn page_mut(&mut self, page_id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == page_id)
    }

    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Sort pages by `order`, keeping the current relative position of ties.
    pub fn sort_pages(&mut self) {
        self.pages.sort_by_key(|p| p.order);
    }

    /// Sort, then rewrite `order` as `0..n`. Pages whose order changes are
    /// touched.
    pub fn renumber_pages(&mut self, now: DateTime<Utc>) {
        self.sort_pages();
        for (index, page) in self.pages.iter_mut().enumerate() {
            if page.order != index as u32 {
                page.order = index as u32;
                page.touch(now);
            }
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// One route of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Kept sorted by `order`.
    #[serde(default)]
    pub sections: Vec<SectionInstance>,
    pub is_home_page: bool,
    pub is_published: bool,
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn section(&self, section_id: &str) -> Option<&SectionInstance> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    pub fn sort_sections(&mut self) {
        self.sections.sort_by_key(|s| s.order);
    }

    pub fn renumber_sections(&mut self, now: DateTime<Utc>) {
        self.sort_sections();
        for (index, section) in self.sections.iter_mut().enumerate() {
            if section.order != index as u32 {
                section.order = index as u32;
                section.updated_at = now;
            }
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

/// A placed, data-filled occurrence of a template.
///
/// Serialized as `{id, templateId, data, order, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSection", into = "RawSection")]
pub struct SectionInstance {
    pub id: String,
    pub content: SectionContent,
    pub order: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SectionInstance {
    pub fn template_id(&self) -> &str {
        self.content.template_id()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSection {
    id: String,
    template_id: String,
    #[serde(default)]
    data: Value,
    order: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RawSection> for SectionInstance {
    fn from(raw: RawSection) -> Self {
        Self {
            id: raw.id,
            content: SectionContent::from_parts(&raw.template_id, raw.data),
            order: raw.order,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
        }
    }
}

impl From<SectionInstance> for RawSection {
    fn from(section: SectionInstance) -> Self {
        Self {
            id: section.id,
            template_id: section.content.template_id().to_string(),
            data: section.content.to_data(),
            order: section.order,
            created_at: section.created_at,
            updated_at: section.updated_at,
        }
    }
}

/// A reusable section blueprint from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTemplate", into = "RawTemplate")]
pub struct SectionTemplate {
    pub id: String,
    pub name: String,
    pub category: String,
    pub kind: String,
    pub thumbnail: String,
    pub description: String,
    pub default_content: SectionContent,
    pub icon: String,
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTemplate {
    id: String,
    name: String,
    category: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    thumbnail: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    default_content: Value,
    #[serde(default)]
    icon: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<RawTemplate> for SectionTemplate {
    fn from(raw: RawTemplate) -> Self {
        Self {
            default_content: SectionContent::from_parts(&raw.id, raw.default_content),
            id: raw.id,
            name: raw.name,
            category: raw.category,
            kind: raw.kind,
            thumbnail: raw.thumbnail,
            description: raw.description,
            icon: raw.icon,
            tags: raw.tags,
        }
    }
}

impl From<SectionTemplate> for RawTemplate {
    fn from(template: SectionTemplate) -> Self {
        Self {
            default_content: template.default_content.to_data(),
            id: template.id,
            name: template.name,
            category: template.category,
            kind: template.kind,
            thumbnail: template.thumbnail,
            description: template.description,
            icon: template.icon,
            tags: template.tags,
        }
    }
}

/// A project as read back from storage, before migration.
///
/// Older records carry a flat `sections` list and no `pages`; see
/// [`migrate`](crate::migrate). Fields that older records may lack are
/// optional or defaulted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub seo_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<Page>>,
    /// Legacy flat section list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<SectionInstance>>,
    #[serde(default)]
    pub theme_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        Self {
            id: project.id,
            name: project.name,
            description: project.description,
            website_url: project.website_url,
            category: project.category,
            seo_keywords: project.seo_keywords,
            logo: project.logo,
            favicon: project.favicon,
            pages: Some(project.pages),
            sections: None,
            theme_id: project.theme_id,
            created_at: Some(project.created_at),
            updated_at: Some(project.updated_at),
            is_published: project.is_published,
            publish_url: project.publish_url,
            thumbnail: project.thumbnail,
        }
    }
}
