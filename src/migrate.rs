//! Upgrade stored project records to the current shape.
//!
//! Projects written before pages existed carry a flat `sections` list.
//! [`migrate_project`] wraps those sections in a single home page and drops
//! the legacy field. Records that already have `pages` pass through
//! untouched, so running migration on every load is safe.

use crate::ids::IdGenerator;
use crate::naming::HOME_SLUG;
use crate::types::{Page, Project, ProjectRecord};
use chrono::{DateTime, Utc};

/// Values filled into legacy records that lack them.
#[derive(Debug, Clone)]
pub struct MigrationDefaults<'a> {
    pub category: &'a str,
    pub theme_id: &'a str,
    /// Stands in for missing timestamps.
    pub now: DateTime<Utc>,
}

/// A project and whether it had to be rewritten.
#[derive(Debug, Clone, PartialEq)]
pub struct Migrated {
    pub project: Project,
    pub migrated: bool,
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

pub fn migrate_project(
    record: ProjectRecord,
    ids: &mut dyn IdGenerator,
    defaults: &MigrationDefaults<'_>,
) -> Migrated {
    let created_at = record.created_at.unwrap_or(defaults.now);
    let updated_at = record.updated_at.unwrap_or(created_at);

    let (pages, migrated) = match record.pages {
        Some(pages) => (pages, false),
        None => {
            let title = if record.name.is_empty() {
                "Home".to_string()
            } else {
                record.name.clone()
            };
            let home = Page {
                id: ids.next_id(),
                name: "Home".into(),
                slug: HOME_SLUG.into(),
                title,
                description: record.description.clone(),
                sections: record.sections.unwrap_or_default(),
                is_home_page: true,
                is_published: true,
                order: 0,
                created_at,
                updated_at: created_at,
            };
            (vec![home], true)
        }
    };

    let (website_url, category, theme_id) = if migrated {
        let fallback_url = crate::naming::slugify(&record.name);
        (
            or_default(record.website_url, &fallback_url),
            or_default(record.category, defaults.category),
            or_default(record.theme_id, defaults.theme_id),
        )
    } else {
        (record.website_url, record.category, record.theme_id)
    };

    let mut project = Project {
        id: record.id,
        name: record.name,
        description: record.description,
        website_url,
        category,
        seo_keywords: record.seo_keywords,
        logo: record.logo,
        favicon: record.favicon,
        pages,
        theme_id,
        created_at,
        updated_at,
        is_published: record.is_published,
        publish_url: record.publish_url,
        thumbnail: record.thumbnail,
    };
    if migrated {
        for page in &mut project.pages {
            page.sort_sections();
        }
    }
    Migrated { project, migrated }
}
