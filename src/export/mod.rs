//! Static HTML export.
//!
//! Turns a project (or a bare list of sections) into standalone HTML
//! documents. Each document carries everything it needs inline: the theme's
//! CSS variables, the utility stylesheet, and the small script behind the
//! mobile menu, scroll reveal, and contact form.
//!
//! ## Output layout
//!
//! ```text
//! dist/
//! ├── index.html       # home page
//! ├── about.html       # every other page, by slug
//! └── pricing.html
//! ```
//!
//! Rendering is a pure function of its inputs: the same project and theme
//! always produce byte-identical files.

pub mod icons;
pub mod sections;

use std::fs;
use std::path::{Path, PathBuf};

use maud::{DOCTYPE, Markup, PreEscaped, html};
use rayon::prelude::*;
use thiserror::Error;
use tracing::info;

use crate::theme::{Theme, generate_css_variables, google_fonts_url};
use crate::types::{Page, Project, SectionInstance};
use sections::render_section;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const SITE_CSS: &str = include_str!("../../static/site.css");
const SITE_JS: &str = include_str!("../../static/site.js");
const UTILITY_CDN: &str = "https://cdn.tailwindcss.com";

/// One rendered document and where it goes, relative to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedPage {
    pub path: PathBuf,
    pub html: String,
}

/// Everything in `<head>` that varies per document.
#[derive(Debug, Default)]
struct Head<'a> {
    title: &'a str,
    description: Option<&'a str>,
    keywords: Option<String>,
    favicon: Option<&'a str>,
}

/// Render a flat list of sections as one document, in `order`.
pub fn render_sections(title: &str, sections: &[SectionInstance], theme: &Theme) -> String {
    let head = Head {
        title,
        ..Default::default()
    };
    document(&head, theme, sections).into_string()
}

/// Render one page of a project.
pub fn render_page(project: &Project, page: &Page, theme: &Theme) -> String {
    let title = if !page.title.is_empty() {
        page.title.as_str()
    } else if page.is_home_page || page.name.is_empty() {
        project.name.as_str()
    } else {
        page.name.as_str()
    };
    let description = non_empty(page.description.as_deref())
        .or_else(|| non_empty(project.description.as_deref()));
    let keywords = (!project.seo_keywords.is_empty()).then(|| project.seo_keywords.join(", "));
    let head = Head {
        title,
        description,
        keywords,
        favicon: non_empty(project.favicon.as_deref()),
    };
    document(&head, theme, &page.sections).into_string()
}

/// Render every page of a project, in page order.
pub fn render_site(project: &Project, theme: &Theme) -> Vec<ExportedPage> {
    let mut pages: Vec<&Page> = project.pages.iter().collect();
    pages.sort_by_key(|p| p.order);

    pages
        .par_iter()
        .map(|page| ExportedPage {
            path: output_file(page),
            html: render_page(project, page, theme),
        })
        .collect()
}

/// Render a project and write it under `output_dir`.
///
/// Returns the written paths in page order.
pub fn write_site(
    project: &Project,
    theme: &Theme,
    output_dir: &Path,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(output_dir)?;
    let mut written = Vec::new();
    for page in render_site(project, theme) {
        let path = output_dir.join(&page.path);
        fs::write(&path, page.html)?;
        written.push(path);
    }
    info!(
        project_id = %project.id,
        pages = written.len(),
        dir = %output_dir.display(),
        "Exported site"
    );
    Ok(written)
}

/// The home page is `index.html`; every other page is named by its slug.
/// A non-home page slugged `index` moves to `index.page.html`, a name no
/// slug can produce since slugs never contain `.`.
pub fn output_file(page: &Page) -> PathBuf {
    if page.is_home_page {
        PathBuf::from("index.html")
    } else if page.slug == "index" {
        PathBuf::from("index.page.html")
    } else {
        PathBuf::from(format!("{}.html", page.slug))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// ============================================================================
// Document skeleton
// ============================================================================

fn stylesheet(theme: &Theme) -> String {
    format!(
        ":root {{\n{}\n}}\n\n{}",
        generate_css_variables(theme),
        SITE_CSS
    )
}

fn document(head: &Head<'_>, theme: &Theme, sections: &[SectionInstance]) -> Markup {
    let mut ordered: Vec<&SectionInstance> = sections.iter().collect();
    ordered.sort_by_key(|s| s.order);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (head.title) }
                @if let Some(description) = head.description {
                    meta name="description" content=(description);
                }
                @if let Some(keywords) = &head.keywords {
                    meta name="keywords" content=(keywords);
                }
                @if let Some(favicon) = head.favicon {
                    link rel="icon" href=(favicon);
                }
                script src=(UTILITY_CDN) {}
                link href=(google_fonts_url(theme)) rel="stylesheet";
                style { (PreEscaped(stylesheet(theme))) }
                script { (PreEscaped(SITE_JS)) }
            }
            body {
                div id="mobile-menu-overlay" class="mobile-menu-overlay" onclick="closeMobileMenu()" {}
                @for section in ordered {
                    (render_section(section))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::*;
    use crate::store::ProjectPatch;
    use crate::test_helpers::*;
    use crate::theme::find_builtin;
    use pretty_assertions::assert_eq;

    fn theme() -> Theme {
        find_builtin("modern-blue").unwrap()
    }

    fn cta(id: &str, title: &str, order: u32) -> SectionInstance {
        SectionInstance {
            id: id.into(),
            content: SectionContent::CtaSimple(CtaContent {
                title: title.into(),
                ..Default::default()
            }),
            order,
            created_at: ts("2025-01-01T00:00:00Z"),
            updated_at: ts("2025-01-01T00:00:00Z"),
        }
    }

    #[test]
    fn document_skeleton() {
        let html = render_sections("Acme", &[], &theme());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Acme</title>"));
        assert!(html.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(html.contains("fonts.googleapis.com/css2?family=Inter"));
        assert!(html.contains(":root {\n--website-color-primary: #2563eb;"));
        assert!(html.contains("function toggleMobileMenu"));
        assert!(html.contains(r#"id="mobile-menu-overlay""#));
    }

    #[test]
    fn sections_render_in_order_field_order() {
        let sections = vec![cta("a", "Section A", 1), cta("b", "Section B", 0)];
        let html = render_sections("Acme", &sections, &theme());
        let a = html.find("Section A").unwrap();
        let b = html.find("Section B").unwrap();
        assert!(b < a);
    }

    #[test]
    fn render_is_deterministic() {
        let sections = vec![cta("a", "One", 0), cta("b", "Two", 1)];
        let first = render_sections("Acme", &sections, &theme());
        let second = render_sections("Acme", &sections, &theme());
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_template_does_not_abort_export() {
        let mut sections = vec![cta("a", "Before", 0), cta("c", "After", 2)];
        sections.push(SectionInstance {
            id: "b".into(),
            content: SectionContent::from_parts("gallery-masonry-009", serde_json::json!({})),
            order: 1,
            created_at: ts("2025-01-01T00:00:00Z"),
            updated_at: ts("2025-01-01T00:00:00Z"),
        });
        let html = render_sections("Acme", &sections, &theme());
        let marker = html.find("<!-- Unsupported section: gallery-masonry-009 -->").unwrap();
        assert!(html.find("Before").unwrap() < marker);
        assert!(marker < html.find("After").unwrap());
    }

    #[test]
    fn title_is_escaped() {
        let html = render_sections("Tom & Jerry <Co>", &[], &theme());
        assert!(html.contains("<title>Tom &amp; Jerry &lt;Co&gt;</title>"));
    }

    #[test]
    fn page_head_carries_project_metadata() {
        let (mut store, project_id, _) = store_with_selected_home();
        add(&mut store, HERO_MODERN);
        store
            .update_project(
                &project_id,
                ProjectPatch {
                    description: Some(Some("Widgets for everyone".into())),
                    seo_keywords: Some(vec!["widgets".into(), "acme".into()]),
                    favicon: Some(Some("/favicon.ico".into())),
                    ..Default::default()
                },
            )
            .unwrap();
        let project = store.project(&project_id).unwrap();
        let home = project.home_page().unwrap();

        let html = render_page(project, home, &theme());
        assert!(html.contains(r#"<meta name="description" content="Widgets for everyone">"#));
        assert!(html.contains(r#"<meta name="keywords" content="widgets, acme">"#));
        assert!(html.contains(r#"<link rel="icon" href="/favicon.ico">"#));
        assert!(html.contains(r#"id="home""#));
    }

    #[test]
    fn site_has_one_file_per_page() {
        let (mut store, project_id, _) = store_with_selected_home();
        store.create_page(&project_id, new_page("About", "about")).unwrap();
        store.create_page(&project_id, new_page("Pricing", "pricing")).unwrap();
        let project = store.project(&project_id).unwrap();

        let site = render_site(project, &theme());
        let paths: Vec<PathBuf> = site.iter().map(|p| p.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                PathBuf::from("index.html"),
                PathBuf::from("about.html"),
                PathBuf::from("pricing.html"),
            ]
        );
        assert!(site.iter().all(|p| p.html.starts_with("<!DOCTYPE html>")));
    }

    #[test]
    fn index_slug_cannot_replace_home() {
        let (mut store, project_id, _) = store_with_selected_home();
        store.create_page(&project_id, new_page("Index", "index")).unwrap();
        let project = store.project(&project_id).unwrap();
        let page = find_page(project, "index");
        assert_eq!(output_file(page), PathBuf::from("index.page.html"));
    }

    #[test]
    fn index_and_index_page_slugs_write_separate_files() {
        let (mut store, project_id, _) = store_with_selected_home();
        store.create_page(&project_id, new_page("Index", "index")).unwrap();
        store.create_page(&project_id, new_page("Index Page", "index-page")).unwrap();
        let project = store.project(&project_id).unwrap();
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        let written = write_site(project, &theme(), &out).unwrap();
        assert_eq!(
            written,
            vec![
                out.join("index.html"),
                out.join("index.page.html"),
                out.join("index-page.html"),
            ]
        );
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 3);
    }

    #[test]
    fn write_site_creates_files() {
        let (store, project_id, _) = store_with_selected_home();
        let project = store.project(&project_id).unwrap();
        let tmp = tempfile::TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        let written = write_site(project, &theme(), &out).unwrap();
        assert_eq!(written, vec![out.join("index.html")]);
        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<title>Acme</title>"));
    }
}
