//! CLI output formatting for every command.
//!
//! # Information-First Display
//!
//! Every entity (project, page, section) leads with its positional index and
//! human name. Ids, slugs, and file paths follow as indented context lines,
//! so the output reads as a site inventory while still giving the ids the
//! other commands take as arguments.
//!
//! # Output Format
//!
//! ## List
//!
//! ```text
//! Projects
//! 001 Acme (2 pages)
//!     Id: 7f0c...
//!     URL: acme
//!     Category: business, Theme: modern-blue
//! ```
//!
//! ## Show
//!
//! ```text
//! Acme
//!     Id: 7f0c...
//!     Widgets for everyone
//!
//! Pages
//! 001 Home [home]
//!     Id: 41aa...
//!     Slug: home
//!     001 Modern Hero
//!         Id: 9b3e... (hero-modern-001)
//! 002 About (draft)
//!     Id: c2d1...
//!     Slug: about
//! ```
//!
//! ## Export
//!
//! ```text
//! 001 Home → index.html
//! 002 About → about.html
//!
//! Exported 2 pages to dist
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use std::path::Path;

use crate::catalog;
use crate::export::output_file;
use crate::store::LoadReport;
use crate::theme::Theme;
use crate::types::{Page, Project, SectionInstance, SectionTemplate};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Positional index + name, with optional parenthesized detail.
///
/// ```text
/// 001 Acme (2 pages)
/// 001 Home
/// ```
fn entity_header(index: usize, name: &str, detail: Option<&str>) -> String {
    match detail {
        Some(d) => format!("{} {} ({})", format_index(index), name, d),
        None => format!("{} {}", format_index(index), name),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

fn page_header(index: usize, page: &Page) -> String {
    let mut line = entity_header(index, &page.name, None);
    if page.is_home_page {
        line.push_str(" [home]");
    }
    if !page.is_published {
        line.push_str(" (draft)");
    }
    line
}

fn section_lines(index: usize, section: &SectionInstance, depth: usize) -> Vec<String> {
    let template_id = section.template_id();
    let name = catalog::find(template_id)
        .map(|t| t.name.as_str())
        .unwrap_or("Unknown template");
    vec![
        format!("{}{}", indent(depth), entity_header(index, name, None)),
        format!("{}Id: {} ({})", indent(depth + 1), section.id, template_id),
    ]
}

// ============================================================================
// Projects
// ============================================================================

/// Format the project list.
pub fn format_project_list(projects: &[Project]) -> Vec<String> {
    if projects.is_empty() {
        return vec!["No projects yet. Create one with `pagesmith new <name>`.".to_string()];
    }
    let mut lines = vec!["Projects".to_string()];
    for (i, project) in projects.iter().enumerate() {
        let count = plural(project.pages.len(), "page", "pages");
        lines.push(entity_header(i + 1, &project.name, Some(&count)));
        lines.push(format!("    Id: {}", project.id));
        lines.push(format!("    URL: {}", project.website_url));
        lines.push(format!(
            "    Category: {}, Theme: {}",
            project.category, project.theme_id
        ));
    }
    lines
}

pub fn print_project_list(projects: &[Project]) {
    for line in format_project_list(projects) {
        println!("{}", line);
    }
}

/// Format one project with its pages and their sections.
pub fn format_project_detail(project: &Project) -> Vec<String> {
    let mut lines = vec![project.name.clone()];
    lines.push(format!("    Id: {}", project.id));
    if let Some(desc) = project.description.as_deref() {
        let truncated = truncate_desc(desc.trim(), 60);
        if !truncated.is_empty() {
            lines.push(format!("    {}", truncated));
        }
    }
    lines.push(format!("    URL: {}", project.website_url));
    lines.push(format!(
        "    Category: {}, Theme: {}",
        project.category, project.theme_id
    ));
    if !project.seo_keywords.is_empty() {
        lines.push(format!("    Keywords: {}", project.seo_keywords.join(", ")));
    }

    lines.push(String::new());
    lines.push("Pages".to_string());
    for (i, page) in project.pages.iter().enumerate() {
        lines.push(page_header(i + 1, page));
        lines.push(format!("    Id: {}", page.id));
        lines.push(format!("    Slug: {}", page.slug));
        for (j, section) in page.sections.iter().enumerate() {
            lines.extend(section_lines(j + 1, section, 1));
        }
    }
    lines
}

pub fn print_project_detail(project: &Project) {
    for line in format_project_detail(project) {
        println!("{}", line);
    }
}

/// Lines worth telling the user after a load; empty when nothing happened.
pub fn format_load_report(report: &LoadReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.migrated > 0 {
        lines.push(format!(
            "Upgraded {} to the paged format",
            plural(report.migrated, "legacy project", "legacy projects")
        ));
    }
    if report.templates_seeded > 0 {
        lines.push(format!(
            "Installed {}",
            plural(report.templates_seeded, "section template", "section templates")
        ));
    }
    lines
}

pub fn print_load_report(report: &LoadReport) {
    for line in format_load_report(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Format templates grouped under their category, categories in the order
/// they first appear.
pub fn format_templates(templates: &[SectionTemplate]) -> Vec<String> {
    let mut categories: Vec<&str> = Vec::new();
    for t in templates {
        if !categories.contains(&t.category.as_str()) {
            categories.push(&t.category);
        }
    }

    let mut lines = Vec::new();
    for category in categories {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(category.to_string());
        for t in templates.iter().filter(|t| t.category == category) {
            lines.push(format!("    {}  {}", t.id, t.name));
            lines.push(format!("        {}", truncate_desc(&t.description, 60)));
        }
    }
    lines
}

pub fn print_templates(templates: &[SectionTemplate]) {
    for line in format_templates(templates) {
        println!("{}", line);
    }
}

/// Format available themes, marking the default.
pub fn format_themes(themes: &[Theme], default_id: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, theme) in themes.iter().enumerate() {
        let mut header = entity_header(i + 1, &theme.name, None);
        if theme.id == default_id {
            header.push_str(" [default]");
        }
        lines.push(header);
        lines.push(format!("    Id: {}", theme.id));
        lines.push(format!(
            "    Colors: {} / {} / {}",
            theme.colors.primary, theme.colors.secondary, theme.colors.accent
        ));
        lines.push(format!(
            "    Fonts: {}, {}, {}",
            theme.fonts.primary, theme.fonts.secondary, theme.fonts.accent
        ));
    }
    lines
}

pub fn print_themes(themes: &[Theme], default_id: &str) {
    for line in format_themes(themes, default_id) {
        println!("{}", line);
    }
}

// ============================================================================
// Export
// ============================================================================

/// Format export results: one line per page, then a summary.
pub fn format_export_output(project: &Project, output_dir: &Path) -> Vec<String> {
    let mut pages: Vec<&Page> = project.pages.iter().collect();
    pages.sort_by_key(|p| p.order);

    let mut lines: Vec<String> = pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            format!(
                "{} → {}",
                entity_header(i + 1, &page.name, None),
                output_file(page).display()
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "Exported {} to {}",
        plural(pages.len(), "page", "pages"),
        output_dir.display()
    ));
    lines
}

pub fn print_export_output(project: &Project, output_dir: &Path) {
    for line in format_export_output(project, output_dir) {
        println!("{}", line);
    }
}
