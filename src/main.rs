use clap::{Args, Parser, Subcommand};
use pagesmith::config::{self, PagesmithConfig};
use pagesmith::content::SectionContent;
use pagesmith::storage::FileStorage;
use pagesmith::store::{InsertPosition, NewPage, NewProject, PagePatch, ProjectPatch, ProjectStore};
use pagesmith::types::Project;
use pagesmith::{catalog, export, output};
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

type CliResult<T = ()> = Result<T, Box<dyn Error>>;

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(about = "Build websites from ready-made sections and export them as static HTML")]
#[command(long_about = "\
Build websites from ready-made sections and export them as static HTML

A project holds pages; a page holds sections placed from the template
catalog. Every project starts with a home page, which exports as
index.html. Other pages export as <slug>.html.

Projects and pages can be named by id or by URL slug:

  pagesmith new \"Acme Widgets\"
  pagesmith page add acme-widgets About about
  pagesmith section add acme-widgets about about-team-002
  pagesmith export acme-widgets

Logging goes to stderr; set PAGESMITH_LOG=info (or debug) for detail.

Run 'pagesmith gen-config' to generate a documented pagesmith.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE, global = true)]
    config: PathBuf,

    /// Data directory (overrides `data_dir` from the config file)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a project with an empty home page
    New(NewArgs),
    /// List all projects, newest first
    List,
    /// Show a project's pages and sections
    Show { project: String },
    /// Change a project's details
    Edit(EditArgs),
    /// Delete a project and all its pages
    Delete { project: String },
    /// Manage pages of a project
    #[command(subcommand)]
    Page(PageCommand),
    /// Manage sections on a page
    #[command(subcommand)]
    Section(SectionCommand),
    /// List the section template catalog
    Templates {
        /// Only show one category
        #[arg(long)]
        category: Option<String>,
    },
    /// List available themes
    Themes,
    /// Export a project as static HTML
    Export {
        project: String,
        /// Output directory (default: <export.output_dir>/<project url>)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a stock pagesmith.toml with all options documented
    GenConfig,
    /// Delete every stored project
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args)]
struct NewArgs {
    name: String,
    #[arg(long)]
    description: Option<String>,
    /// URL slug (default: derived from the name)
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    theme: Option<String>,
    /// Comma-separated SEO keywords
    #[arg(long, value_delimiter = ',')]
    keywords: Vec<String>,
}

#[derive(Args)]
struct EditArgs {
    project: String,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    description: Option<String>,
    #[arg(long)]
    url: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    theme: Option<String>,
    /// Comma-separated SEO keywords (replaces the current set)
    #[arg(long, value_delimiter = ',')]
    keywords: Option<Vec<String>>,
    #[arg(long)]
    favicon: Option<String>,
    #[arg(long)]
    logo: Option<String>,
}

#[derive(Subcommand)]
enum PageCommand {
    /// Add a page at the end
    Add {
        project: String,
        name: String,
        slug: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Change a page's details
    Edit {
        project: String,
        page: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// Publish the page
        #[arg(long, conflicts_with = "unpublish")]
        publish: bool,
        /// Return the page to draft
        #[arg(long)]
        unpublish: bool,
    },
    /// Remove a page (the home page cannot be removed)
    Remove { project: String, page: String },
    /// Copy a page and its sections
    Duplicate { project: String, page: String },
    /// Move a page to a 1-based position
    Move {
        project: String,
        page: String,
        position: usize,
    },
}

#[derive(Subcommand)]
enum SectionCommand {
    /// Place a section from a template
    Add {
        project: String,
        page: String,
        template: String,
        /// 1-based position of an existing section to insert at (default: end)
        #[arg(long)]
        at: Option<u32>,
        /// Insert below the `--at` section instead of above it
        #[arg(long, requires = "at")]
        below: bool,
        /// Content as JSON (default: the template's sample content)
        #[arg(long)]
        data: Option<String>,
    },
    /// Replace a section's content with JSON
    Edit {
        project: String,
        page: String,
        section: String,
        data: String,
    },
    /// Remove a section
    Remove {
        project: String,
        page: String,
        section: String,
    },
    /// Copy a section directly below itself
    Duplicate {
        project: String,
        page: String,
        section: String,
    },
    /// Move a section to a 1-based position
    Move {
        project: String,
        page: String,
        section: String,
        position: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();
    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> CliResult {
    if let Command::GenConfig = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = config::load_config(&cli.config)?;
    // Relative paths in the config file are relative to the file itself.
    let base = cli.config.parent().unwrap_or(Path::new("")).to_path_buf();

    match cli.command {
        Command::Templates { category } => {
            let templates: Vec<_> = match category.as_deref() {
                Some(c) => catalog::by_category(c).into_iter().cloned().collect(),
                None => catalog::templates().to_vec(),
            };
            output::print_templates(&templates);
        }
        Command::Themes => {
            output::print_themes(&config.all_themes(), &config.projects.default_theme);
        }
        command => {
            let data_dir = cli
                .data_dir
                .clone()
                .unwrap_or_else(|| config.data_path(&base));
            let mut store = ProjectStore::new(FileStorage::new(data_dir))
                .with_settings(config.store_settings());
            let report = store.load()?;
            output::print_load_report(&report);
            run(command, &mut store, &config, &base)?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PAGESMITH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

type Store = ProjectStore<FileStorage>;

fn run(command: Command, store: &mut Store, config: &PagesmithConfig, base: &Path) -> CliResult {
    match command {
        Command::New(args) => {
            if let Some(theme) = &args.theme {
                require_theme(config, theme)?;
            }
            let project = store.create_project(NewProject {
                name: args.name,
                description: args.description,
                website_url: args.url,
                category: args.category,
                seo_keywords: args.keywords,
                theme_id: args.theme,
                ..Default::default()
            })?;
            println!("Created project {} ({})", project.name, project.id);
            output::print_project_detail(&project);
        }
        Command::List => output::print_project_list(store.projects()),
        Command::Show { project } => {
            let project = find_project(store, &project)?;
            output::print_project_detail(&project);
        }
        Command::Edit(args) => {
            if let Some(theme) = &args.theme {
                require_theme(config, theme)?;
            }
            let project = find_project(store, &args.project)?;
            store.update_project(
                &project.id,
                ProjectPatch {
                    name: args.name,
                    description: args.description.map(|d| Some(d).filter(|d| !d.is_empty())),
                    website_url: args.url,
                    category: args.category,
                    seo_keywords: args.keywords,
                    favicon: args.favicon.map(|f| Some(f).filter(|f| !f.is_empty())),
                    logo: args.logo.map(|l| Some(l).filter(|l| !l.is_empty())),
                    theme_id: args.theme,
                    ..Default::default()
                },
            )?;
            show(store, &project.id);
        }
        Command::Delete { project } => {
            let project = find_project(store, &project)?;
            store.delete_project(&project.id)?;
            println!("Deleted project {}", project.name);
        }
        Command::Page(page) => run_page(page, store)?,
        Command::Section(section) => run_section(section, store)?,
        Command::Export { project, output } => {
            let project = find_project(store, &project)?;
            let theme = config
                .theme_for(&project.theme_id)
                .ok_or_else(|| format!("No theme available for '{}'", project.theme_id))?;
            let out = output.unwrap_or_else(|| config.output_path(base).join(&project.website_url));
            export::write_site(&project, &theme, &out)?;
            output::print_export_output(&project, &out);
        }
        Command::Clear { yes } => {
            if !yes {
                return Err("Refusing to delete every project without --yes".into());
            }
            let count = store.projects().len();
            store.clear_all_data()?;
            println!("Deleted {count} projects");
        }
        Command::GenConfig | Command::Templates { .. } | Command::Themes => {}
    }
    Ok(())
}

fn run_page(command: PageCommand, store: &mut Store) -> CliResult {
    match command {
        PageCommand::Add {
            project,
            name,
            slug,
            title,
            description,
        } => {
            let project = find_project(store, &project)?;
            let page = store.create_page(
                &project.id,
                NewPage {
                    name,
                    slug,
                    title,
                    description,
                },
            )?;
            println!("Added page {} ({})", page.name, page.slug);
            show(store, &project.id);
        }
        PageCommand::Edit {
            project,
            page,
            name,
            slug,
            title,
            description,
            publish,
            unpublish,
        } => {
            let project = find_project(store, &project)?;
            let page_id = find_page(&project, &page)?;
            let is_published = match (publish, unpublish) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            store.update_page(
                &project.id,
                &page_id,
                PagePatch {
                    name,
                    slug,
                    title,
                    description: description.map(|d| Some(d).filter(|d| !d.is_empty())),
                    is_published,
                },
            )?;
            show(store, &project.id);
        }
        PageCommand::Remove { project, page } => {
            let project = find_project(store, &project)?;
            let page_id = find_page(&project, &page)?;
            store.delete_page(&project.id, &page_id)?;
            show(store, &project.id);
        }
        PageCommand::Duplicate { project, page } => {
            let project = find_project(store, &project)?;
            let page_id = find_page(&project, &page)?;
            if let Some(copy) = store.duplicate_page(&project.id, &page_id)? {
                println!("Added page {} ({})", copy.name, copy.slug);
            }
            show(store, &project.id);
        }
        PageCommand::Move {
            project,
            page,
            position,
        } => {
            let project = find_project(store, &project)?;
            let page_id = find_page(&project, &page)?;
            let ids: Vec<&str> = project.pages.iter().map(|p| p.id.as_str()).collect();
            let order = moved(&ids, &page_id, position);
            store.reorder_pages(&project.id, &order)?;
            show(store, &project.id);
        }
    }
    Ok(())
}

fn run_section(command: SectionCommand, store: &mut Store) -> CliResult {
    match command {
        SectionCommand::Add {
            project,
            page,
            template,
            at,
            below,
            data,
        } => {
            let project_id = select_page(store, &project, &page)?;
            let Some(found) = catalog::find(&template) else {
                return Err(format!(
                    "Unknown template '{template}'. Run `pagesmith templates` to list them"
                )
                .into());
            };
            let content = data
                .map(|json| parse_content(&found.id, &json))
                .transpose()?;
            let position = at.map(|n| {
                let index = n.saturating_sub(1);
                if below {
                    InsertPosition::below(index)
                } else {
                    InsertPosition::above(index)
                }
            });
            if let Some(section) = store.add_section_from_template(&template, content, position)? {
                println!("Added {} ({})", found.name, section.id);
            }
            show(store, &project_id);
        }
        SectionCommand::Edit {
            project,
            page,
            section,
            data,
        } => {
            let project_id = select_page(store, &project, &page)?;
            let section_id = find_section(store, &section)?;
            let template_id = current_template(store, &section_id);
            let content = parse_content(&template_id, &data)?;
            store.update_section_data(&section_id, content)?;
            show(store, &project_id);
        }
        SectionCommand::Remove {
            project,
            page,
            section,
        } => {
            let project_id = select_page(store, &project, &page)?;
            let section_id = find_section(store, &section)?;
            store.delete_section(&section_id)?;
            show(store, &project_id);
        }
        SectionCommand::Duplicate {
            project,
            page,
            section,
        } => {
            let project_id = select_page(store, &project, &page)?;
            let section_id = find_section(store, &section)?;
            if let Some(copy) = store.duplicate_section(&section_id)? {
                println!("Added copy {}", copy.id);
            }
            show(store, &project_id);
        }
        SectionCommand::Move {
            project,
            page,
            section,
            position,
        } => {
            let project_id = select_page(store, &project, &page)?;
            let section_id = find_section(store, &section)?;
            let ids: Vec<String> = store
                .current_page()
                .map(|p| p.sections.iter().map(|s| s.id.clone()).collect())
                .unwrap_or_default();
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            let order = moved(&ids, &section_id, position);
            store.reorder_sections(&order)?;
            show(store, &project_id);
        }
    }
    Ok(())
}

// ============================================================================
// Lookups
// ============================================================================

/// Resolve a project by id or URL slug.
fn find_project(store: &Store, reference: &str) -> CliResult<Project> {
    store
        .projects()
        .iter()
        .find(|p| p.id == reference)
        .or_else(|| store.projects().iter().find(|p| p.website_url == reference))
        .cloned()
        .ok_or_else(|| format!("No project '{reference}'. Run `pagesmith list` to see them").into())
}

/// Resolve a page by id or slug.
fn find_page(project: &Project, reference: &str) -> CliResult<String> {
    project
        .page(reference)
        .or_else(|| project.page_by_slug(reference))
        .map(|p| p.id.clone())
        .ok_or_else(|| format!("No page '{reference}' in {}", project.name).into())
}

/// Select a project and page for the section commands; returns the project id.
fn select_page(store: &mut Store, project: &str, page: &str) -> CliResult<String> {
    let project = find_project(store, project)?;
    let page_id = find_page(&project, page)?;
    store.set_current_project(Some(&project.id));
    store.set_current_page(Some(&page_id));
    Ok(project.id)
}

/// Resolve a section on the selected page by id or 1-based position.
fn find_section(store: &Store, reference: &str) -> CliResult<String> {
    let page = store.current_page().ok_or("No page selected")?;
    if page.section(reference).is_some() {
        return Ok(reference.to_string());
    }
    reference
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| page.sections.get(i))
        .map(|s| s.id.clone())
        .ok_or_else(|| format!("No section '{reference}' on page {}", page.slug).into())
}

fn current_template(store: &Store, section_id: &str) -> String {
    store
        .current_page()
        .and_then(|p| p.section(section_id))
        .map(|s| s.template_id().to_string())
        .unwrap_or_default()
}

fn parse_content(template_id: &str, json: &str) -> CliResult<SectionContent> {
    let data: serde_json::Value = serde_json::from_str(json)?;
    let content = SectionContent::from_parts(template_id, data);
    if content.is_unknown() {
        return Err(format!("Content does not fit template '{template_id}'").into());
    }
    Ok(content)
}

fn require_theme(config: &PagesmithConfig, theme_id: &str) -> CliResult {
    if config.find_theme(theme_id).is_none() {
        return Err(format!("Unknown theme '{theme_id}'. Run `pagesmith themes` to list them").into());
    }
    Ok(())
}

/// `ids` with `id` moved to the 1-based `position`, clamped to the ends.
fn moved<'a>(ids: &[&'a str], id: &str, position: usize) -> Vec<&'a str> {
    let mut order: Vec<&str> = ids.iter().copied().filter(|i| *i != id).collect();
    if let Some(original) = ids.iter().copied().find(|i| *i == id) {
        let index = position.saturating_sub(1).min(order.len());
        order.insert(index, original);
    }
    order
}

fn show(store: &Store, project_id: &str) {
    if let Some(project) = store.project(project_id) {
        output::print_project_detail(project);
    }
}
