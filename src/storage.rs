//! Persistence behind the store.
//!
//! The store only ever talks to a [`Storage`]: five operations, whole
//! records in and out. Two adapters ship with the crate:
//!
//! - [`MemoryStorage`] keeps records in process as raw JSON. Tests seed it
//!   with hand-written legacy records to exercise migration.
//! - [`FileStorage`] keeps one pretty-printed JSON file per record:
//!
//! ```text
//! .pagesmith/
//! ├── projects/
//! │   ├── 3f2c….json
//! │   └── 9a01….json
//! └── templates/
//!     ├── header-simple-001.json
//!     └── …
//! ```
//!
//! Reads return [`ProjectRecord`]s rather than [`Project`]s because stored
//! data may predate pages; migration happens in the store.

use crate::types::{Project, ProjectRecord, SectionTemplate};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed record {path}: {source}")]
    Record {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid record id: {0:?}")]
    InvalidId(String),
}

/// Whole-record persistence for projects and section templates.
pub trait Storage {
    fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, StorageError>;
    /// Insert or replace by id.
    fn save_project(&mut self, project: &Project) -> Result<(), StorageError>;
    /// Deleting an id that is not stored is not an error.
    fn delete_project(&mut self, project_id: &str) -> Result<(), StorageError>;
    fn get_section_templates(&self) -> Result<Vec<SectionTemplate>, StorageError>;
    fn save_section_template(&mut self, template: &SectionTemplate) -> Result<(), StorageError>;
}

// ============================================================================
// In-memory
// ============================================================================

/// Records held as JSON values, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    projects: Vec<(String, Value)>,
    templates: Vec<(String, Value)>,
}

fn upsert(entries: &mut Vec<(String, Value)>, id: &str, value: Value) {
    match entries.iter_mut().find(|(key, _)| key == id) {
        Some(slot) => slot.1 = value,
        None => entries.push((id.to_string(), value)),
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw project record as-is, keyed by its `id` field.
    ///
    /// Used to plant legacy-shaped records that [`Storage::save_project`]
    /// could never produce.
    pub fn seed_project_value(&mut self, record: Value) -> Result<(), StorageError> {
        let id = record
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| StorageError::InvalidId(record.to_string()))?
            .to_string();
        upsert(&mut self.projects, &id, record);
        Ok(())
    }

    /// The raw stored record for a project.
    pub fn project_value(&self, project_id: &str) -> Option<&Value> {
        self.projects
            .iter()
            .find(|(key, _)| key == project_id)
            .map(|(_, value)| value)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }
}

impl Storage for MemoryStorage {
    fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, StorageError> {
        self.projects
            .iter()
            .map(|(_, value)| Ok(serde_json::from_value(value.clone())?))
            .collect()
    }

    fn save_project(&mut self, project: &Project) -> Result<(), StorageError> {
        let value = serde_json::to_value(project)?;
        upsert(&mut self.projects, &project.id, value);
        Ok(())
    }

    fn delete_project(&mut self, project_id: &str) -> Result<(), StorageError> {
        self.projects.retain(|(key, _)| key != project_id);
        Ok(())
    }

    fn get_section_templates(&self) -> Result<Vec<SectionTemplate>, StorageError> {
        self.templates
            .iter()
            .map(|(_, value)| Ok(serde_json::from_value(value.clone())?))
            .collect()
    }

    fn save_section_template(&mut self, template: &SectionTemplate) -> Result<(), StorageError> {
        let value = serde_json::to_value(template)?;
        upsert(&mut self.templates, &template.id, value);
        Ok(())
    }
}

// ============================================================================
// Filesystem
// ============================================================================

const PROJECTS_DIR: &str = "projects";
const TEMPLATES_DIR: &str = "templates";

/// One JSON file per record under a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Directories are created lazily on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, dir: &str, id: &str) -> Result<PathBuf, StorageError> {
        let unsafe_id = id.is_empty()
            || id.starts_with('.')
            || id.contains(['/', '\\'])
            || id.chars().any(char::is_control);
        if unsafe_id {
            return Err(StorageError::InvalidId(id.to_string()));
        }
        Ok(self.root.join(dir).join(format!("{id}.json")))
    }

    fn write_record(&self, dir: &str, id: &str, value: &impl serde::Serialize) -> Result<(), StorageError> {
        let path = self.record_path(dir, id)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(value)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Every `*.json` file in `dir`, parsed, in file-name order.
    fn read_records<T: serde::de::DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>, StorageError> {
        let dir = self.root.join(dir);
        if !dir.exists() {
            return Ok(Vec::new());
        }
        let mut paths = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in paths {
            let content = fs::read_to_string(&path)?;
            let record = serde_json::from_str(&content)
                .map_err(|source| StorageError::Record { path, source })?;
            records.push(record);
        }
        Ok(records)
    }
}

impl Storage for FileStorage {
    fn get_all_projects(&self) -> Result<Vec<ProjectRecord>, StorageError> {
        self.read_records(PROJECTS_DIR)
    }

    fn save_project(&mut self, project: &Project) -> Result<(), StorageError> {
        self.write_record(PROJECTS_DIR, &project.id, project)
    }

    fn delete_project(&mut self, project_id: &str) -> Result<(), StorageError> {
        let path = self.record_path(PROJECTS_DIR, project_id)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn get_section_templates(&self) -> Result<Vec<SectionTemplate>, StorageError> {
        self.read_records(TEMPLATES_DIR)
    }

    fn save_section_template(&mut self, template: &SectionTemplate) -> Result<(), StorageError> {
        self.write_record(TEMPLATES_DIR, &template.id, template)
    }
}
