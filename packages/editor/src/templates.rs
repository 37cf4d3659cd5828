//! # Saved Templates
//!
//! User-saved documents kept in a single JSON file, as an array of
//! [`SavedTemplate`] in save order.
//!
//! A missing or unreadable store file reads as an empty list so a corrupt
//! file never blocks the editor; the next save overwrites it.

use crate::errors::{EditorError, EditorResult};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sitebuilder_document::{Document, Theme};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub components: Document,
    pub theme: Theme,
    pub created_at: String,
}

/// File-backed list of saved templates
#[derive(Debug, Clone)]
pub struct TemplateStore {
    path: PathBuf,
}

impl TemplateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every saved template, oldest first
    pub fn list(&self) -> Vec<SavedTemplate> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!("Cannot read template store {}: {}", self.path.display(), err);
                }
                return Vec::new();
            }
        };

        match serde_json::from_str(&text) {
            Ok(templates) => templates,
            Err(err) => {
                tracing::warn!("Template store {} is corrupt: {}", self.path.display(), err);
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<SavedTemplate> {
        self.list().into_iter().find(|template| template.id == id)
    }

    /// Save a document under a new id and return the id
    pub fn save(
        &self,
        name: &str,
        description: &str,
        components: &Document,
        theme: &Theme,
    ) -> EditorResult<String> {
        let mut templates = self.list();
        let now = Utc::now();

        let mut stamp = now.timestamp_millis();
        while templates
            .iter()
            .any(|template| template.id == format!("template-{}", stamp))
        {
            stamp += 1;
        }
        let id = format!("template-{}", stamp);

        templates.push(SavedTemplate {
            id: id.clone(),
            name: name.to_string(),
            description: description.to_string(),
            components: components.clone(),
            theme: theme.clone(),
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        self.write(&templates)?;

        tracing::info!("Saved template {} ({})", name, id);
        Ok(id)
    }

    /// Remove the template with `id`
    pub fn delete(&self, id: &str) -> EditorResult<()> {
        let mut templates = self.list();
        let before = templates.len();
        templates.retain(|template| template.id != id);

        if templates.len() == before {
            return Err(EditorError::TemplateNotFound(id.to_string()));
        }

        self.write(&templates)?;
        tracing::info!("Deleted template {}", id);
        Ok(())
    }

    fn write(&self, templates: &[SavedTemplate]) -> EditorResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(templates)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitebuilder_document::find_template;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> TemplateStore {
        TemplateStore::new(dir.path().join(".sitebuilder").join("templates.json"))
    }

    #[test]
    fn test_missing_store_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(store(&dir).list().is_empty());
    }

    #[test]
    fn test_save_list_get_delete() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        let template = find_template("business-modern").unwrap();

        let first = store
            .save("Mine", "first", &template.components, &template.theme)
            .unwrap();
        let second = store
            .save("Mine again", "second", &Document::new(), &Theme::default())
            .unwrap();

        assert!(first.starts_with("template-"));
        assert_ne!(first, second);

        let listed = store.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Mine");
        assert!(listed[0].created_at.ends_with('Z'));

        let loaded = store.get(&first).unwrap();
        assert_eq!(loaded.components, template.components);
        assert_eq!(loaded.theme, template.theme);

        store.delete(&first).unwrap();
        assert!(store.get(&first).is_none());
        assert!(matches!(
            store.delete(&first),
            Err(EditorError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_corrupt_store_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.list().is_empty());

        store
            .save("Fresh", "", &Document::new(), &Theme::default())
            .unwrap();
        assert_eq!(store.list().len(), 1);
    }
}
