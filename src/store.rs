//! Template stores resolve the template identifiers of file nodes to template source.
use std::path::PathBuf;

use log::debug;

use crate::error::{Error, Result};
use crate::fs::{FileSystem, LocalFileSystem};

/// Trait for looking up template source by identifier.
pub trait TemplateStore {
    /// Returns the raw source of `template`.
    ///
    /// # Errors
    /// * `Error::TemplateNotFound` if the store has no such template
    fn load(&self, template: &str) -> Result<String>;
}

/// Store reading templates from files below a root directory.
pub struct DirTemplateStore<F: FileSystem = LocalFileSystem> {
    root: PathBuf,
    fs: F,
}

impl DirTemplateStore {
    /// Creates a store over `root` on the local filesystem.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_fs(root, LocalFileSystem::new())
    }
}

impl<F: FileSystem> DirTemplateStore<F> {
    pub fn with_fs<P: Into<PathBuf>>(root: P, fs: F) -> Self {
        Self { root: root.into(), fs }
    }
}

impl<F: FileSystem> TemplateStore for DirTemplateStore<F> {
    fn load(&self, template: &str) -> Result<String> {
        let path = self.root.join(template);
        if !self.fs.exists(&path) {
            return Err(Error::TemplateNotFound {
                template: template.to_string(),
                location: self.root.display().to_string(),
            });
        }

        debug!("Loading template {}", path.display());
        let bytes = self.fs.read_file(&path)?;
        String::from_utf8(bytes).map_err(|_| {
            Error::ConfigError(format!("template '{template}' is not valid UTF-8"))
        })
    }
}

/// Store over templates compiled into the binary.
pub struct EmbeddedTemplateStore {
    templates: &'static [(&'static str, &'static str)],
}

impl EmbeddedTemplateStore {
    pub const fn new(templates: &'static [(&'static str, &'static str)]) -> Self {
        Self { templates }
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn load(&self, template: &str) -> Result<String> {
        self.templates
            .iter()
            .find(|(name, _)| *name == template)
            .map(|(_, source)| source.to_string())
            .ok_or_else(|| Error::TemplateNotFound {
                template: template.to_string(),
                location: "embedded templates".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEMPLATES: &[(&str, &str)] = &[("hello.hbs", "Hello {{ name }}!")];

    #[test]
    fn test_embedded_store() {
        let store = EmbeddedTemplateStore::new(TEMPLATES);

        assert_eq!(store.load("hello.hbs").unwrap(), "Hello {{ name }}!");
        match store.load("missing.hbs") {
            Err(Error::TemplateNotFound { template, .. }) => assert_eq!(template, "missing.hbs"),
            other => panic!("Expected TemplateNotFound, got {other:?}"),
        }
    }
}
