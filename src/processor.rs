//! Materialises a command's tree into a target directory.
//!
//! Children are processed depth first in declaration order. Every child name is
//! rendered with the variable context before use; file nodes render their template
//! and directory nodes recurse after their directory exists. The walk stops at the
//! first error and leaves whatever it already created in place.

use indexmap::IndexMap;
use log::{debug, info};
use std::path::{Component, Path, PathBuf};

use crate::context::Vars;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::renderer::TemplateRenderer;
use crate::store::TemplateStore;
use crate::tree::TreeNode;

/// Something the processor did to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    /// A directory was created, or already existed when `existed` is set
    CreateDir { target: PathBuf, existed: bool },
    /// A file was written, replacing any previous content
    Write { target: PathBuf },
}

/// Returns false for rendered names that would leave the directory they belong to.
pub fn is_rendered_name_valid(name: &str) -> bool {
    let path = Path::new(name);
    !path.has_root()
        && path.components().all(|component| {
            matches!(component, Component::Normal(_) | Component::CurDir)
        })
}

/// Tree renderer over a template engine, a template store and a filesystem.
pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    store: &'a dyn TemplateStore,
    fs: &'a dyn FileSystem,
    vars: &'a Vars,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        store: &'a dyn TemplateStore,
        fs: &'a dyn FileSystem,
        vars: &'a Vars,
    ) -> Self {
        Self { engine, store, fs, vars }
    }

    /// Creates the children of `tree` below `target`.
    ///
    /// # Returns
    /// * `Result<Vec<FileOperation>>` - Operations in the order they were performed
    ///
    /// # Errors
    /// * `Error::ConfigError` if `tree` is a file node
    /// * `Error::TemplateNotFound` if a file node references an unknown template
    /// * `Error::InvalidPathError` if a rendered name is absolute or contains `..`
    pub fn process(&self, tree: &TreeNode, target: &Path) -> Result<Vec<FileOperation>> {
        let TreeNode::Directory(children) = tree else {
            return Err(Error::ConfigError(
                "the root of a tree must be a directory, not a template reference".to_string(),
            ));
        };

        let mut operations = Vec::new();
        self.process_children(children, target, &mut operations)?;
        Ok(operations)
    }

    fn process_children(
        &self,
        children: &IndexMap<String, TreeNode>,
        target: &Path,
        operations: &mut Vec<FileOperation>,
    ) -> Result<()> {
        for (name_template, child) in children {
            let name = self.engine.render(name_template, self.vars)?;

            // Conditional entries render to nothing when their condition is false
            if name.trim().is_empty() {
                debug!("Skipping '{name_template}' as its rendered name is empty");
                continue;
            }
            if !is_rendered_name_valid(&name) {
                return Err(Error::InvalidPathError { path: name });
            }

            let relative = Path::new(&name);
            match child {
                TreeNode::File(template) => {
                    let Some(file_name) = relative.file_name() else {
                        return Err(Error::InvalidPathError { path: name });
                    };
                    let parent = relative.parent().unwrap_or(Path::new(""));
                    let child_path = self.create_dirs(target, parent, operations)?.join(file_name);
                    self.create_file(template, &child_path)?;
                    operations.push(FileOperation::Write { target: child_path });
                }
                TreeNode::Directory(grandchildren) => {
                    let child_path = self.create_dirs(target, relative, operations)?;
                    self.process_children(grandchildren, &child_path, operations)?;
                }
            }
        }

        Ok(())
    }

    /// Creates each directory of `relative` below `target`, outermost first, and
    /// returns the innermost one. Names like `src/models` record one operation per level.
    fn create_dirs(
        &self,
        target: &Path,
        relative: &Path,
        operations: &mut Vec<FileOperation>,
    ) -> Result<PathBuf> {
        let mut current = target.to_path_buf();
        for component in relative.components() {
            let Component::Normal(part) = component else {
                continue;
            };
            current.push(part);
            let existed = self.create_dir(&current)?;
            operations.push(FileOperation::CreateDir { target: current.clone(), existed });
        }
        Ok(current)
    }

    /// Creates `path` unless it already exists. Returns whether it existed.
    fn create_dir(&self, path: &Path) -> Result<bool> {
        if self.fs.exists(path) {
            debug!("Directory {} already exists", path.display());
            return Ok(true);
        }

        debug!("Creating directory {}", path.display());
        self.fs.create_dir(path)?;
        Ok(false)
    }

    fn create_file(&self, template: &str, path: &Path) -> Result<()> {
        let source = self.store.load(template)?;
        let content = self.engine.render(&source, self.vars)?;

        self.fs.write_file(path, content.as_bytes())?;
        info!("Created file '{}'", path.display());
        Ok(())
    }
}
