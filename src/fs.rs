//! Filesystem access used while materialising a tree.

use std::path::Path;

use crate::error::Result;

/// The operations the tree renderer performs on disk.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Creates a single directory. The parent must exist.
    fn create_dir(&self, path: &Path) -> Result<()>;

    /// Creates or truncates `path` and writes `content` to it.
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;

    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        Ok(std::fs::create_dir(path)?)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        Ok(std::fs::write(path, content)?)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        Ok(std::fs::read(path)?)
    }
}
