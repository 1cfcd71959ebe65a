use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::domain::ports::ConfigSource;

/// Configuration source backed by the real file system.
///
/// Relative paths resolve against `root`; absolute paths are used as given.
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Source rooted at the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for FileSystemSource {
    fn default() -> Self {
        Self::current_dir()
    }
}

impl ConfigSource for FileSystemSource {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(self.resolve(path))?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn describe(&self, path: &Path) -> String {
        self.resolve(path).display().to_string()
    }
}
