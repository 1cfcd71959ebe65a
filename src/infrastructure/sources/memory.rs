use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::domain::ports::ConfigSource;

/// In-memory configuration source.
///
/// Lets tests exercise the loader without touching the disk.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl InMemorySource {
    /// Create a source holding no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Create or replace a file.
    pub fn insert(&mut self, path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), contents.into());
    }
}

impl ConfigSource for InMemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        self.files
            .get(path)
            .map(|bytes| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>)
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} not found in memory source", path.display()),
                )
            })
    }

    fn describe(&self, path: &Path) -> String {
        format!("memory:{}", path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let source = InMemorySource::new();
        assert!(!source.exists(Path::new("config.properties")));
        let err = source.open(Path::new("config.properties")).err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_insert_replaces_contents() {
        let mut source = InMemorySource::new().with_file("config.properties", "a=1");
        source.insert("config.properties", "a=2");

        let mut contents = String::new();
        source
            .open(Path::new("config.properties"))
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert_eq!(contents, "a=2");
    }
}
