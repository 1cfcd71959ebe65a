use std::io::{self, Read};
use std::path::Path;

/// Port trait for read access to the store holding configuration files.
///
/// Paths are relative and resolved against a root chosen by the
/// implementation. The loader borrows a source for the duration of a single
/// read and never retains it.
///
/// # Implementations
///
/// - [`FileSystemSource`](crate::infrastructure::sources::FileSystemSource):
///   real files below a root directory
/// - [`InMemorySource`](crate::infrastructure::sources::InMemorySource):
///   an in-process map, used by tests
pub trait ConfigSource {
    /// Whether `path` names an existing regular file.
    fn exists(&self, path: &Path) -> bool;

    /// Open `path` for reading.
    ///
    /// The returned reader is dropped as soon as its contents are consumed.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Human-readable description of where `path` resolves to, for logs and
    /// error messages.
    fn describe(&self, path: &Path) -> String {
        path.display().to_string()
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for &S {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }

    fn describe(&self, path: &Path) -> String {
        (**self).describe(path)
    }
}
