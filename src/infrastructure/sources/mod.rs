//! Configuration source adapters
//!
//! Implementations of the [`ConfigSource`](crate::domain::ports::ConfigSource)
//! port:
//! - `FileSystemSource`: files below a root directory on disk
//! - `InMemorySource`: files held in memory, for tests

pub mod filesystem;
pub mod memory;

pub use filesystem::FileSystemSource;
pub use memory::InMemorySource;
