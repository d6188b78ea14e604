//! Infrastructure adapters for Gamestrap.
//!
//! This crate implements the ports defined in `gamestrap-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod toolchain;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use toolchain::{ProcessToolchain, RecordingToolchain};
