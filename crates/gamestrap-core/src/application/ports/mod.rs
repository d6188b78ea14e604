//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gamestrap-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: Directory and file operations
//!   - `Toolchain`: External project/solution tool invocations

pub mod output;

pub use output::{Filesystem, ToolOutcome, Toolchain};

#[cfg(test)]
pub use output::{MockFilesystem, MockToolchain};
