//! Toolchain adapters.

mod process;
mod recording;

pub use process::ProcessToolchain;
pub use recording::RecordingToolchain;
