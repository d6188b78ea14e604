//! Gamestrap Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Gamestrap
//! solution bootstrapper, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          gamestrap-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (BootstrapService and its four phases) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │      (Driven: Filesystem, Toolchain)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gamestrap-adapters (Infrastructure)  │
//! │  (LocalFilesystem, ProcessToolchain)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (GameName, SolutionLayout, ToolCommand)│
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gamestrap_core::{
//!     application::BootstrapService,
//!     domain::{GameName, SolutionLayout},
//! };
//!
//! // 1. Compute the layout once
//! let game = GameName::parse("GuessTheNumber").unwrap();
//! let layout = SolutionLayout::new(game, ".");
//!
//! // 2. Run the bootstrap (with injected adapters)
//! let service = BootstrapService::new(filesystem, toolchain);
//! let report = service.run(&layout).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        BootstrapReport, BootstrapService, WikiOutcome,
        ports::{Filesystem, ToolOutcome, Toolchain},
    };
    pub use crate::domain::{
        BootstrapPlan, GameName, LayoutOptions, ProjectKind, ProjectSpec, SolutionLayout,
        ToolCommand, WikiLocation,
    };
    pub use crate::error::{GamestrapError, GamestrapResult};
}
