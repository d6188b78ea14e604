//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gamestrap",
    bin_name = "gamestrap",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Bootstrap a console game solution",
    long_about = "Gamestrap creates a core library, a console front-end and a \
                  unit-test project for a game, wires them into one solution, \
                  and stubs a design document in the wiki checkout if present.",
    after_help = "EXAMPLES:\n\
        \x20 gamestrap new GuessTheNumber\n\
        \x20 gamestrap new Pong --root ~/code/games --no-wiki\n\
        \x20 gamestrap new Snake --dry-run\n\
        \x20 gamestrap completions bash > /usr/share/bash-completion/completions/gamestrap",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Bootstrap a new game solution.
    #[command(
        visible_alias = "n",
        about = "Bootstrap a new game solution",
        after_help = "EXAMPLES:\n\
            \x20 gamestrap new GuessTheNumber\n\
            \x20 gamestrap new Pong --wiki ../docs-wiki\n\
            \x20 gamestrap new Snake --toolchain /usr/local/share/dotnet/dotnet"
    )]
    New(NewArgs),

    /// Initialise a Gamestrap configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gamestrap init          # default location\n\
            \x20 gamestrap init --force  # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gamestrap completions bash > ~/.local/share/bash-completion/completions/gamestrap\n\
            \x20 gamestrap completions zsh  > ~/.zfunc/_gamestrap\n\
            \x20 gamestrap completions fish > ~/.config/fish/completions/gamestrap.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Gamestrap configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gamestrap config get toolchain.program\n\
            \x20 gamestrap config list\n\
            \x20 gamestrap config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `gamestrap new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Game name, e.g. `GuessTheNumber`. Used verbatim in every project name.
    #[arg(value_name = "GAME_NAME", help = "Game name")]
    pub game: String,

    /// Root directory under which `src/` and `tests/` are created.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Root directory (default: current directory)"
    )]
    pub root: PathBuf,

    /// Explicit wiki checkout location.
    #[arg(
        short = 'w',
        long = "wiki",
        value_name = "DIR",
        conflicts_with = "no_wiki",
        help = "Wiki checkout (default: a sibling of the root)"
    )]
    pub wiki: Option<PathBuf>,

    /// Skip the wiki design document.
    #[arg(long = "no-wiki", help = "Do not write the wiki design document")]
    pub no_wiki: bool,

    /// Toolchain program to invoke instead of the configured one.
    #[arg(
        long = "toolchain",
        value_name = "PROGRAM",
        help = "Toolchain executable (default: dotnet)"
    )]
    pub toolchain: Option<String>,

    /// Print what would be done without touching disk or the toolchain.
    #[arg(long = "dry-run", help = "Show what would be done without doing it")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gamestrap init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gamestrap completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gamestrap config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `toolchain.program`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
