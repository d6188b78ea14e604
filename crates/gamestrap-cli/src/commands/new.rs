//! Implementation of the `gamestrap new` command.
//!
//! Responsibility: translate CLI arguments and config into a
//! `SolutionLayout`, call the core bootstrap service, and display results.
//! No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use gamestrap_adapters::{LocalFilesystem, ProcessToolchain};
use gamestrap_core::{
    application::{BootstrapReport, BootstrapService, WikiOutcome, ports::Toolchain},
    domain::{BootstrapPlan, GameName, LayoutOptions, SolutionLayout, WikiLocation},
    error::GamestrapError,
};

use crate::{
    cli::{NewArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    progress::ProgressToolchain,
};

/// Execute the `gamestrap new` command.
///
/// Dispatch sequence:
/// 1. Validate the game name and build the layout
/// 2. Early-exit with the plan if `--dry-run`
/// 3. Run the bootstrap via `BootstrapService`
/// 4. Report results and any wiki warning
#[instrument(skip_all, fields(game = %args.game))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Layout
    let layout = build_layout(&args, &config)?;
    let program = args
        .toolchain
        .clone()
        .unwrap_or_else(|| config.toolchain.program.clone());

    debug!(
        root = %layout.root().display(),
        solution = %layout.solution_file().display(),
        toolchain = %program,
        wiki = ?layout.wiki().map(|w| &w.root),
        "Layout resolved"
    );

    // 2. Dry run: describe but do not touch anything.
    if args.dry_run {
        let plan = BootstrapPlan::for_layout(&layout);
        return show_plan(&plan, &layout, &program, &output);
    }

    // 3. Run
    let toolchain: Box<dyn Toolchain> = {
        let process = Box::new(process_toolchain(&program));
        if output.wants_progress() && global.verbose == 0 {
            Box::new(ProgressToolchain::new(process))
        } else {
            process
        }
    };
    let service = BootstrapService::new(Box::new(LocalFilesystem::new()), toolchain);

    output.header(&format!("Bootstrapping '{}'...", layout.game()))?;
    let report = service.run(&layout)?;
    info!(steps = report.steps.len(), "Bootstrap finished");

    // 4. Report
    show_report(&report, &output)?;
    Ok(())
}

/// Combine flags and config into the layout the core works from.
fn build_layout(args: &NewArgs, config: &AppConfig) -> CliResult<SolutionLayout> {
    let game = GameName::parse(&args.game).map_err(GamestrapError::from)?;

    let wiki = if args.no_wiki {
        WikiLocation::Disabled
    } else if let Some(path) = &args.wiki {
        WikiLocation::At(path.clone())
    } else {
        WikiLocation::Sibling(config.layout.wiki_dir.clone())
    };
    let options = LayoutOptions {
        source_dir: config.layout.source_dir.clone(),
        test_dir: config.layout.test_dir.clone(),
        wiki,
    };

    let layout = SolutionLayout::with_options(game, args.root.clone(), options)
        .map_err(GamestrapError::from)?;
    Ok(layout)
}

fn process_toolchain(program: &str) -> ProcessToolchain {
    if program == "dotnet" {
        ProcessToolchain::dotnet()
    } else {
        ProcessToolchain::new(program).with_env("DOTNET_NOLOGO", "1")
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct DryRun<'a> {
    game: &'a GameName,
    solution: &'a std::path::Path,
    directories: &'a [PathBuf],
    commands: Vec<Vec<String>>,
    wiki_document: Option<&'a PathBuf>,
}

fn show_plan(
    plan: &BootstrapPlan,
    layout: &SolutionLayout,
    program: &str,
    out: &OutputManager,
) -> CliResult<()> {
    let commands: Vec<Vec<String>> = plan
        .commands()
        .map(|c| {
            std::iter::once(program.to_string())
                .chain(c.display_args())
                .collect()
        })
        .collect();

    if out.format() == OutputFormat::Json {
        out.json(&DryRun {
            game: layout.game(),
            solution: layout.solution_file(),
            directories: &plan.directories,
            commands,
            wiki_document: plan.wiki_document.as_ref(),
        })?;
        return Ok(());
    }

    out.info(&format!("Dry run: would bootstrap '{}'", layout.game()))?;
    out.header("Directories")?;
    for dir in &plan.directories {
        out.print(&format!("  {}", dir.display()))?;
    }
    out.header("Commands")?;
    for command in &commands {
        out.print(&format!("  {}", command.join(" ")))?;
    }
    out.header("Wiki")?;
    match &plan.wiki_document {
        Some(doc) => out.print(&format!("  {} (only if missing)", doc.display()))?,
        None => out.print("  skipped")?,
    }
    Ok(())
}

fn show_report(report: &BootstrapReport, out: &OutputManager) -> CliResult<()> {
    if let Some(message) = wiki_warning(&report.wiki) {
        out.warning(&message)?;
    }

    if out.format() == OutputFormat::Json {
        out.json(report)?;
        return Ok(());
    }

    for step in &report.steps {
        debug!(step = %step.description, args = ?step.args, "Step completed");
    }
    for edge in &report.references {
        out.print(&format!("  {} -> {}", edge.from, edge.to))?;
    }
    match &report.wiki {
        WikiOutcome::Created { path } => {
            out.info(&format!("Design document created at {}", path.display()))?
        }
        WikiOutcome::AlreadyExists { path } => {
            out.info(&format!("Design document kept at {}", path.display()))?
        }
        _ => {}
    }
    out.success(&format!(
        "Solution '{}' ready at {}",
        report.game,
        report.solution.display()
    ))?;

    if !out.is_quiet() {
        out.print("")?;
        out.print("Next steps:")?;
        if let Some(dir) = report.solution.parent() {
            out.print(&format!("  cd {}", dir.display()))?;
        }
        out.print("  dotnet build && dotnet test")?;
    }
    Ok(())
}

/// Message for wiki outcomes the user should know about.
fn wiki_warning(outcome: &WikiOutcome) -> Option<String> {
    match outcome {
        WikiOutcome::WikiMissing { root } => Some(format!(
            "Wiki checkout not found at {}; design document skipped",
            root.display()
        )),
        WikiOutcome::Failed { path, reason } => Some(format!(
            "Could not write design document {}: {}",
            path.display(),
            reason
        )),
        _ => None,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::error::CliError;

    fn args(game: &str) -> NewArgs {
        NewArgs {
            game: game.into(),
            root: PathBuf::from("repo"),
            wiki: None,
            no_wiki: false,
            toolchain: None,
            dry_run: false,
        }
    }

    #[test]
    fn default_wiki_is_sibling_from_config() {
        let mut config = AppConfig::default();
        config.layout.wiki_dir = "docs".into();

        let layout = build_layout(&args("GuessTheNumber"), &config).unwrap();

        let wiki = layout.wiki().unwrap();
        assert_eq!(wiki.root, Path::new("repo").join("..").join("docs"));
        assert_eq!(
            wiki.document,
            wiki.root
                .join("Games/GuessTheNumber/GuessTheNumber-GDD.md")
        );
    }

    #[test]
    fn explicit_wiki_and_no_wiki() {
        let mut a = args("Pong");
        a.wiki = Some(PathBuf::from("/srv/wiki"));
        let layout = build_layout(&a, &AppConfig::default()).unwrap();
        assert_eq!(layout.wiki().unwrap().root, PathBuf::from("/srv/wiki"));

        let mut a = args("Pong");
        a.no_wiki = true;
        let layout = build_layout(&a, &AppConfig::default()).unwrap();
        assert!(layout.wiki().is_none());
    }

    #[test]
    fn config_directories_shape_the_layout() {
        let mut config = AppConfig::default();
        config.layout.source_dir = PathBuf::from("code");
        config.layout.test_dir = PathBuf::from("specs");

        let layout = build_layout(&args("Pong"), &config).unwrap();

        assert_eq!(layout.solution_dir(), Path::new("repo/code/Pong"));
        assert_eq!(layout.test_root(), Path::new("repo/specs"));
    }

    #[test]
    fn invalid_name_is_user_error() {
        let err = build_layout(&args("9Lives"), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(GamestrapError::Domain(_))));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn identical_source_and_test_dirs_are_rejected() {
        let mut config = AppConfig::default();
        config.layout.test_dir = PathBuf::from("src");
        assert!(build_layout(&args("Pong"), &config).is_err());
    }

    #[test]
    fn missing_wiki_produces_warning() {
        let warning = wiki_warning(&WikiOutcome::WikiMissing {
            root: PathBuf::from("../wiki"),
        })
        .unwrap();
        assert!(warning.contains("../wiki"));
        assert!(wiki_warning(&WikiOutcome::Disabled).is_none());
        assert!(
            wiki_warning(&WikiOutcome::AlreadyExists {
                path: PathBuf::from("x.md")
            })
            .is_none()
        );
    }

    #[test]
    fn custom_program_keeps_banner_suppressed() {
        assert_eq!(process_toolchain("dotnet").program(), "dotnet");
        assert_eq!(process_toolchain("/opt/fake-dotnet").program(), "/opt/fake-dotnet");
    }
}
