//! htooldeploy - Houdini tool installer
//!
//! Usage:
//!   htooldeploy <TOOL_REPO>                # Copy a tool into the latest houdini prefs
//!   htooldeploy <TOOL_REPO> <DESTINATION>  # Copy into a specific site
//!   htooldeploy -d <TOOL_REPO>             # Link through a package file
//!   htooldeploy -t <PARENT_DIR>            # Create a new tool skeleton

mod interactive;
mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use htooldeploy_core::context::DeployContext;
use htooldeploy_core::install::{InstallOutcome, InstallReport, InstallRequest};
use htooldeploy_core::template::TemplateReport;
use htooldeploy_core::types::HoudiniVersion;
use htooldeploy_core::wizard::TemplateWizard;

use crate::interactive::{DialoguerConfirm, DialoguerPrompt};

const DRY_RUN_BANNER: &str = "------------------------Dry Run------------------------";

#[derive(Parser, Debug)]
#[command(name = "htooldeploy")]
#[command(about = "Install site-structured Houdini tools", long_about = None)]
#[command(version)]
struct Cli {
    /// Tool repository to install (holds a `source/` directory)
    #[arg(value_name = "SOURCE_TOOL_REPO", required_unless_present = "template")]
    source: Option<PathBuf>,

    /// Where to install; defaults to the Houdini user preference directory
    #[arg(value_name = "INSTALL_DESTINATION")]
    destination: Option<PathBuf>,

    /// Register the repo through a package file instead of copying it
    #[arg(short, long, conflicts_with = "cleanup")]
    develop: bool,

    /// Delete the tool repo after a successful copy
    #[arg(short, long)]
    cleanup: bool,

    /// Create missing directories and overwrite existing packages
    #[arg(short, long)]
    force: bool,

    /// Console verbosity, 0 (errors only) to 3 (debug)
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=3))]
    verbosity: u8,

    /// Houdini version to install for instead of the latest found
    #[arg(long, value_name = "MAJOR.MINOR")]
    hou_version: Option<HoudiniVersion>,

    /// Show what would happen without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Create a new tool in PARENT_DIR with the template wizard
    #[arg(
        short,
        long,
        value_name = "PARENT_DIR",
        conflicts_with_all = ["source", "destination", "develop", "cleanup", "dry_run"]
    )]
    template: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_path = logging::init(cli.verbosity);

    let code = match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    };

    if let Some(path) = log_path {
        println!("See log at {} for detailed output", path.display());
    }
    code
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = match &cli.config {
        Some(path) => DeployContext::from_config_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => DeployContext::with_defaults()?,
    };

    if let Some(parent) = &cli.template {
        return run_template(&ctx, parent);
    }

    if cli.dry_run {
        println!("{DRY_RUN_BANNER}");
    }
    run_install(&ctx, cli)
}

fn install_request(cli: &Cli) -> InstallRequest {
    InstallRequest {
        source: cli.source.clone(),
        destination: cli.destination.clone(),
        hou_version: cli.hou_version,
        ..InstallRequest::default()
    }
    .with_develop(cli.develop)
    .with_force(cli.force)
    .with_cleanup(cli.cleanup)
    .with_dry_run(cli.dry_run)
}

fn run_install(ctx: &DeployContext, cli: &Cli) -> Result<()> {
    let request = install_request(cli);
    let outcome = ctx
        .install_engine()
        .install(&request, &mut DialoguerConfirm::new())?;

    match outcome {
        InstallOutcome::Completed(report) => print_install_report(&report),
        InstallOutcome::Declined => println!("Installation cancelled."),
    }
    Ok(())
}

fn print_install_report(report: &InstallReport) {
    if report.dry_run {
        for action in &report.actions {
            println!("  {action}");
        }
        println!(
            "{} Would install '{}' ({}) to {}",
            style("•").cyan(),
            report.tool,
            report.mode.as_str(),
            report.target.display()
        );
    } else {
        println!(
            "{} Installed '{}' to {}",
            style("✓").green(),
            report.tool,
            report.target.display()
        );
    }
    if let Some(manifest) = &report.manifest {
        println!("  Package: {}", manifest.display());
    }
    for warning in &report.warnings {
        println!("  {} {}", style("⚠").yellow(), warning);
    }
}

fn run_template(ctx: &DeployContext, parent: &Path) -> Result<()> {
    let mut wizard = TemplateWizard::new(DialoguerPrompt::new());
    let spec = wizard.run(parent).context("Template wizard did not finish")?;
    let report = ctx.template_engine().create(spec)?;
    print_template_report(&report);
    Ok(())
}

fn print_template_report(report: &TemplateReport) {
    println!(
        "{} Created {}",
        style("✓").green(),
        report.root.display()
    );
    for path in report.created.iter().skip(1) {
        let shown = path.strip_prefix(&report.root).unwrap_or(path);
        println!("  {}", shown.display());
    }
    for warning in &report.warnings {
        println!("  {} {}", style("⚠").yellow(), warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use htooldeploy_core::fs::InstallMode;
    use std::ffi::OsStr;

    #[test]
    fn source_only_uses_defaults() {
        let cli = Cli::try_parse_from(["htooldeploy", "/tools/my_tool"]).unwrap();

        assert_eq!(cli.source, Some(PathBuf::from("/tools/my_tool")));
        assert_eq!(cli.destination, None);
        assert_eq!(cli.verbosity, 2);
        assert!(!cli.develop && !cli.cleanup && !cli.force && !cli.dry_run);
    }

    #[test]
    fn develop_and_cleanup_conflict() {
        let result = Cli::try_parse_from(["htooldeploy", "-d", "-c", "/tools/my_tool"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbosity_is_bounded() {
        assert!(Cli::try_parse_from(["htooldeploy", "-v", "3", "/tools/t"]).is_ok());
        assert!(Cli::try_parse_from(["htooldeploy", "-v", "4", "/tools/t"]).is_err());
    }

    #[test]
    fn source_is_required_without_template() {
        assert!(Cli::try_parse_from(["htooldeploy"]).is_err());

        let cli = Cli::try_parse_from(["htooldeploy", "--template", "."]).unwrap();
        assert_eq!(cli.template, Some(PathBuf::from(".")));
        assert_eq!(cli.source, None);
    }

    #[test]
    fn template_conflicts_with_install_flags() {
        assert!(Cli::try_parse_from(["htooldeploy", "-t", ".", "--develop"]).is_err());
        assert!(Cli::try_parse_from(["htooldeploy", "-t", ".", "/tools/t"]).is_err());
    }

    #[test]
    fn hou_version_is_parsed() {
        let cli =
            Cli::try_parse_from(["htooldeploy", "--hou-version", "19.5", "/tools/t"]).unwrap();
        assert_eq!(cli.hou_version, Some(HoudiniVersion::new(19, 5)));

        assert!(Cli::try_parse_from(["htooldeploy", "--hou-version", "19", "/tools/t"]).is_err());
    }

    #[test]
    fn flags_flow_into_request() {
        let cli = Cli::try_parse_from([
            "htooldeploy",
            "--develop",
            "--force",
            "--dry-run",
            "/tools/t",
            "/opt/site",
        ])
        .unwrap();

        let request = install_request(&cli);

        assert_eq!(request.options.mode, InstallMode::Link);
        assert!(request.options.force && request.options.dry_run);
        assert!(!request.options.cleanup);
        assert_eq!(request.destination, Some(PathBuf::from("/opt/site")));
    }

    #[test]
    fn run_copies_tool_into_destination() {
        let tmp = tempfile::TempDir::new().unwrap();
        let repo = tmp.path().join("my_tool");
        std::fs::create_dir_all(repo.join("source/otls")).unwrap();
        std::fs::write(repo.join("source/otls/a.hda"), "hda").unwrap();
        let prefs = tmp.path().join("prefs");
        let config = tmp.path().join("config.toml");

        let cli = Cli::try_parse_from([
            OsStr::new("htooldeploy"),
            OsStr::new("--force"),
            OsStr::new("--config"),
            config.as_os_str(),
            repo.as_os_str(),
            prefs.as_os_str(),
        ])
        .unwrap();
        run(&cli).unwrap();

        assert!(prefs.join("otls/a.hda").is_file());
        assert!(repo.exists());
    }

    #[test]
    fn dry_run_leaves_destination_untouched() {
        let tmp = tempfile::TempDir::new().unwrap();
        let repo = tmp.path().join("my_tool");
        std::fs::create_dir_all(repo.join("source/otls")).unwrap();
        std::fs::write(repo.join("source/otls/a.hda"), "hda").unwrap();
        let prefs = tmp.path().join("prefs");
        let config = tmp.path().join("config.toml");

        let cli = Cli::try_parse_from([
            OsStr::new("htooldeploy"),
            OsStr::new("--force"),
            OsStr::new("--dry-run"),
            OsStr::new("--config"),
            config.as_os_str(),
            repo.as_os_str(),
            prefs.as_os_str(),
        ])
        .unwrap();
        run(&cli).unwrap();

        assert!(!prefs.exists());
    }
}
