use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use verbump::cli::orchestration::{run_bump_workflow, BumpWorkflowArgs};
use verbump::config::{self, Config};
use verbump::domain::ChangeMagnitude;
use verbump::git::Git2Repository;
use verbump::ui;

#[derive(Parser)]
#[command(
    name = "verbump",
    about = "A CLI to help bump versions of applications in monorepos"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bumps the version in the version file
    Bump(BumpArgs),
    /// Show the verbump version
    Version,
}

#[derive(clap::Args)]
struct BumpArgs {
    #[arg(short, long, default_value = ".", help = "Path to the repository")]
    repository: PathBuf,

    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "The subfolders in which you want the commits analysed [default: .]"
    )]
    include: Vec<String>,

    #[arg(
        short = 'c',
        long,
        help = "The file which contains the version to be bumped"
    )]
    version_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        help = "The pre release label we want appended to the version"
    )]
    pre_release: Option<String>,

    #[arg(long, help = "Current version, instead of reading it from the version file")]
    current: Option<String>,

    #[arg(
        long,
        help = "Skip commit analysis and apply this change (none, patch, minor, major)"
    )]
    change: Option<ChangeMagnitude>,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Preview the new version without writing it")]
    dry_run: bool,

    #[arg(short, long, help = "Print debug diagnostics")]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Command::Bump(args) => {
            init_tracing(args.verbose)?;

            if let Err(e) = bump(args) {
                ui::display_error(&format!("{:#}", e));
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn bump(args: BumpArgs) -> Result<()> {
    let config = config::load_config(args.config.as_deref(), &args.repository)?;
    let workflow_args = resolve_workflow_args(&args, config);
    tracing::debug!(?workflow_args, "resolved settings");

    let repo = Git2Repository::open(&args.repository)?;
    let outcome = run_bump_workflow(&repo, &workflow_args)?;

    ui::display_outcome(&outcome, workflow_args.dry_run);
    Ok(())
}

/// Merge command-line flags over the configuration file.
fn resolve_workflow_args(args: &BumpArgs, config: Config) -> BumpWorkflowArgs {
    let include = if args.include.is_empty() {
        config.commits.include
    } else {
        args.include.clone()
    };

    // A configured version file is relative to --repository, a flag to the working directory.
    let version_file = args
        .version_file
        .clone()
        .or_else(|| config.version.file.map(|file| args.repository.join(file)));

    BumpWorkflowArgs {
        include,
        version_file,
        current_version: args.current.clone(),
        pre_release: args.pre_release.clone().or(config.pre_release.label),
        change: args.change,
        tag_prefix: config.version.tag_prefix,
        dry_run: args.dry_run,
    }
}
