use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use semver_gen::analyzer::TracingObserver;
use semver_gen::cli::{prepare_repository, run_generate, GenerateArgs, RepositorySource};
use semver_gen::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "semver-gen",
    about = "Generate a semantic version from git commit messages"
)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(short, long, global = true, help = "Configuration file path")]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        help = "Remote repository URL (ignored with --local)"
    )]
    repository: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        default_value = "main",
        help = "Branch to clone from the remote repository"
    )]
    branch: String,

    #[arg(short, long, global = true, help = "Use the repository in the current directory")]
    local: bool,

    #[arg(short, long, global = true, help = "Only keyword matches change the version")]
    strict: bool,

    #[arg(short, long, global = true, help = "Respect existing tags")]
    existing: bool,

    #[arg(short, long, global = true, help = "Enable debug logging")]
    debug: bool,

    #[arg(short, long, global = true, help = "Print version information")]
    version: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate the semantic version (same as running without a subcommand)
    Generate,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("semver-gen {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    setup_logging(args.debug);

    match args.command {
        Some(Command::Generate) | None => generate(&args),
    }
}

fn generate(args: &Args) -> Result<()> {
    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let source = match (&args.repository, args.local) {
        (Some(url), false) => RepositorySource::Remote {
            url: url.clone(),
            branch: args.branch.clone(),
        },
        _ => RepositorySource::Local(PathBuf::from(".")),
    };

    let repo = match prepare_repository(&source) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Unable to prepare repository: {}", e));
            std::process::exit(1);
        }
    };

    let generate_args = GenerateArgs {
        strict: args.strict,
        existing: args.existing,
    };

    let result = match run_generate(&repo, &generate_args, &config, &TracingObserver) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&format!("Failed to generate version: {}", e));
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    if args.debug {
        if let Some(tag) = &result.resumed_from_tag {
            ui::display_status(&format!("Resumed from tag {}", tag));
        }
        ui::display_commit_analysis(&result.commits);
    }

    ui::display_version(&result.version);
    Ok(())
}

/// Set up logging/tracing.
fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::try_new("semver_gen=debug,warn").unwrap_or_else(|_| EnvFilter::new("warn"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!("Debug logging enabled");
}
