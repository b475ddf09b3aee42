use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use clap::Parser;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use calver_ci::config::{self, Config};
use calver_ci::git::RepositoryPath;
use calver_ci::{ui, BuildContext};

#[derive(clap::Parser)]
#[command(
    name = "calver-ci",
    version,
    about = "Compute a calendar version for the current CI pipeline"
)]
struct Args {
    #[arg(long, env = "CI_COMMIT_BRANCH", help = "Branch being built")]
    branch: String,

    #[arg(long, env = "CI_PIPELINE_IID", help = "Pipeline identifier")]
    pipeline_id: String,

    #[arg(
        long,
        env = "CI_DEFAULT_BRANCH",
        help = "Default branch name (overrides config)"
    )]
    default_branch: Option<String>,

    #[arg(long, help = "Version prefix (overrides config)")]
    prefix: Option<String>,

    #[arg(long, help = "Feature build suffix (overrides config)")]
    suffix: Option<String>,

    #[arg(long, help = "RFC 3339 build time; the date is read in its own offset")]
    timestamp: Option<String>,

    #[arg(
        long,
        conflicts_with = "timestamp",
        help = "Use the current UTC date instead of the local date"
    )]
    utc: bool,

    #[arg(short = 'C', long, default_value = ".", help = "Repository to read tags from")]
    repo: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Show build kind and notes on stderr")]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    let mut config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;
    apply_overrides(&mut config, &args);

    let timestamp = resolve_timestamp(args.timestamp.as_deref(), args.utc)?;
    debug!(
        branch = %args.branch,
        pipeline_id = %args.pipeline_id,
        %timestamp,
        ?config,
        "resolved build inputs"
    );

    let repo = RepositoryPath::new(&args.repo);
    let plan = BuildContext::new(&args.branch, &args.pipeline_id, timestamp, config, &repo)
        .with_merges(&repo)
        .plan()
        .with_context(|| format!("Cannot compute version for branch '{}'", args.branch))?;

    debug!(kind = %plan.kind, notes = plan.notes.len(), "computed version");

    if args.verbose {
        ui::display_plan(&args.branch, &plan);
    }

    println!("{}", plan.version);
    Ok(())
}

fn apply_overrides(config: &mut Config, args: &Args) {
    if let Some(default_branch) = &args.default_branch {
        config.default_branch = default_branch.clone();
    }
    if let Some(prefix) = &args.prefix {
        config.prefix = prefix.clone();
    }
    if let Some(suffix) = &args.suffix {
        config.feature_suffix = suffix.clone();
    }
}

fn resolve_timestamp(explicit: Option<&str>, utc: bool) -> Result<NaiveDateTime> {
    match explicit {
        Some(raw) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("Invalid timestamp '{}'", raw))?;
            Ok(parsed.naive_local())
        }
        None if utc => Ok(Utc::now().naive_utc()),
        None => Ok(Local::now().naive_local()),
    }
}
