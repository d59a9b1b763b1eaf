use crate::constants::{exit_codes, verbosity, DEFAULT_BRANCH, DEFAULT_REPOSITORY};
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for Graft.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Target git repository to materialize templates into.
    #[arg(value_name = "TARGET_DIR")]
    pub target_dir: PathBuf,

    /// Template repository used when creating a new manifest.
    #[arg(long, value_name = "ORG/REPO", default_value = DEFAULT_REPOSITORY)]
    pub repository: String,

    /// Template branch used when creating a new manifest.
    #[arg(long, value_name = "BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Overwrite destination paths that already exist.
    #[arg(short = 'y', long = "force")]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level. Warnings stay visible
/// at the default level so per-path skips are not silent.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Warn,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
