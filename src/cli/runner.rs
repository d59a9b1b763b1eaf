use std::path::PathBuf;

use crate::{
    cli::Args,
    error::{Error, Result},
    fetch::{GitFetcher, TemplateFetcher},
    manifest,
    materialize::Materializer,
};

/// Main CLI runner that orchestrates the materialization workflow.
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete workflow against the real git fetcher.
    pub fn run(self) -> Result<()> {
        self.run_with(&GitFetcher)
    }

    /// Executes the complete workflow with an injected fetcher.
    pub fn run_with(self, fetcher: &dyn TemplateFetcher) -> Result<()> {
        let target_dir = self.validate_target()?;

        let manifest_path =
            manifest::ensure(&target_dir, &self.args.repository, &self.args.branch)?;
        let manifest = manifest::load(&manifest_path)?;

        log::info!("Target repository: {}", target_dir.display());
        log::info!("Template: {}@{}", manifest.repository, manifest.branch);
        for path in manifest.include.entries() {
            log::info!("  include {path}");
        }

        let materializer = Materializer::new(&target_dir, &manifest, self.args.force);
        let report = materializer.run(fetcher)?;

        println!("Materialized templates into {}: {report}", target_dir.display());
        print_next_steps();
        Ok(())
    }

    /// Resolves the target directory and checks that it is the root of
    /// a git repository.
    fn validate_target(&self) -> Result<PathBuf> {
        let target_dir = &self.args.target_dir;
        if !target_dir.is_dir() {
            return Err(Error::InvalidTarget {
                target: target_dir.display().to_string(),
            });
        }

        let target_dir = target_dir.canonicalize()?;
        if git2::Repository::open(&target_dir).is_err() {
            return Err(Error::InvalidTarget {
                target: target_dir.display().to_string(),
            });
        }
        Ok(target_dir)
    }
}

fn print_next_steps() {
    println!(
        "\nNext steps:\n\
         \x20 1. Review changes:\n\
         \x20      git status\n\
         \x20      git diff\n\n\
         \x20 2. Commit:\n\
         \x20      git add .\n\
         \x20      git commit -m \"chore: import templates\"\n\n\
         This is a one-shot snapshot. Re-run to update templates explicitly."
    );
}

/// Main entry point for CLI execution.
pub fn run(args: Args) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
