use anyhow::{Context, Result};
use std::process::ExitCode;

use crate::cancel::{install_interrupt_handler, CancellationToken};
use crate::cli::Cli;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::package_managers::select_package_manager;
use crate::report::Reporter;
use crate::types::Project;
use crate::vcs::Git;

impl Cli {
    pub fn execute(self) -> Result<ExitCode> {
        // Determine working directory
        let target_root = match &self.dir {
            Some(dir) => dir
                .canonicalize()
                .with_context(|| format!("Directory '{}' not found", dir.display()))?,
            None => std::env::current_dir().context("Failed to read current directory")?,
        };
        let settings = Settings::new(&target_root).context("Failed to load configuration")?;
        let source_root = settings.source_root(self.assets.as_deref());
        tracing::debug!(
            source = %source_root.display(),
            target = %target_root.display(),
            "resolved roots"
        );

        let project = Project::new(source_root, target_root);
        let config = self.run_config();
        let package_manager = select_package_manager(settings.package_manager, project.target());

        let cancel = CancellationToken::new();
        install_interrupt_handler(&cancel)?;

        let mut reporter = Reporter::stdout(
            self.get_effective_theme(&settings),
            settings.show_emoji,
            settings.issues_url.clone(),
        );
        let outcome = Orchestrator::new(
            config,
            &project,
            settings.package_source(config.local_mode),
            &Git,
            &package_manager,
            &mut reporter,
            cancel,
        )
        .run();

        if let Some(error) = outcome.error() {
            tracing::debug!(%error, "installation did not complete");
        }
        if outcome.left_partial_changes() {
            tracing::error!(
                target_root = %project.target().display(),
                "project could not be reverted; check `git status` before retrying"
            );
        }
        Ok(outcome.exit_code())
    }
}
