//! Runs an installation from checkpoint to finish.
//!
//! Every step runs at most once, in order. The first failure after the
//! checkpoint is reported and followed by a rollback, so the project either
//! ends up fully installed or back at its last commit.

use std::io::Write;
use std::process::ExitCode;

use tracing::{error, info};

use crate::cancel::CancellationToken;
use crate::checkpoint::{self, Rollback};
use crate::error::{InstallError, Result};
use crate::installer::install_config_files;
use crate::manifest::update_manifest;
use crate::package_managers::PackageManager;
use crate::report::Reporter;
use crate::types::{Project, RunConfig};
use crate::vcs::VersionControl;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Guarded,
    ConfigInstalled,
    ManifestUpdated,
    PackagesInstalled,
    Done,
    RolledBack,
}

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    Done,
    /// Failed before anything was written.
    Aborted(InstallError),
    /// Failed after the checkpoint; the project was reset. `rollback_error`
    /// is set when the reset itself failed.
    RolledBack {
        error: InstallError,
        rollback_error: Option<InstallError>,
    },
}

impl Outcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Done => ExitCode::SUCCESS,
            _ => ExitCode::FAILURE,
        }
    }

    pub fn error(&self) -> Option<&InstallError> {
        match self {
            Outcome::Done => None,
            Outcome::Aborted(error) | Outcome::RolledBack { error, .. } => Some(error),
        }
    }

    /// True when the rollback itself failed and the project may still hold
    /// some of the installed files.
    pub fn left_partial_changes(&self) -> bool {
        matches!(
            self,
            Outcome::RolledBack {
                rollback_error: Some(_),
                ..
            }
        )
    }
}

pub struct Orchestrator<'a, W: Write> {
    config: RunConfig,
    project: &'a Project,
    package_source: &'a str,
    vcs: &'a dyn VersionControl,
    package_manager: &'a dyn PackageManager,
    reporter: &'a mut Reporter<W>,
    cancel: CancellationToken,
    stage: Stage,
}

impl<'a, W: Write> Orchestrator<'a, W> {
    pub fn new(
        config: RunConfig,
        project: &'a Project,
        package_source: &'a str,
        vcs: &'a dyn VersionControl,
        package_manager: &'a dyn PackageManager,
        reporter: &'a mut Reporter<W>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            config,
            project,
            package_source,
            vcs,
            package_manager,
            reporter,
            cancel,
            stage: Stage::Idle,
        }
    }

    #[cfg(test)]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn run(&mut self) -> Outcome {
        if let Err(error) = checkpoint::establish(self.vcs, self.project.target(), &self.cancel) {
            self.reporter.failure(&error);
            return Outcome::Aborted(error);
        }
        self.advance(Stage::Guarded);

        match self.install() {
            Ok(()) => {
                self.reporter.success();
                self.advance(Stage::Done);
                Outcome::Done
            }
            Err(error) => {
                error!(stage = ?self.stage, %error, "installation failed");
                self.reporter.failure(&error);
                let rollback_error = self.rollback().err();
                Outcome::RolledBack {
                    error,
                    rollback_error,
                }
            }
        }
    }

    fn install(&mut self) -> Result<()> {
        self.reporter
            .progress("🍊", "Installing configuration files ...");
        if self.config.keep_existing_rules {
            self.reporter.progress("🍉", "Retaining existing rules ...");
        }
        install_config_files(
            self.project.source(),
            self.project.target(),
            self.config.preset,
            self.config.keep_existing_rules,
            &self.cancel,
        )?;
        self.advance(Stage::ConfigInstalled);

        self.cancel.check()?;
        self.reporter.progress("🥝", "Updating package.json ...");
        update_manifest(self.project)?;
        self.advance(Stage::ManifestUpdated);

        self.cancel.check()?;
        self.reporter.progress(
            "🍉",
            &format!("Installing packages with {} ...", self.package_manager.name()),
        );
        self.package_manager
            .add_dev_dependency(self.project.target(), self.package_source)?;
        self.cancel.check()?;
        self.advance(Stage::PackagesInstalled);
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.reporter.progress("♻️", "Reverting changes...");
        let result = Rollback::new(self.vcs, self.project.target()).run();
        if let Err(e) = &result {
            error!(error = %e, "rollback failed; the project may be partially modified");
            self.reporter.failure(e);
        }
        self.advance(Stage::RolledBack);
        result
    }

    fn advance(&mut self, next: Stage) {
        info!(from = ?self.stage, to = ?next, "stage");
        self.stage = next;
    }
}
