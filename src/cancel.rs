use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::error::InstallError;

/// Shared interrupt flag, polled by every step that mutates the project.
///
/// The Ctrl-C handler only ever flips `interrupted`. Whoever holds the token
/// decides what an interrupt means: before the checkpoint is armed nothing
/// has been written, afterwards the orchestrator rolls back.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    interrupted: Arc<AtomicBool>,
    armed: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    pub fn arm(&self) {
        self.armed.store(true, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    /// Returns `Interrupted` once Ctrl-C has been received.
    pub fn check(&self) -> Result<(), InstallError> {
        if self.is_cancelled() {
            Err(InstallError::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Routes SIGINT into `token`. Can only be called once per process.
pub fn install_interrupt_handler(token: &CancellationToken) -> Result<()> {
    let token = token.clone();
    ctrlc::set_handler(move || {
        if token.is_armed() {
            eprintln!();
            tracing::warn!("interrupt received, rolling back at the next checkpoint");
        }
        token.cancel();
    })
    .context("Failed to install Ctrl-C handler")
}
