use std::{
    path::Path,
    process::{Command, ExitStatus, Output},
};

use tracing::debug;

/// Renders `command` the way a user would type it, for logs and errors.
pub fn display_command(command: &Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs `command` in `dir` and captures its output.
pub fn capture(mut command: Command, dir: &Path) -> std::io::Result<Output> {
    command.current_dir(dir);
    debug!(command = %display_command(&command), dir = %dir.display(), "running");
    command.output()
}

/// Runs `command` in `dir` with the terminal attached, so the user sees its
/// progress.
pub fn run_attached(command: Command, dir: &Path) -> Result<ExitStatus, String> {
    let mut resolved = resolve(&command)?;
    resolved.current_dir(dir);
    debug!(command = %display_command(&command), dir = %dir.display(), "running");
    resolved
        .status()
        .map_err(|e| format!("failed to run {}: {}", display_command(&command), e))
}

/// Rebuilds `command` around the program's full path on `PATH`, so shims
/// such as `yarn.cmd` launch and a missing tool gets a clear message instead
/// of a bare `NotFound`.
fn resolve(command: &Command) -> Result<Command, String> {
    let program = command.get_program();
    let path = which::which(program)
        .map_err(|_| format!("{} was not found on PATH", program.to_string_lossy()))?;
    debug!(program = %path.display(), "resolved executable");

    let mut resolved = Command::new(path);
    resolved.args(command.get_args());
    Ok(resolved)
}
