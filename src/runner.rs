use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, ExitStatus};

use anyhow::Context;

/// Runs an external program to completion
pub trait ProcessRunner {
    /// Starts `program` with `args`, waits for it to exit and returns its exit code.
    ///
    /// Fails only if the program could not be started.
    fn run(&self, program: &Path, args: &[OsString]) -> anyhow::Result<i32>;
}

/// Runs programs as child processes inheriting the standard streams
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, program: &Path, args: &[OsString]) -> anyhow::Result<i32> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("Failed to execute `{}`", program.display()))?;

        Ok(exit_code(status))
    }
}

/// Returns the exit code of a process, or `-signal` if it was killed by a signal (the host then exits with `-signal & 0xff`)
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return -signal;
        }
    }

    1
}
