use std::ffi::OsString;
use std::io::Write;

use console::style;

use log::{debug, info};

use crate::config::LauncherConfig;
use crate::runner::ProcessRunner;

pub const SUCCESS_MESSAGE: &str = "Visual Studio project files generated successfully.";
pub const FAILURE_MESSAGE: &str = "Failed to generate Visual Studio project files.";

/// Exit code used when the generator could not be started
const NOT_LAUNCHED_CODE: i32 = 1;

/// Result of a single run of the generator
pub enum Outcome {
    /// The generator exited with 0
    Generated,

    /// The generator exited with a nonzero code
    Failed(i32),

    /// The generator could not be started
    NotLaunched(anyhow::Error),
}

impl Outcome {
    /// Returns the line to print on stdout
    pub fn message(&self) -> &'static str {
        match self {
            Self::Generated => SUCCESS_MESSAGE,
            Self::Failed(_) | Self::NotLaunched(_) => FAILURE_MESSAGE,
        }
    }

    /// Returns the exit code the process must terminate with
    pub fn code(&self) -> i32 {
        match self {
            Self::Generated => 0,
            Self::Failed(code) => *code,
            Self::NotLaunched(_) => NOT_LAUNCHED_CODE,
        }
    }

    /// Prints the outcome and converts it into the result the process exits with.
    ///
    /// A failure to write to `stdout` does not change the exit code.
    pub fn report(self, mut stdout: impl Write) -> proc_exit::ExitResult {
        if let Err(e) = writeln!(stdout, "{}", self.message()).and_then(|()| stdout.flush()) {
            debug!("Failed to write to stdout: {e}");
        }

        if let Self::NotLaunched(e) = &self {
            eprintln!("{} {e:#}", style("error:").for_stderr().bold().red());
        }

        match self.code() {
            0 => Ok(()),
            code => Err(proc_exit::Exit::new(proc_exit::Code::new(code))),
        }
    }
}

/// Runs the project-file generator once
pub struct Launcher<R> {
    config: LauncherConfig,
    runner: R,
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn new(config: LauncherConfig, runner: R) -> Self {
        Self { config, runner }
    }

    /// Returns the arguments given to the generator
    pub fn arguments(&self) -> Vec<OsString> {
        vec![self.config.platform().into()]
    }

    pub fn launch(&self) -> Outcome {
        let tool = self.config.tool();
        debug!(
            "Running `{} {}` (configurations: {})",
            tool.display(),
            self.config.platform(),
            self.config.configurations().join(", ")
        );

        match self.runner.run(tool, &self.arguments()) {
            Ok(0) => Outcome::Generated,
            Ok(code) => {
                info!("`{}` exited with code {code}", tool.display());
                Outcome::Failed(code)
            }
            Err(e) => Outcome::NotLaunched(e),
        }
    }
}
