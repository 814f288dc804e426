use std::path::{Path, PathBuf};

/// Path of the premake executable, relative to the directory `vsgen` is run from
pub const DEFAULT_TOOL: &str = "tools/premake5";

/// premake action selecting the Visual Studio 2022 project format
pub const DEFAULT_PLATFORM: &str = "vs2022";

/// Build configurations of the generated solution
pub const BUILD_CONFIGURATIONS: [&str; 2] = ["Debug", "Release"];

/// Values the [`Launcher`](crate::launcher::Launcher) is constructed with
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LauncherConfig {
    tool: PathBuf,
    platform: String,
    configurations: Vec<String>,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TOOL, DEFAULT_PLATFORM)
    }
}

impl LauncherConfig {
    pub fn new(tool: impl Into<PathBuf>, platform: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            platform: platform.into(),
            configurations: BUILD_CONFIGURATIONS.map(String::from).into(),
        }
    }

    /// Returns the path of the project-file generator
    pub fn tool(&self) -> &Path {
        &self.tool
    }

    /// Returns the identifier of the project-file format given to the generator
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Returns the build configuration labels.
    ///
    /// They are not given to the generator: premake reads them from the project script.
    pub fn configurations(&self) -> &[String] {
        &self.configurations
    }
}
