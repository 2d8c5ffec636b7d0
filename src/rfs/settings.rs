use std::env;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use super::error::{FilesError, Result};

const WORKING_DIR_VAR_NAME: &str = "RFS_FILES_WORKING_DIR";
const HOME_VAR_NAME: &str = "HOME";
const DEBOUNCE_VAR_NAME: &str = "RFS_FILES_DEBOUNCE_MS";

/// Quiet period of the watcher when nothing else is configured.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(30);

/// Locations and timings used by the config resolver and the watcher.
///
/// Nothing is read from the process at load time: either build the settings
/// explicitly or call [`Settings::from_env`] once at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base for relative config paths.
    pub working_dir: PathBuf,
    /// Target of a leading `~` in config paths.
    pub home_dir: Option<PathBuf>,
    pub debounce: Duration,
}

impl Settings {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Settings {
            working_dir: working_dir.into(),
            home_dir: None,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Builds settings from `RFS_FILES_WORKING_DIR`, `HOME` and
    /// `RFS_FILES_DEBOUNCE_MS`.
    pub fn from_env() -> Result<Settings> {
        let working_dir = match env::var_os(WORKING_DIR_VAR_NAME) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => env::current_dir().map_err(|error| FilesError::io(".", error))?,
        };
        let home_dir = env::var_os(HOME_VAR_NAME)
            .filter(|home| !home.is_empty())
            .map(PathBuf::from);
        let debounce = match env::var(DEBOUNCE_VAR_NAME) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(millis) => Duration::from_millis(millis),
                Err(_) => {
                    tracing::warn!(%value, "{DEBOUNCE_VAR_NAME} is not a number of milliseconds");
                    DEFAULT_DEBOUNCE
                }
            },
            Err(_) => DEFAULT_DEBOUNCE,
        };

        Ok(Settings {
            working_dir,
            home_dir,
            debounce,
        })
    }

    /// Turns a caller supplied path into the location the resolver works on.
    ///
    /// `~` and `~/...` are expanded against the home directory, other
    /// relative paths are joined to the working directory.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(FilesError::MissingArgument("path"));
        }

        let mut components = path.components();
        if let Some(Component::Normal(first)) = components.next() {
            if first == "~" {
                let home = self
                    .home_dir
                    .as_ref()
                    .ok_or(FilesError::MissingArgument("home_dir"))?;
                return Ok(home.join(components.as_path()));
            }
        }

        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            Ok(self.working_dir.join(path))
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(".")
    }
}
