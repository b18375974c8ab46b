// std imports
use std::path::{Path, PathBuf};

// third-party imports
use once_cell::sync::Lazy;

// local imports
use crate::appdirs::AppDirs;
use crate::error::Result;
use crate::settings::{Settings, Source};

// ---

pub const APP_NAME: &str = "hostmask";

static DEFAULT: Lazy<Settings> = Lazy::new(Settings::default);

/// Returns the built-in default settings.
pub fn default() -> &'static Settings {
    &DEFAULT
}

/// Returns the application directories, if they can be detected.
pub fn app_dirs() -> Option<AppDirs> {
    AppDirs::new(APP_NAME)
}

/// Loads settings from the default locations.
pub fn load() -> Result<Settings> {
    Loader::new(Vec::new()).load()
}

/// Prepares loading of settings from the given files instead of the default user configuration.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    Loader::new(paths.into_iter().map(|path| path.as_ref().to_owned()).collect())
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the embedded defaults and the default user configuration file.
    pub fn no_default(mut self, value: bool) -> Self {
        self.no_default = value;
        self
    }

    pub fn load(self) -> Result<Settings> {
        let mut sources = Vec::new();

        if !self.no_default && self.paths.is_empty() {
            if let Some(dirs) = app_dirs() {
                sources.push(Source::optional(dirs.config_file()));
            } else {
                log::debug!("application directories are not available, skipping user configuration");
            }
        }

        sources.extend(self.paths.into_iter().map(Source::required));

        Settings::load(sources, !self.no_default)
    }
}
