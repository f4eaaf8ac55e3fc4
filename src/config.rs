pub mod file;

use std::path::Path;

use error_stack::{IntoReport, Result, ResultExt};

use crate::{
    report::{PathStyle, Style},
    utils::IntoReportExt,
};

use self::file::{ColorMode, ConfigFile};

/// Overrides the color mode from the config file.
pub const COLOR_ENV_VAR: &str = "CALLER_ASSERTS_COLOR";
/// See <https://no-color.org>.
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

#[derive(thiserror::Error, Debug)]
pub enum GetConfigError {
    #[error("Get working directory error")]
    GetWorkingDir,
    #[error("File loading failed")]
    LoadFileError,
    #[error("Invalid color mode in environment variable")]
    InvalidColorMode,
}

/// Environment variables which affect the configuration.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub color: Option<String>,
    pub no_color: bool,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            color: std::env::var(COLOR_ENV_VAR).ok(),
            no_color: std::env::var_os(NO_COLOR_ENV_VAR).map_or(false, |v| !v.is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    file: ConfigFile,
    color_mode: ColorMode,
    no_color: bool,
}

impl Config {
    pub fn new(file: ConfigFile, env: EnvOverrides) -> Result<Self, GetConfigError> {
        let color_mode = match env.color {
            Some(value) => ColorMode::parse(&value)
                .ok_or(GetConfigError::InvalidColorMode)
                .into_report()
                .attach_printable_lazy(|| format!("{}={}", COLOR_ENV_VAR, value))?,
            None => file.color.unwrap_or_default(),
        };

        Ok(Self {
            file,
            color_mode,
            no_color: env.no_color,
        })
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn path_style(&self) -> PathStyle {
        self.file.path.unwrap_or_default()
    }

    /// Failure messages are wrapped in ANSI color codes.
    pub fn color_enabled(&self) -> bool {
        match self.color_mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !self.no_color,
        }
    }

    pub fn style(&self) -> Style {
        Style {
            color: self.color_enabled(),
            path: self.path_style(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: ConfigFile::default(),
            color_mode: ColorMode::default(),
            no_color: false,
        }
    }
}

/// Load config from the directory's config file and the environment.
pub fn load_config(dir: impl AsRef<Path>) -> Result<Config, GetConfigError> {
    load_config_with_env(dir, EnvOverrides::from_env())
}

pub fn load_config_with_env(
    dir: impl AsRef<Path>,
    env: EnvOverrides,
) -> Result<Config, GetConfigError> {
    let file_config = ConfigFile::load(dir).change_context(GetConfigError::LoadFileError)?;
    Config::new(file_config, env)
}

/// Load config using the current working directory.
pub fn get_config() -> Result<Config, GetConfigError> {
    let current_dir = std::env::current_dir().into_error(GetConfigError::GetWorkingDir)?;
    load_config(current_dir)
}
