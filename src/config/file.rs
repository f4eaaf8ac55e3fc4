use std::{
    io::Write,
    path::{Path, PathBuf},
};

use error_stack::{Report, Result, ResultExt};
use serde::{Deserialize, Serialize};

use crate::{report::PathStyle, utils::IntoReportExt};

pub const CONFIG_FILE_NAME: &str = "caller_asserts.toml";

pub const DEFAULT_CONFIG_FILE_TEXT: &str = r#"
# Failure message color: "always", "never" or "auto".
# With "auto" color is disabled when the NO_COLOR environment variable is set.
color = "always"

# Source file in failure messages: "base_name" or "full".
path = "base_name"
"#;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Save default")]
    SaveDefault,
    #[error("Not a directory")]
    NotDirectory,
    #[error("Load config file")]
    LoadConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    Always,
    Never,
    /// Color unless `NO_COLOR` is set.
    Auto,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            "auto" => Some(Self::Auto),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub color: Option<ColorMode>,
    pub path: Option<PathStyle>,
}

impl ConfigFile {
    pub fn save_default(dir: impl AsRef<Path>) -> Result<(), ConfigFileError> {
        let file_path =
            Self::default_config_file_path(dir).change_context(ConfigFileError::SaveDefault)?;
        let mut file = std::fs::File::create(&file_path)
            .into_error_with_path(ConfigFileError::SaveDefault, &file_path)?;
        file.write_all(DEFAULT_CONFIG_FILE_TEXT.as_bytes())
            .into_error(ConfigFileError::SaveDefault)?;
        Ok(())
    }

    /// Load config file from the directory. A missing file means default
    /// settings.
    pub fn load(dir: impl AsRef<Path>) -> Result<ConfigFile, ConfigFileError> {
        let file_path =
            Self::default_config_file_path(&dir).change_context(ConfigFileError::LoadConfig)?;
        if !file_path.exists() {
            return Ok(ConfigFile::default());
        }

        let config_string = std::fs::read_to_string(&file_path)
            .into_error_with_path(ConfigFileError::LoadConfig, &file_path)?;
        toml::from_str(&config_string)
            .into_error_with_path(ConfigFileError::LoadConfig, &file_path)
    }

    pub fn parse(text: &str) -> Result<ConfigFile, ConfigFileError> {
        toml::from_str(text).into_error(ConfigFileError::LoadConfig)
    }

    pub fn default_config_file_path(dir: impl AsRef<Path>) -> Result<PathBuf, ConfigFileError> {
        if !dir.as_ref().is_dir() {
            return Err(Report::new(ConfigFileError::NotDirectory));
        }
        let mut file_path = dir.as_ref().to_path_buf();
        file_path.push(CONFIG_FILE_NAME);
        Ok(file_path)
    }
}
