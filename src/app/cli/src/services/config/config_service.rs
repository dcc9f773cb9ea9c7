// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::{Path, PathBuf};

use merge::Merge;

use crate::config::models::*;
use crate::error::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const CONFIG_FILENAME: &str = ".employee-search.yaml";
pub const CONFIG_PATH_ENV_VAR: &str = "EMPLOYEE_SEARCH_CONFIG";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ConfigService {
    explicit_path: Option<PathBuf>,
}

impl ConfigService {
    /// An explicit path must exist, otherwise [`CONFIG_FILENAME`] in the
    /// current directory is read when present
    pub fn new(explicit_path: Option<PathBuf>) -> Self {
        Self { explicit_path }
    }

    pub fn config_path(&self) -> PathBuf {
        self.explicit_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME))
    }

    /// Loads the file config and fills everything it leaves unset with
    /// defaults
    pub fn load(&self) -> Result<CLIConfig, CLIError> {
        let path = self.config_path();

        let mut config = match self.explicit_path {
            Some(_) => self.load_from(&path)?,
            None if path.is_file() => self.load_from(&path)?,
            None => {
                tracing::debug!(path = %path.display(), "Config file not found, using defaults");
                CLIConfig::new()
            }
        };

        config.merge(CLIConfig::default());
        Ok(config)
    }

    pub fn load_from(&self, path: &Path) -> Result<CLIConfig, CLIError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CLIError::usage_error(format!(
                "Unable to read config file {}: {e}",
                path.display()
            ))
        })?;

        tracing::debug!(path = %path.display(), "Loading config file");

        Self::parse(&contents).map_err(|e| {
            CLIError::usage_error(format!("Invalid config file {}: {e}", path.display()))
        })
    }

    pub fn parse(contents: &str) -> Result<CLIConfig, serde_yaml::Error> {
        // An empty file is an empty config
        if contents.trim().is_empty() {
            return Ok(CLIConfig::new());
        }
        serde_yaml::from_str(contents)
    }

    pub fn to_yaml(config: &CLIConfig) -> Result<String, CLIError> {
        serde_yaml::to_string(config).map_err(CLIError::failure)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
