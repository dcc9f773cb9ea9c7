// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use super::{CLIError, Command};
use crate::config::{CLIConfig, ConfigService};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct ConfigCommand {
    config: CLIConfig,
    show_secrets: bool,
}

impl ConfigCommand {
    pub fn new(config: CLIConfig, show_secrets: bool) -> Self {
        Self {
            config,
            show_secrets,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for ConfigCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let yaml = if self.show_secrets {
            ConfigService::to_yaml(&self.config)?
        } else {
            ConfigService::to_yaml(&self.config.masked())?
        };

        print!("{yaml}");
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
