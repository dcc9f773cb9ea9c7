// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use employee_search::{
    EmployeeLifecycleMessage,
    EmployeeSearchConfig,
    EmployeeSearchService,
    MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
    SearchClient,
};
use employee_search_services::{EmployeeSearchServiceImpl, EmployeeSearchUpdater};
use messaging_outbox::{Outbox, OutboxImmediateImpl};

use crate::cli;
use crate::commands::*;
use crate::config::CLIConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Components shared by the commands that talk to the search index
pub struct SearchCatalog {
    search_client: Arc<dyn SearchClient>,
    search_config: Arc<EmployeeSearchConfig>,
}

impl SearchCatalog {
    pub fn new(search_client: Arc<dyn SearchClient>, search_config: EmployeeSearchConfig) -> Self {
        Self {
            search_client,
            search_config: Arc::new(search_config),
        }
    }

    pub fn search_client(&self) -> Arc<dyn SearchClient> {
        self.search_client.clone()
    }

    pub fn search_service(&self) -> Arc<dyn EmployeeSearchService> {
        Arc::new(EmployeeSearchServiceImpl::new(
            self.search_client.clone(),
            self.search_config.clone(),
        ))
    }

    /// Outbox delivering employee lifecycle messages to the index updater
    pub fn outbox(&self) -> Arc<dyn Outbox> {
        let updater = Arc::new(EmployeeSearchUpdater::new(
            self.search_client.clone(),
            self.search_config.clone(),
        ));

        Arc::new(
            OutboxImmediateImpl::builder()
                .with_consumer::<EmployeeLifecycleMessage>(
                    MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
                    updater,
                )
                .build(),
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The search client is only created for commands that need one
pub fn get_command<F>(
    command: cli::Command,
    config: CLIConfig,
    search_client_factory: F,
) -> Result<Box<dyn Command>, CLIError>
where
    F: FnOnce(&CLIConfig) -> Result<Arc<dyn SearchClient>, CLIError>,
{
    let catalog = || -> Result<SearchCatalog, CLIError> {
        let search_config = config
            .search
            .as_ref()
            .map(|search| search.to_employee_search_config())
            .unwrap_or_default();

        Ok(SearchCatalog::new(
            search_client_factory(&config)?,
            search_config,
        ))
    };

    let command: Box<dyn Command> = match command {
        cli::Command::Config(c) => Box::new(ConfigCommand::new(config.clone(), c.show_secrets)),
        cli::Command::Health(_) => Box::new(HealthCommand::new(catalog()?.search_client())),
        cli::Command::Index(c) => Box::new(IndexCommand::new(catalog()?.outbox(), c.file)),
        cli::Command::Unindex(c) => Box::new(UnindexCommand::new(catalog()?.outbox(), c.id)),
        cli::Command::Get(c) => {
            Box::new(GetDocumentCommand::new(catalog()?.search_service(), c.id))
        }
        cli::Command::Find(c) => Box::new(FindCommand::new(
            catalog()?.search_service(),
            c.field,
            c.value,
        )),
        cli::Command::Buckets(c) => {
            Box::new(BucketsCommand::new(catalog()?.search_service(), c.field))
        }
        cli::Command::Histogram(c) => Box::new(HistogramCommand::new(
            catalog()?.search_service(),
            c.field,
            c.start,
            c.end,
            c.step,
        )),
    };

    Ok(command)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
