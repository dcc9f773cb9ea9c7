// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;
use std::sync::Arc;

use employee_search::{Employee, EmployeeLifecycleMessage, MESSAGE_PRODUCER_EMPLOYEE_SERVICE};
use messaging_outbox::{Outbox, OutboxExt};

use super::{CLIError, Command};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct IndexCommand {
    outbox: Arc<dyn Outbox>,
    file: PathBuf,
}

impl IndexCommand {
    pub fn new(outbox: Arc<dyn Outbox>, file: impl Into<PathBuf>) -> Self {
        Self {
            outbox,
            file: file.into(),
        }
    }

    pub fn parse_employees(contents: &str) -> Result<Vec<Employee>, serde_json::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum EmployeesFile {
            Many(Vec<Employee>),
            One(Box<Employee>),
        }

        Ok(match serde_json::from_str(contents)? {
            EmployeesFile::Many(employees) => employees,
            EmployeesFile::One(employee) => vec![*employee],
        })
    }

    async fn read_employees(&self) -> Result<Vec<Employee>, CLIError> {
        let contents = tokio::fs::read_to_string(&self.file).await.map_err(|e| {
            CLIError::usage_error(format!("Unable to read {}: {e}", self.file.display()))
        })?;

        Self::parse_employees(&contents).map_err(|e| {
            CLIError::usage_error(format!(
                "Invalid employee records in {}: {e}",
                self.file.display()
            ))
        })
    }
}

#[async_trait::async_trait(?Send)]
impl Command for IndexCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let employees = self.read_employees().await?;

        for employee in &employees {
            tracing::info!(employee_id = %employee.id, "Indexing employee");

            self.outbox
                .post_message(
                    MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
                    EmployeeLifecycleMessage::saved(employee.clone()),
                )
                .await
                .map_err(CLIError::failure)?;
        }

        eprintln!(
            "{} {} {}",
            console::style("Indexed").green().bold(),
            employees.len(),
            console::style("employee(s)").green().bold(),
        );

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
