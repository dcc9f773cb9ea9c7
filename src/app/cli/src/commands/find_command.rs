// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use employee_search::EmployeeSearchService;

use super::{CLIError, Command, print_json};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct FindCommand {
    search_svc: Arc<dyn EmployeeSearchService>,
    field: String,
    value: serde_json::Value,
}

impl FindCommand {
    pub fn new(
        search_svc: Arc<dyn EmployeeSearchService>,
        field: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        Self {
            search_svc,
            field: field.into(),
            value,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for FindCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let hits = self
            .search_svc
            .find_by_term(&self.field, self.value.clone())
            .await?;

        eprintln!(
            "{} {} {}",
            console::style("Found").green().bold(),
            hits.len(),
            console::style("employee(s)").green().bold(),
        );

        print_json(&hits)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
