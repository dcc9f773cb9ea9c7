// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use employee_search::{EmployeeID, EmployeeSearchService};

use super::{CLIError, Command, print_json};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct GetDocumentCommand {
    search_svc: Arc<dyn EmployeeSearchService>,
    employee_id: EmployeeID,
}

impl GetDocumentCommand {
    pub fn new(search_svc: Arc<dyn EmployeeSearchService>, employee_id: EmployeeID) -> Self {
        Self {
            search_svc,
            employee_id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for GetDocumentCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let Some(document) = self
            .search_svc
            .get_indexed_document(self.employee_id)
            .await?
        else {
            return Err(CLIError::usage_error(format!(
                "Employee {} is not indexed",
                self.employee_id
            )));
        };

        print_json(&document)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
