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

pub struct BucketsCommand {
    search_svc: Arc<dyn EmployeeSearchService>,
    field: String,
}

impl BucketsCommand {
    pub fn new(search_svc: Arc<dyn EmployeeSearchService>, field: impl Into<String>) -> Self {
        Self {
            search_svc,
            field: field.into(),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for BucketsCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let aggregations = self.search_svc.term_buckets(&self.field).await?;
        print_json(&aggregations)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
