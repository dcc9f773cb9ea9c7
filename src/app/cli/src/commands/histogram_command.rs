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

pub struct HistogramCommand {
    search_svc: Arc<dyn EmployeeSearchService>,
    field: String,
    start: i64,
    end: i64,
    step: i64,
}

impl HistogramCommand {
    pub fn new(
        search_svc: Arc<dyn EmployeeSearchService>,
        field: impl Into<String>,
        start: i64,
        end: i64,
        step: i64,
    ) -> Self {
        Self {
            search_svc,
            field: field.into(),
            start,
            end,
            step,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for HistogramCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let aggregations = self
            .search_svc
            .range_histogram(&self.field, self.start, self.end, self.step)
            .await?;

        print_json(&aggregations)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
