// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use employee_search::SearchClient;

use super::{CLIError, Command, print_json};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct HealthCommand {
    search_client: Arc<dyn SearchClient>,
}

impl HealthCommand {
    pub fn new(search_client: Arc<dyn SearchClient>) -> Self {
        Self { search_client }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for HealthCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        let health = self.search_client.health().await?;
        print_json(&health)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
