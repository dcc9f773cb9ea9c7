// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use employee_search::{EmployeeID, EmployeeLifecycleMessage, MESSAGE_PRODUCER_EMPLOYEE_SERVICE};
use messaging_outbox::{Outbox, OutboxExt};

use super::{CLIError, Command};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct UnindexCommand {
    outbox: Arc<dyn Outbox>,
    employee_id: EmployeeID,
}

impl UnindexCommand {
    pub fn new(outbox: Arc<dyn Outbox>, employee_id: EmployeeID) -> Self {
        Self {
            outbox,
            employee_id,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Command for UnindexCommand {
    async fn run(&mut self) -> Result<(), CLIError> {
        self.outbox
            .post_message(
                MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
                EmployeeLifecycleMessage::deleted(self.employee_id),
            )
            .await
            .map_err(CLIError::failure)?;

        eprintln!(
            "{} {}",
            console::style("Removed employee").green().bold(),
            self.employee_id,
        );

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
