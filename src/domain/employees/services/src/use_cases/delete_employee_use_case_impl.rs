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
    DeleteEmployeeError,
    DeleteEmployeeUseCase,
    EmployeeID,
    EmployeeIndexSyncError,
    EmployeeLifecycleMessage,
    EmployeeRepository,
    MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
};
use messaging_outbox::{Outbox, OutboxExt};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct DeleteEmployeeUseCaseImpl {
    employee_repo: Arc<dyn EmployeeRepository>,
    outbox: Arc<dyn Outbox>,
}

impl DeleteEmployeeUseCaseImpl {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>, outbox: Arc<dyn Outbox>) -> Self {
        Self {
            employee_repo,
            outbox,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl DeleteEmployeeUseCase for DeleteEmployeeUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "DeleteEmployeeUseCase::execute",
        skip_all,
        fields(%employee_id)
    )]
    async fn execute(&self, employee_id: EmployeeID) -> Result<(), DeleteEmployeeError> {
        self.employee_repo.delete_employee(employee_id).await?;

        self.outbox
            .post_message(
                MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
                EmployeeLifecycleMessage::deleted(employee_id),
            )
            .await
            .map_err(|e| EmployeeIndexSyncError::new(employee_id, e))?;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
