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
    Employee,
    EmployeeIndexSyncError,
    EmployeeLifecycleMessage,
    EmployeeRepository,
    MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
    UpdateEmployeeError,
    UpdateEmployeeUseCase,
};
use messaging_outbox::{Outbox, OutboxExt};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct UpdateEmployeeUseCaseImpl {
    employee_repo: Arc<dyn EmployeeRepository>,
    outbox: Arc<dyn Outbox>,
}

impl UpdateEmployeeUseCaseImpl {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>, outbox: Arc<dyn Outbox>) -> Self {
        Self {
            employee_repo,
            outbox,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl UpdateEmployeeUseCase for UpdateEmployeeUseCaseImpl {
    #[tracing::instrument(
        level = "info",
        name = "UpdateEmployeeUseCase::execute",
        skip_all,
        fields(employee_id = %employee.id)
    )]
    async fn execute(&self, employee: &Employee) -> Result<(), UpdateEmployeeError> {
        self.employee_repo.update_employee(employee).await?;

        self.outbox
            .post_message(
                MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
                EmployeeLifecycleMessage::saved(employee.clone()),
            )
            .await
            .map_err(|e| EmployeeIndexSyncError::new(employee.id, e))?;

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
