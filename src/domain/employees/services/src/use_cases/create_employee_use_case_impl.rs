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
    CreateEmployeeError,
    CreateEmployeeUseCase,
    Employee,
    EmployeeIndexSyncError,
    EmployeeLifecycleMessage,
    EmployeeRecord,
    EmployeeRepository,
    MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
};
use messaging_outbox::{Outbox, OutboxExt};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct CreateEmployeeUseCaseImpl {
    employee_repo: Arc<dyn EmployeeRepository>,
    outbox: Arc<dyn Outbox>,
}

impl CreateEmployeeUseCaseImpl {
    pub fn new(employee_repo: Arc<dyn EmployeeRepository>, outbox: Arc<dyn Outbox>) -> Self {
        Self {
            employee_repo,
            outbox,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl CreateEmployeeUseCase for CreateEmployeeUseCaseImpl {
    #[tracing::instrument(level = "info", name = "CreateEmployeeUseCase::execute", skip_all)]
    async fn execute(&self, record: EmployeeRecord) -> Result<Employee, CreateEmployeeError> {
        let employee = self.employee_repo.create_employee(&record).await?;

        self.outbox
            .post_message(
                MESSAGE_PRODUCER_EMPLOYEE_SERVICE,
                EmployeeLifecycleMessage::saved(employee.clone()),
            )
            .await
            .map_err(|e| EmployeeIndexSyncError::new(employee.id, e))?;

        Ok(employee)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
