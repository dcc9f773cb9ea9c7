// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::{Employee, EmployeeIndexSyncError, EmployeeRecord, EmployeeRepositoryError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait CreateEmployeeUseCase: Send + Sync {
    async fn execute(&self, record: EmployeeRecord) -> Result<Employee, CreateEmployeeError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum CreateEmployeeError {
    #[error(transparent)]
    Repository(#[from] EmployeeRepositoryError),

    #[error(transparent)]
    IndexSync(#[from] EmployeeIndexSyncError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
