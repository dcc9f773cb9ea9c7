// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::{BoxedError, Employee, EmployeeID, EmployeeRecord};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Persistence of employee records. Implementations own identity assignment;
/// the search index is never written from here.
#[async_trait::async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create_employee(
        &self,
        record: &EmployeeRecord,
    ) -> Result<Employee, EmployeeRepositoryError>;

    async fn update_employee(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError>;

    async fn get_employee_by_id(
        &self,
        employee_id: EmployeeID,
    ) -> Result<Employee, EmployeeRepositoryError>;

    async fn delete_employee(&self, employee_id: EmployeeID) -> Result<(), EmployeeRepositoryError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum EmployeeRepositoryError {
    #[error(transparent)]
    NotFound(#[from] EmployeeNotFoundError),

    #[error("Employee storage failure")]
    Storage(#[source] BoxedError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Employee {employee_id} not found")]
pub struct EmployeeNotFoundError {
    pub employee_id: EmployeeID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
