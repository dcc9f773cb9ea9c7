// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use messaging_outbox::Message;
use serde::{Deserialize, Serialize};

use crate::{Employee, EmployeeID};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const EMPLOYEE_LIFECYCLE_OUTBOX_VERSION: u32 = 1;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Represents messages related to the lifecycle of an employee record.
/// Posted only after the record write has been committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeLifecycleMessage {
    /// Message indicating that an employee was created or updated
    Saved(EmployeeLifecycleMessageSaved),

    /// Message indicating that an employee has been deleted
    Deleted(EmployeeLifecycleMessageDeleted),
}

impl EmployeeLifecycleMessage {
    pub fn saved(employee: Employee) -> Self {
        Self::Saved(EmployeeLifecycleMessageSaved { employee })
    }

    pub fn deleted(employee_id: EmployeeID) -> Self {
        Self::Deleted(EmployeeLifecycleMessageDeleted { employee_id })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl Message for EmployeeLifecycleMessage {
    fn version() -> u32 {
        EMPLOYEE_LIFECYCLE_OUTBOX_VERSION
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Contains the full state of a saved employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLifecycleMessageSaved {
    pub employee: Employee,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeLifecycleMessageDeleted {
    /// The unique identifier of the deleted employee
    pub employee_id: EmployeeID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
