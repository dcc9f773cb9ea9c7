// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use messaging_outbox::OutboxError;
use thiserror::Error;

use crate::EmployeeID;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// The record write was committed but the index was not brought up to date.
/// Nothing is rolled back.
#[derive(Debug, Error)]
#[error("Employee {employee_id} is stored, but its search index synchronization failed")]
pub struct EmployeeIndexSyncError {
    pub employee_id: EmployeeID,

    #[source]
    pub source: OutboxError,
}

impl EmployeeIndexSyncError {
    pub fn new(employee_id: EmployeeID, source: OutboxError) -> Self {
        Self {
            employee_id,
            source,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
