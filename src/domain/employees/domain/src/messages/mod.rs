// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod employee_lifecycle_message;

pub use employee_lifecycle_message::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const MESSAGE_PRODUCER_EMPLOYEE_SERVICE: &str = "dev.kamu.domain.employees.EmployeeService";

pub const MESSAGE_CONSUMER_EMPLOYEE_SEARCH_UPDATER: &str =
    "dev.kamu.domain.employees.EmployeeSearchUpdater";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
