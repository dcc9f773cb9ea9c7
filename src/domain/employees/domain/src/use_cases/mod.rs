// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod create_employee_use_case;
mod delete_employee_use_case;
mod employee_index_sync_error;
mod update_employee_use_case;

pub use create_employee_use_case::*;
pub use delete_employee_use_case::*;
pub use employee_index_sync_error::*;
pub use update_employee_use_case::*;
