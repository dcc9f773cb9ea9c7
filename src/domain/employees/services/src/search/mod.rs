// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod employee_search_service_impl;
mod employee_search_updater;
mod search_executor;

pub use employee_search_service_impl::*;
pub use employee_search_updater::*;
pub use search_executor::*;
