// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod allowed_term_field;
mod employee_search_config;
mod employee_search_schema;
mod range_buckets;
mod search_client;
mod search_query;
mod search_response;

pub use allowed_term_field::*;
pub use employee_search_config::*;
pub use employee_search_schema::*;
pub use range_buckets::*;
pub use search_client::*;
pub use search_query::*;
pub use search_response::*;
