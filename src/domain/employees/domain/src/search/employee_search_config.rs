// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{DEFAULT_INDEX_NAME, RangeBucketBounds};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeSearchConfig {
    pub index_name: String,
    pub range_bucket_bounds: RangeBucketBounds,
}

impl Default for EmployeeSearchConfig {
    fn default() -> Self {
        Self {
            index_name: DEFAULT_INDEX_NAME.to_string(),
            range_bucket_bounds: RangeBucketBounds::default(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
