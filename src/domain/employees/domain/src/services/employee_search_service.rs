// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

use crate::{
    AggregationsMap,
    ArgumentError,
    EmployeeID,
    InvalidRangeError,
    SearchClientError,
    SearchHit,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
pub trait EmployeeSearchService: Send + Sync {
    /// Employees whose allow-listed field equals `value`
    async fn find_by_term(
        &self,
        field_name: &str,
        value: serde_json::Value,
    ) -> Result<Vec<SearchHit>, EmployeeSearchError>;

    /// Distinct values of an allow-listed field with document counts
    async fn term_buckets(&self, field_name: &str) -> Result<AggregationsMap, EmployeeSearchError>;

    /// Document counts of an allow-listed numeric field split into ranges
    async fn range_histogram(
        &self,
        field_name: &str,
        start: i64,
        end: i64,
        step: i64,
    ) -> Result<AggregationsMap, EmployeeSearchError>;

    async fn get_indexed_document(
        &self,
        employee_id: EmployeeID,
    ) -> Result<Option<serde_json::Value>, EmployeeSearchError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum EmployeeSearchError {
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error(transparent)]
    Client(#[from] SearchClientError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
