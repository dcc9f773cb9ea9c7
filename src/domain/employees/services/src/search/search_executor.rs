// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use employee_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs queries built by the caller against the configured index.
/// Returned structures are passed through without validation.
pub struct SearchExecutor {
    search_client: Arc<dyn SearchClient>,
    config: Arc<EmployeeSearchConfig>,
}

impl SearchExecutor {
    pub fn new(search_client: Arc<dyn SearchClient>, config: Arc<EmployeeSearchConfig>) -> Self {
        Self {
            search_client,
            config,
        }
    }

    /// Builds the query once, executes it and returns the raw hits
    #[tracing::instrument(level = "debug", skip_all, fields(index = %self.config.index_name))]
    pub async fn execute_query<F>(&self, build: F) -> Result<Vec<SearchHit>, SearchClientError>
    where
        F: FnOnce() -> SearchQuery,
    {
        let response = self.execute(build).await?;
        tracing::debug!(num_hits = response.hits.len(), "Query executed");

        Ok(response.hits)
    }

    /// Builds the query once, executes it and returns only the aggregations.
    /// Hit suppression is left to the query: see
    /// [`SearchQuery::for_aggregations`].
    #[tracing::instrument(level = "debug", skip_all, fields(index = %self.config.index_name))]
    pub async fn execute_aggs<F>(&self, build: F) -> Result<AggregationsMap, SearchClientError>
    where
        F: FnOnce() -> SearchQuery,
    {
        let response = self.execute(build).await?;

        Ok(response.aggregations.unwrap_or_default())
    }

    async fn execute<F>(&self, build: F) -> Result<SearchResponse, SearchClientError>
    where
        F: FnOnce() -> SearchQuery,
    {
        let request_body = build().to_request_body();
        tracing::debug!(%request_body, "Executing search");

        self.search_client
            .search(&self.config.index_name, request_body)
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
