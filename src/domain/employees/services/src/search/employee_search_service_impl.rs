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

use crate::SearchExecutor;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct EmployeeSearchServiceImpl {
    executor: SearchExecutor,
    search_client: Arc<dyn SearchClient>,
    config: Arc<EmployeeSearchConfig>,
}

impl EmployeeSearchServiceImpl {
    pub fn new(search_client: Arc<dyn SearchClient>, config: Arc<EmployeeSearchConfig>) -> Self {
        Self {
            executor: SearchExecutor::new(search_client.clone(), config.clone()),
            search_client,
            config,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl EmployeeSearchService for EmployeeSearchServiceImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%field_name, %value))]
    async fn find_by_term(
        &self,
        field_name: &str,
        value: serde_json::Value,
    ) -> Result<Vec<SearchHit>, EmployeeSearchError> {
        let build = check_term_field(field_name, |field| {
            move || SearchQuery::new().with_term_filter(field, value)
        })?;

        Ok(self.executor.execute_query(build).await?)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%field_name))]
    async fn term_buckets(&self, field_name: &str) -> Result<AggregationsMap, EmployeeSearchError> {
        let build = check_term_field(field_name, |field| {
            move || {
                SearchQuery::for_aggregations()
                    .with_aggregation(field.as_str(), terms_aggregation(field))
            }
        })?;

        Ok(self.executor.execute_aggs(build).await?)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%field_name, %start, %end, %step))]
    async fn range_histogram(
        &self,
        field_name: &str,
        start: i64,
        end: i64,
        step: i64,
    ) -> Result<AggregationsMap, EmployeeSearchError> {
        let field = AllowedTermField::try_from(field_name)?;
        let ranges =
            create_range_buckets_with(start, end, step, self.config.range_bucket_bounds)?;

        let aggregations = self
            .executor
            .execute_aggs(|| {
                SearchQuery::for_aggregations()
                    .with_aggregation(field.as_str(), range_aggregation(field, &ranges))
            })
            .await?;

        Ok(aggregations)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%employee_id))]
    async fn get_indexed_document(
        &self,
        employee_id: EmployeeID,
    ) -> Result<Option<serde_json::Value>, EmployeeSearchError> {
        let document = self
            .search_client
            .get_document(&self.config.index_name, &employee_id.to_string())
            .await?;

        Ok(document)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
