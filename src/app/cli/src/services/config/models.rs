// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use employee_search::{DEFAULT_INDEX_NAME, EmployeeSearchConfig, RangeBucketBounds};
use employee_search_elasticsearch::{
    DEFAULT_ELASTICSEARCH_HOST,
    DEFAULT_ELASTICSEARCH_TIMEOUT_SECS,
    ElasticsearchClientConfig,
};
use merge::Merge;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use url::Url;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const MASKED_SECRET: &str = "********";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct CLIConfig {
    /// Search index configuration
    #[merge(strategy = merge_recursive)]
    pub search: Option<SearchConfig>,
}

impl CLIConfig {
    pub fn new() -> Self {
        Self { search: None }
    }

    /// Copy with credentials replaced by a placeholder
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        if let Some(password) = masked
            .search
            .as_mut()
            .and_then(|search| search.elasticsearch.as_mut())
            .and_then(|es| es.password.as_mut())
        {
            *password = MASKED_SECRET.to_string();
        }
        masked
    }
}

impl Default for CLIConfig {
    fn default() -> Self {
        Self {
            search: Some(SearchConfig::default()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Search
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct SearchConfig {
    /// Name of the index holding employee documents
    pub index_name: Option<String>,

    /// Bounds of the closed histogram buckets: every one spans the first step
    /// (`pinned`) or each follows the cursor (`stepped`). The open buckets
    /// are always `{to: start}` and `{from: end}`.
    pub range_bucket_bounds: Option<RangeBucketBounds>,

    /// Elasticsearch connection
    #[merge(strategy = merge_recursive)]
    pub elasticsearch: Option<ElasticsearchConfig>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self {
            index_name: None,
            range_bucket_bounds: None,
            elasticsearch: None,
        }
    }

    pub fn to_employee_search_config(&self) -> EmployeeSearchConfig {
        let default = EmployeeSearchConfig::default();
        EmployeeSearchConfig {
            index_name: self.index_name.clone().unwrap_or(default.index_name),
            range_bucket_bounds: self
                .range_bucket_bounds
                .unwrap_or(default.range_bucket_bounds),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            index_name: Some(DEFAULT_INDEX_NAME.to_string()),
            range_bucket_bounds: Some(RangeBucketBounds::default()),
            elasticsearch: Some(ElasticsearchConfig::default()),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Merge, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ElasticsearchConfig {
    /// Cluster nodes, requests are balanced between them in round-robin order
    pub hosts: Option<Vec<Url>>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Gzip request bodies
    pub enable_compression: Option<bool>,
}

impl ElasticsearchConfig {
    pub fn new() -> Self {
        Self {
            hosts: None,
            username: None,
            password: None,
            timeout_secs: None,
            enable_compression: None,
        }
    }

    pub fn to_client_config(&self) -> ElasticsearchClientConfig {
        let default = ElasticsearchClientConfig::default();
        ElasticsearchClientConfig {
            hosts: self.hosts.clone().unwrap_or(default.hosts),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout_secs: self.timeout_secs.unwrap_or(default.timeout_secs),
            enable_compression: self
                .enable_compression
                .unwrap_or(default.enable_compression),
        }
    }
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self {
            hosts: Url::parse(DEFAULT_ELASTICSEARCH_HOST).ok().map(|url| vec![url]),
            username: None,
            password: None,
            timeout_secs: Some(DEFAULT_ELASTICSEARCH_TIMEOUT_SECS),
            enable_compression: Some(false),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn merge_recursive<T: Merge>(left: &mut Option<T>, right: Option<T>) {
    let Some(right) = right else {
        return;
    };

    match left {
        Some(left) => left.merge(right),
        None => *left = Some(right),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
