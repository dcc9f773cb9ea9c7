// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_ELASTICSEARCH_HOST: &str = "http://localhost:9200";

pub const DEFAULT_ELASTICSEARCH_TIMEOUT_SECS: u64 = 30;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct ElasticsearchClientConfig {
    /// One host uses a single-node pool, several are balanced round-robin
    pub hosts: Vec<url::Url>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_secs: u64,
    pub enable_compression: bool,
}

impl Default for ElasticsearchClientConfig {
    fn default() -> Self {
        Self {
            hosts: url::Url::parse(DEFAULT_ELASTICSEARCH_HOST).into_iter().collect(),
            username: None,
            password: None,
            timeout_secs: DEFAULT_ELASTICSEARCH_TIMEOUT_SECS,
            enable_compression: false,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
