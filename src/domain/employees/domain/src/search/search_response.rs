// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Aggregation results keyed by aggregation name, as returned by the engine
pub type AggregationsMap = serde_json::Map<String, serde_json::Value>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub took_ms: u64,
    pub timed_out: bool,
    pub total_hits: Option<u64>,
    pub hits: Vec<SearchHit>,
    pub aggregations: Option<AggregationsMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub index: String,
    pub id: String,
    pub score: Option<f64>,
    pub source: serde_json::Value,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
