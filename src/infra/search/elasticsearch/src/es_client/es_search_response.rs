// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Deserialize)]
pub struct SearchResponse {
    pub took: u64,
    pub timed_out: bool,
    pub hits: SearchHitsResponse,
    pub aggregations: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SearchHitsResponse {
    pub total: Option<SearchHitsTotalResponse>,
    pub hits: Vec<SearchHitResponse>,
}

#[derive(Debug, serde::Deserialize)]
pub struct SearchHitsTotalResponse {
    pub value: u64,
}

#[derive(Debug, serde::Deserialize)]
pub struct SearchHitResponse {
    #[serde(rename = "_index")]
    pub index: String,

    #[serde(rename = "_id")]
    pub id: Option<String>,

    #[serde(rename = "_score")]
    pub score: Option<f64>,

    #[serde(rename = "_source")]
    pub source: Option<serde_json::Value>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl From<SearchResponse> for employee_search::SearchResponse {
    fn from(value: SearchResponse) -> Self {
        Self {
            took_ms: value.took,
            timed_out: value.timed_out,
            total_hits: value.hits.total.map(|total| total.value),
            hits: value
                .hits
                .hits
                .into_iter()
                .map(|hit| employee_search::SearchHit {
                    index: hit.index,
                    id: hit.id.unwrap_or_default(),
                    score: hit.score,
                    source: hit.source.unwrap_or_default(),
                })
                .collect(),
            aggregations: value.aggregations,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
