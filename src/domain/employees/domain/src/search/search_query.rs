// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{AllowedTermField, RangeBucket};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Search request under construction. Executors call a caller-supplied
/// function returning one of these and run it against the configured index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchQuery {
    pub query: Option<serde_json::Value>,
    pub term_filters: Vec<(AllowedTermField, serde_json::Value)>,
    pub aggregations: serde_json::Map<String, serde_json::Value>,
    pub size: Option<u64>,
    pub from: Option<u64>,
    pub sort: Vec<(String, SortOrder)>,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base search for aggregation queries: no hits are requested
    pub fn for_aggregations() -> Self {
        Self {
            size: Some(0),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, query: serde_json::Value) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_term_filter(
        mut self,
        field: AllowedTermField,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.term_filters.push((field, value.into()));
        self
    }

    pub fn with_aggregation(mut self, name: impl Into<String>, aggregation: serde_json::Value) -> Self {
        self.aggregations.insert(name.into(), aggregation);
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_sort(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort.push((field.into(), order));
        self
    }

    pub fn to_request_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "query": self.query_argument(),
        });

        if !self.aggregations.is_empty() {
            body["aggs"] = serde_json::Value::Object(self.aggregations.clone());
        }
        if let Some(size) = self.size {
            body["size"] = serde_json::json!(size);
        }
        if let Some(from) = self.from {
            body["from"] = serde_json::json!(from);
        }
        if !self.sort.is_empty() {
            body["sort"] = self
                .sort
                .iter()
                .map(|(field, order)| serde_json::json!({ field.as_str(): order.as_str() }))
                .collect();
        }

        body
    }

    fn query_argument(&self) -> serde_json::Value {
        let query = self
            .query
            .clone()
            .unwrap_or_else(|| serde_json::json!({ "match_all": {} }));

        if self.term_filters.is_empty() {
            return query;
        }

        let filter: Vec<_> = self
            .term_filters
            .iter()
            .map(|(field, value)| {
                serde_json::json!({
                    "term": {
                        field.as_str(): value
                    }
                })
            })
            .collect();

        serde_json::json!({
            "bool": {
                "must": query,
                "filter": filter,
            }
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn terms_aggregation(field: AllowedTermField) -> serde_json::Value {
    serde_json::json!({
        "terms": {
            "field": field.as_str(),
        }
    })
}

pub fn range_aggregation(field: AllowedTermField, ranges: &[RangeBucket]) -> serde_json::Value {
    serde_json::json!({
        "range": {
            "field": field.as_str(),
            "ranges": ranges,
        }
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
