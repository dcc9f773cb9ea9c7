// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use employee_search::*;
use serde_json::Value;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const DEFAULT_SEARCH_SIZE: usize = 10;
const DEFAULT_TERMS_SIZE: usize = 10;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Evaluates the subset of the Elasticsearch query language produced by
/// [`SearchQuery`]: `match_all`, `term` and `bool` queries, `from`, `size`
/// and `sort`, plus `terms` and `range` aggregations.
pub struct InMemorySearchClient {
    state: Arc<Mutex<State>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    indices: HashMap<String, BTreeMap<String, StoredDocument>>,
}

struct StoredDocument {
    source: serde_json::Map<String, Value>,
    version: u64,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl InMemorySearchClient {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn documents_in_index(&self, index: &str) -> usize {
        let guard = self.state.lock().unwrap();
        guard.indices.get(index).map_or(0, BTreeMap::len)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl SearchClient for InMemorySearchClient {
    async fn health(&self) -> Result<Value, SearchClientError> {
        let guard = self.state.lock().unwrap();

        Ok(serde_json::json!({
            "cluster_name": "in-memory",
            "status": "green",
            "number_of_nodes": 1,
            "active_primary_shards": guard.indices.len(),
        }))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %id))]
    async fn update_document(
        &self,
        index: &str,
        id: &str,
        body: Value,
    ) -> Result<Value, SearchClientError> {
        let Some(doc) = body.get("doc").and_then(Value::as_object) else {
            return Err(rejected("Validation Failed: 1: script or doc is missing;"));
        };
        let doc_as_upsert = body
            .get("doc_as_upsert")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        let mut guard = self.state.lock().unwrap();
        let documents = guard.indices.entry(index.to_string()).or_default();

        let (version, result) = if let Some(stored) = documents.get_mut(id) {
            let mut changed = false;
            for (key, value) in doc {
                if stored.source.get(key) != Some(value) {
                    stored.source.insert(key.clone(), value.clone());
                    changed = true;
                }
            }

            if changed {
                stored.version += 1;
                (stored.version, "updated")
            } else {
                (stored.version, "noop")
            }
        } else if doc_as_upsert {
            documents.insert(
                id.to_string(),
                StoredDocument {
                    source: doc.clone(),
                    version: 1,
                },
            );
            (1, "created")
        } else {
            return Err(SearchClientError::not_found(index, id));
        };

        Ok(serde_json::json!({
            "_index": index,
            "_id": id,
            "_version": version,
            "result": result,
        }))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index, %id))]
    async fn delete_document(&self, index: &str, id: &str) -> Result<Value, SearchClientError> {
        let mut guard = self.state.lock().unwrap();

        let Some(stored) = guard
            .indices
            .get_mut(index)
            .and_then(|documents| documents.remove(id))
        else {
            return Err(SearchClientError::not_found(index, id));
        };

        Ok(serde_json::json!({
            "_index": index,
            "_id": id,
            "_version": stored.version + 1,
            "result": "deleted",
        }))
    }

    async fn get_document(&self, index: &str, id: &str) -> Result<Option<Value>, SearchClientError> {
        let guard = self.state.lock().unwrap();

        Ok(guard
            .indices
            .get(index)
            .and_then(|documents| documents.get(id))
            .map(|stored| Value::Object(stored.source.clone())))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%index))]
    async fn search(&self, index: &str, body: Value) -> Result<SearchResponse, SearchClientError> {
        let guard = self.state.lock().unwrap();

        let Some(documents) = guard.indices.get(index) else {
            return Err(SearchClientError::Rejected {
                status: 404,
                reason: format!("index_not_found_exception: no such index [{index}]"),
            });
        };

        let query = body
            .get("query")
            .cloned()
            .unwrap_or_else(|| serde_json::json!({ "match_all": {} }));

        let mut matched = Vec::new();
        for (id, stored) in documents {
            if query_matches(&query, &stored.source)? {
                matched.push((id, stored));
            }
        }

        if let Some(sort) = body.get("sort") {
            let sort_keys = parse_sort(sort)?;
            matched.sort_by(|(_, a), (_, b)| {
                for (field, descending) in &sort_keys {
                    let ordering = compare_values(a.source.get(field), b.source.get(field));
                    let ordering = if *descending {
                        ordering.reverse()
                    } else {
                        ordering
                    };
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                Ordering::Equal
            });
        }

        let aggregations = match body.get("aggs").or_else(|| body.get("aggregations")) {
            Some(aggs) => {
                let sources: Vec<_> = matched.iter().map(|(_, stored)| &stored.source).collect();
                Some(evaluate_aggregations(aggs, &sources)?)
            }
            None => None,
        };

        let from = usize_argument(&body, "from")?.unwrap_or(0);
        let size = usize_argument(&body, "size")?.unwrap_or(DEFAULT_SEARCH_SIZE);

        let hits = matched
            .iter()
            .skip(from)
            .take(size)
            .map(|(id, stored)| SearchHit {
                index: index.to_string(),
                id: (*id).clone(),
                score: Some(1.0),
                source: Value::Object(stored.source.clone()),
            })
            .collect();

        Ok(SearchResponse {
            took_ms: 0,
            timed_out: false,
            total_hits: Some(matched.len() as u64),
            hits,
            aggregations,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Query evaluation
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn query_matches(
    query: &Value,
    source: &serde_json::Map<String, Value>,
) -> Result<bool, SearchClientError> {
    let Some((kind, argument)) = single_entry(query) else {
        return Err(rejected(format!("Malformed query: {query}")));
    };

    match kind.as_str() {
        "match_all" => Ok(true),
        "term" => {
            let Some((field, expected)) = single_entry(argument) else {
                return Err(rejected(format!("Malformed term query: {argument}")));
            };
            // Both `{"F": v}` and `{"F": {"value": v}}` forms
            let expected = expected.get("value").unwrap_or(expected);
            Ok(source.get(field) == Some(expected))
        }
        "bool" => {
            for clause in ["must", "filter"] {
                for sub_query in clauses(argument.get(clause)) {
                    if !query_matches(sub_query, source)? {
                        return Ok(false);
                    }
                }
            }
            for sub_query in clauses(argument.get("must_not")) {
                if query_matches(sub_query, source)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        other => Err(rejected(format!("Unsupported query type: {other}"))),
    }
}

fn clauses(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}

fn parse_sort(sort: &Value) -> Result<Vec<(String, bool)>, SearchClientError> {
    clauses(Some(sort))
        .into_iter()
        .map(|entry| match entry {
            Value::String(field) => Ok((field.clone(), false)),
            _ => {
                let Some((field, order)) = single_entry(entry) else {
                    return Err(rejected(format!("Malformed sort: {entry}")));
                };
                let order = order.get("order").unwrap_or(order);
                Ok((field.clone(), order.as_str() == Some("desc")))
            }
        })
        .collect()
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let (a, b) = (a.as_f64().unwrap_or(0.0), b.as_f64().unwrap_or(0.0));
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        // Missing values go last
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Aggregations
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn evaluate_aggregations(
    aggs: &Value,
    sources: &[&serde_json::Map<String, Value>],
) -> Result<AggregationsMap, SearchClientError> {
    let Some(aggs) = aggs.as_object() else {
        return Err(rejected(format!("Malformed aggregations: {aggs}")));
    };

    let mut results = AggregationsMap::new();
    for (name, aggregation) in aggs {
        let Some((kind, argument)) = single_entry(aggregation) else {
            return Err(rejected(format!("Malformed aggregation [{name}]")));
        };
        let Some(field) = argument.get("field").and_then(Value::as_str) else {
            return Err(rejected(format!("Aggregation [{name}] is missing a field")));
        };

        let result = match kind.as_str() {
            "terms" => {
                let size = usize_argument(argument, "size")?.unwrap_or(DEFAULT_TERMS_SIZE);
                terms_aggregation_result(field, size, sources)
            }
            "range" => {
                let ranges = clauses(argument.get("ranges"));
                range_aggregation_result(field, &ranges, sources)?
            }
            other => {
                return Err(rejected(format!("Unsupported aggregation type: {other}")));
            }
        };

        results.insert(name.clone(), result);
    }

    Ok(results)
}

fn terms_aggregation_result(
    field: &str,
    size: usize,
    sources: &[&serde_json::Map<String, Value>],
) -> Value {
    let mut counts: Vec<(Value, u64)> = Vec::new();
    for value in sources.iter().filter_map(|source| source.get(field)) {
        if let Some((_, count)) = counts.iter_mut().find(|(key, _)| key == value) {
            *count += 1;
        } else {
            counts.push((value.clone(), 1));
        }
    }

    counts.sort_by(|(key_a, count_a), (key_b, count_b)| {
        count_b
            .cmp(count_a)
            .then_with(|| compare_values(Some(key_a), Some(key_b)))
    });

    let sum_other_doc_count: u64 = counts.iter().skip(size).map(|(_, count)| count).sum();
    let buckets: Vec<_> = counts
        .into_iter()
        .take(size)
        .map(|(key, doc_count)| serde_json::json!({ "key": key, "doc_count": doc_count }))
        .collect();

    serde_json::json!({
        "doc_count_error_upper_bound": 0,
        "sum_other_doc_count": sum_other_doc_count,
        "buckets": buckets,
    })
}

fn range_aggregation_result(
    field: &str,
    ranges: &[&Value],
    sources: &[&serde_json::Map<String, Value>],
) -> Result<Value, SearchClientError> {
    let values: Vec<f64> = sources
        .iter()
        .filter_map(|source| source.get(field).and_then(Value::as_f64))
        .collect();

    let mut buckets = Vec::with_capacity(ranges.len());
    for range in ranges {
        let from = range.get("from").and_then(Value::as_f64);
        let to = range.get("to").and_then(Value::as_f64);
        if from.is_none() && to.is_none() {
            return Err(rejected(format!("Range [{range}] has no bounds")));
        }

        // Lower bound is inclusive, upper bound is exclusive
        let doc_count = values
            .iter()
            .filter(|v| from.is_none_or(|from| **v >= from) && to.is_none_or(|to| **v < to))
            .count();

        let mut bucket = serde_json::json!({
            "key": format!("{}-{}", range_bound_key(from), range_bound_key(to)),
            "doc_count": doc_count,
        });
        if let Some(from) = from {
            bucket["from"] = serde_json::json!(from);
        }
        if let Some(to) = to {
            bucket["to"] = serde_json::json!(to);
        }
        buckets.push(bucket);
    }

    Ok(serde_json::json!({ "buckets": buckets }))
}

fn range_bound_key(bound: Option<f64>) -> String {
    match bound {
        Some(bound) => format!("{bound:?}"),
        None => "*".to_string(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Helpers
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn single_entry(value: &Value) -> Option<(&String, &Value)> {
    let object = value.as_object()?;
    if object.len() != 1 {
        return None;
    }
    object.iter().next()
}

fn usize_argument(value: &Value, name: &str) -> Result<Option<usize>, SearchClientError> {
    match value.get(name) {
        None => Ok(None),
        Some(argument) => argument
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| rejected(format!("Invalid [{name}] argument: {argument}"))),
    }
}

fn rejected(reason: impl Into<String>) -> SearchClientError {
    SearchClientError::Rejected {
        status: 400,
        reason: reason.into(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
