// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use assert_matches::assert_matches;
use employee_search::*;
use employee_search_inmem::InMemorySearchClient;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const INDEX: &str = "employees";

async fn index_documents(client: &InMemorySearchClient, docs: &[(&str, serde_json::Value)]) {
    for (id, doc) in docs {
        client
            .update_document(
                INDEX,
                id,
                serde_json::json!({ "doc": doc, "doc_as_upsert": true }),
            )
            .await
            .unwrap();
    }
}

async fn harness() -> InMemorySearchClient {
    let client = InMemorySearchClient::new();
    index_documents(
        &client,
        &[
            (
                "1",
                serde_json::json!({ fields::GENDER: "F", fields::AGE: 25, fields::SALARY: 40_000 }),
            ),
            (
                "2",
                serde_json::json!({ fields::GENDER: "M", fields::AGE: 35, fields::SALARY: 80_000 }),
            ),
            (
                "3",
                serde_json::json!({ fields::GENDER: "F", fields::AGE: 45, fields::SALARY: 120_000 }),
            ),
        ],
    )
    .await;
    client
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_upsert_then_partial_update() {
    let client = InMemorySearchClient::new();

    let created = client
        .update_document(
            INDEX,
            "1",
            serde_json::json!({ "doc": { "A": 1, "B": 2 }, "doc_as_upsert": true }),
        )
        .await
        .unwrap();
    assert_eq!(created["result"], "created");
    assert_eq!(created["_version"], 1);

    let updated = client
        .update_document(INDEX, "1", serde_json::json!({ "doc": { "B": 3 } }))
        .await
        .unwrap();
    assert_eq!(updated["result"], "updated");
    assert_eq!(updated["_version"], 2);

    let noop = client
        .update_document(INDEX, "1", serde_json::json!({ "doc": { "B": 3 } }))
        .await
        .unwrap();
    assert_eq!(noop["result"], "noop");

    assert_eq!(
        client.get_document(INDEX, "1").await.unwrap(),
        Some(serde_json::json!({ "A": 1, "B": 3 }))
    );
}

#[test_log::test(tokio::test)]
async fn test_update_without_upsert_requires_document() {
    let client = InMemorySearchClient::new();

    assert_matches!(
        client
            .update_document(INDEX, "1", serde_json::json!({ "doc": { "A": 1 } }))
            .await,
        Err(SearchClientError::NotFound { index, id }) if index == INDEX && id == "1"
    );
    assert_matches!(
        client
            .update_document(INDEX, "1", serde_json::json!({ "script": "noop" }))
            .await,
        Err(SearchClientError::Rejected { status: 400, .. })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_delete_document() {
    let client = harness().await;

    let res = client.delete_document(INDEX, "2").await.unwrap();
    assert_eq!(res["result"], "deleted");
    assert_eq!(client.documents_in_index(INDEX), 2);
    assert_eq!(client.get_document(INDEX, "2").await.unwrap(), None);

    assert_matches!(
        client.delete_document(INDEX, "2").await,
        Err(e) if e.is_not_found()
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_term_filter_search() {
    let client = harness().await;

    let body = SearchQuery::new()
        .with_term_filter(AllowedTermField::Gender, "F")
        .with_sort(fields::AGE, SortOrder::Desc)
        .to_request_body();

    let response = client.search(INDEX, body).await.unwrap();

    assert_eq!(response.total_hits, Some(2));
    assert_eq!(
        response.hits.iter().map(|h| h.id.as_str()).collect::<Vec<_>>(),
        vec!["3", "1"]
    );
    assert_eq!(response.aggregations, None);
}

#[test_log::test(tokio::test)]
async fn test_from_and_size() {
    let client = harness().await;

    let body = SearchQuery::new().with_from(1).with_size(1).to_request_body();
    let response = client.search(INDEX, body).await.unwrap();

    assert_eq!(response.total_hits, Some(3));
    assert_eq!(response.hits.len(), 1);
    assert_eq!(response.hits[0].id, "2");
}

#[test_log::test(tokio::test)]
async fn test_search_unknown_index_or_query() {
    let client = harness().await;

    assert_matches!(
        client
            .search("missing", SearchQuery::new().to_request_body())
            .await,
        Err(SearchClientError::Rejected { status: 404, .. })
    );
    assert_matches!(
        client
            .search(INDEX, serde_json::json!({ "query": { "fuzzy": {} } }))
            .await,
        Err(SearchClientError::Rejected { status: 400, .. })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_terms_aggregation() {
    let client = harness().await;

    let body = SearchQuery::for_aggregations()
        .with_aggregation("genders", terms_aggregation(AllowedTermField::Gender))
        .to_request_body();
    let response = client.search(INDEX, body).await.unwrap();

    assert!(response.hits.is_empty());
    assert_eq!(
        serde_json::Value::Object(response.aggregations.unwrap()),
        serde_json::json!({
            "genders": {
                "doc_count_error_upper_bound": 0,
                "sum_other_doc_count": 0,
                "buckets": [
                    { "key": "F", "doc_count": 2 },
                    { "key": "M", "doc_count": 1 },
                ]
            }
        })
    );
}

#[test_log::test(tokio::test)]
async fn test_range_aggregation() {
    let client = harness().await;

    let ranges =
        create_range_buckets_with(30, 50, 10, RangeBucketBounds::Stepped).unwrap();
    let body = SearchQuery::for_aggregations()
        .with_aggregation("ages", range_aggregation(AllowedTermField::Age, &ranges))
        .to_request_body();
    let response = client.search(INDEX, body).await.unwrap();

    assert_eq!(
        serde_json::Value::Object(response.aggregations.unwrap()),
        serde_json::json!({
            "ages": {
                "buckets": [
                    { "key": "*-30.0", "to": 30.0, "doc_count": 1 },
                    { "key": "30.0-40.0", "from": 30.0, "to": 40.0, "doc_count": 1 },
                    { "key": "40.0-50.0", "from": 40.0, "to": 50.0, "doc_count": 1 },
                    { "key": "50.0-*", "from": 50.0, "doc_count": 0 },
                ]
            }
        })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
