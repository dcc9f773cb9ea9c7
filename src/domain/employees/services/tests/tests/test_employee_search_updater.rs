// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use assert_matches::assert_matches;
use employee_search::*;
use employee_search_inmem::InMemorySearchClient;
use employee_search_services::EmployeeSearchUpdater;
use messaging_outbox::{MessageConsumer, MessageConsumerT};
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_upsert_twice_keeps_latest_values() {
    let harness = EmployeeSearchUpdaterHarness::new();

    let mut employee = Employee::new(EmployeeID::new(1), EmployeeRecord::test("Ada", "Lovelace"));
    harness.updater.upsert(&employee).await.unwrap();

    employee.record.salary = 75_000;
    employee.record.designation = "Principal Engineer".to_string();
    employee.record.marital_status = MaritalStatus::Married;
    harness.updater.upsert(&employee).await.unwrap();

    assert_eq!(harness.search_client.documents_in_index(DEFAULT_INDEX_NAME), 1);
    assert_eq!(
        harness.indexed_document("1").await,
        Some(employee_search_document(&employee))
    );

    let document = harness.indexed_document("1").await.unwrap();
    assert_eq!(document[fields::SALARY], 75_000);
    assert_eq!(document[fields::DESIGNATION], "Principal Engineer");
    assert_eq!(document[fields::MARITAL_STATUS], "married");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_upsert_sends_doc_as_upsert() {
    let employee = Employee::new(EmployeeID::new(12), EmployeeRecord::test("Ada", "Lovelace"));
    let expected_body = serde_json::json!({
        "doc": employee_search_document(&employee),
        "doc_as_upsert": true,
    });

    let mut search_client = MockSearchClient::new();
    search_client
        .expect_update_document()
        .times(1)
        .withf(move |index, id, body| {
            index == DEFAULT_INDEX_NAME && id == "12" && *body == expected_body
        })
        .returning(|_, _, _| Ok(serde_json::json!({ "result": "created" })));

    let updater = EmployeeSearchUpdater::new(
        Arc::new(search_client),
        Arc::new(EmployeeSearchConfig::default()),
    );

    let response = updater.upsert(&employee).await.unwrap();
    assert_eq!(response, serde_json::json!({ "result": "created" }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_delete_removes_document() {
    let harness = EmployeeSearchUpdaterHarness::new();

    let employee = Employee::new(EmployeeID::new(3), EmployeeRecord::test("Ada", "Lovelace"));
    harness.updater.upsert(&employee).await.unwrap();

    let response = harness.updater.delete(employee.id).await.unwrap();
    assert_eq!(response["result"], "deleted");
    assert_eq!(harness.indexed_document("3").await, None);
}

#[test_log::test(tokio::test)]
async fn test_delete_missing_surfaces_not_found() {
    let harness = EmployeeSearchUpdaterHarness::new();

    assert_matches!(
        harness.updater.delete(EmployeeID::new(404)).await,
        Err(SearchClientError::NotFound { index, id })
            if index == DEFAULT_INDEX_NAME && id == "404"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_consumes_lifecycle_messages() {
    let harness = EmployeeSearchUpdaterHarness::new();
    assert_eq!(
        harness.updater.consumer_name(),
        MESSAGE_CONSUMER_EMPLOYEE_SEARCH_UPDATER
    );

    let employee = Employee::new(EmployeeID::new(8), EmployeeRecord::test("Grace", "Hopper"));

    harness
        .updater
        .consume_message(&EmployeeLifecycleMessage::saved(employee.clone()))
        .await
        .unwrap();
    assert_eq!(
        harness.indexed_document("8").await,
        Some(employee_search_document(&employee))
    );

    harness
        .updater
        .consume_message(&EmployeeLifecycleMessage::deleted(employee.id))
        .await
        .unwrap();
    assert_eq!(harness.indexed_document("8").await, None);

    // A second delete reaches the client and fails there
    let res = harness
        .updater
        .consume_message(&EmployeeLifecycleMessage::deleted(employee.id))
        .await;
    assert!(res.is_err());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Harness
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct EmployeeSearchUpdaterHarness {
    search_client: Arc<InMemorySearchClient>,
    updater: EmployeeSearchUpdater,
}

impl EmployeeSearchUpdaterHarness {
    fn new() -> Self {
        let search_client = Arc::new(InMemorySearchClient::new());
        let updater = EmployeeSearchUpdater::new(
            search_client.clone(),
            Arc::new(EmployeeSearchConfig::default()),
        );

        Self {
            search_client,
            updater,
        }
    }

    async fn indexed_document(&self, id: &str) -> Option<serde_json::Value> {
        self.search_client
            .get_document(DEFAULT_INDEX_NAME, id)
            .await
            .unwrap()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
