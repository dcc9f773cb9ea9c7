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
use messaging_outbox::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Keeps the index document of an employee in line with the stored record
pub struct EmployeeSearchUpdater {
    search_client: Arc<dyn SearchClient>,
    config: Arc<EmployeeSearchConfig>,
}

impl EmployeeSearchUpdater {
    pub fn new(search_client: Arc<dyn SearchClient>, config: Arc<EmployeeSearchConfig>) -> Self {
        Self {
            search_client,
            config,
        }
    }

    #[tracing::instrument(level = "debug", skip_all, fields(employee_id = %employee.id))]
    pub async fn upsert(&self, employee: &Employee) -> Result<serde_json::Value, SearchClientError> {
        let body = serde_json::json!({
            "doc": employee_search_document(employee),
            "doc_as_upsert": true,
        });

        tracing::debug!(index = %self.config.index_name, "Upserting employee document");

        self.search_client
            .update_document(
                &self.config.index_name,
                &employee_document_id(employee),
                body,
            )
            .await
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%employee_id))]
    pub async fn delete(
        &self,
        employee_id: EmployeeID,
    ) -> Result<serde_json::Value, SearchClientError> {
        tracing::debug!(index = %self.config.index_name, "Deleting employee document");

        self.search_client
            .delete_document(&self.config.index_name, &employee_id.to_string())
            .await
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl MessageConsumer for EmployeeSearchUpdater {
    fn consumer_name(&self) -> &'static str {
        MESSAGE_CONSUMER_EMPLOYEE_SEARCH_UPDATER
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl MessageConsumerT<EmployeeLifecycleMessage> for EmployeeSearchUpdater {
    #[tracing::instrument(
        level = "debug",
        skip_all,
        name = "EmployeeSearchUpdater[EmployeeLifecycleMessage]"
    )]
    async fn consume_message(
        &self,
        message: &EmployeeLifecycleMessage,
    ) -> Result<(), messaging_outbox::BoxedError> {
        tracing::debug!(received_message = ?message, "Received employee lifecycle message");

        match message {
            EmployeeLifecycleMessage::Saved(saved_message) => {
                self.upsert(&saved_message.employee).await?;
            }
            EmployeeLifecycleMessage::Deleted(deleted_message) => {
                self.delete(deleted_message.employee_id).await?;
            }
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
