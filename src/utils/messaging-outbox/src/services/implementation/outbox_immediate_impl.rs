// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{Message, MessageConsumerT, MessageDispatcher, MessageDispatcherT, Outbox, OutboxError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Delivers every posted message to the consumers of its producer before
/// returning. Consumers run one after another in registration order, and the
/// first failure stops the delivery.
pub struct OutboxImmediateImpl {
    dispatchers_by_producer: HashMap<String, Vec<Arc<dyn MessageDispatcher>>>,
}

impl OutboxImmediateImpl {
    pub fn builder() -> OutboxImmediateImplBuilder {
        OutboxImmediateImplBuilder::default()
    }

    pub fn consumer_names(&self, producer_name: &str) -> Vec<&'static str> {
        self.dispatchers_by_producer
            .get(producer_name)
            .map(|dispatchers| dispatchers.iter().map(|d| d.consumer_name()).collect())
            .unwrap_or_default()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct OutboxImmediateImplBuilder {
    dispatchers_by_producer: HashMap<String, Vec<Arc<dyn MessageDispatcher>>>,
}

impl OutboxImmediateImplBuilder {
    pub fn with_consumer<TMessage: Message>(
        mut self,
        producer_name: &str,
        consumer: Arc<dyn MessageConsumerT<TMessage>>,
    ) -> Self {
        self.dispatchers_by_producer
            .entry(producer_name.to_string())
            .or_default()
            .push(Arc::new(MessageDispatcherT::new(consumer)));
        self
    }

    pub fn build(self) -> OutboxImmediateImpl {
        OutboxImmediateImpl {
            dispatchers_by_producer: self.dispatchers_by_producer,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl Outbox for OutboxImmediateImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%producer_name))]
    async fn post_message_as_json(
        &self,
        producer_name: &str,
        content_json: &serde_json::Value,
        version: u32,
    ) -> Result<(), OutboxError> {
        tracing::debug!(content_json = %content_json, "Dispatching outbox message immediately");

        let Some(dispatchers) = self.dispatchers_by_producer.get(producer_name) else {
            tracing::debug!("No consumers registered for producer, dropping message");
            return Ok(());
        };

        let content_json = content_json.to_string();

        for dispatcher in dispatchers {
            let dispatch_result = dispatcher.dispatch_message(&content_json, version).await;
            if let Err(e) = dispatch_result {
                tracing::error!(
                    error = ?e,
                    error_msg = %e,
                    producer_name,
                    consumer_name = dispatcher.consumer_name(),
                    ?content_json,
                    "Immediate outbox message dispatching failed"
                );
                return Err(e);
            }
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
