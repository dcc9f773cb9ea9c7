// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use crate::{Message, MessageConsumerT, OutboxError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Type-erased bridge between JSON content in the outbox and a consumer of a
/// concrete message type
#[async_trait::async_trait]
pub(crate) trait MessageDispatcher: Send + Sync {
    fn consumer_name(&self) -> &'static str;

    async fn dispatch_message(&self, content_json: &str, version: u32) -> Result<(), OutboxError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) struct MessageDispatcherT<TMessage: Message> {
    consumer: Arc<dyn MessageConsumerT<TMessage>>,
}

impl<TMessage: Message> MessageDispatcherT<TMessage> {
    pub(crate) fn new(consumer: Arc<dyn MessageConsumerT<TMessage>>) -> Self {
        Self { consumer }
    }
}

#[async_trait::async_trait]
impl<TMessage: Message> MessageDispatcher for MessageDispatcherT<TMessage> {
    fn consumer_name(&self) -> &'static str {
        self.consumer.consumer_name()
    }

    async fn dispatch_message(&self, content_json: &str, version: u32) -> Result<(), OutboxError> {
        if version != TMessage::version() {
            return Err(OutboxError::VersionMismatch {
                consumer_name: self.consumer_name(),
                expected: TMessage::version(),
                actual: version,
            });
        }

        let message: TMessage = serde_json::from_str(content_json)?;

        self.consumer
            .consume_message(&message)
            .await
            .map_err(|source| OutboxError::Consumer {
                consumer_name: self.consumer_name(),
                source,
            })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
