// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use messaging_outbox::*;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const TEST_PRODUCER_A: &str = "TEST-PRODUCER-A";
const TEST_PRODUCER_B: &str = "TEST-PRODUCER-B";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct TestMessage {
    body: String,
}

impl TestMessage {
    fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
        }
    }
}

impl Message for TestMessage {
    fn version() -> u32 {
        1
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_immediate_outbox_delivers_to_registered_consumer() {
    let consumer = Arc::new(TestMessageConsumer::new("consumer-a"));

    let outbox = OutboxImmediateImpl::builder()
        .with_consumer::<TestMessage>(TEST_PRODUCER_A, consumer.clone())
        .build();

    outbox
        .post_message(TEST_PRODUCER_A, TestMessage::new("foo"))
        .await
        .unwrap();
    outbox
        .post_message(TEST_PRODUCER_A, TestMessage::new("bar"))
        .await
        .unwrap();

    assert_eq!(
        consumer.captured_messages(),
        vec![TestMessage::new("foo"), TestMessage::new("bar")]
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_immediate_outbox_routes_by_producer() {
    let consumer_a = Arc::new(TestMessageConsumer::new("consumer-a"));
    let consumer_b = Arc::new(TestMessageConsumer::new("consumer-b"));

    let outbox = OutboxImmediateImpl::builder()
        .with_consumer::<TestMessage>(TEST_PRODUCER_A, consumer_a.clone())
        .with_consumer::<TestMessage>(TEST_PRODUCER_B, consumer_b.clone())
        .build();

    outbox
        .post_message(TEST_PRODUCER_B, TestMessage::new("for-b"))
        .await
        .unwrap();

    assert!(consumer_a.captured_messages().is_empty());
    assert_eq!(consumer_b.captured_messages(), vec![TestMessage::new("for-b")]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_immediate_outbox_drops_messages_without_consumers() {
    let outbox = OutboxImmediateImpl::builder().build();

    let res = outbox
        .post_message(TEST_PRODUCER_A, TestMessage::new("nobody listens"))
        .await;

    assert_matches!(res, Ok(()));
    assert!(outbox.consumer_names(TEST_PRODUCER_A).is_empty());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_immediate_outbox_rejects_version_mismatch() {
    let consumer = Arc::new(TestMessageConsumer::new("consumer-a"));

    let outbox = OutboxImmediateImpl::builder()
        .with_consumer::<TestMessage>(TEST_PRODUCER_A, consumer.clone())
        .build();

    let res = outbox
        .post_message_as_json(TEST_PRODUCER_A, &serde_json::json!({ "body": "foo" }), 2)
        .await;

    assert_matches!(
        res,
        Err(OutboxError::VersionMismatch {
            consumer_name: "consumer-a",
            expected: 1,
            actual: 2,
        })
    );
    assert!(consumer.captured_messages().is_empty());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_immediate_outbox_stops_on_first_failing_consumer() {
    let failing = Arc::new(TestMessageConsumer::failing("consumer-failing"));
    let next = Arc::new(TestMessageConsumer::new("consumer-next"));

    let outbox = OutboxImmediateImpl::builder()
        .with_consumer::<TestMessage>(TEST_PRODUCER_A, failing.clone())
        .with_consumer::<TestMessage>(TEST_PRODUCER_A, next.clone())
        .build();

    assert_eq!(
        outbox.consumer_names(TEST_PRODUCER_A),
        vec!["consumer-failing", "consumer-next"]
    );

    let res = outbox
        .post_message(TEST_PRODUCER_A, TestMessage::new("boom"))
        .await;

    assert_matches!(
        res,
        Err(OutboxError::Consumer {
            consumer_name: "consumer-failing",
            ..
        })
    );
    assert!(next.captured_messages().is_empty());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, thiserror::Error)]
#[error("Consumer refused the message")]
struct TestConsumerError;

struct TestMessageConsumer {
    name: &'static str,
    fail: bool,
    captured_messages: Mutex<Vec<TestMessage>>,
}

impl TestMessageConsumer {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            fail: false,
            captured_messages: Mutex::new(Vec::new()),
        }
    }

    fn failing(name: &'static str) -> Self {
        Self {
            fail: true,
            ..Self::new(name)
        }
    }

    fn captured_messages(&self) -> Vec<TestMessage> {
        self.captured_messages.lock().unwrap().clone()
    }
}

impl MessageConsumer for TestMessageConsumer {
    fn consumer_name(&self) -> &'static str {
        self.name
    }
}

#[async_trait::async_trait]
impl MessageConsumerT<TestMessage> for TestMessageConsumer {
    async fn consume_message(&self, message: &TestMessage) -> Result<(), BoxedError> {
        if self.fail {
            return Err(Box::new(TestConsumerError));
        }
        self.captured_messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
