// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum OutboxError {
    #[error("Outbox message could not be (de)serialized")]
    Serialization(#[from] serde_json::Error),

    #[error(
        "Consumer '{consumer_name}' expects message version {expected}, but received version {actual}"
    )]
    VersionMismatch {
        consumer_name: &'static str,
        expected: u32,
        actual: u32,
    },

    #[error("Consumer '{consumer_name}' failed to handle message")]
    Consumer {
        consumer_name: &'static str,
        #[source]
        source: BoxedError,
    },
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
