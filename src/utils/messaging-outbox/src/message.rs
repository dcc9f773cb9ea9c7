// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Content posted to the outbox. Messages travel as JSON, tagged with the
/// version of their shape, and are restored into the consumer's type on
/// delivery.
pub trait Message: Clone + Serialize + DeserializeOwned + Debug + Send + Sync + 'static {
    fn version() -> u32;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
