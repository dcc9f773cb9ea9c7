// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::error::Error as _;

use employee_search::*;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn consumer_failure(e: SearchClientError) -> Result<(), messaging_outbox::BoxedError> {
    let boxed: BoxedError = e.into();
    Err(boxed)
}

#[test]
fn test_transport_error_keeps_source() {
    let err = SearchClientError::transport("connection refused");

    assert_eq!(err.to_string(), "Search engine transport failure");
    assert_eq!(
        err.source().map(ToString::to_string).as_deref(),
        Some("connection refused")
    );
    assert!(!err.is_not_found());
}

#[test]
fn test_client_errors_surface_through_consumers() {
    let err = consumer_failure(SearchClientError::not_found(DEFAULT_INDEX_NAME, "7")).unwrap_err();

    assert_eq!(err.to_string(), "Document '7' not found in index 'employees'");
    assert!(
        err.downcast_ref::<SearchClientError>()
            .is_some_and(SearchClientError::is_not_found)
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
