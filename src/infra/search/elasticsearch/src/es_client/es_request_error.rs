// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use employee_search::SearchClientError;

use super::error_reason;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// What a failed request was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestTarget<'a> {
    /// Cluster-wide or index-wide endpoints: health, search
    Cluster,

    /// Single document endpoints: update, delete, get
    Document { index: &'a str, id: &'a str },
}

/// Maps a non-2xx status and its body to a client error. A 404 on a
/// document endpoint means the document is missing, anything else is a
/// rejection carrying the server reason.
pub fn request_error(target: RequestTarget<'_>, status: u16, body: &str) -> SearchClientError {
    match target {
        RequestTarget::Document { index, id } if status == 404 => {
            SearchClientError::not_found(index, id)
        }
        RequestTarget::Document { .. } | RequestTarget::Cluster => SearchClientError::Rejected {
            status,
            reason: error_reason(body),
        },
    }
}

/// Reads of a missing document succeed with `None`
pub fn missing_as_none<T>(
    result: Result<T, SearchClientError>,
) -> Result<Option<T>, SearchClientError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
