// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, serde::Deserialize)]
struct ErrorResponse {
    error: ErrorCause,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum ErrorCause {
    Structured {
        #[serde(rename = "type")]
        error_type: String,
        reason: Option<String>,
    },
    Plain(String),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Human-readable reason of a failed request. Falls back to the raw body
/// when it is not a standard Elasticsearch error object.
pub fn error_reason(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse {
            error:
                ErrorCause::Structured {
                    error_type,
                    reason: Some(reason),
                },
        }) => format!("{error_type}: {reason}"),
        Ok(ErrorResponse {
            error: ErrorCause::Structured { error_type, .. },
        }) => error_type,
        Ok(ErrorResponse {
            error: ErrorCause::Plain(reason),
        }) => reason,
        Err(_) => body.trim().to_string(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
