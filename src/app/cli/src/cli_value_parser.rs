// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Numbers, booleans and quoted strings are taken as JSON, anything else
/// becomes a plain string
pub(crate) fn value_parse_term_value(s: &str) -> Result<serde_json::Value, String> {
    if s.is_empty() {
        return Err("Term value must not be empty".to_string());
    }

    match serde_json::from_str::<serde_json::Value>(s) {
        Ok(value @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => Err(format!(
            "Term value must be a scalar, got: {value}"
        )),
        Ok(serde_json::Value::Null) => Err("Term value must not be null".to_string()),
        Ok(value) => Ok(value),
        Err(_) => Ok(serde_json::Value::String(s.to_string())),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
