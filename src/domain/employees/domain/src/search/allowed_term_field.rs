// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::fields;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Index fields that may be used in term filters and term aggregations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllowedTermField {
    Age,
    Designation,
    Gender,
    MaritalStatus,
    Salary,
}

impl AllowedTermField {
    pub const ALL: [AllowedTermField; 5] = [
        Self::Age,
        Self::Designation,
        Self::Gender,
        Self::MaritalStatus,
        Self::Salary,
    ];

    /// Name of the field in the index document
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => fields::AGE,
            Self::Designation => fields::DESIGNATION,
            Self::Gender => fields::GENDER,
            Self::MaritalStatus => fields::MARITAL_STATUS,
            Self::Salary => fields::SALARY,
        }
    }
}

impl FromStr for AllowedTermField {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ArgumentError::new(s))
    }
}

impl TryFrom<&str> for AllowedTermField {
    type Error = ArgumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AllowedTermField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Runs `f` with the parsed field only if `field_name` is in the allowed set.
/// `f` is not invoked at all for rejected names.
pub fn check_term_field<T, F>(field_name: &str, f: F) -> Result<T, ArgumentError>
where
    F: FnOnce(AllowedTermField) -> T,
{
    let field = AllowedTermField::from_str(field_name)?;
    Ok(f(field))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Field '{field}' is not allowed for term filtering")]
pub struct ArgumentError {
    pub field: String,
}

impl ArgumentError {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
