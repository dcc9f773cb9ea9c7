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

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Identifier assigned to an employee by the persistence layer. The same value
/// identifies the employee's document in the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeID(u64);

impl EmployeeID {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EmployeeID {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for EmployeeID {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for EmployeeID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Married,
    Unmarried,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Married => "married",
            Self::Unmarried => "unmarried",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "F",
            Self::Male => "M",
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Attributes of an employee, as written by the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub marital_status: MaritalStatus,
    pub gender: Gender,
    pub salary: i64,
    pub age: i16,
    pub interests: String,
    pub date_of_joining: NaiveDate,
    pub designation: String,
}

#[cfg(any(feature = "testing", test))]
impl EmployeeRecord {
    pub fn test(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: "221B Baker Street".to_string(),
            marital_status: MaritalStatus::Unmarried,
            gender: Gender::Female,
            salary: 64_000,
            age: 30,
            interests: "Hiking, chess".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            designation: "Software Engineer".to_string(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeID,

    #[serde(flatten)]
    pub record: EmployeeRecord,
}

impl Employee {
    pub fn new(id: EmployeeID, record: EmployeeRecord) -> Self {
        Self { id, record }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.record.first_name, self.record.last_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.record.first_name, self.record.last_name)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
