// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::Employee;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_INDEX_NAME: &str = "employees";

pub mod fields {
    pub const FIRST_NAME: &str = "FirstName";
    pub const LAST_NAME: &str = "LastName";
    pub const ADDRESS: &str = "Address";
    pub const MARITAL_STATUS: &str = "MaritalStatus";
    pub const GENDER: &str = "Gender";
    pub const SALARY: &str = "Salary";
    pub const AGE: &str = "Age";
    pub const INTERESTS: &str = "Interests";
    pub const DATE_OF_JOINING: &str = "DateOfJoining";
    pub const DESIGNATION: &str = "Designation";

    pub const ALL: [&str; 10] = [
        FIRST_NAME,
        LAST_NAME,
        ADDRESS,
        MARITAL_STATUS,
        GENDER,
        SALARY,
        AGE,
        INTERESTS,
        DATE_OF_JOINING,
        DESIGNATION,
    ];
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Document id of an employee in the index
pub fn employee_document_id(employee: &Employee) -> String {
    employee.id.to_string()
}

/// Flat field mapping stored in the index for an employee
pub fn employee_search_document(employee: &Employee) -> serde_json::Value {
    let record = &employee.record;

    serde_json::json!({
        fields::FIRST_NAME: record.first_name,
        fields::LAST_NAME: record.last_name,
        fields::ADDRESS: record.address,
        fields::MARITAL_STATUS: record.marital_status.as_str(),
        fields::GENDER: record.gender.as_str(),
        fields::SALARY: record.salary,
        fields::AGE: record.age,
        fields::INTERESTS: record.interests,
        fields::DATE_OF_JOINING: record.date_of_joining.format("%Y-%m-%d").to_string(),
        fields::DESIGNATION: record.designation,
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
