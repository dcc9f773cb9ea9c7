// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use employee_search::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct InMemoryEmployeeRepository {
    state: Arc<Mutex<State>>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
struct State {
    last_employee_id: Option<EmployeeID>,
    employees_by_id: BTreeMap<EmployeeID, Employee>,
}

impl State {
    fn next_employee_id(&mut self) -> EmployeeID {
        let next_employee_id = if let Some(last_employee_id) = self.last_employee_id {
            EmployeeID::new(last_employee_id.as_u64() + 1)
        } else {
            EmployeeID::new(1)
        };
        self.last_employee_id = Some(next_employee_id);
        next_employee_id
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(State::default())),
        }
    }

    pub fn employees_count(&self) -> usize {
        let guard = self.state.lock().unwrap();
        guard.employees_by_id.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create_employee(
        &self,
        record: &EmployeeRecord,
    ) -> Result<Employee, EmployeeRepositoryError> {
        let mut guard = self.state.lock().unwrap();

        let employee = Employee::new(guard.next_employee_id(), record.clone());
        guard.employees_by_id.insert(employee.id, employee.clone());

        Ok(employee)
    }

    async fn update_employee(&self, employee: &Employee) -> Result<(), EmployeeRepositoryError> {
        let mut guard = self.state.lock().unwrap();

        let Some(stored) = guard.employees_by_id.get_mut(&employee.id) else {
            return Err(EmployeeNotFoundError {
                employee_id: employee.id,
            }
            .into());
        };
        stored.record = employee.record.clone();

        Ok(())
    }

    async fn get_employee_by_id(
        &self,
        employee_id: EmployeeID,
    ) -> Result<Employee, EmployeeRepositoryError> {
        let guard = self.state.lock().unwrap();

        guard
            .employees_by_id
            .get(&employee_id)
            .cloned()
            .ok_or_else(|| EmployeeNotFoundError { employee_id }.into())
    }

    async fn delete_employee(&self, employee_id: EmployeeID) -> Result<(), EmployeeRepositoryError> {
        let mut guard = self.state.lock().unwrap();

        if guard.employees_by_id.remove(&employee_id).is_none() {
            return Err(EmployeeNotFoundError { employee_id }.into());
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
