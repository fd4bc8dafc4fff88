#![cfg(test)]
//! In-memory upstream that records every call it receives.

use std::sync::Mutex;

use async_trait::async_trait;
use models::{CreateEmployeeInput, Employee};

use crate::employee::upstream::EmployeeUpstream;
use crate::errors::UpstreamError;

pub fn employee(id: &str, name: &str, salary: i64) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        salary,
        age: 30,
        title: "Engineer".to_string(),
        email: None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchAll,
    FetchOne(String),
    Create(CreateEmployeeInput),
    DeleteByName(String),
}

/// Scripted fake. Reads fail with `failure` while `employees` is `None`.
pub struct FakeUpstream {
    pub employees: Mutex<Option<Vec<Employee>>>,
    pub fetch_one_error: Option<UpstreamError>,
    pub create_result: Option<Result<Employee, UpstreamError>>,
    pub delete_error: Option<UpstreamError>,
    pub failure: UpstreamError,
    calls: Mutex<Vec<Call>>,
}

impl FakeUpstream {
    pub fn with(employees: Vec<Employee>) -> Self {
        Self {
            employees: Mutex::new(Some(employees)),
            fetch_one_error: None,
            create_result: None,
            delete_error: None,
            failure: UpstreamError::Transport("connection refused".into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every read fails.
    pub fn down(failure: UpstreamError) -> Self {
        let mut fake = Self::with(Vec::new());
        fake.employees = Mutex::new(None);
        fake.fetch_one_error = Some(failure.clone());
        fake.failure = failure;
        fake
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn snapshot(&self) -> Option<Vec<Employee>> {
        self.employees.lock().ok().and_then(|e| e.clone())
    }
}

#[async_trait]
impl EmployeeUpstream for FakeUpstream {
    async fn fetch_all(&self) -> Result<Vec<Employee>, UpstreamError> {
        self.record(Call::FetchAll);
        self.snapshot().ok_or_else(|| self.failure.clone())
    }

    async fn fetch_one(&self, id: &str) -> Result<Option<Employee>, UpstreamError> {
        self.record(Call::FetchOne(id.to_string()));
        if let Some(e) = &self.fetch_one_error {
            return Err(e.clone());
        }
        Ok(self.snapshot().unwrap_or_default().into_iter().find(|e| e.id == id))
    }

    async fn create(&self, input: &CreateEmployeeInput) -> Result<Employee, UpstreamError> {
        self.record(Call::Create(input.clone()));
        self.create_result.clone().unwrap_or_else(|| Err(self.failure.clone()))
    }

    async fn delete_by_name(&self, name: &str) -> Result<(), UpstreamError> {
        self.record(Call::DeleteByName(name.to_string()));
        if let Some(e) = &self.delete_error {
            return Err(e.clone());
        }
        if let Ok(mut guard) = self.employees.lock() {
            if let Some(list) = guard.as_mut() {
                list.retain(|e| e.name != name);
            }
        }
        Ok(())
    }
}
