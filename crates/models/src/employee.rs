use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ModelError;

pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 75;

/// Employee record as the upstream stores it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    #[serde(rename = "employee_name", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "employee_salary", default)]
    pub salary: i64,
    #[serde(rename = "employee_age", default)]
    pub age: i64,
    #[serde(rename = "employee_title", default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(rename = "employee_email", default)]
    pub email: Option<String>,
}

fn null_as_empty<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

impl Employee {
    /// A record without a name cannot be addressed by the upstream delete.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Body accepted by `POST` and forwarded verbatim to the upstream.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreateEmployeeInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub salary: Option<i64>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub title: String,
}

impl CreateEmployeeInput {
    pub fn new(name: impl Into<String>, salary: i64, age: i64, title: impl Into<String>) -> Self {
        Self { name: name.into(), salary: Some(salary), age: Some(age), title: title.into() }
    }

    /// Check every field and report all violations at once.
    pub fn validate(&self) -> Result<(), ModelError> {
        let mut problems: Vec<&'static str> = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("Name must not be blank.");
        }
        match self.salary {
            None => problems.push("Salary must not be null."),
            Some(s) if s < 1 => problems.push("Salary must be > zero."),
            Some(_) => {}
        }
        match self.age {
            None => problems.push("Age must not be null."),
            Some(a) if !(MIN_AGE..=MAX_AGE).contains(&a) => {
                problems.push("Age must be between 16 and 75.")
            }
            Some(_) => {}
        }
        if self.title.trim().is_empty() {
            problems.push("Title must not be blank.");
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ModelError::Validation(problems.join(" ")))
        }
    }
}
