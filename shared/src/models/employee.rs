//! Employee Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Address, AddressCreate, AddressUpdate};
use crate::serde_helpers::{flexible_date, flexible_date_opt};

/// Employee with its address (and the address's country) populated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub hire_date: NaiveDate,
    pub department_id: i64,
    /// Always present for employees created through the API
    pub address: Option<Address>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    #[serde(deserialize_with = "flexible_date")]
    pub hire_date: NaiveDate,
    pub department_id: i64,
    pub address: AddressCreate,
}

/// Update employee payload (partial; absent fields are left untouched)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "flexible_date_opt")]
    pub hire_date: Option<NaiveDate>,
    pub department_id: Option<i64>,
    pub address: Option<AddressUpdate>,
}

impl EmployeeUpdate {
    /// True when at least one top-level employee column is present
    pub fn has_employee_fields(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.phone.is_some()
            || self.hire_date.is_some()
            || self.department_id.is_some()
    }

    /// Merge the provided top-level fields onto an existing employee
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(v) = &self.first_name {
            employee.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            employee.last_name = v.clone();
        }
        if let Some(v) = &self.phone {
            employee.phone = v.clone();
        }
        if let Some(v) = self.hire_date {
            employee.hire_date = v;
        }
        if let Some(v) = self.department_id {
            employee.department_id = v;
        }
    }
}
