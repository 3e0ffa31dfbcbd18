//! Startup seeding
//!
//! Reference data (departments, countries) is embedded in the binary and
//! inserted idempotently. Demo employees are optional and go through
//! [`EmployeeService::create`] so they get the same reference checks as the
//! API.

use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{Country, Department, EmployeeCreate};
use sqlx::SqlitePool;

use crate::core::{Result, ServerError};
use crate::db;
use crate::services::EmployeeService;
use crate::utils::validation::{CREATE_EMPLOYEE_RULES, normalize_integers, validate};

const DEPARTMENTS: &str = include_str!("../../fixtures/departments.json");
const COUNTRIES: &str = include_str!("../../fixtures/countries.json");

/// Rows written by [`seed_reference_data`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub departments: usize,
    pub countries: usize,
}

fn parse_fixture<T: DeserializeOwned>(name: &str, raw: &str) -> Result<Vec<T>> {
    serde_json::from_str(raw).map_err(|e| ServerError::Seed(format!("invalid {name} fixture: {e}")))
}

/// Insert the embedded departments and countries, skipping ids already present
pub async fn seed_reference_data(pool: &SqlitePool) -> Result<SeedReport> {
    let departments: Vec<Department> = parse_fixture("departments", DEPARTMENTS)?;
    let countries: Vec<Country> = parse_fixture("countries", COUNTRIES)?;

    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;
    for department in &departments {
        if db::department::insert_if_absent(&mut tx, department).await? {
            report.departments += 1;
        }
    }
    for country in &countries {
        if db::country::insert_if_absent(&mut tx, country).await? {
            report.countries += 1;
        }
    }
    tx.commit().await?;

    tracing::info!(
        departments = report.departments,
        countries = report.countries,
        "Reference data seeded"
    );
    Ok(report)
}

/// Create the employees listed in a JSON file (an array or a single object).
///
/// Skipped when the store already holds employees. Any invalid entry aborts
/// the run. Returns the number of employees created.
pub async fn seed_employees(service: &EmployeeService, path: &Path) -> Result<usize> {
    if !service.is_empty().await.map_err(seed_error)? {
        tracing::info!(path = %path.display(), "Employees present, skipping employee seed");
        return Ok(0);
    }

    let raw = tokio::fs::read_to_string(path).await?;
    let entries = match serde_json::from_str::<Value>(&raw)
        .map_err(|e| ServerError::Seed(format!("{}: {e}", path.display())))?
    {
        Value::Array(items) => items,
        single @ Value::Object(_) => vec![single],
        _ => {
            return Err(ServerError::Seed(format!(
                "{}: expected an employee object or an array of them",
                path.display()
            )));
        }
    };

    let mut created = 0;
    for (index, mut entry) in entries.into_iter().enumerate() {
        let errors = validate(CREATE_EMPLOYEE_RULES, &entry);
        if !errors.is_empty() {
            return Err(ServerError::Seed(format!("employee #{index}: {}", errors.join("; "))));
        }
        normalize_integers(CREATE_EMPLOYEE_RULES, &mut entry);
        let data: EmployeeCreate = serde_json::from_value(entry)
            .map_err(|e| ServerError::Seed(format!("employee #{index}: {e}")))?;

        let employee = service.create(data).await.map_err(|e| {
            tracing::error!(index, error = %e, "Employee seed failed");
            seed_error(e)
        })?;
        tracing::debug!(employee_id = employee.id, "Seeded employee");
        created += 1;
    }

    tracing::info!(created, path = %path.display(), "Employees seeded");
    Ok(created)
}

fn seed_error(e: crate::utils::ServiceError) -> ServerError {
    ServerError::Seed(e.to_string())
}
