//! Employee Service
//!
//! Owns the employee aggregate (employee + address + country link).
//! Writes resolve their references first and run inside one transaction, so
//! a failed reference or a failed insert never leaves an orphaned address.

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::{Sqlite, Transaction};

use crate::db::{self, DbService};
use crate::services::reference;
use crate::utils::{ServiceError, ServiceResult};

#[derive(Clone, Debug)]
pub struct EmployeeService {
    db: DbService,
}

impl EmployeeService {
    pub fn new(db: DbService) -> Self {
        Self { db }
    }

    /// Write transaction holding the SQLite write lock from the start.
    ///
    /// A deferred `BEGIN` that reads before writing fails with
    /// `SQLITE_BUSY_SNAPSHOT` when another writer commits in between, and
    /// `busy_timeout` does not apply to that error.
    async fn begin_write(&self) -> ServiceResult<Transaction<'static, Sqlite>> {
        Ok(self.db.pool.begin_with("BEGIN IMMEDIATE").await?)
    }

    /// Create an employee together with its address
    pub async fn create(&self, data: EmployeeCreate) -> ServiceResult<Employee> {
        let mut tx = self.begin_write().await?;

        let country = reference::resolve_country(&mut tx, data.address.country_id).await?;
        reference::resolve_department(&mut tx, data.department_id).await?;

        let address_id = db::address::insert(&mut tx, &data.address).await?;
        let employee_id = db::employee::insert(&mut tx, &data).await?;
        db::address::link_employee(&mut tx, address_id, employee_id).await?;

        let employee = db::employee::find_by_id(&mut tx, employee_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Employee {employee_id}")))?;
        tx.commit().await?;

        tracing::info!(employee_id, address_id, country = %country.code, "Employee created");
        Ok(employee)
    }

    /// Merge a partial update into an existing employee.
    ///
    /// Returns `Ok(None)` when no employee has this id.
    pub async fn update(&self, id: i64, data: EmployeeUpdate) -> ServiceResult<Option<Employee>> {
        let mut tx = self.begin_write().await?;

        let Some(mut employee) = db::employee::find_by_id(&mut tx, id).await? else {
            return Ok(None);
        };

        if let Some(patch) = data.address.as_ref().filter(|a| !a.is_empty()) {
            let country = match patch.country_id {
                Some(country_id) => Some(reference::resolve_country(&mut tx, country_id).await?),
                None => None,
            };

            match employee.address.as_mut() {
                Some(address) => {
                    patch.apply_to(address);
                    if let Some(country) = country {
                        address.country = country;
                    }
                    db::address::update(&mut tx, address).await?;
                }
                None => {
                    let create = patch.to_create().ok_or_else(|| {
                        ServiceError::Validation(
                            "address is incomplete: streetName, streetNumber1, state, city, postcode and countryId are required"
                                .into(),
                        )
                    })?;
                    let address_id = db::address::insert(&mut tx, &create).await?;
                    db::address::link_employee(&mut tx, address_id, id).await?;
                }
            }
        }

        if data.has_employee_fields() {
            if let Some(department_id) = data.department_id {
                reference::resolve_department(&mut tx, department_id).await?;
            }
            data.apply_to(&mut employee);
            db::employee::update(&mut tx, &employee).await?;
        }

        let updated = db::employee::find_by_id(&mut tx, id).await?;
        tx.commit().await?;

        tracing::info!(employee_id = id, "Employee updated");
        Ok(updated)
    }

    /// All employees in storage order
    pub async fn get_all(&self) -> ServiceResult<Vec<Employee>> {
        let mut conn = self.db.pool.acquire().await?;
        Ok(db::employee::find_all(&mut conn).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> ServiceResult<Option<Employee>> {
        let mut conn = self.db.pool.acquire().await?;
        Ok(db::employee::find_by_id(&mut conn, id).await?)
    }

    /// Delete an employee; its address goes with it.
    ///
    /// Returns whether a row was removed.
    pub async fn remove(&self, id: i64) -> ServiceResult<bool> {
        let mut conn = self.db.pool.acquire().await?;
        let removed = db::employee::delete(&mut conn, id).await? > 0;
        if removed {
            tracing::info!(employee_id = id, "Employee deleted");
        }
        Ok(removed)
    }

    /// Whether the store holds no employee yet
    pub async fn is_empty(&self) -> ServiceResult<bool> {
        let mut conn = self.db.pool.acquire().await?;
        Ok(db::employee::count(&mut conn).await? == 0)
    }
}
