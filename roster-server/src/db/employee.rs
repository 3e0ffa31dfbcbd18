//! Employee persistence
//!
//! Reads assemble the whole aggregate (employee, address, country) in one
//! joined query.

use chrono::NaiveDate;
use shared::models::{Address, Country, Employee, EmployeeCreate};
use sqlx::{FromRow, SqliteConnection};

const SELECT_JOINED: &str = "SELECT e.id, e.first_name, e.last_name, e.phone, e.hire_date, e.department_id, \
     a.id AS address_id, a.street_name, a.street_number_1, a.street_number_2, a.state, a.city, a.postcode, \
     c.id AS country_id, c.code AS country_code, c.name AS country_name, c.emoji AS country_emoji \
     FROM employees e \
     LEFT JOIN addresses a ON a.employee_id = e.id \
     LEFT JOIN countries c ON c.id = a.country_id";

/// Flat row of the employee/address/country join
#[derive(Debug, FromRow)]
struct EmployeeRow {
    id: i64,
    first_name: String,
    last_name: String,
    phone: String,
    hire_date: NaiveDate,
    department_id: i64,
    address_id: Option<i64>,
    street_name: Option<String>,
    street_number_1: Option<String>,
    street_number_2: Option<String>,
    state: Option<String>,
    city: Option<String>,
    postcode: Option<String>,
    country_id: Option<i64>,
    country_code: Option<String>,
    country_name: Option<String>,
    country_emoji: Option<String>,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        let address = self.assemble_address();
        Employee {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone: self.phone,
            hire_date: self.hire_date,
            department_id: self.department_id,
            address,
        }
    }

    fn assemble_address(&self) -> Option<Address> {
        let country = Country {
            id: self.country_id?,
            code: self.country_code.clone()?,
            name: self.country_name.clone()?,
            emoji: self.country_emoji.clone()?,
        };
        Some(Address {
            id: self.address_id?,
            street_name: self.street_name.clone()?,
            street_number1: self.street_number_1.clone()?,
            street_number2: self.street_number_2.clone(),
            state: self.state.clone()?,
            city: self.city.clone()?,
            postcode: self.postcode.clone()?,
            country_id: country.id,
            country,
        })
    }
}

pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Employee>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EmployeeRow>(&format!("{SELECT_JOINED} ORDER BY e.id"))
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Employee>, sqlx::Error> {
    let row = sqlx::query_as::<_, EmployeeRow>(&format!("{SELECT_JOINED} WHERE e.id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row.map(EmployeeRow::into_employee))
}

/// Insert the employee columns of a create payload, returning the new id
pub async fn insert(conn: &mut SqliteConnection, data: &EmployeeCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO employees (first_name, last_name, phone, hire_date, department_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.phone)
    .bind(data.hire_date)
    .bind(data.department_id)
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Persist the scalar columns of a merged employee
pub async fn update(conn: &mut SqliteConnection, employee: &Employee) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE employees SET first_name = ?, last_name = ?, phone = ?, hire_date = ?, department_id = ? WHERE id = ?",
    )
    .bind(&employee.first_name)
    .bind(&employee.last_name)
    .bind(&employee.phone)
    .bind(employee.hire_date)
    .bind(employee.department_id)
    .bind(employee.id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Delete by id, returning the number of rows removed
pub async fn delete(conn: &mut SqliteConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(&mut *conn)
        .await
}
