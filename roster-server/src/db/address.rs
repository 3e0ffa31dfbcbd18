//! Address persistence
//!
//! Addresses are only reachable through their employee; the row carries the
//! back-link (`employee_id`) and is removed by cascade with it.

use shared::models::{Address, AddressCreate};
use sqlx::SqliteConnection;

/// Insert an unlinked address row, returning its id
pub async fn insert(conn: &mut SqliteConnection, data: &AddressCreate) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO addresses (street_name, street_number_1, street_number_2, state, city, postcode, country_id) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&data.street_name)
    .bind(&data.street_number1)
    .bind(&data.street_number2)
    .bind(&data.state)
    .bind(&data.city)
    .bind(&data.postcode)
    .bind(data.country_id)
    .execute(&mut *conn)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Attach an address row to its owning employee
pub async fn link_employee(
    conn: &mut SqliteConnection,
    address_id: i64,
    employee_id: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE addresses SET employee_id = ? WHERE id = ?")
        .bind(employee_id)
        .bind(address_id)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Persist every column of a merged address
pub async fn update(conn: &mut SqliteConnection, address: &Address) -> Result<(), sqlx::Error> {
    sqlx::query(
        "UPDATE addresses SET street_name = ?, street_number_1 = ?, street_number_2 = ?, \
         state = ?, city = ?, postcode = ?, country_id = ? WHERE id = ?",
    )
    .bind(&address.street_name)
    .bind(&address.street_number1)
    .bind(&address.street_number2)
    .bind(&address.state)
    .bind(&address.city)
    .bind(&address.postcode)
    .bind(address.country_id)
    .bind(address.id)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Number of address rows, linked or not
pub async fn count(conn: &mut SqliteConnection) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
        .fetch_one(&mut *conn)
        .await
}
