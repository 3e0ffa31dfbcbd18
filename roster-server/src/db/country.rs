//! Country persistence

use shared::models::Country;
use sqlx::SqliteConnection;

const SELECT: &str = "SELECT id, code, name, emoji FROM countries";

pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Country>, sqlx::Error> {
    sqlx::query_as::<_, Country>(&format!("{SELECT} ORDER BY id"))
        .fetch_all(&mut *conn)
        .await
}

pub async fn find_by_id(conn: &mut SqliteConnection, id: i64) -> Result<Option<Country>, sqlx::Error> {
    sqlx::query_as::<_, Country>(&format!("{SELECT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Insert a country row keeping its id; existing ids are left alone.
/// Returns whether a row was written.
pub async fn insert_if_absent(conn: &mut SqliteConnection, country: &Country) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO countries (id, code, name, emoji) VALUES (?, ?, ?, ?) ON CONFLICT(id) DO NOTHING",
    )
    .bind(country.id)
    .bind(&country.code)
    .bind(&country.name)
    .bind(&country.emoji)
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}
