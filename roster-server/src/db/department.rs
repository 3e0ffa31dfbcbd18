//! Department persistence

use shared::models::Department;
use sqlx::SqliteConnection;

pub async fn find_all(conn: &mut SqliteConnection) -> Result<Vec<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, code, name FROM departments ORDER BY id")
        .fetch_all(&mut *conn)
        .await
}

pub async fn find_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Department>, sqlx::Error> {
    sqlx::query_as::<_, Department>("SELECT id, code, name FROM departments WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Insert a department row keeping its id; existing ids are left alone.
pub async fn insert_if_absent(
    conn: &mut SqliteConnection,
    department: &Department,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO departments (id, code, name) VALUES (?, ?, ?) ON CONFLICT(id) DO NOTHING",
    )
    .bind(department.id)
    .bind(&department.code)
    .bind(&department.name)
    .execute(&mut *conn)
    .await?;
    Ok(result.rows_affected() > 0)
}
