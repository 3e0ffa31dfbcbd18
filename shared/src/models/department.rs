//! Department Model

use serde::{Deserialize, Serialize};

/// Department reference data (seeded once, read-only through the API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Department {
    pub id: i64,
    pub code: String,
    pub name: String,
}
