//! Country Model

use serde::{Deserialize, Serialize};

/// Country reference data (seeded once, read-only through the API)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Country {
    pub id: i64,
    /// Unique code, at most 3 characters
    pub code: String,
    pub name: String,
    /// Flag glyph
    pub emoji: String,
}
