//! Reference Resolver
//!
//! Primary-key lookups for the read-only reference tables. A miss is a
//! [`ServiceError::ReferenceNotFound`], never a primary-entity not-found.

use std::fmt;

use shared::models::{Country, Department};
use sqlx::SqliteConnection;

use crate::db;
use crate::utils::{ServiceError, ServiceResult};

/// Kind of reference a payload can point at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Department,
    Country,
}

impl Reference {
    /// Payload field carrying this reference
    pub fn field(self) -> &'static str {
        match self {
            Reference::Department => "departmentId",
            Reference::Country => "countryId",
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reference::Department => f.write_str("Department"),
            Reference::Country => f.write_str("Country"),
        }
    }
}

pub async fn resolve_department(conn: &mut SqliteConnection, id: i64) -> ServiceResult<Department> {
    db::department::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::ReferenceNotFound {
            reference: Reference::Department,
            id,
        })
}

pub async fn resolve_country(conn: &mut SqliteConnection, id: i64) -> ServiceResult<Country> {
    db::country::find_by_id(conn, id)
        .await?
        .ok_or(ServiceError::ReferenceNotFound {
            reference: Reference::Country,
            id,
        })
}
