//! Address Model

use serde::{Deserialize, Serialize};

use super::Country;
use crate::serde_helpers::double_option;

/// Address entity, owned by exactly one employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: i64,
    pub street_name: String,
    pub street_number1: String,
    pub street_number2: Option<String>,
    pub state: String,
    pub city: String,
    pub postcode: String,
    pub country_id: i64,
    pub country: Country,
}

/// Create address payload (embedded in [`super::EmployeeCreate`])
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreate {
    pub street_name: String,
    pub street_number1: String,
    #[serde(default)]
    pub street_number2: Option<String>,
    pub state: String,
    pub city: String,
    pub postcode: String,
    pub country_id: i64,
}

/// Update address payload
///
/// `street_number2` is tri-state: absent leaves it, `null` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressUpdate {
    pub street_name: Option<String>,
    pub street_number1: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub street_number2: Option<Option<String>>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postcode: Option<String>,
    pub country_id: Option<i64>,
}

impl AddressUpdate {
    /// True when the payload carries no recognized field
    pub fn is_empty(&self) -> bool {
        self.street_name.is_none()
            && self.street_number1.is_none()
            && self.street_number2.is_none()
            && self.state.is_none()
            && self.city.is_none()
            && self.postcode.is_none()
            && self.country_id.is_none()
    }

    /// Merge the provided fields onto an existing address.
    ///
    /// The country relation is not touched here; the caller swaps it in
    /// after resolving `country_id`.
    pub fn apply_to(&self, address: &mut Address) {
        if let Some(v) = &self.street_name {
            address.street_name = v.clone();
        }
        if let Some(v) = &self.street_number1 {
            address.street_number1 = v.clone();
        }
        if let Some(v) = &self.street_number2 {
            address.street_number2 = v.clone();
        }
        if let Some(v) = &self.state {
            address.state = v.clone();
        }
        if let Some(v) = &self.city {
            address.city = v.clone();
        }
        if let Some(v) = &self.postcode {
            address.postcode = v.clone();
        }
        if let Some(v) = self.country_id {
            address.country_id = v;
        }
    }

    /// Build a full create payload when every required field is present
    pub fn to_create(&self) -> Option<AddressCreate> {
        Some(AddressCreate {
            street_name: self.street_name.clone()?,
            street_number1: self.street_number1.clone()?,
            street_number2: self.street_number2.clone().flatten(),
            state: self.state.clone()?,
            city: self.city.clone()?,
            postcode: self.postcode.clone()?,
            country_id: self.country_id?,
        })
    }
}
