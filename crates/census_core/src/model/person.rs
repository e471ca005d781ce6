//! Person record model.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Writable person fields, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub occupation: String,
    pub province: String,
    pub district: String,
    /// ISO-8601 date string as captured by the date picker.
    pub date: String,
    pub gender: String,
}

/// Stored person row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: PersonFields,
}
