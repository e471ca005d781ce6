//! Address record model.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Writable address fields.
///
/// Carries no id: inserts always let the store assign one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    pub street: String,
    pub city: String,
    pub province: String,
    pub zip_code: i64,
}

/// Stored address row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: AddressFields,
}
