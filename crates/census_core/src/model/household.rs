//! Household record model.
//!
//! The `household` table also declares person-linking columns
//! (`householdHead`, `householdNumber`, `householdMembers`); they are not part
//! of this model because no write path populates them.

use super::RecordId;
use serde::{Deserialize, Serialize};

/// Writable household fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseholdFields {
    pub number_of_persons: i64,
    pub residence_type: String,
    /// Serialized as `houseHoldIncome` to match the stored column.
    pub house_hold_income: f64,
}

/// Stored household row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Household {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: HouseholdFields,
}
