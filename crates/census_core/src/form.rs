//! Raw form input and submit-time checks.
//!
//! # Responsibility
//! - Hold the text of each form input exactly as typed.
//! - Reject empty fields and unparsable numbers before any store call.
//! - Prefill a form from a stored record for edit flows.
//!
//! # Invariants
//! - Every field is trimmed; a field that trims to empty is missing.
//! - Integer fields accept only base-10 integers; income accepts any finite
//!   number.

use crate::model::address::{Address, AddressFields};
use crate::model::household::{Household, HouseholdFields};
use crate::model::person::{Person, PersonFields};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Alert text shown when a form cannot be submitted.
pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill in all fields correctly.";

/// Form validation failure, raised before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    MissingField(&'static str),
    InvalidNumber { field: &'static str, value: String },
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(field) => {
                write!(f, "{FILL_ALL_FIELDS_MESSAGE} (`{field}` is empty)")
            }
            Self::InvalidNumber { field, value } => write!(
                f,
                "{FILL_ALL_FIELDS_MESSAGE} (`{field}` is not a number: `{value}`)"
            ),
        }
    }
}

impl Error for FormError {}

/// Person form as typed on the person entry screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub occupation: String,
    pub province: String,
    pub district: String,
    pub date: String,
    pub gender: String,
}

impl PersonForm {
    /// Checks every field and converts the form into storable fields.
    pub fn into_fields(self) -> Result<PersonFields, FormError> {
        Ok(PersonFields {
            first_name: required("firstName", &self.first_name)?,
            last_name: required("lastName", &self.last_name)?,
            phone: required("phone", &self.phone)?,
            email: required("email", &self.email)?,
            occupation: required("occupation", &self.occupation)?,
            province: required("province", &self.province)?,
            district: required("district", &self.district)?,
            date: required("date", &self.date)?,
            gender: required("gender", &self.gender)?,
        })
    }
}

impl From<&Person> for PersonForm {
    fn from(person: &Person) -> Self {
        let fields = &person.fields;
        Self {
            first_name: fields.first_name.clone(),
            last_name: fields.last_name.clone(),
            phone: fields.phone.clone(),
            email: fields.email.clone(),
            occupation: fields.occupation.clone(),
            province: fields.province.clone(),
            district: fields.district.clone(),
            date: fields.date.clone(),
            gender: fields.gender.clone(),
        }
    }
}

/// Household form; numeric fields arrive as text from numeric keyboards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HouseholdForm {
    pub number_of_persons: String,
    pub residence_type: String,
    pub house_hold_income: String,
}

impl HouseholdForm {
    pub fn into_fields(self) -> Result<HouseholdFields, FormError> {
        Ok(HouseholdFields {
            number_of_persons: parse_integer("numberOfPersons", &self.number_of_persons)?,
            residence_type: required("residenceType", &self.residence_type)?,
            house_hold_income: parse_number("houseHoldIncome", &self.house_hold_income)?,
        })
    }
}

impl From<&Household> for HouseholdForm {
    fn from(household: &Household) -> Self {
        let fields = &household.fields;
        Self {
            number_of_persons: fields.number_of_persons.to_string(),
            residence_type: fields.residence_type.clone(),
            house_hold_income: fields.house_hold_income.to_string(),
        }
    }
}

/// Address form as typed on the address entry screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressForm {
    pub street: String,
    pub city: String,
    pub province: String,
    pub zip_code: String,
}

impl AddressForm {
    pub fn into_fields(self) -> Result<AddressFields, FormError> {
        Ok(AddressFields {
            street: required("street", &self.street)?,
            city: required("city", &self.city)?,
            province: required("province", &self.province)?,
            zip_code: parse_integer("zipCode", &self.zip_code)?,
        })
    }
}

impl From<&Address> for AddressForm {
    fn from(address: &Address) -> Self {
        let fields = &address.fields;
        Self {
            street: fields.street.clone(),
            city: fields.city.clone(),
            province: fields.province.clone(),
            zip_code: fields.zip_code.to_string(),
        }
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, FormError> {
    let text = required(field, value)?;
    text.parse::<i64>()
        .map_err(|_| FormError::InvalidNumber { field, value: text })
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, FormError> {
    let text = required(field, value)?;
    match text.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(FormError::InvalidNumber { field, value: text }),
    }
}

#[cfg(test)]
mod tests {
    use super::{AddressForm, FormError, HouseholdForm, PersonForm, FILL_ALL_FIELDS_MESSAGE};
    use crate::model::household::{Household, HouseholdFields};

    fn jane_form() -> PersonForm {
        PersonForm {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone: "5551234".to_string(),
            email: "jane@x.com".to_string(),
            occupation: "engineer".to_string(),
            province: "ProvA".to_string(),
            district: "DistB".to_string(),
            date: "2020-01-01T00:00:00.000Z".to_string(),
            gender: "female".to_string(),
        }
    }

    #[test]
    fn person_form_trims_and_converts() {
        let mut form = jane_form();
        form.first_name = "  Jane ".to_string();

        let fields = form.into_fields().expect("complete form should convert");
        assert_eq!(fields.first_name, "Jane");
        assert_eq!(fields.gender, "female");
    }

    #[test]
    fn person_form_reports_first_blank_field() {
        let mut form = jane_form();
        form.email = "   ".to_string();
        form.gender = String::new();

        let error = form.into_fields().expect_err("blank email must be rejected");
        assert_eq!(error, FormError::MissingField("email"));
        assert!(error.to_string().starts_with(FILL_ALL_FIELDS_MESSAGE));
    }

    #[test]
    fn household_form_parses_numbers() {
        let form = HouseholdForm {
            number_of_persons: "4".to_string(),
            residence_type: "apartment".to_string(),
            house_hold_income: "1250.50".to_string(),
        };

        let fields = form.into_fields().expect("numeric input should parse");
        assert_eq!(fields.number_of_persons, 4);
        assert_eq!(fields.house_hold_income, 1250.5);
    }

    #[test]
    fn household_form_rejects_non_numeric_and_non_finite_input() {
        let form = HouseholdForm {
            number_of_persons: "four".to_string(),
            residence_type: "house".to_string(),
            house_hold_income: "10".to_string(),
        };
        assert_eq!(
            form.into_fields(),
            Err(FormError::InvalidNumber {
                field: "numberOfPersons",
                value: "four".to_string(),
            })
        );

        let form = HouseholdForm {
            number_of_persons: "2".to_string(),
            residence_type: "house".to_string(),
            house_hold_income: "inf".to_string(),
        };
        assert!(matches!(
            form.into_fields(),
            Err(FormError::InvalidNumber {
                field: "houseHoldIncome",
                ..
            })
        ));
    }

    #[test]
    fn address_form_requires_integer_zip_code() {
        let form = AddressForm {
            street: "1 Main St".to_string(),
            city: "Springfield".to_string(),
            province: "ProvA".to_string(),
            zip_code: "12.5".to_string(),
        };
        assert!(matches!(
            form.into_fields(),
            Err(FormError::InvalidNumber { field: "zipCode", .. })
        ));
    }

    #[test]
    fn prefilled_form_round_trips_to_same_fields() {
        let household = Household {
            id: 7,
            fields: HouseholdFields {
                number_of_persons: 3,
                residence_type: "farm".to_string(),
                house_hold_income: 900.25,
            },
        };

        let form = HouseholdForm::from(&household);
        assert_eq!(form.number_of_persons, "3");
        assert_eq!(form.into_fields().unwrap(), household.fields);
    }
}
