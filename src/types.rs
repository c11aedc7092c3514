use serde::{Deserialize, Serialize};

use crate::constants::{
    TO_CITY, TO_COUNTRY, TO_NAME, TO_PHONE, TO_STATE, TO_STREET1, TO_STREET2, TO_ZIP,
};

/// A customer row projected into the recipient schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressRow {
    /// Zero-based position of the row in the uploaded file
    pub index: usize,
    pub name: String,
    pub street1: String,
    pub street2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub phone: Option<String>,
}

impl AddressRow {
    /// Value of a recipient field by its `To*` name.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            TO_NAME => &self.name,
            TO_STREET1 => &self.street1,
            TO_STREET2 => &self.street2,
            TO_CITY => &self.city,
            TO_STATE => &self.state,
            TO_ZIP => &self.zip,
            TO_COUNTRY => &self.country,
            TO_PHONE => return self.phone.as_deref(),
            _ => return None,
        };
        Some(value.as_str())
    }
}

/// One shipping label: sender block, recipient block, package dimensions.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRow {
    #[serde(rename = "FromCountry")]
    pub from_country: String,
    #[serde(rename = "FromName")]
    pub from_name: String,
    #[serde(rename = "FromCompany")]
    pub from_company: String,
    #[serde(rename = "FromPhone")]
    pub from_phone: String,
    #[serde(rename = "FromStreet1")]
    pub from_street1: String,
    #[serde(rename = "FromStreet2")]
    pub from_street2: String,
    #[serde(rename = "FromCity")]
    pub from_city: String,
    #[serde(rename = "FromZip")]
    pub from_zip: String,
    #[serde(rename = "FromState")]
    pub from_state: String,
    #[serde(rename = "ToCountry")]
    pub to_country: String,
    #[serde(rename = "ToName")]
    pub to_name: String,
    #[serde(rename = "ToCompany")]
    pub to_company: String,
    #[serde(rename = "ToStreet1")]
    pub to_street1: String,
    #[serde(rename = "ToStreet2")]
    pub to_street2: String,
    #[serde(rename = "ToCity")]
    pub to_city: String,
    #[serde(rename = "ToZip")]
    pub to_zip: String,
    #[serde(rename = "ToState")]
    pub to_state: String,
    #[serde(rename = "Length")]
    pub length: u32,
    #[serde(rename = "Height")]
    pub height: u32,
    #[serde(rename = "Width")]
    pub width: u32,
    #[serde(rename = "Weight")]
    pub weight: u32,
}
