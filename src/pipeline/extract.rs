use crate::constants::{
    COL_ADDRESS_1, COL_ADDRESS_2, COL_CITY, COL_COUNTRY, COL_CUSTOMER_NAME, COL_PHONE, COL_STATE,
    COL_ZIP, REQUIRED_SOURCE_COLUMNS,
};
use crate::error::{LabelError, Result};
use crate::pipeline::loader::RawTable;
use crate::types::AddressRow;

/// Project the uploaded table into recipient rows.
///
/// Every absent required column is reported, not just the first. The phone
/// column is optional.
pub fn extract_to_fields(table: &RawTable) -> Result<Vec<AddressRow>> {
    let missing: Vec<String> = REQUIRED_SOURCE_COLUMNS
        .iter()
        .filter(|col| !table.has_column(col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(LabelError::MissingColumns(missing));
    }

    let has_phone = table.has_column(COL_PHONE);
    let cell = |row: usize, col: &str| table.cell(row, col).unwrap_or("").to_string();

    let rows = (0..table.len())
        .map(|i| AddressRow {
            index: i,
            name: cell(i, COL_CUSTOMER_NAME),
            street1: cell(i, COL_ADDRESS_1),
            street2: cell(i, COL_ADDRESS_2),
            city: cell(i, COL_CITY),
            state: cell(i, COL_STATE),
            zip: cell(i, COL_ZIP),
            country: cell(i, COL_COUNTRY),
            phone: has_phone.then(|| cell(i, COL_PHONE)),
        })
        .collect();

    Ok(rows)
}
