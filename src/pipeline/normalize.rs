use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::AddressRow;

/// Full state name (lowercase) to USPS code.
const US_STATES: [(&str, &str); 50] = [
    ("alabama", "AL"), ("alaska", "AK"), ("arizona", "AZ"), ("arkansas", "AR"),
    ("california", "CA"), ("colorado", "CO"), ("connecticut", "CT"), ("delaware", "DE"),
    ("florida", "FL"), ("georgia", "GA"), ("hawaii", "HI"), ("idaho", "ID"),
    ("illinois", "IL"), ("indiana", "IN"), ("iowa", "IA"), ("kansas", "KS"),
    ("kentucky", "KY"), ("louisiana", "LA"), ("maine", "ME"), ("maryland", "MD"),
    ("massachusetts", "MA"), ("michigan", "MI"), ("minnesota", "MN"), ("mississippi", "MS"),
    ("missouri", "MO"), ("montana", "MT"), ("nebraska", "NE"), ("nevada", "NV"),
    ("new hampshire", "NH"), ("new jersey", "NJ"), ("new mexico", "NM"), ("new york", "NY"),
    ("north carolina", "NC"), ("north dakota", "ND"), ("ohio", "OH"), ("oklahoma", "OK"),
    ("oregon", "OR"), ("pennsylvania", "PA"), ("rhode island", "RI"), ("south carolina", "SC"),
    ("south dakota", "SD"), ("tennessee", "TN"), ("texas", "TX"), ("utah", "UT"),
    ("vermont", "VT"), ("virginia", "VA"), ("washington", "WA"), ("west virginia", "WV"),
    ("wisconsin", "WI"), ("wyoming", "WY"),
];

static STATE_LOOKUP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| US_STATES.iter().copied().collect());

/// Map a state name to its two-letter code. Anything not in the table
/// (abbreviations, provinces, typos) comes back uppercased.
pub fn lookup_state_abbr(state: &str) -> String {
    let key = state.trim().to_lowercase();
    match STATE_LOOKUP.get(key.as_str()) {
        Some(code) => (*code).to_string(),
        None => state.to_uppercase(),
    }
}

/// Trim every field, uppercase street/city/state and resolve state codes.
/// Name and phone keep their case.
pub fn clean_row(mut row: AddressRow) -> AddressRow {
    row.name = row.name.trim().to_string();
    row.street1 = row.street1.trim().to_uppercase();
    row.street2 = row.street2.trim().to_uppercase();
    row.city = row.city.trim().to_uppercase();
    row.state = lookup_state_abbr(&row.state.trim().to_uppercase());
    row.zip = row.zip.trim().to_string();
    row.country = row.country.trim().to_string();
    row.phone = row.phone.map(|p| p.trim().to_string());
    row
}

pub fn clean_rows(rows: Vec<AddressRow>) -> Vec<AddressRow> {
    rows.into_iter().map(clean_row).collect()
}
