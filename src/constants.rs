/// Source column names as they appear after header normalization.
pub const COL_CUSTOMER_NAME: &str = "customer name";
pub const COL_ADDRESS_1: &str = "ship to address 1";
pub const COL_ADDRESS_2: &str = "ship to address 2";
pub const COL_CITY: &str = "city";
pub const COL_STATE: &str = "state";
pub const COL_ZIP: &str = "zip";
pub const COL_COUNTRY: &str = "ship to country";
pub const COL_PHONE: &str = "customer phone number";

/// Columns an input file must carry, in the order they are reported when absent.
pub const REQUIRED_SOURCE_COLUMNS: [&str; 7] = [
    COL_CUSTOMER_NAME,
    COL_ADDRESS_1,
    COL_ADDRESS_2,
    COL_CITY,
    COL_STATE,
    COL_ZIP,
    COL_COUNTRY,
];

// Recipient fields
pub const TO_NAME: &str = "ToName";
pub const TO_STREET1: &str = "ToStreet1";
pub const TO_STREET2: &str = "ToStreet2";
pub const TO_CITY: &str = "ToCity";
pub const TO_ZIP: &str = "ToZip";
pub const TO_STATE: &str = "ToState";
pub const TO_COUNTRY: &str = "ToCountry";
pub const TO_PHONE: &str = "ToPhone";

/// Recipient fields that must be non-blank for a row to produce a label.
pub const REQUIRED_RECIPIENT_FIELDS: [&str; 6] =
    [TO_NAME, TO_STREET1, TO_CITY, TO_ZIP, TO_STATE, TO_COUNTRY];

/// Output schema, in file order.
pub const LABEL_COLUMNS: [&str; 21] = [
    "FromCountry",
    "FromName",
    "FromCompany",
    "FromPhone",
    "FromStreet1",
    "FromStreet2",
    "FromCity",
    "FromZip",
    "FromState",
    "ToCountry",
    "ToName",
    "ToCompany",
    "ToStreet1",
    "ToStreet2",
    "ToCity",
    "ToZip",
    "ToState",
    "Length",
    "Height",
    "Width",
    "Weight",
];

// Output file names
pub const VALID_OUTPUT_FILE: &str = "final_cleaned_output.csv";
pub const INVALID_OUTPUT_FILE: &str = "rows_with_missing_fields.csv";
pub const SUMMARY_OUTPUT_FILE: &str = "run_summary.json";

// Defaults
pub const DEFAULT_CONFIG_FILE: &str = "shiplabel.toml";
pub const DEFAULT_SENDER_STORE: &str = "from_address.json";
pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Upper bound on copies of a single label row.
pub const MAX_COPIES: u32 = 1000;
