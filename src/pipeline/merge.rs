use crate::sender::SenderAddress;
use crate::types::{AddressRow, LabelRow};

/// Build a label for one recipient. The recipient company is left blank for
/// manual entry and dimensions start at zero.
pub fn label_for(recipient: &AddressRow, sender: &SenderAddress) -> LabelRow {
    LabelRow {
        from_country: sender.country.clone(),
        from_name: sender.name.clone(),
        from_company: sender.company.clone(),
        from_phone: sender.phone.clone(),
        from_street1: sender.street1.clone(),
        from_street2: sender.street2.clone(),
        from_city: sender.city.clone(),
        from_zip: sender.zip.clone(),
        from_state: sender.state.clone(),
        to_country: recipient.country.clone(),
        to_name: recipient.name.clone(),
        to_company: String::new(),
        to_street1: recipient.street1.clone(),
        to_street2: recipient.street2.clone(),
        to_city: recipient.city.clone(),
        to_zip: recipient.zip.clone(),
        to_state: recipient.state.clone(),
        length: 0,
        height: 0,
        width: 0,
        weight: 0,
    }
}

pub fn merge_from_data(recipients: &[AddressRow], sender: &SenderAddress) -> Vec<LabelRow> {
    recipients.iter().map(|r| label_for(r, sender)).collect()
}
