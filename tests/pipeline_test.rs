use anyhow::Result;
use shiplabel::constants::{INVALID_OUTPUT_FILE, LABEL_COLUMNS, VALID_OUTPUT_FILE};
use shiplabel::export::write_outputs;
use shiplabel::{run_parser, LabelError, SenderAddress, SenderStore};
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const HEADER: &str = "Customer Name,Ship To Address 1,Ship To Address 2,City,State,Zip,Ship To Country";

fn sender() -> SenderAddress {
    SenderAddress {
        country: "US".to_string(),
        name: "Acme Shipping".to_string(),
        company: "Acme".to_string(),
        phone: "555-0100".to_string(),
        street1: "1 Warehouse Way".to_string(),
        street2: String::new(),
        city: "Reno".to_string(),
        zip: "89501".to_string(),
        state: "NV".to_string(),
    }
}

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn csv_row_becomes_label() -> Result<()> {
    let dir = tempdir()?;
    let input = write_file(
        dir.path(),
        "orders.csv",
        &format!("{HEADER}\njane doe,123 elm st,,austin,texas,78701,US\n"),
    );

    let out = run_parser(&input, &sender())?;
    assert_eq!(out.labels.len(), 1);
    assert!(out.invalid.is_empty());

    let label = &out.labels[0];
    assert_eq!(label.to_state, "TX");
    assert_eq!(label.to_city, "AUSTIN");
    assert_eq!(label.to_street1, "123 ELM ST");
    assert_eq!(label.to_name, "jane doe");
    assert_eq!(label.from_name, "Acme Shipping");
    Ok(())
}

#[test]
fn empty_city_is_reported() -> Result<()> {
    let dir = tempdir()?;
    let input = write_file(
        dir.path(),
        "orders.csv",
        &format!(
            "{HEADER}\njane doe,123 elm st,,austin,texas,78701,US\nbob,9 oak ave,,  ,nevada,89501,US\n"
        ),
    );

    let out = run_parser(&input, &sender())?;
    assert_eq!(out.labels.len() + out.invalid.len(), 2);
    assert_eq!(out.invalid.len(), 1);
    assert_eq!(out.report[0].missing, vec!["ToCity"]);
    assert_eq!(out.report[0].row_number, 2);
    assert_eq!(out.invalid_labels[0].from_city, "Reno");
    Ok(())
}

#[test]
fn comma_only_row_is_reported_not_dropped() -> Result<()> {
    let dir = tempdir()?;
    let input = write_file(
        dir.path(),
        "orders.csv",
        &format!("{HEADER}\n,,,,,,\nbob,9 oak,,,nevada,89501,US\n"),
    );

    let out = run_parser(&input, &sender())?;
    assert_eq!(out.total_rows, 2);
    assert_eq!(out.invalid.len(), 2);
    assert_eq!(
        out.report[0].to_string(),
        "Row 1: Missing → ToName, ToStreet1, ToCity, ToZip, ToState, ToCountry"
    );
    assert_eq!(out.report[1].to_string(), "Row 2: Missing → ToCity");
    Ok(())
}

#[test]
fn workbook_rows_become_labels() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("orders.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    let headers = [
        " Customer  Name", "Ship To Address 1", "Ship To Address 2", "City", "STATE", "Zip",
        "Ship To Country",
    ];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    sheet.write_string(1, 0, "jane doe")?;
    sheet.write_string(1, 1, "123 elm st")?;
    sheet.write_string(1, 3, "austin")?;
    sheet.write_string(1, 4, "texas")?;
    sheet.write_number(1, 5, 78701)?;
    sheet.write_string(1, 6, "US")?;
    // row 2 left blank
    sheet.write_string(3, 0, "ann")?;
    sheet.write_string(3, 1, "1 main")?;
    sheet.write_string(3, 3, "boise")?;
    sheet.write_string(3, 4, "Idaho")?;
    sheet.write_number(3, 5, 83702)?;
    sheet.write_string(3, 6, "US")?;
    workbook.save(&input)?;

    let out = run_parser(&input, &sender())?;
    assert_eq!(out.total_rows, 3);
    assert_eq!(out.labels.len(), 2);
    assert_eq!(out.labels[0].to_zip, "78701");
    assert_eq!(out.labels[0].to_state, "TX");
    assert_eq!(out.labels[1].to_state, "ID");
    assert_eq!(out.report.len(), 1);
    assert_eq!(out.report[0].row_number, 2);
    Ok(())
}

#[test]
fn header_only_workbook_is_empty_input() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("orders.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, header) in HEADER.split(',').enumerate() {
        sheet.write_string(0, col as u16, header)?;
    }
    workbook.save(&input)?;

    assert!(matches!(run_parser(&input, &sender()), Err(LabelError::EmptyInput(_))));
    Ok(())
}

#[test]
fn tab_separated_text_with_messy_headers() -> Result<()> {
    let dir = tempdir()?;
    let input = write_file(
        dir.path(),
        "orders.txt",
        "  SHIP TO COUNTRY\tzip\tState\tCity\tShip  To Address 2\tShip To Address 1\tCustomer   Name\n\
         CA\tM5V 2T6\tontario\ttoronto\t\t1 king st\tLee\n",
    );

    let out = run_parser(&input, &sender())?;
    assert_eq!(out.labels.len(), 1);
    assert_eq!(out.labels[0].to_state, "ONTARIO");
    assert_eq!(out.labels[0].to_zip, "M5V 2T6");
    Ok(())
}

#[test]
fn unsupported_extension_produces_nothing() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "orders.pdf", "not a table");

    match run_parser(&input, &sender()) {
        Err(LabelError::UnsupportedFormat(ext)) => assert_eq!(ext, ".pdf"),
        other => panic!("expected UnsupportedFormat, got {:?}", other.map(|o| o.total_rows)),
    }
}

#[test]
fn corrupt_workbook_is_an_error() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "orders.xlsx", "definitely not a zip archive");
    assert!(matches!(run_parser(&input, &sender()), Err(LabelError::Workbook(_))));
}

#[test]
fn missing_columns_are_all_named() {
    let dir = tempdir().unwrap();
    let input = write_file(dir.path(), "orders.csv", "Customer Name,Zip\njane,78701\n");

    match run_parser(&input, &sender()) {
        Err(LabelError::MissingColumns(cols)) => {
            assert_eq!(cols.len(), 5);
            assert!(cols.contains(&"ship to country".to_string()));
        }
        other => panic!("expected MissingColumns, got {:?}", other.map(|o| o.total_rows)),
    }
}

#[test]
fn unconfigured_sender_is_fatal() {
    let dir = tempdir().unwrap();
    let store = SenderStore::new(dir.path().join("from_address.json"));
    assert!(matches!(store.load(), Err(LabelError::SenderNotConfigured(_))));
}

#[test]
fn outputs_keep_fixed_column_order() -> Result<()> {
    let dir = tempdir()?;
    let input = write_file(
        dir.path(),
        "orders.csv",
        "Zip,Ship To Country,Customer Name,City,Ship To Address 1,State,Ship To Address 2,Notes\n\
         78701,US,jane doe,austin,123 elm st,texas,,fragile\n\
         89501,US,,reno,9 oak,nevada,,\n",
    );
    let out_dir = dir.path().join("out");

    let out = run_parser(&input, &sender())?;
    let summary = write_outputs(&out, &input, &out_dir, 2)?;
    assert_eq!(summary.valid_rows, 1);
    assert_eq!(summary.invalid_rows, 1);

    for file in [VALID_OUTPUT_FILE, INVALID_OUTPUT_FILE] {
        let content = fs::read_to_string(out_dir.join(file))?;
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some(LABEL_COLUMNS.join(",").as_str()));
        assert_eq!(lines.count(), 2, "{file} should hold one row twice");
    }
    Ok(())
}
