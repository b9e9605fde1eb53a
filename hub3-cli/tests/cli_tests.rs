use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

use hub3_cli::commands::{amount, codes, encode, iban, invoice, oib, validate};
use hub3_cli::config::parse_policy;
use hub3_cli::error::{Error, Result};
use hub3_cli::input::read_json;
use hub3_cli::output::OutputFormat;
use hub3_codec::{Invoice, PaymentRecord, ValidationPolicy};

const RECORD_JSON: &str = r#"{
    "iban": "HR1210010051863000160",
    "receiver_name": "Obrt Primjer",
    "amount": 3900,
    "payment_description": "Usluga",
    "payment_model": "00",
    "reference_number": "12345"
}"#;

const INVOICE_JSON: &str = r#"{
    "seller_name": "Obrt Đurđa",
    "seller_address": "Ilica 1",
    "seller_city": "10000 Zagreb",
    "seller_oib": "12345678903",
    "seller_iban": "HR1210010051863000160",
    "customer_name": "Kupac d.o.o.",
    "customer_oib": "12345678904",
    "invoice_number": "7-1-25",
    "items": [
        { "description": "Savjetovanje", "quantity": 2, "unit_price": 5000 },
        { "description": "Putni trošak", "quantity": 1, "unit_price": 1250 }
    ]
}"#;

/// Write `contents` to a temporary JSON file
fn json_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    Ok(file)
}

#[test]
fn test_encode_record_from_file() {
    let file = json_file(RECORD_JSON).unwrap();
    let record: PaymentRecord = read_json(Some(file.path())).unwrap();

    let response = encode::execute(&record, false, &ValidationPolicy::default()).unwrap();
    assert_eq!(response.lines.len(), 14);
    assert_eq!(response.lines[2], "000000000003900");
    assert_eq!(response.lines[10], "HR00");
    assert!(response.payload.ends_with('\n'));
    assert!(!response.transliterated);
}

#[test]
fn test_encode_ascii() {
    let mut record: PaymentRecord = serde_json::from_str(RECORD_JSON).unwrap();
    record.receiver_name = "Obrt Čačak".to_string();

    let response = encode::execute(&record, true, &ValidationPolicy::default()).unwrap();
    assert_eq!(response.lines[6], "Obrt Cacak");
    assert!(response.payload.is_ascii());
}

#[test]
fn test_encode_rejects_invalid_record() {
    let mut record: PaymentRecord = serde_json::from_str(RECORD_JSON).unwrap();
    record.iban = "HR1210010051863000161".to_string();

    let err = encode::execute(&record, false, &ValidationPolicy::default()).unwrap_err();
    assert_matches!(err, Error::Codec(hub3_codec::Error::Validation(ref outcome)) => {
        assert_eq!(outcome.tags(), vec!["iban-invalid"]);
    });
}

#[test]
fn test_malformed_json_input() {
    let file = json_file("{ \"iban\": ").unwrap();
    let result: Result<PaymentRecord> = read_json(Some(file.path()));
    assert_matches!(result, Err(Error::Json(_)));
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let result: Result<PaymentRecord> = read_json(Some(dir.path().join("absent.json").as_path()));
    assert_matches!(result, Err(Error::Io(_)));
}

#[test]
fn test_validate_report() {
    let mut record: PaymentRecord = serde_json::from_str(RECORD_JSON).unwrap();
    record.receiver_name = "R".repeat(31);
    record.purpose_code = Some("XXXX".to_string());

    let outcome = validate::execute(&record, &ValidationPolicy::default());
    let report = validate::ValidateResponse::from(&outcome);
    assert!(!report.valid);

    let tags: Vec<&str> = report.violations.iter().map(|v| v.tag.as_str()).collect();
    assert_eq!(tags, vec!["receiver-name-too-long", "purpose-code-invalid"]);
    assert_eq!(report.violations[0].field, "receiver-name");
    assert_eq!(
        report.violations[0].message,
        "Ime primatelja prelazi maksimalnu duljinu."
    );

    let lenient = validate::execute(&record, &parse_policy("lenient").unwrap());
    assert_eq!(lenient.tags(), vec!["receiver-name-too-long"]);
}

#[test]
fn test_validate_handle_fails_on_invalid_record() {
    let file = json_file(r#"{ "amount": 1 }"#).unwrap();
    let args = validate::ValidateArgs {
        input: Some(file.path().to_path_buf()),
    };
    let result = validate::handle(&args, OutputFormat::Json, &ValidationPolicy::default());
    assert_matches!(result, Err(Error::Rejected(outcome)) if outcome.len() == 5);
}

#[test]
fn test_iban_report() {
    let valid = iban::execute("hr1210010051863000160");
    assert!(valid.valid);
    assert_eq!(valid.iban, "HR1210010051863000160");
    assert_eq!(valid.country_code.as_deref(), Some("HR"));
    assert_eq!(valid.check_digits.as_deref(), Some("12"));
    assert_eq!(valid.bban.as_deref(), Some("10010051863000160"));

    let invalid = iban::execute("HR1210010051863000161");
    assert!(!invalid.valid);
    assert!(invalid.reason.is_some());
    assert_eq!(invalid.country_code, None);
}

#[test]
fn test_oib_report() {
    let report = oib::execute("12345678903", false);
    assert!(report.check.valid);
    assert_eq!(report.message, None);

    let report = oib::execute("123-456-789-03", true);
    assert_eq!(report.oib, "12345678903");
    assert!(report.check.valid);

    let report = oib::execute("12345678904", false);
    assert!(!report.check.valid);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["reason"], "checksum");
    assert_eq!(json["valid"], false);
}

#[test]
fn test_oib_handle_fails_on_bad_length() {
    let args = oib::OibArgs {
        oib: "123".to_string(),
        clean: false,
    };
    let result = oib::handle(&args, OutputFormat::Text);
    assert_matches!(
        result,
        Err(Error::InvalidOib {
            reason: hub3_ident::OibError::Length,
            ..
        })
    );
}

#[test]
fn test_invoice_to_payload() {
    let file = json_file(INVOICE_JSON).unwrap();
    let invoice: Invoice = read_json(Some(file.path())).unwrap();

    let response = invoice::execute(
        &invoice,
        "00",
        Some("OTHR"),
        false,
        &ValidationPolicy::default(),
    )
    .unwrap();

    assert_eq!(response.total, "112,50");
    let lines: Vec<&str> = response.payload.split_terminator('\n').collect();
    assert_eq!(lines[2], "000000000011250");
    assert_eq!(lines[3], "Kupac d.o.o.");
    assert_eq!(lines[6], "Obrt Đurđa");
    assert_eq!(lines[11], "7-1-25");
    assert_eq!(lines[12], "OTHR");
    assert_eq!(lines[13], "Savjetovanje");

    assert_eq!(response.oib_warnings.len(), 1);
    let warning = serde_json::to_value(&response.oib_warnings[0]).unwrap();
    assert_eq!(warning["party"], "customer");
    assert_eq!(warning["reason"], "checksum");
}

#[test]
fn test_incomplete_invoice() {
    let invoice: Invoice =
        serde_json::from_str(r#"{ "seller_name": "Obrt", "items": [] }"#).unwrap();
    let result = invoice::execute(&invoice, "00", None, false, &ValidationPolicy::default());
    assert_matches!(result, Err(Error::IncompleteInvoice(labels)) => {
        assert_eq!(labels, vec!["Stavke računa".to_string()]);
    });
}

#[test]
fn test_codes() {
    let models = codes::list_models();
    assert_eq!(models.total, 46);
    assert_eq!(models.models[0], "HR00");
    assert!(models.models.contains(&"HR99".to_string()));

    let all = codes::list_purposes(None);
    assert_eq!(all.total, hub3_codec::codes::PURPOSE_CODES.len());

    let found = codes::list_purposes(Some("ubil"));
    assert!(found.purposes.iter().any(|p| p.code == "UBIL"));
    assert!(found.total < all.total);
}

#[test]
fn test_amount_commands() {
    let formatted = amount::execute(&amount::AmountCommands::Format { cents: 3900 }).unwrap();
    assert_eq!(formatted.display, "39,00");

    let parsed = amount::execute(&amount::AmountCommands::Parse {
        text: "1.234,5".to_string(),
    })
    .unwrap();
    assert_eq!(parsed.cents.cents(), 123_450);
    assert_eq!(parsed.display, "1234,50");
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_matches!("yaml".parse::<OutputFormat>(), Err(Error::UnknownFormat(_)));
}
