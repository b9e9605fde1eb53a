//! Payload encoding tests against hand-written expected payloads

use hub3_codec::payload::{CURRENCY, HEADER, LINE_COUNT};
use hub3_codec::{encode, validate, Error, PaymentField, PaymentRecord, Violation};
use pretty_assertions::assert_eq;

fn sample_record() -> PaymentRecord {
    PaymentRecord::builder()
        .iban("HR1210010051863000160")
        .receiver_name("Obrt Primjer")
        .amount(3900)
        .payment_description("Usluga")
        .payment_model("00")
        .reference_number("12345")
        .build()
}

fn full_record() -> PaymentRecord {
    PaymentRecord::builder()
        .iban("HR1723600001101234565")
        .receiver_name("Čistoća d.o.o.")
        .receiver_address("Radnička cesta 82")
        .receiver_city("10000 Zagreb")
        .payer("Ana Anić", "Ulica Ivana Gundulića 2", "21000 Split")
        .amount(12_345_67)
        .payment_description("Odvoz otpada za ožujak")
        .payment_model("01")
        .reference_number("1234-5678")
        .purpose_code("UBIL")
        .build()
}

#[test]
fn test_concrete_scenario() {
    let record = sample_record();
    assert!(validate(&record).is_valid());

    let payload = encode(&record).unwrap();
    let lines: Vec<&str> = payload.lines().collect();

    assert_eq!(lines[0], HEADER);
    assert_eq!(lines[1], CURRENCY);
    assert_eq!(lines[2], "000000000003900");
    assert_eq!(lines[9], "HR1210010051863000160");
    assert_eq!(lines[10], "HR00");
    assert_eq!(lines[11], "12345");
    assert_eq!(lines[13], "Usluga");
}

#[test]
fn test_full_payload_byte_exact() {
    let payload = encode(&full_record()).unwrap();
    let expected = concat!(
        "HRVHUB30\n",
        "EUR\n",
        "000000001234567\n",
        "Ana Anić\n",
        "Ulica Ivana Gundulića 2\n",
        "21000 Split\n",
        "Čistoća d.o.o.\n",
        "Radnička cesta 82\n",
        "10000 Zagreb\n",
        "HR1723600001101234565\n",
        "HR01\n",
        "1234-5678\n",
        "UBIL\n",
        "Odvoz otpada za ožujak\n",
    );
    assert_eq!(payload.as_str(), expected);
    assert!(payload.as_str().ends_with('\n'));
    assert_eq!(payload.lines().count(), LINE_COUNT);
}

#[test]
fn test_encoding_is_deterministic() {
    let record = full_record();
    assert_eq!(encode(&record).unwrap(), encode(&record).unwrap());
}

#[test]
fn test_purpose_code_changes_exactly_one_line() {
    let without = encode(&sample_record()).unwrap();

    let mut record = sample_record();
    record.purpose_code = Some("RENT".to_string());
    let with = encode(&record).unwrap();

    let a: Vec<&str> = without.lines().collect();
    let b: Vec<&str> = with.lines().collect();
    assert_eq!(a.len(), b.len());

    let differing: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
    assert_eq!(differing, vec![12]);
    assert_eq!(b[12], "RENT");
}

#[test]
fn test_sixteen_digit_amount_is_refused() {
    let mut record = sample_record();
    record.amount = 1_234_567_890_123_456u64.into();

    let outcome = validate(&record);
    assert!(outcome.contains(&Violation::TooLong(PaymentField::Amount)));
    assert_eq!(outcome.tags(), vec!["amount-too-long".to_string()]);

    match encode(&record) {
        Err(Error::Validation(reported)) => assert_eq!(reported, outcome),
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_fifteen_digit_amount_fills_the_field() {
    let mut record = sample_record();
    record.amount = 999_999_999_999_999u64.into();
    let payload = encode(&record).unwrap();
    assert_eq!(payload.lines().nth(2), Some("999999999999999"));
}

#[test]
fn test_zero_amount() {
    let mut record = sample_record();
    record.amount = 0u64.into();
    let payload = encode(&record).unwrap();
    assert_eq!(payload.lines().nth(2), Some("000000000000000"));
}

#[test]
fn test_lowercase_iban_is_emitted_as_given() {
    let mut record = sample_record();
    record.iban = "hr1210010051863000160".to_string();
    let payload = encode(&record).unwrap();
    assert_eq!(payload.lines().nth(9), Some("hr1210010051863000160"));
}

#[test]
fn test_record_from_json_encodes() {
    let json = r#"{
        "iban": "HR1210010051863000160",
        "receiver_name": "Obrt Primjer",
        "amount": 3900,
        "payment_description": "Usluga",
        "payment_model": "00",
        "reference_number": "12345",
        "payer_name": ""
    }"#;
    let record = PaymentRecord::from_json(json).unwrap();
    assert_eq!(encode(&record).unwrap(), encode(&sample_record()).unwrap());
}
