//! Property tests for payload-unit accounting and payload layout

use hub3_codec::charset::{payload_length, transliterate};
use hub3_codec::{encode_with, PaymentRecord, ValidationPolicy};
use proptest::prelude::*;

proptest! {
    #[test]
    fn ascii_text_counts_one_unit_per_char(s in "[A-Za-z0-9 ,.:+?'/()-]{0,64}") {
        prop_assert_eq!(payload_length(&s), Some(s.chars().count()));
    }

    #[test]
    fn diacritics_count_two_units(s in "[ŠĐČĆŽšđčćž]{0,32}") {
        prop_assert_eq!(payload_length(&s), Some(2 * s.chars().count()));
    }

    #[test]
    fn length_is_additive(a in "[A-Za-zČćŽ ]{0,20}", b in "[A-Za-zŠđ .]{0,20}") {
        let joined = format!("{}{}", a, b);
        prop_assert_eq!(
            payload_length(&joined),
            Some(payload_length(&a).unwrap() + payload_length(&b).unwrap())
        );
    }

    #[test]
    fn foreign_character_poisons_length(
        prefix in "[A-Za-z ]{0,10}",
        foreign in "[\\n\\t#_%€😀äß]",
        suffix in "[A-Za-z ]{0,10}",
    ) {
        let value = format!("{}{}{}", prefix, foreign, suffix);
        prop_assert_eq!(payload_length(&value), None);
    }

    #[test]
    fn transliteration_keeps_char_count(s in "[A-Za-zŠĐČĆŽšđčćž ]{0,40}") {
        let folded = transliterate(&s);
        prop_assert_eq!(folded.chars().count(), s.chars().count());
        prop_assert!(folded.is_ascii());
    }

    #[test]
    fn encoded_payload_always_has_fourteen_lines(
        name in "[A-Za-z ]{1,30}",
        description in "[A-Za-z ]{1,35}",
        cents in 0u64..=999_999_999_999_999,
    ) {
        let record = PaymentRecord::builder()
            .iban("HR1210010051863000160")
            .receiver_name(name)
            .amount(cents)
            .payment_description(description)
            .payment_model("00")
            .reference_number("1")
            .build();

        let payload = encode_with(&record, &ValidationPolicy::default()).unwrap();
        prop_assert_eq!(payload.lines().count(), 14);
        prop_assert!(payload.as_str().ends_with('\n'));

        let amount_line = payload.lines().nth(2).unwrap();
        prop_assert_eq!(amount_line.len(), 15);
        prop_assert_eq!(amount_line.parse::<u64>().unwrap(), cents);
    }
}
