//! Integration tests for the card number and CVV formatters
//!
//! Covers the documented examples plus the drop-after-sixteen behaviour
//! that the field exhibits while the user keeps typing.

use card_field_format::{format_card_number, format_cvv};

#[test]
fn test_card_number_documented_examples() {
    let cases = vec![
        ("4111111111111111", "4111 1111 1111 1111"),
        ("4111-1111 1111a1111", "4111 1111 1111 1111"),
        ("123", "123"),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(format_card_number(input), expected, "Failed to format: {:?}", input);
    }
}

#[test]
fn test_card_number_common_pan_shapes() {
    // 15-digit Amex and 13-digit legacy Visa still group by four
    assert_eq!(format_card_number("378282246310005"), "3782 8224 6310 005");
    assert_eq!(format_card_number("4222222222222"), "4222 2222 2222 2");
    // 19-digit PANs lose their tail
    assert_eq!(
        format_card_number("6011000990139424123"),
        "6011 0009 9013 9424"
    );
}

#[test]
fn test_card_number_with_only_noise_is_empty() {
    for input in ["abcd", "----", "    ", "\u{00a0}\u{2003}", "€$"] {
        assert_eq!(format_card_number(input), "", "Expected empty for {:?}", input);
    }
}

#[test]
fn test_card_number_pasted_with_labels() {
    assert_eq!(
        format_card_number("Card: 5555 5555 5555 4444 (exp 12/30)"),
        "5555 5555 5555 4444"
    );
}

#[test]
fn test_cvv_documented_examples() {
    assert_eq!(format_cvv("12a3"), "123");
    assert_eq!(format_cvv("123456"), "1234");
}

#[test]
fn test_cvv_edge_cases() {
    assert_eq!(format_cvv(""), "");
    assert_eq!(format_cvv("1"), "1");
    assert_eq!(format_cvv("12 34"), "1234");
    assert_eq!(format_cvv("x9y8z7w6v5"), "9876");
    assert_eq!(format_cvv("١٢٣"), "");
}
