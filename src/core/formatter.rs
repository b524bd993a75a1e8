//! Card number and CVV formatting
//!
//! Both formatters are pure string transformations applied to the raw value
//! of an input field on every keystroke. Malformed input is sanitized, never
//! rejected.

use crate::domain::model::FieldKind;
use crate::domain::ports::FieldFormatter;
use regex::Regex;
use std::sync::LazyLock;

pub const CARD_GROUP_SIZE: usize = 4;
pub const CARD_RUN_MIN: usize = 4;
pub const CARD_RUN_MAX: usize = 16;
pub const CVV_MAX_DIGITS: usize = 4;

// Only ever matched against ASCII digits, so `[0-9]` and `\d` agree here.
static CARD_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[0-9]{{{},{}}}", CARD_RUN_MIN, CARD_RUN_MAX))
        .expect("card run pattern is a valid regex")
});

/// Formats a card number field value as space-separated groups of four.
///
/// Whitespace and every non-ASCII-digit character are dropped first. The
/// first run of 4 to 16 digits is then grouped; digits beyond the 16th are
/// discarded. Fewer than four digits are returned as-is.
///
/// ```
/// use card_field_format::format_card_number;
///
/// assert_eq!(format_card_number("4111-1111 1111a1111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("12"), "12");
/// ```
pub fn format_card_number(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(char::is_ascii_digit)
        .collect();

    match CARD_RUN.find(&cleaned) {
        Some(run) => group_digits(run.as_str(), CARD_GROUP_SIZE),
        None => cleaned,
    }
}

/// Keeps the first four ASCII digits of a CVV field value.
///
/// ```
/// use card_field_format::format_cvv;
///
/// assert_eq!(format_cvv("12a3"), "123");
/// assert_eq!(format_cvv("123456"), "1234");
/// ```
pub fn format_cvv(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(CVV_MAX_DIGITS)
        .collect()
}

fn group_digits(digits: &str, size: usize) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / size);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % size == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardNumberFormatter;

impl FieldFormatter for CardNumberFormatter {
    fn kind(&self) -> FieldKind {
        FieldKind::CardNumber
    }

    fn format(&self, raw: &str) -> String {
        format_card_number(raw)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CvvFormatter;

impl FieldFormatter for CvvFormatter {
    fn kind(&self) -> FieldKind {
        FieldKind::Cvv
    }

    fn format(&self, raw: &str) -> String {
        format_cvv(raw)
    }
}

static CARD_NUMBER_FORMATTER: CardNumberFormatter = CardNumberFormatter;
static CVV_FORMATTER: CvvFormatter = CvvFormatter;

pub fn formatter_for(kind: FieldKind) -> &'static dyn FieldFormatter {
    match kind {
        FieldKind::CardNumber => &CARD_NUMBER_FORMATTER,
        FieldKind::Cvv => &CVV_FORMATTER,
    }
}
