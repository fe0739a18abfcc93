// Copyright 2026 the Karta Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric coercion and display formatting for field values.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::diag::{DiagnosticCode, Diagnostics};
use crate::record::{Dataset, FieldValue, Record};

/// Extracts a finite number from `record[key]`.
///
/// Finite numbers pass through. Text is cleaned of thousands separators,
/// currency symbols, percent signs and whitespace, then parsed as a float.
/// Anything else (including non-finite numbers) substitutes `0` and reports a
/// [`DiagnosticCode::CoercionFailure`] naming the key and the offending
/// value. Never fails the caller's pass.
pub fn coerce_number(record: &Record, key: &str, diags: &mut Diagnostics) -> f64 {
    match record.field(key) {
        FieldValue::Number(n) if n.is_finite() => *n,
        FieldValue::Text(s) => {
            let cleaned: String = s.chars().filter(|c| !is_stripped(*c)).collect();
            match cleaned.parse::<f64>() {
                Ok(n) if n.is_finite() => n,
                _ => {
                    diags.report(
                        DiagnosticCode::CoercionFailure,
                        key,
                        format!("text {s:?}"),
                    );
                    0.0
                }
            }
        }
        other => {
            diags.report(
                DiagnosticCode::CoercionFailure,
                key,
                match other {
                    FieldValue::Number(n) => format!("non-finite number {n}"),
                    _ => String::from(other.type_name()),
                },
            );
            0.0
        }
    }
}

/// Coerces `key` across a whole dataset, in record order.
pub fn coerce_values(data: &Dataset, key: &str, diags: &mut Diagnostics) -> Vec<f64> {
    data.iter()
        .map(|record| coerce_number(record, key, diags))
        .collect()
}

// Thousands separators, currency symbols, percent signs, whitespace.
fn is_stripped(c: char) -> bool {
    matches!(c, ',' | '$' | '€' | '£' | '¥' | '%') || c.is_whitespace()
}

/// Formats a number for display.
///
/// Magnitudes of a million and above render as `{n/1e6:.1}M`, thousands as
/// `{n/1e3:.1}K`, everything else as a comma-grouped decimal with at most
/// three fraction digits (trailing zeros trimmed).
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value}");
    }
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        return format!("{:.1}M", value / 1_000_000.0);
    }
    if abs >= 1_000.0 {
        return format!("{:.1}K", value / 1_000.0);
    }
    group_thousands(value)
}

/// Formats any field value for display.
///
/// Numbers go through [`format_number`]; text is passed through as-is;
/// missing values render as the empty string.
pub fn format_field(value: &FieldValue) -> String {
    match value {
        FieldValue::Number(n) => format_number(*n),
        FieldValue::Text(s) => s.clone(),
        FieldValue::Missing => String::new(),
    }
}

fn group_thousands(value: f64) -> String {
    // Let core's float formatting do the rounding, then regroup the digits.
    let rendered = format!("{value:.3}");
    let (int_part, frac_part) = rendered
        .split_once('.')
        .unwrap_or((rendered.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + frac.len() + 2);
    grouped.push_str(sign);
    let first_group = match digits.len() % 3 {
        0 => 3,
        n => n,
    };
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn record_with(value: impl Into<FieldValue>) -> Record {
        Record::new().with_field("a", value)
    }

    #[test]
    fn finite_numbers_pass_through() {
        let mut diags = Diagnostics::new();
        assert_eq!(coerce_number(&record_with(42.5), "a", &mut diags), 42.5);
        assert!(diags.is_empty());
    }

    #[test]
    fn currency_text_parses() {
        let mut diags = Diagnostics::new();
        assert_eq!(coerce_number(&record_with("$1,200"), "a", &mut diags), 1200.0);
        assert_eq!(coerce_number(&record_with("45%"), "a", &mut diags), 45.0);
        assert_eq!(coerce_number(&record_with(" 3.5 "), "a", &mut diags), 3.5);
        assert_eq!(coerce_number(&record_with("-€2,000.25"), "a", &mut diags), -2000.25);
        assert!(diags.is_empty());
    }

    #[test]
    fn garbage_substitutes_zero_and_reports() {
        let mut diags = Diagnostics::new();
        assert_eq!(coerce_number(&record_with("n/a"), "a", &mut diags), 0.0);
        assert_eq!(coerce_number(&Record::new(), "a", &mut diags), 0.0);
        assert_eq!(coerce_number(&record_with(f64::NAN), "a", &mut diags), 0.0);
        assert_eq!(diags.len(), 3);
        assert!(
            diags
                .entries()
                .iter()
                .all(|d| d.code == DiagnosticCode::CoercionFailure && d.key == "a"),
            "every entry should be a coercion failure on key 'a'"
        );
        assert_eq!(diags.entries()[1].value, "missing");
    }

    #[test]
    fn coerce_values_keeps_record_order() {
        let data = Dataset::from_records(vec![
            record_with(1.0),
            record_with("2"),
            record_with("bad"),
        ]);
        let mut diags = Diagnostics::new();
        assert_eq!(coerce_values(&data, "a", &mut diags), vec![1.0, 2.0, 0.0]);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn format_number_compacts_magnitudes() {
        assert_eq!(format_number(1_500_000.0), "1.5M");
        assert_eq!(format_number(-2_000_000.0), "-2.0M");
        assert_eq!(format_number(12_500.0), "12.5K");
        assert_eq!(format_number(1_000.0), "1.0K");
        assert_eq!(format_number(950.0), "950");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn format_number_groups_thousands_below_the_k_threshold() {
        // Grouping only shows up for fractional renderings that stay under
        // 1,000 in magnitude, and for the plain integer path.
        assert_eq!(format_number(999.25), "999.25");
        assert_eq!(format_number(-31.125), "-31.125");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn group_thousands_inserts_commas() {
        assert_eq!(group_thousands(1234.0), "1,234");
        assert_eq!(group_thousands(-1234567.89), "-1,234,567.89");
        assert_eq!(group_thousands(12.0), "12");
    }

    #[test]
    fn format_field_stringifies_non_numbers_as_is() {
        assert_eq!(format_field(&FieldValue::Text("Q3".to_string())), "Q3");
        assert_eq!(format_field(&FieldValue::Missing), "");
        assert_eq!(format_field(&FieldValue::Number(1_500_000.0)), "1.5M");
    }
}
