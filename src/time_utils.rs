// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date and number formatting.

use chrono::NaiveDate;

/// Format a calendar date the way the activity card shows it,
/// e.g. "Wed, Jan 15".
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

/// Format an integer with thousands separators, e.g. 12000 -> "12,000".
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
