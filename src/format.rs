// SPDX-License-Identifier: MPL-2.0
//! Masking and formatting helpers for account data shown in the UI.
//!
//! All functions here are total: malformed input is returned masked as a
//! whole rather than rejected, so render code never has to handle errors.

/// Masks an email address, keeping the first character of the local part
/// and the full domain: `alice@example.com` -> `a****@example.com`.
///
/// Input without an `@` is fully masked.
#[must_use]
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{first}****@{domain}")
        }
        _ => "*".repeat(email.chars().count().max(4)),
    }
}

/// Masks a phone number, keeping only the last two digits.
/// Non-digit separators are preserved so the shape stays recognizable.
#[must_use]
pub fn mask_phone(phone: &str) -> String {
    let digit_count = phone.chars().filter(char::is_ascii_digit).count();
    if digit_count <= 2 {
        return "*".repeat(phone.chars().count().max(4));
    }

    let mut digits_seen = 0;
    phone
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                digits_seen += 1;
                if digits_seen > digit_count - 2 {
                    c
                } else {
                    '*'
                }
            } else {
                c
            }
        })
        .collect()
}

/// Masks a billing account reference, keeping only the last four
/// characters: `FR76-3000-6000-0112` -> `•••• 0112`.
#[must_use]
pub fn mask_account(account: &str) -> String {
    let compact: String = account.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    if compact.len() <= 4 {
        return "•••• ????".to_string();
    }
    let tail: String = compact.chars().skip(compact.len() - 4).collect();
    format!("•••• {tail}")
}

/// Formats an amount in minor units (cents) as a currency string with a
/// thin-space thousands separator: `123456` -> `1 234.56 €`.
#[must_use]
pub fn format_currency(minor_units: i64, symbol: &str) -> String {
    let negative = minor_units < 0;
    let abs = minor_units.unsigned_abs();
    let whole = abs / 100;
    let cents = abs % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('\u{202f}');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{cents:02}\u{202f}{symbol}")
}
