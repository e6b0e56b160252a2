use fractic_server_error::ServerError;

use crate::errors::InvalidCardNumber;

/// Emitted in place of an account that the operation does not carry.
pub const MISSING_ACCOUNT_PLACEHOLDER: &str = "None";

/// Identifiers up to this many characters are shown as-is.
const MASK_THRESHOLD: usize = 8;
const ACCOUNT_LABEL: &str = "Счет";
const VISIBLE_TAIL: usize = 4;

/// Last `n` characters of `s` (all of `s` if it is shorter).
fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    s.char_indices()
        .nth(count - n)
        .map_or(s, |(i, _)| &s[i..])
}

fn mask_account(identifier: &str) -> String {
    format!("{} **{}", ACCOUNT_LABEL, last_chars(identifier, VISIBLE_TAIL))
}

/// Mask a destination identifier. Long identifiers are always treated as
/// accounts.
pub(crate) fn mask_destination(to: &str) -> String {
    if to.chars().count() > MASK_THRESHOLD {
        mask_account(to)
    } else {
        to.to_string()
    }
}

/// Mask a source identifier: either an account ("Счет <number>") or a card
/// ("<issuer label> <number>").
pub(crate) fn mask_source(from: &str) -> Result<String, ServerError> {
    if from.chars().count() <= MASK_THRESHOLD {
        return Ok(from.to_string());
    }
    if from.split(' ').next() == Some(ACCOUNT_LABEL) {
        return Ok(mask_account(from));
    }
    let (label, number) = from.rsplit_once(' ').unwrap_or(("", from));
    let masked = mask_card_number(number)?;
    Ok(if label.is_empty() {
        masked
    } else {
        format!("{} {}", label, masked)
    })
}

/// "7000792289606361" -> "7000 79** **** 6361".
fn mask_card_number(number: &str) -> Result<String, ServerError> {
    let digits: Vec<char> = number.chars().collect();
    if digits.len() < 8 {
        return Err(InvalidCardNumber::new(digits.len()));
    }
    let head: String = digits[..4].iter().collect();
    let next: String = digits[4..6].iter().collect();
    let tail: String = digits[digits.len() - VISIBLE_TAIL..].iter().collect();
    Ok(format!("{} {}** **** {}", head, next, tail))
}
