//! Token-to-value mappings for both sources.
//!
//! Every mapping is strict: a token that is not in the table is reported
//! as a [`FormatError`](mhw_sharpness_core::FormatError) naming the weapon,
//! never replaced by a default.

pub mod api;
pub mod html;

use std::num::ParseIntError;

/// Split a token such as `"Poison Phial 300"` or `"毒300"` at its first
/// ASCII digit.
///
/// The prefix is returned trimmed. Tokens without any digit yield the whole
/// (trimmed) token and a value of 0, since not every variant carries a
/// number. Digits followed by anything non-numeric are an error.
pub fn split_numeric_suffix(token: &str) -> Result<(&str, i32), ParseIntError> {
    match token.find(|c: char| c.is_ascii_digit()) {
        Some(index) => {
            let value = token[index..].trim().parse()?;
            Ok((token[..index].trim(), value))
        }
        None => Ok((token.trim(), 0)),
    }
}

/// The first run of ASCII digits in `text`, e.g. `20` for `"防御+20"`.
pub fn first_number(text: &str) -> Option<i32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let rest = &text[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}
