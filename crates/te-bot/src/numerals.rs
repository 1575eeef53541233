//! Numeral words in command text.
//!
//! Players write counts as `梭哈三次`, `梭哈十五`, `梭哈③` or `梭哈５`. A
//! fixed table maps those spellings to digits before the count is read.

use std::sync::LazyLock;

use regex::Regex;

/// Spellings replaced by their value. At each position the longest
/// matching spelling wins, so `十一` reads as 11 rather than `10` then `1`.
const NUMERALS: &[(&str, u32)] = &[
    ("零", 0),
    ("一", 1),
    ("二", 2),
    ("两", 2),
    ("俩", 2),
    ("三", 3),
    ("四", 4),
    ("五", 5),
    ("六", 6),
    ("七", 7),
    ("八", 8),
    ("九", 9),
    ("十", 10),
    ("十一", 11),
    ("十二", 12),
    ("十三", 13),
    ("十四", 14),
    ("十五", 15),
    ("十六", 16),
    ("十七", 17),
    ("十八", 18),
    ("十九", 19),
    ("二十", 20),
    ("①", 1),
    ("②", 2),
    ("③", 3),
    ("④", 4),
    ("⑤", 5),
    ("⑥", 6),
    ("⑦", 7),
    ("⑧", 8),
    ("⑨", 9),
    ("⑩", 10),
    ("０", 0),
    ("１", 1),
    ("２", 2),
    ("３", 3),
    ("４", 4),
    ("５", 5),
    ("６", 6),
    ("７", 7),
    ("８", 8),
    ("９", 9),
];

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new("[0-9]+").expect("static regex"));

/// Replace numeral words with ASCII digits.
pub fn normalize_numerals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        let longest = NUMERALS
            .iter()
            .filter(|(word, _)| rest.starts_with(*word))
            .max_by_key(|(word, _)| word.len());

        match longest {
            Some((word, value)) => {
                out.push_str(&value.to_string());
                rest = &rest[word.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

/// The first number in `text` after numeral substitution.
///
/// Numbers too large for `u32` saturate to `u32::MAX`.
pub fn extract_number(text: &str) -> Option<u32> {
    let normalized = normalize_numerals(text);
    DIGITS
        .find(&normalized)
        .map(|m| m.as_str().parse().unwrap_or(u32::MAX))
}
