//! Stark name label encoding.
//!
//! Each label is one felt written as little-endian base-38 digits. Digits
//! `0..37` index the basic alphabet; digit 37 escapes into the big alphabet.
//! A label ending in `a` would lose its last digit (zero), so a final `a` is
//! written as a bare escape with nothing after it.
//!
//! After an escape, the remaining value `r` tells the cases apart:
//! - `r < 3`: the label ends here, `0` is `a` and `1..=2` is big symbol `r - 1`
//! - otherwise: big symbol `r % 2`, decoding continues with `r / 2`
//!
//! Those two readings collide for some suffixes, so before encoding a
//! trailing run of `k` `来` becomes `2k - 1` of them and a trailing `这b`
//! after `k` `来` becomes `2(k + 1)` of them. Decoding undoes it by parity.

use crate::errors::CodecError;
use crate::felt::Felt;
use alloy_primitives::U256;
use std::borrow::Cow;
use std::sync::Arc;

pub const BASIC_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789-";
pub const BIG_ALPHABET: &str = "这来";
pub const ROOT_LABEL: &str = "stark";
pub const LABEL_SEPARATOR: char = '.';

const BASIC_SIZE: u64 = 37;
const BASIC_BASE: u64 = BASIC_SIZE + 1;
const BIG_SIZE: u64 = 2;
const BIG_FINAL_BASE: u64 = BIG_SIZE + 1;

const BIG_LAST: char = '来';
const PAIR_SUFFIX: &str = "这b";

/// Felts for the labels of a domain, root label excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedDomain(Arc<[Felt]>);

impl EncodedDomain {
    pub fn as_slice(&self) -> &[Felt] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Felt> {
        self.0.iter()
    }
}

fn basic_index(ch: char) -> Option<u64> {
    BASIC_ALPHABET.chars().position(|c| c == ch).map(|i| i as u64)
}

fn big_index(ch: char) -> Option<u64> {
    BIG_ALPHABET.chars().position(|c| c == ch).map(|i| i as u64)
}

fn trailing_last_big(label: &str) -> (&str, usize) {
    let stem = label.trim_end_matches(BIG_LAST);
    (stem, label[stem.len()..].chars().count())
}

fn last_big_run(count: usize) -> String {
    std::iter::repeat(BIG_LAST).take(count).collect()
}

fn expand_suffix(label: &str) -> Cow<'_, str> {
    if let Some(head) = label.strip_suffix(PAIR_SUFFIX) {
        let (stem, run) = trailing_last_big(head);
        return Cow::Owned(format!("{}{}", stem, last_big_run(2 * (run + 1))));
    }

    match trailing_last_big(label) {
        (_, 0) => Cow::Borrowed(label),
        (stem, run) => Cow::Owned(format!("{}{}", stem, last_big_run(2 * run - 1))),
    }
}

fn collapse_suffix(decoded: String) -> String {
    let (stem, run) = trailing_last_big(&decoded);
    if run == 0 {
        return decoded;
    }
    if run % 2 == 0 {
        format!("{}{}{}", stem, last_big_run(run / 2 - 1), PAIR_SUFFIX)
    } else {
        format!("{}{}", stem, last_big_run((run - 1) / 2 + 1))
    }
}

struct DigitWriter {
    value: U256,
    // None once the weight of the next digit overflows.
    weight: Option<U256>,
}

impl DigitWriter {
    fn new() -> Self {
        Self {
            value: U256::ZERO,
            weight: Some(U256::from(1u8)),
        }
    }

    fn push(&mut self, digit: u64, base: u64) -> Option<()> {
        let weight = self.weight?;
        let term = weight.checked_mul(U256::from(digit))?;
        self.value = self.value.checked_add(term)?;
        self.weight = weight.checked_mul(U256::from(base));
        Some(())
    }
}

pub fn encode_label(label: &str) -> Result<Felt, CodecError> {
    let too_long = || CodecError::LabelTooLong(label.to_string());

    if let Some(ch) = label
        .chars()
        .find(|&c| basic_index(c).is_none() && big_index(c).is_none())
    {
        return Err(CodecError::UnsupportedCharacter {
            label: label.to_string(),
            ch,
        });
    }

    let expanded = expand_suffix(label);
    let chars: Vec<char> = expanded.chars().collect();
    let mut writer = DigitWriter::new();

    for (i, &ch) in chars.iter().enumerate() {
        let is_last = i + 1 == chars.len();

        if let Some(index) = basic_index(ch) {
            let digit = if is_last && index == 0 { BASIC_SIZE } else { index };
            writer.push(digit, BASIC_BASE).ok_or_else(too_long)?;
        } else if let Some(index) = big_index(ch) {
            writer.push(BASIC_SIZE, BASIC_BASE).ok_or_else(too_long)?;
            let digit = if is_last { index + 1 } else { index };
            writer.push(digit, BIG_SIZE).ok_or_else(too_long)?;
        }
    }

    Felt::from_u256(writer.value).map_err(|_| too_long())
}

fn low_digit(value: U256, base: U256) -> usize {
    // always below `base`, which is tiny
    (value % base).as_limbs()[0] as usize
}

/// Every felt decodes to some label; values no encoder produces still map to
/// a string.
pub fn decode_label(felt: &Felt) -> String {
    let basic: Vec<char> = BASIC_ALPHABET.chars().collect();
    let big: Vec<char> = BIG_ALPHABET.chars().collect();
    let basic_base = U256::from(BASIC_BASE);
    let big_base = U256::from(BIG_SIZE);
    let big_final_base = U256::from(BIG_FINAL_BASE);

    let mut rest = felt.as_u256();
    let mut decoded = String::new();

    while !rest.is_zero() {
        let code = low_digit(rest, basic_base);
        rest /= basic_base;

        if code < BASIC_SIZE as usize {
            decoded.push(basic[code]);
            continue;
        }

        if (rest / big_final_base).is_zero() {
            match low_digit(rest, big_final_base) {
                0 => decoded.push(basic[0]),
                n => decoded.push(big[n - 1]),
            }
            break;
        }

        decoded.push(big[low_digit(rest, big_base)]);
        rest /= big_base;
    }

    collapse_suffix(decoded)
}

/// Encodes `alice.notion.stark` as `[alice, notion]`. An empty domain
/// encodes to a single zero felt.
pub fn encode_domain(domain: &str) -> Result<EncodedDomain, CodecError> {
    let without_root = strip_root(domain);

    let felts = without_root
        .split(LABEL_SEPARATOR)
        .map(encode_label)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EncodedDomain(felts.into()))
}

/// Inverse of [`encode_domain`]: labels joined and the `.stark` root appended.
pub fn decode_domain(elements: &[Felt]) -> String {
    let labels = decode_labels(elements);
    if labels.is_empty() {
        return labels;
    }
    format!("{}{}{}", labels, LABEL_SEPARATOR, ROOT_LABEL)
}

/// Labels joined with the separator, without the root label.
pub fn decode_labels(elements: &[Felt]) -> String {
    elements
        .iter()
        .map(decode_label)
        .collect::<Vec<_>>()
        .join(&LABEL_SEPARATOR.to_string())
}

fn strip_root(domain: &str) -> &str {
    domain
        .strip_suffix(ROOT_LABEL)
        .and_then(|d| d.strip_suffix(LABEL_SEPARATOR))
        .unwrap_or(domain)
}
