//! Cairo short strings: up to 31 ASCII bytes packed big-endian in one felt.

use crate::errors::CodecError;
use crate::felt::Felt;

pub const MAX_SHORT_STRING_LEN: usize = 31;

pub fn encode_short_string(text: &str) -> Result<Felt, CodecError> {
    if !text.is_ascii() {
        return Err(CodecError::NotAscii(text.to_string()));
    }
    if text.len() > MAX_SHORT_STRING_LEN {
        return Err(CodecError::ShortStringTooLong(text.len()));
    }
    Felt::from_be_slice(text.as_bytes()).map_err(|_| CodecError::ShortStringTooLong(text.len()))
}

pub fn decode_short_string(felt: &Felt) -> Result<String, CodecError> {
    let bytes = felt.to_be_bytes();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let packed = &bytes[start..];

    if packed.len() > MAX_SHORT_STRING_LEN {
        return Err(CodecError::NotShortString);
    }
    if !packed.is_ascii() {
        return Err(CodecError::NotAscii(String::from_utf8_lossy(packed).into_owned()));
    }

    Ok(packed.iter().map(|b| *b as char).collect())
}
