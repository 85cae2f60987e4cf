//! Decoding of the naming contract's "offchain resolving required" revert.
//!
//! The revert reason is a list of felts embedded in whatever text the
//! execution environment produced. Layout:
//!
//! ```text
//! error_kind, N, label_1 .. label_N, M_1, uri_part .. (M_1 parts), M_2, ...
//! ```

use crate::domain_codec::{decode_labels, encode_label, LABEL_SEPARATOR};
use crate::errors::CodecError;
use crate::felt::Felt;
use crate::short_string::{decode_short_string, encode_short_string, MAX_SHORT_STRING_LEN};
use fancy_regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

pub const OFFCHAIN_RESOLVING: &str = "offchain_resolving";

static PARENTHESIZED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Execution failed\. Failure reason: \((.*?)\)\.").expect("valid regex")
});

static BRACKETED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)Execution was reverted; failure reason: \[(.*?)\]").expect("valid regex")
});

static LEGACY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)Failure reason: "(.*?)""#).expect("valid regex"));

static HEX_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)0x[0-9a-f]+").expect("valid regex"));

static DECIMAL_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("valid regex"));

/// Wrapper formats used by the different execution environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevertGrammar {
    /// `Execution failed. Failure reason: (a, b, ...).`
    Parenthesized,
    /// `Execution was reverted; failure reason: [a, b, ...]`
    Bracketed,
    /// `Failure reason: "a, b, ..."`
    Legacy,
}

impl RevertGrammar {
    /// Trial order.
    pub const PRIORITY: [RevertGrammar; 3] = [
        RevertGrammar::Parenthesized,
        RevertGrammar::Bracketed,
        RevertGrammar::Legacy,
    ];

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Parenthesized => &*PARENTHESIZED,
            Self::Bracketed => &*BRACKETED,
            Self::Legacy => &*LEGACY,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parenthesized => "parenthesized",
            Self::Bracketed => "bracketed",
            Self::Legacy => "legacy",
        }
    }

    /// The list body inside the wrapper, if the wrapper is present.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        let captures = self.pattern().captures(text).ok()??;
        captures.get(1).map(|m| m.as_str())
    }

    /// Fixture encoder: renders `tokens` the way this execution environment
    /// reports them. The resolver never calls it; tests and mock nodes use it
    /// to produce revert texts for [`decode_revert`].
    pub fn render(&self, tokens: &[Felt]) -> String {
        let list = tokens
            .iter()
            .map(Felt::to_hex)
            .collect::<Vec<_>>()
            .join(", ");
        match self {
            Self::Parenthesized => format!("Execution failed. Failure reason: ({}).", list),
            Self::Bracketed => format!("Execution was reverted; failure reason: [{}].", list),
            Self::Legacy => format!("Failure reason: \"{}\".", list),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevertPayload {
    pub error_kind: String,
    pub domain_slice: String,
    pub uris: Vec<String>,
    pub grammar: RevertGrammar,
}

impl RevertPayload {
    pub fn is_offchain_resolving(&self) -> bool {
        self.error_kind == OFFCHAIN_RESOLVING
    }

    /// Fixture encoder: the felt layout the naming contract reverts with,
    /// inverse of [`decode_revert`]. Only tests and mock nodes build payloads.
    pub fn to_tokens(&self) -> Result<Vec<Felt>, CodecError> {
        let mut tokens = vec![encode_short_string(&self.error_kind)?];

        let labels = if self.domain_slice.is_empty() {
            vec![]
        } else {
            self.domain_slice.split(LABEL_SEPARATOR).collect()
        };
        tokens.push(Felt::from(labels.len() as u64));
        for label in labels {
            tokens.push(encode_label(label)?);
        }

        for uri in &self.uris {
            if !uri.is_ascii() {
                return Err(CodecError::NotAscii(uri.clone()));
            }
            let parts = uri
                .as_bytes()
                .chunks(MAX_SHORT_STRING_LEN)
                .map(|chunk| encode_short_string(&String::from_utf8_lossy(chunk)))
                .collect::<Result<Vec<_>, _>>()?;
            tokens.push(Felt::from(parts.len() as u64));
            tokens.extend(parts);
        }

        Ok(tokens)
    }
}

/// Returns `None` for any text that does not carry a well-formed payload,
/// including every ordinary contract failure.
pub fn decode_revert(text: &str) -> Option<RevertPayload> {
    RevertGrammar::PRIORITY.iter().find_map(|grammar| {
        let body = grammar.extract(text)?;
        let payload = tokenize(body).and_then(|tokens| decode_tokens(&tokens, *grammar));

        if payload.is_none() {
            debug!(grammar = grammar.as_str(), "Revert wrapper matched but payload is malformed");
        }
        payload
    })
}

pub fn tokenize(body: &str) -> Option<Vec<Felt>> {
    body.split(',').map(|token| parse_token(token.trim())).collect()
}

fn parse_token(token: &str) -> Option<Felt> {
    let numeral = match HEX_NUMERAL.find(token).ok()? {
        Some(m) => m.as_str(),
        None => DECIMAL_NUMERAL.find(token).ok()??.as_str(),
    };
    Felt::parse(numeral).ok()
}

struct TokenCursor<'a> {
    tokens: &'a [Felt],
    pos: usize,
}

impl<'a> TokenCursor<'a> {
    fn new(tokens: &'a [Felt]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn next(&mut self) -> Option<&'a Felt> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn take(&mut self, count: usize) -> Option<&'a [Felt]> {
        let end = self.pos.checked_add(count)?;
        let slice = self.tokens.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    /// Reads a length prefix followed by that many tokens.
    fn span(&mut self) -> Option<&'a [Felt]> {
        let len = self.next()?.to_usize()?;
        self.take(len)
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

fn decode_tokens(tokens: &[Felt], grammar: RevertGrammar) -> Option<RevertPayload> {
    let mut cursor = TokenCursor::new(tokens);

    let error_kind = decode_short_string(cursor.next()?).ok()?;

    let domain_slice = decode_labels(cursor.span()?);

    let mut uris = Vec::new();
    while !cursor.is_exhausted() {
        let uri = cursor
            .span()?
            .iter()
            .map(|felt| decode_short_string(felt).ok())
            .collect::<Option<String>>()?;
        uris.push(uri);
    }

    Some(RevertPayload {
        error_kind,
        domain_slice,
        uris,
        grammar,
    })
}
