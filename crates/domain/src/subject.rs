use crate::domain_codec::{encode_domain, LABEL_SEPARATOR};
use crate::errors::ResolutionError;
use crate::felt::Felt;
use fancy_regex::Regex;
use std::fmt;
use std::sync::{Arc, LazyLock};

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]+$").expect("valid regex"));

/// What the caller asked to resolve, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSubject {
    Domain(Arc<str>),
    Address(Felt),
}

impl ResolutionSubject {
    /// Accepts `label(.label)*.{parent}` where every label is non-empty and
    /// drawn from the naming alphabets.
    pub fn domain(input: &str, parent: &str) -> Result<Self, ResolutionError> {
        let invalid = || {
            ResolutionError::InvalidInput(format!(
                "\"{}\" is not a valid subdomain of {}",
                input, parent
            ))
        };

        let sub = input
            .strip_suffix(parent)
            .and_then(|d| d.strip_suffix(LABEL_SEPARATOR))
            .ok_or_else(invalid)?;

        if sub.split(LABEL_SEPARATOR).any(str::is_empty) {
            return Err(invalid());
        }
        encode_domain(input).map_err(|_| invalid())?;

        Ok(Self::Domain(Arc::from(input)))
    }

    pub fn address(input: &str) -> Result<Self, ResolutionError> {
        Self::parse_address(input).map(Self::Address)
    }

    /// `0x`-prefixed hex that fits in a field element.
    pub fn parse_address(input: &str) -> Result<Felt, ResolutionError> {
        let invalid =
            || ResolutionError::InvalidInput(format!("\"{}\" is not a valid starknet address", input));

        if !ADDRESS_PATTERN.is_match(input).unwrap_or(false) {
            return Err(invalid());
        }
        Felt::parse(input).map_err(|_| invalid())
    }
}

impl fmt::Display for ResolutionSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(domain) => write!(f, "{}", domain),
            Self::Address(address) => write!(f, "{}", address),
        }
    }
}
