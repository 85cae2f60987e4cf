use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Short string is not ASCII: {0:?}")]
    NotAscii(String),

    #[error("Short string is {0} bytes long, at most 31 fit in a field element")]
    ShortStringTooLong(usize),

    #[error("Field element does not hold a short string")]
    NotShortString,

    #[error("Unsupported character {ch:?} in label {label:?}")]
    UnsupportedCharacter { label: String, ch: char },

    #[error("Label {0:?} does not fit in a field element")]
    LabelTooLong(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("{0}")]
    ContractCall(String),

    #[error("Offchain query to {uri} failed: {reason}")]
    OffchainQuery { uri: String, reason: String },

    #[error("Could not resolve domain on URI {uri} : {reason}")]
    HintRejected { uri: String, reason: String },

    #[error("Could not resolve domain with any provided URI{}", last_error_suffix(.last_error))]
    Exhausted { last_error: Option<String> },
}

fn last_error_suffix(last_error: &Option<String>) -> String {
    match last_error {
        Some(e) => format!(" (last error: {})", e),
        None => String::new(),
    }
}

impl From<CodecError> for ResolutionError {
    fn from(e: CodecError) -> Self {
        ResolutionError::InvalidDomain(e.to_string())
    }
}
