use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    OnChain,
    Offchain { uri: String },
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnChain => write!(f, "on-chain"),
            Self::Offchain { uri } => write!(f, "offchain ({})", uri),
        }
    }
}

/// A resolved address or stark name and where the answer came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: String,
    pub source: ResolutionSource,
}

impl Resolution {
    pub fn on_chain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ResolutionSource::OnChain,
        }
    }

    pub fn offchain(value: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ResolutionSource::Offchain { uri: uri.into() },
        }
    }

    pub fn used_offchain(&self) -> bool {
        matches!(self.source, ResolutionSource::Offchain { .. })
    }
}
