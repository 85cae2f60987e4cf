use crate::felt::Felt;
use serde::{Deserialize, Serialize};

/// Server-issued assertion the naming contract verifies before using it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionHint {
    pub address: Felt,
    pub r: Felt,
    pub s: Felt,
    pub max_validity: Felt,
}

impl ResolutionHint {
    pub fn to_calldata(&self) -> [Felt; 4] {
        [self.address, self.r, self.s, self.max_validity]
    }
}

/// Body of a successful offchain server response. Every field is required;
/// each may be a numeral string or a JSON integer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OffchainResponse {
    pub address: Felt,
    pub r: Felt,
    pub s: Felt,
    pub max_validity: Felt,
}

impl From<OffchainResponse> for ResolutionHint {
    fn from(response: OffchainResponse) -> Self {
        Self {
            address: response.address,
            r: response.r,
            s: response.s,
            max_validity: response.max_validity,
        }
    }
}

/// Appends `hint` as a span: `[0]` when absent, `[4, address, r, s, max_validity]` otherwise.
pub fn push_hint_span(calldata: &mut Vec<Felt>, hint: Option<&ResolutionHint>) {
    match hint {
        None => calldata.push(Felt::ZERO),
        Some(hint) => {
            let elements = hint.to_calldata();
            calldata.push(Felt::from(elements.len() as u64));
            calldata.extend_from_slice(&elements);
        }
    }
}
