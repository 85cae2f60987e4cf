use async_trait::async_trait;
use stark_resolver_domain::{push_hint_span, EncodedDomain, Felt, ResolutionError, ResolutionHint};
use std::fmt;

pub const DOMAIN_TO_ADDRESS: &str = "domain_to_address";
pub const RESOLVE: &str = "resolve";
pub const ADDRESS_TO_DOMAIN: &str = "address_to_domain";

/// A read-only invocation of the naming contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub entrypoint: &'static str,
    pub calldata: Vec<Felt>,
}

impl ContractCall {
    /// `domain_to_address(domain: Span<felt252>, hint: Span<felt252>)`
    pub fn domain_to_address(domain: &EncodedDomain, hint: Option<&ResolutionHint>) -> Self {
        let mut calldata = domain_span(domain);
        push_hint_span(&mut calldata, hint);
        Self {
            entrypoint: DOMAIN_TO_ADDRESS,
            calldata,
        }
    }

    /// `resolve(domain: Span<felt252>, field: felt252, hint: Span<felt252>)`
    pub fn resolve_field(
        domain: &EncodedDomain,
        field: Felt,
        hint: Option<&ResolutionHint>,
    ) -> Self {
        let mut calldata = domain_span(domain);
        calldata.push(field);
        push_hint_span(&mut calldata, hint);
        Self {
            entrypoint: RESOLVE,
            calldata,
        }
    }

    /// `address_to_domain(address: ContractAddress, hint: Span<felt252>)`
    pub fn address_to_domain(address: Felt, hint: Option<&ResolutionHint>) -> Self {
        let mut calldata = vec![address];
        push_hint_span(&mut calldata, hint);
        Self {
            entrypoint: ADDRESS_TO_DOMAIN,
            calldata,
        }
    }
}

fn domain_span(domain: &EncodedDomain) -> Vec<Felt> {
    let mut calldata = Vec::with_capacity(domain.len() + 6);
    calldata.push(Felt::from(domain.len() as u64));
    calldata.extend(domain.iter().copied());
    calldata
}

impl fmt::Display for ContractCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({} felts)", self.entrypoint, self.calldata.len())
    }
}

/// Read-only access to the naming contract.
///
/// A failed call returns `ResolutionError::ContractCall` carrying the
/// execution environment's error text verbatim; the revert payload, if any,
/// is read out of that text.
#[async_trait]
pub trait ContractGateway: Send + Sync {
    async fn call(&self, call: &ContractCall) -> Result<Vec<Felt>, ResolutionError>;
}
