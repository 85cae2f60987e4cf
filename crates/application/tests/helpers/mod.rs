#![allow(dead_code)]


pub use mock_ports::{MockContractGateway, MockOffchainClient};

use stark_resolver_domain::{Felt, OffchainResponse, RevertGrammar, RevertPayload, OFFCHAIN_RESOLVING};

/// Error text of a contract call that defers `domain_slice` to `uris`.
pub fn offchain_revert(domain_slice: &str, uris: &[&str]) -> String {
    let payload = RevertPayload {
        error_kind: OFFCHAIN_RESOLVING.to_string(),
        domain_slice: domain_slice.to_string(),
        uris: uris.iter().map(|u| u.to_string()).collect(),
        grammar: RevertGrammar::Parenthesized,
    };
    let tokens = payload.to_tokens().unwrap();
    format!(
        "Contract error: {}",
        payload.grammar.render(&tokens)
    )
}

pub fn hint_response(address: u64, r: u64, s: u64, max_validity: u64) -> OffchainResponse {
    OffchainResponse {
        address: Felt::from(address),
        r: Felt::from(r),
        s: Felt::from(s),
        max_validity: Felt::from(max_validity),
    }
}
