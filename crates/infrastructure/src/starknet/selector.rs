use alloy_primitives::keccak256;
use stark_resolver_domain::Felt;

/// Entry point selector: Keccak-256 of the name, truncated to 250 bits.
pub fn get_selector_from_name(name: &str) -> Felt {
    Felt::from_be_bytes_masked(keccak256(name.as_bytes()).0)
}
