mod contract_gateway;
mod offchain_client;

pub use contract_gateway::{
    ContractCall, ContractGateway, ADDRESS_TO_DOMAIN, DOMAIN_TO_ADDRESS, RESOLVE,
};
pub use offchain_client::OffchainClient;

// Re-export for convenience
pub use stark_resolver_domain::{Felt, OffchainResponse, ResolutionError};
