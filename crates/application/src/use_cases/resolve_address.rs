use crate::ports::{ContractCall, ContractGateway, OffchainClient};
use crate::services::OffchainFallback;
use stark_resolver_domain::{decode_domain, Felt, Resolution, ResolutionError};
use std::sync::Arc;
use tracing::instrument;

const NO_NAME: &str = "Could not get stark name";

/// Resolves an address to its main stark name.
pub struct ResolveAddressUseCase {
    fallback: OffchainFallback,
}

impl ResolveAddressUseCase {
    pub fn new(gateway: Arc<dyn ContractGateway>, offchain: Arc<dyn OffchainClient>) -> Self {
        Self {
            fallback: OffchainFallback::new(gateway, offchain),
        }
    }

    #[instrument(skip(self, address), fields(address = %address), name = "resolve_address")]
    pub async fn execute(&self, address: Felt) -> Result<Resolution, ResolutionError> {
        let outcome = self
            .fallback
            .call(|hint| ContractCall::address_to_domain(address, hint))
            .await?;

        // Result is a span: [len, label_0, .., label_{len-1}]
        let labels = outcome
            .result
            .split_first()
            .and_then(|(len, rest)| rest.get(..len.to_usize()?))
            .ok_or_else(|| ResolutionError::ContractCall(NO_NAME.to_string()))?;

        let name = decode_domain(labels);
        if name.is_empty() {
            return Err(ResolutionError::ContractCall(NO_NAME.to_string()));
        }

        Ok(match outcome.uri {
            Some(uri) => Resolution::offchain(name, uri),
            None => Resolution::on_chain(name),
        })
    }
}
