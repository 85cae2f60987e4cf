use crate::ports::{ContractCall, ContractGateway, OffchainClient};
use crate::services::{FallbackOutcome, OffchainFallback};
use stark_resolver_domain::{encode_domain, encode_short_string, Resolution, ResolutionError};
use std::sync::Arc;
use tracing::instrument;

/// Resolves a stark name to the address it points at.
pub struct ResolveDomainUseCase {
    fallback: OffchainFallback,
}

impl ResolveDomainUseCase {
    pub fn new(gateway: Arc<dyn ContractGateway>, offchain: Arc<dyn OffchainClient>) -> Self {
        Self {
            fallback: OffchainFallback::new(gateway, offchain),
        }
    }

    /// Looks the domain up through `domain_to_address`.
    #[instrument(skip(self), name = "resolve_domain")]
    pub async fn execute(&self, domain: &str) -> Result<Resolution, ResolutionError> {
        let encoded = encode_domain(domain)?;
        let outcome = self
            .fallback
            .call(|hint| ContractCall::domain_to_address(&encoded, hint))
            .await?;
        into_address(outcome)
    }

    /// Looks up a named record field of the domain through `resolve`.
    #[instrument(skip(self), name = "resolve_domain_field")]
    pub async fn execute_field(
        &self,
        domain: &str,
        field: &str,
    ) -> Result<Resolution, ResolutionError> {
        let encoded = encode_domain(domain)?;
        let field = encode_short_string(field)
            .map_err(|e| ResolutionError::InvalidInput(format!("Invalid field: {}", e)))?;
        let outcome = self
            .fallback
            .call(|hint| ContractCall::resolve_field(&encoded, field, hint))
            .await?;
        into_address(outcome)
    }
}

fn into_address(outcome: FallbackOutcome) -> Result<Resolution, ResolutionError> {
    let address = outcome
        .result
        .first()
        .ok_or_else(|| ResolutionError::ContractCall("Contract returned no address".to_string()))?
        .to_hex();

    Ok(match outcome.uri {
        Some(uri) => Resolution::offchain(address, uri),
        None => Resolution::on_chain(address),
    })
}
