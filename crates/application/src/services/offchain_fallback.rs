use crate::ports::{ContractCall, ContractGateway, OffchainClient};
use stark_resolver_domain::{decode_revert, Felt, ResolutionError, ResolutionHint};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a contract call that may have gone through an offchain server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackOutcome {
    pub result: Vec<Felt>,
    /// URI of the server whose hint the contract accepted, if one was needed.
    pub uri: Option<String>,
}

/// Runs a contract call and, when the contract defers to offchain servers,
/// fetches a hint and retries once.
///
/// The direct call carries an empty hint. If it reverts with an
/// `offchain_resolving` payload, the listed servers are queried strictly in
/// order; the first server that answers supplies the hint for the retry and
/// no other server is contacted afterwards. A retry the contract rejects is
/// terminal.
pub struct OffchainFallback {
    gateway: Arc<dyn ContractGateway>,
    offchain: Arc<dyn OffchainClient>,
}

impl OffchainFallback {
    pub fn new(gateway: Arc<dyn ContractGateway>, offchain: Arc<dyn OffchainClient>) -> Self {
        Self { gateway, offchain }
    }

    pub async fn call<F>(&self, build_call: F) -> Result<FallbackOutcome, ResolutionError>
    where
        F: Fn(Option<&ResolutionHint>) -> ContractCall + Send + Sync,
    {
        let direct = build_call(None);
        let failure = match self.gateway.call(&direct).await {
            Ok(result) => {
                debug!(call = %direct, "Resolved on-chain");
                return Ok(FallbackOutcome { result, uri: None });
            }
            Err(ResolutionError::ContractCall(text)) => text,
            Err(e) => return Err(e),
        };

        let payload = match decode_revert(&failure) {
            Some(payload) if payload.is_offchain_resolving() => payload,
            Some(payload) => {
                debug!(call = %direct, error_kind = %payload.error_kind, "Contract reverted");
                return Err(ResolutionError::ContractCall(failure));
            }
            None => return Err(ResolutionError::ContractCall(failure)),
        };

        info!(
            call = %direct,
            domain_slice = %payload.domain_slice,
            servers = payload.uris.len(),
            "Contract requested offchain resolving"
        );

        let mut last_error = None;

        for (index, uri) in payload.uris.iter().enumerate() {
            let response = match self.offchain.query(uri, &payload.domain_slice).await {
                Ok(response) => response,
                Err(e) => {
                    warn!(
                        uri = %uri,
                        attempt = index + 1,
                        total = payload.uris.len(),
                        error = %e,
                        "Offchain server failed, trying next"
                    );
                    last_error = Some(e.to_string());
                    continue;
                }
            };

            let hint = ResolutionHint::from(response);
            let retry = build_call(Some(&hint));

            return match self.gateway.call(&retry).await {
                Ok(result) => {
                    info!(uri = %uri, call = %retry, "Resolved with offchain hint");
                    Ok(FallbackOutcome {
                        result,
                        uri: Some(uri.clone()),
                    })
                }
                Err(e) => {
                    warn!(uri = %uri, error = %e, "Contract rejected offchain hint");
                    Err(ResolutionError::HintRejected {
                        uri: uri.clone(),
                        reason: e.to_string(),
                    })
                }
            };
        }

        warn!(
            servers = payload.uris.len(),
            "No offchain server could resolve the domain"
        );
        Err(ResolutionError::Exhausted { last_error })
    }
}
