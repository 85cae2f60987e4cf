use super::Adapters;
use stark_resolver_application::use_cases::{ResolveAddressUseCase, ResolveDomainUseCase};
use std::sync::Arc;

pub struct UseCases {
    pub resolve_domain: Arc<ResolveDomainUseCase>,
    pub resolve_address: Arc<ResolveAddressUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        Self {
            resolve_domain: Arc::new(ResolveDomainUseCase::new(
                adapters.gateway.clone(),
                adapters.offchain.clone(),
            )),
            resolve_address: Arc::new(ResolveAddressUseCase::new(
                adapters.gateway.clone(),
                adapters.offchain.clone(),
            )),
        }
    }
}
