use stark_resolver_application::ports::{ContractGateway, OffchainClient};
use stark_resolver_domain::{Config, Felt};
use stark_resolver_infrastructure::offchain::HttpOffchainClient;
use stark_resolver_infrastructure::starknet::StarknetRpcGateway;
use std::sync::Arc;
use std::time::Duration;

pub struct Adapters {
    pub gateway: Arc<dyn ContractGateway>,
    pub offchain: Arc<dyn OffchainClient>,
}

impl Adapters {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let contract = Felt::parse(&config.network.naming_contract)?;

        let gateway = StarknetRpcGateway::new(
            config.network.rpc_url.clone(),
            contract,
            Duration::from_millis(config.network.rpc_timeout_ms),
        );
        let offchain = HttpOffchainClient::new(
            Duration::from_millis(config.offchain.query_timeout_ms),
            &config.offchain.user_agent,
        );

        Ok(Self {
            gateway: Arc::new(gateway),
            offchain: Arc::new(offchain),
        })
    }
}
