pub mod rpc_gateway;
pub mod selector;

pub use rpc_gateway::StarknetRpcGateway;
pub use selector::get_selector_from_name;
