pub mod errors;
pub mod logging;
pub mod network;
pub mod offchain;
pub mod resolution;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use network::NetworkConfig;
pub use offchain::OffchainConfig;
pub use resolution::ResolutionConfig;
pub use root::{CliOverrides, Config};
