pub mod offchain_fallback;

pub use offchain_fallback::{FallbackOutcome, OffchainFallback};
