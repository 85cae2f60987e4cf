//! Stark Resolver Infrastructure Layer
pub mod offchain;
pub mod starknet;
