pub mod resolve_address;
pub mod resolve_domain;

pub use resolve_address::ResolveAddressUseCase;
pub use resolve_domain::ResolveDomainUseCase;
