//! Stark Resolver Domain Layer
pub mod config;
pub mod domain_codec;
pub mod errors;
pub mod felt;
pub mod hint;
pub mod resolution;
pub mod revert;
pub mod short_string;
pub mod subject;

pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use domain_codec::{
    decode_domain, decode_label, decode_labels, encode_domain, encode_label, EncodedDomain,
    ROOT_LABEL,
};
pub use errors::{CodecError, ResolutionError};
pub use felt::{Felt, FeltError};
pub use hint::{push_hint_span, OffchainResponse, ResolutionHint};
pub use resolution::{Resolution, ResolutionSource};
pub use revert::{decode_revert, RevertGrammar, RevertPayload, OFFCHAIN_RESOLVING};
pub use short_string::{decode_short_string, encode_short_string};
pub use subject::ResolutionSubject;
