//! Typed-data schema, hashing, signature recovery and request signing for the
//! AWL trusted forwarder.
//!
//! Everything in this crate is stateless. The stateful engine lives in
//! `awl-forwarder`.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "proptest")]
pub mod arb;

mod bindings;
pub use bindings::{ForwardRequest, IAwlForwarder};

mod config;
pub use config::{
    load_address, load_string, load_string_opt, load_u64, load_u64_opt, ConfigError,
    ForwarderConfig, CHAIN_ID_ENV, DEFAULT_REQUEST_GAS, FORWARDER_ADDRESS_ENV, NAME_ENV,
    REQUEST_GAS_ENV, VERSION_ENV,
};

mod hasher;
pub use hasher::TypedDataHasher;

mod signature;
pub use signature::{parse_signature, recover, RecoveryError, SECP256K1N_HALF, SIGNATURE_LENGTH};

mod signing;
pub use signing::{SignedForwardRequest, SigningError, UnsignedForwardRequest};
