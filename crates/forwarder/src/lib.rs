//! The verification-and-relay engine of the AWL trusted forwarder.
//!
//! A [`Forwarder`] accepts `(request, signature)` pairs from whitelisted
//! relayers, checks the signature against the request's EIP-712 digest and
//! the signer's nonce, consumes the nonce and dispatches the call through a
//! [`CallHost`].
//!
//! ```text
//! relayer ─ execute ─► LifecycleGuard ─► RelayerRegistry ─► verify ─► NonceLedger ─► CallHost
//! ```

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

mod engine;
pub use engine::Forwarder;

mod error;
pub use error::{ForwarderError, ForwarderResult};

mod events;
pub use events::ForwarderEvent;

mod host;
pub use host::{CallHost, CallOutcome, ForwardedCall, Msg};

mod lifecycle;
pub use lifecycle::{LifecycleGuard, LifecycleState};

mod nonces;
pub use nonces::NonceLedger;

mod ownership;
pub use ownership::Ownership;

mod registry;
pub use registry::RelayerRegistry;

mod shared;
pub use shared::SharedForwarder;
