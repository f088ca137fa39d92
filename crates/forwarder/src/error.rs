use alloy::primitives::{Address, U256};

/// Result type for [`Forwarder`] operations.
///
/// [`Forwarder`]: crate::Forwarder
pub type ForwarderResult<T> = Result<T, ForwarderError>;

/// Errors returned by the forwarder.
///
/// Every variant aborts the operation before any state is mutated. A failed
/// forwarded call is not an error; it is reported in the [`CallOutcome`].
///
/// [`CallOutcome`]: crate::CallOutcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ForwarderError {
    /// An owner-gated operation was invoked by someone else.
    #[error("caller {caller} is not the owner")]
    Unauthorized {
        /// The caller.
        caller: Address,
    },
    /// The relayer is already whitelisted.
    #[error("sender address {0} is already whitelisted")]
    AlreadyWhitelisted(Address),
    /// `execute` was submitted by a relayer that is not whitelisted.
    #[error("sender of meta-transaction {0} is not whitelisted")]
    NotWhitelisted(Address),
    /// The forwarder is paused.
    #[error("forwarder is paused")]
    Paused,
    /// `pause` was invoked while already paused.
    #[error("forwarder is already paused")]
    AlreadyPaused,
    /// `unpause` was invoked while not paused.
    #[error("forwarder is not paused")]
    NotPaused,
    /// The forwarder has been killed.
    #[error("forwarder has been killed")]
    Killed,
    /// The signature does not match the request, or the nonce is stale.
    #[error("signature does not match request")]
    SignatureMismatch,
    /// The nonce ledger disagrees with the request's nonce.
    #[error("nonce mismatch for {signer}: expected {expected}, current {current}")]
    NonceMismatch {
        /// The signer.
        signer: Address,
        /// The nonce carried by the request.
        expected: U256,
        /// The ledger's current nonce.
        current: U256,
    },
    /// The signer's nonce cannot be advanced any further.
    #[error("nonce space exhausted for {0}")]
    NonceExhausted(Address),
    /// Ownership cannot be transferred to the zero address.
    #[error("new owner is the zero address")]
    InvalidOwner,
    /// Native value was sent to the forwarder outside of `execute`.
    #[error("forwarder does not accept direct transfers ({value} from {sender})")]
    DirectTransferRejected {
        /// The sender.
        sender: Address,
        /// The value sent.
        value: U256,
    },
}
