use crate::Forwarder;
use alloy::primitives::{Address, Bytes, U256};

/// The immediate caller of a forwarder operation and the native value it
/// attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Msg {
    /// The caller, i.e. the relayer for `execute`.
    pub sender: Address,
    /// Native value attached to the call.
    pub value: U256,
}

impl Msg {
    /// Create a new message context.
    pub const fn new(sender: Address, value: U256) -> Self {
        Self { sender, value }
    }

    /// A call from `sender` with no value attached.
    pub const fn from_sender(sender: Address) -> Self {
        Self { sender, value: U256::ZERO }
    }
}

/// A call dispatched by the forwarder to a request's destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedCall {
    /// The forwarder making the call.
    pub caller: Address,
    /// The destination.
    pub target: Address,
    /// Native value transferred with the call.
    pub value: U256,
    /// Gas budget for the call.
    pub gas_limit: U256,
    /// Calldata, with the signer appended per ERC-2771.
    pub payload: Bytes,
}

/// Result of a forwarded call. Also the result of a successful `execute`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOutcome {
    /// Whether the forwarded call succeeded.
    pub success: bool,
    /// Data returned (or reverted with) by the forwarded call.
    pub return_data: Bytes,
}

impl CallOutcome {
    /// A successful call.
    pub const fn success(return_data: Bytes) -> Self {
        Self { success: true, return_data }
    }

    /// A failed call.
    pub const fn failure(return_data: Bytes) -> Self {
        Self { success: false, return_data }
    }
}

/// The execution environment the forwarder dispatches calls into.
///
/// The host receives the forwarder itself, so a destination may call back
/// into it while its own call is in progress. Failures of the dispatched call
/// are reported through [`CallOutcome::success`], never as errors.
pub trait CallHost {
    /// Invoke `call.target` with `call.payload`, transferring `call.value`,
    /// bounded by `call.gas_limit`.
    fn invoke(&mut self, forwarder: &mut Forwarder, call: ForwardedCall) -> CallOutcome;

    /// Transfer `amount` of the forwarder's balance to `recipient`. Called
    /// when the forwarder is killed, and for value refunded after a kill.
    fn sweep(&mut self, recipient: Address, amount: U256);
}

impl<T: CallHost + ?Sized> CallHost for &mut T {
    fn invoke(&mut self, forwarder: &mut Forwarder, call: ForwardedCall) -> CallOutcome {
        (**self).invoke(forwarder, call)
    }

    fn sweep(&mut self, recipient: Address, amount: U256) {
        (**self).sweep(recipient, amount)
    }
}
