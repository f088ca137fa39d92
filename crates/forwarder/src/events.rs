use alloy::{
    primitives::{Address, Log, LogData},
    sol_types::SolEvent,
};
use awl_types::IAwlForwarder::{
    ForwardResult, Killed, OwnershipTransferred, Paused, SenderRemovedFromWhitelist,
    SenderWhitelisted, Unpaused,
};

/// An audit event emitted by a [`Forwarder`](crate::Forwarder).
///
/// Each variant wraps the ABI event of the same name, so events can be
/// encoded into EVM logs for external indexers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForwarderEvent {
    /// A relayer was added to the whitelist.
    SenderWhitelisted(SenderWhitelisted),
    /// A relayer was removed from the whitelist.
    SenderRemovedFromWhitelist(SenderRemovedFromWhitelist),
    /// The forwarder was paused.
    Paused(Paused),
    /// The forwarder was unpaused.
    Unpaused(Unpaused),
    /// The forwarder was killed and its balance swept.
    Killed(Killed),
    /// Ownership changed hands, or was renounced (`newOwner` is zero).
    OwnershipTransferred(OwnershipTransferred),
    /// A request was relayed. `success` is the outcome of the forwarded call.
    ForwardResult(ForwardResult),
}

impl ForwarderEvent {
    /// ABI-encode the event into topics and data.
    pub fn encode_log_data(&self) -> LogData {
        match self {
            Self::SenderWhitelisted(e) => e.encode_log_data(),
            Self::SenderRemovedFromWhitelist(e) => e.encode_log_data(),
            Self::Paused(e) => e.encode_log_data(),
            Self::Unpaused(e) => e.encode_log_data(),
            Self::Killed(e) => e.encode_log_data(),
            Self::OwnershipTransferred(e) => e.encode_log_data(),
            Self::ForwardResult(e) => e.encode_log_data(),
        }
    }

    /// Encode the event as a log emitted by `address`.
    pub fn to_log(&self, address: Address) -> Log {
        Log { address, data: self.encode_log_data() }
    }

    /// The [`ForwardResult`] carried by this event, if it is one.
    pub const fn as_forward_result(&self) -> Option<&ForwardResult> {
        match self {
            Self::ForwardResult(e) => Some(e),
            _ => None,
        }
    }
}
