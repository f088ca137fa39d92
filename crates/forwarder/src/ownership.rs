use crate::{ForwarderError, ForwarderResult};
use alloy::primitives::Address;

/// Administrative capability of a forwarder.
///
/// Constructed explicitly and handed to [`Forwarder::new`], so independent
/// forwarders can have independent owners. Once renounced, no address holds
/// the capability and every owner-gated operation fails.
///
/// [`Forwarder::new`]: crate::Forwarder::new
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ownership {
    owner: Option<Address>,
}

impl Ownership {
    /// Grant ownership to `owner`.
    pub const fn new(owner: Address) -> Self {
        Self { owner: Some(owner) }
    }

    /// The current owner, if any.
    pub const fn owner(&self) -> Option<Address> {
        self.owner
    }

    /// True if `caller` is the owner.
    pub fn is_owner(&self, caller: Address) -> bool {
        self.owner == Some(caller)
    }

    /// Fail unless `caller` is the owner.
    pub fn ensure_owner(&self, caller: Address) -> ForwarderResult<()> {
        if !self.is_owner(caller) {
            return Err(ForwarderError::Unauthorized { caller });
        }
        Ok(())
    }

    /// Hand the capability to `new_owner`, returning the previous owner.
    pub(crate) fn transfer(&mut self, new_owner: Address) -> ForwarderResult<Option<Address>> {
        if new_owner.is_zero() {
            return Err(ForwarderError::InvalidOwner);
        }
        Ok(self.owner.replace(new_owner))
    }

    /// Give up the capability, returning the previous owner.
    pub(crate) fn renounce(&mut self) -> Option<Address> {
        self.owner.take()
    }
}
