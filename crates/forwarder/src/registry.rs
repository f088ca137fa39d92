use crate::{ForwarderError, ForwarderResult};
use alloy::primitives::Address;
use std::collections::BTreeSet;

/// The set of relayers allowed to submit requests for execution.
///
/// Access control over who may modify the set is enforced by the
/// [`Forwarder`](crate::Forwarder), not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayerRegistry {
    relayers: BTreeSet<Address>,
}

impl RelayerRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { relayers: BTreeSet::new() }
    }

    /// True if `relayer` may submit requests.
    pub fn is_whitelisted(&self, relayer: Address) -> bool {
        self.relayers.contains(&relayer)
    }

    /// Whitelist `relayer`. Adding a present address is an error.
    pub fn add(&mut self, relayer: Address) -> ForwarderResult<()> {
        if !self.relayers.insert(relayer) {
            return Err(ForwarderError::AlreadyWhitelisted(relayer));
        }
        Ok(())
    }

    /// Remove `relayer`. Returns whether it was present; removing an absent
    /// address is not an error.
    pub fn remove(&mut self, relayer: Address) -> bool {
        self.relayers.remove(&relayer)
    }

    /// Iterate over the whitelisted relayers.
    pub fn iter(&self) -> impl Iterator<Item = &Address> + '_ {
        self.relayers.iter()
    }

    /// Number of whitelisted relayers.
    pub fn len(&self) -> usize {
        self.relayers.len()
    }

    /// True if no relayer is whitelisted.
    pub fn is_empty(&self) -> bool {
        self.relayers.is_empty()
    }
}

impl FromIterator<Address> for RelayerRegistry {
    fn from_iter<T: IntoIterator<Item = Address>>(iter: T) -> Self {
        Self { relayers: iter.into_iter().collect() }
    }
}
