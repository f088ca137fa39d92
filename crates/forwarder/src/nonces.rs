use crate::{ForwarderError, ForwarderResult};
use alloy::primitives::{Address, U256};
use std::collections::BTreeMap;

/// Per-signer replay protection.
///
/// Every address starts at nonce `0`. The only mutation is [`Self::advance`],
/// which moves a signer forward by exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonceLedger {
    nonces: BTreeMap<Address, U256>,
}

impl NonceLedger {
    /// Create an empty ledger.
    pub const fn new() -> Self {
        Self { nonces: BTreeMap::new() }
    }

    /// The next valid nonce for `signer`.
    pub fn current(&self, signer: Address) -> U256 {
        self.nonces.get(&signer).copied().unwrap_or_default()
    }

    /// Consume `expected` for `signer`, returning the new current nonce.
    ///
    /// Fails without mutation unless `expected` is the current nonce.
    pub fn advance(&mut self, signer: Address, expected: U256) -> ForwarderResult<U256> {
        let current = self.current(signer);
        if expected != current {
            return Err(ForwarderError::NonceMismatch { signer, expected, current });
        }

        let next = current.checked_add(U256::from(1)).ok_or(ForwarderError::NonceExhausted(signer))?;
        self.nonces.insert(signer, next);
        Ok(next)
    }

    /// Number of signers that have executed at least one request.
    pub fn len(&self) -> usize {
        self.nonces.len()
    }

    /// True if no signer has executed a request.
    pub fn is_empty(&self) -> bool {
        self.nonces.is_empty()
    }
}
