use crate::ForwardRequest;
use alloy::{
    primitives::{keccak256, B256},
    sol_types::{Eip712Domain, SolStruct},
};

/// EIP-712 hasher for [`ForwardRequest`]s under a fixed domain.
///
/// The domain separator is computed once on construction, as it never changes
/// for a deployed forwarder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDataHasher {
    domain: Eip712Domain,
    separator: B256,
}

impl TypedDataHasher {
    /// Create a hasher for the given domain.
    pub fn new(domain: Eip712Domain) -> Self {
        let separator = domain.hash_struct();
        Self { domain, separator }
    }

    /// Get the domain.
    pub const fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// Get the cached domain separator, i.e.
    /// `keccak256(typeHash(EIP712Domain), keccak256(name), keccak256(version), chainId, verifyingContract)`.
    pub const fn domain_separator(&self) -> B256 {
        self.separator
    }

    /// Hash the request struct, i.e.
    /// `keccak256(typeHash(ForwardRequest), from, to, value, gas, nonce, keccak256(data))`.
    pub fn request_hash(&self, request: &ForwardRequest) -> B256 {
        request.eip712_hash_struct()
    }

    /// Compute the digest that the signer signs:
    /// `keccak256(0x1901 ++ domainSeparator ++ requestHash)`.
    pub fn signing_hash(&self, request: &ForwardRequest) -> B256 {
        let mut buf = [0u8; 66];
        buf[0] = 0x19;
        buf[1] = 0x01;
        buf[2..34].copy_from_slice(self.separator.as_slice());
        buf[34..].copy_from_slice(self.request_hash(request).as_slice());
        keccak256(buf)
    }
}

impl From<Eip712Domain> for TypedDataHasher {
    fn from(domain: Eip712Domain) -> Self {
        Self::new(domain)
    }
}
