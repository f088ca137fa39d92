use alloy::primitives::{uint, Address, Signature, SignatureError, B256, U256};

/// Length of a raw `r ++ s ++ v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

/// Half the order of the secp256k1 curve. Signatures with `s` above this value
/// are malleable duplicates of a lower-`s` signature.
pub const SECP256K1N_HALF: U256 =
    uint!(0x7FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF5D576E7357A4501DDFE92F46681B20A0_U256);

/// Reasons a signature cannot be recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecoveryError {
    /// The signature is not 65 bytes long.
    #[error("invalid signature length: {0}")]
    InvalidLength(usize),
    /// The recovery id is neither 27 nor 28.
    #[error("invalid recovery id: {0}")]
    InvalidRecoveryId(u8),
    /// The `s` value lies in the upper half of the curve order.
    #[error("signature s value is in the upper half of the curve order")]
    HighS,
    /// The curve arithmetic failed to produce a public key.
    #[error("unrecoverable signature: {0}")]
    Unrecoverable(String),
}

impl From<SignatureError> for RecoveryError {
    fn from(err: SignatureError) -> Self {
        Self::Unrecoverable(err.to_string())
    }
}

/// Parse a raw 65-byte `r ++ s ++ v` signature, rejecting malformed and
/// malleable encodings.
pub fn parse_signature(signature: &[u8]) -> Result<Signature, RecoveryError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(RecoveryError::InvalidLength(signature.len()));
    }

    let r = U256::from_be_slice(&signature[..32]);
    let s = U256::from_be_slice(&signature[32..64]);
    let y_parity = match signature[64] {
        27 => false,
        28 => true,
        v => return Err(RecoveryError::InvalidRecoveryId(v)),
    };

    if s > SECP256K1N_HALF {
        return Err(RecoveryError::HighS);
    }

    Ok(Signature::new(r, s, y_parity))
}

/// Recover the address that produced `signature` over `digest`.
///
/// A well-formed signature always recovers *some* address. Whether that
/// address is the expected signer is for the caller to decide.
pub fn recover(digest: &B256, signature: &[u8]) -> Result<Address, RecoveryError> {
    let signature = parse_signature(signature)?;
    signature.recover_address_from_prehash(digest).map_err(Into::into)
}
