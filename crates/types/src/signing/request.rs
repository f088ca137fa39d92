use crate::{
    bindings::IAwlForwarder::executeCall, recover, ForwardRequest, ForwarderConfig,
    RecoveryError, SigningError, TypedDataHasher,
};
use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes, B256, U256},
    rpc::types::TransactionRequest,
    signers::{Signer, SignerSync},
    sol_types::SolCall,
};
use serde::{Deserialize, Serialize};

/// A [`ForwardRequest`] together with the signature of its `from` address.
///
/// This is what a signer hands to a relayer. The relayer submits it to the
/// forwarder's `execute`, either directly or via [`Self::to_execute_tx`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedForwardRequest {
    /// The request.
    request: ForwardRequest,
    /// The 65-byte `r ++ s ++ v` signature.
    signature: Bytes,
}

impl SignedForwardRequest {
    /// Creates a new signed request.
    pub const fn new(request: ForwardRequest, signature: Bytes) -> Self {
        Self { request, signature }
    }

    /// Get the request.
    pub const fn request(&self) -> &ForwardRequest {
        &self.request
    }

    /// Get the signature.
    pub const fn signature(&self) -> &Bytes {
        &self.signature
    }

    /// Decompose into the request and signature.
    pub fn into_parts(self) -> (ForwardRequest, Bytes) {
        (self.request, self.signature)
    }

    /// Recover the address that signed this request under the hasher's domain.
    pub fn recover_signer(&self, hasher: &TypedDataHasher) -> Result<Address, RecoveryError> {
        recover(&hasher.signing_hash(&self.request), &self.signature)
    }

    /// ABI-encoded calldata for `execute(req, signature)`.
    pub fn execute_calldata(&self) -> Bytes {
        executeCall { req: self.request.clone(), signature: self.signature.clone() }
            .abi_encode()
            .into()
    }

    /// Generate a TransactionRequest calling `execute` on the forwarder, with
    /// `attached_value` sent along to fund the forwarded call.
    pub fn to_execute_tx(&self, forwarder: Address, attached_value: U256) -> TransactionRequest {
        TransactionRequest::default()
            .with_input(self.execute_calldata())
            .with_to(forwarder)
            .with_value(attached_value)
    }
}

/// Builder for a [`SignedForwardRequest`].
///
/// The nonce must be read from the forwarder's `getNonce` for the signer
/// before signing; a request signed with any other nonce will not verify.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnsignedForwardRequest {
    to: Option<Address>,
    value: U256,
    gas: Option<U256>,
    nonce: Option<U256>,
    data: Bytes,
    config: Option<ForwarderConfig>,
}

impl UnsignedForwardRequest {
    /// Get a new, empty UnsignedForwardRequest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the destination.
    pub fn with_to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    /// Set the native value to attach to the forwarded call.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Set the gas budget. Defaults to the config's request gas.
    pub fn with_gas(mut self, gas: U256) -> Self {
        self.gas = Some(gas);
        self
    }

    /// Set the nonce.
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Set the calldata to forward.
    pub fn with_data(self, data: impl Into<Bytes>) -> Self {
        Self { data: data.into(), ..self }
    }

    /// Set the forwarder deployment whose domain the request is signed under.
    /// MUST call before `sign`.
    pub fn with_config(self, config: &ForwarderConfig) -> Self {
        Self { config: Some(config.clone()), ..self }
    }

    /// Assemble the request for `from` and compute its signing hash.
    pub fn signing_info(&self, from: Address) -> Result<(ForwardRequest, B256), SigningError> {
        let config = self.config.as_ref().ok_or(SigningError::MissingDomain)?;
        let nonce = self.nonce.ok_or(SigningError::MissingNonce)?;
        let to = self.to.ok_or(SigningError::MissingDestination)?;

        let request = ForwardRequest {
            from,
            to,
            value: self.value,
            gas: self.gas.unwrap_or_else(|| U256::from(config.request_gas())),
            nonce,
            data: self.data.clone(),
        };
        let signing_hash = TypedDataHasher::new(config.domain()).signing_hash(&request);

        Ok((request, signing_hash))
    }

    /// Sign the request, generating a SignedForwardRequest.
    pub async fn sign<S: Signer>(&self, signer: &S) -> Result<SignedForwardRequest, SigningError> {
        let (request, signing_hash) = self.signing_info(signer.address())?;
        let signature = signer.sign_hash(&signing_hash).await?;
        Ok(SignedForwardRequest::new(request, signature.as_bytes().into()))
    }

    /// Sign the request synchronously.
    pub fn sign_sync<S>(&self, signer: &S) -> Result<SignedForwardRequest, SigningError>
    where
        S: Signer + SignerSync,
    {
        let (request, signing_hash) = self.signing_info(signer.address())?;
        let signature = signer.sign_hash_sync(&signing_hash)?;
        Ok(SignedForwardRequest::new(request, signature.as_bytes().into()))
    }
}
