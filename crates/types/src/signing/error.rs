/// An error that can occur when signing a [`ForwardRequest`].
///
/// [`ForwardRequest`]: crate::ForwardRequest
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    /// Missing forwarder config.
    #[error(
        "Forwarder domain is missing. Populate it by calling with_config before attempting to sign"
    )]
    MissingDomain,
    /// Missing nonce.
    #[error(
        "Request nonce is missing. Populate it from the forwarder's getNonce before attempting to sign"
    )]
    MissingNonce,
    /// Missing destination.
    #[error("Request destination is missing. Populate it by calling with_to before attempting to sign")]
    MissingDestination,
    /// Error signing the request hash.
    #[error(transparent)]
    Signer(#[from] alloy::signers::Error),
}
