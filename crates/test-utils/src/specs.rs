use crate::users::{signer, OWNER};
use alloy::{
    primitives::{Address, Bytes, B256, U256},
    signers::{local::PrivateKeySigner, SignerSync},
};
use awl_forwarder::{Forwarder, Ownership};
use awl_types::{
    ForwardRequest, ForwarderConfig, SignedForwardRequest, TypedDataHasher,
    UnsignedForwardRequest,
};

/// Chain id of the test deployment.
pub const TEST_CHAIN_ID: u64 = 1337;

/// Address of the test forwarder.
pub const TEST_FORWARDER_ADDRESS: Address = Address::repeat_byte(0xf0);

/// Domain name of the test forwarder.
pub const TEST_NAME: &str = "AwlForwarder";

/// Domain version of the test forwarder.
pub const TEST_VERSION: &str = "1";

/// Config of the test deployment.
pub fn test_config() -> ForwarderConfig {
    ForwarderConfig::new(TEST_NAME, TEST_VERSION, TEST_CHAIN_ID, TEST_FORWARDER_ADDRESS)
}

/// A freshly deployed forwarder owned by [`OWNER`].
pub fn test_forwarder() -> Forwarder {
    Forwarder::new(&test_config(), Ownership::new(*OWNER))
}

/// Make a wallet with a deterministic keypair.
pub fn make_wallet(i: u8) -> PrivateKeySigner {
    PrivateKeySigner::from_bytes(&B256::repeat_byte(i)).unwrap()
}

/// A zero-value request from `from` to `to` with no calldata.
pub fn simple_request(from: Address, to: Address, nonce: u64) -> ForwardRequest {
    ForwardRequest::new(
        from,
        to,
        U256::ZERO,
        U256::from(test_config().request_gas()),
        U256::from(nonce),
        Bytes::new(),
    )
}

/// Sign an arbitrary request with `wallet` under the test domain, whether or
/// not `request.from` is the wallet's address.
pub fn sign_request(wallet: &PrivateKeySigner, request: &ForwardRequest) -> Bytes {
    let hash = TypedDataHasher::new(test_config().domain()).signing_hash(request);
    wallet.sign_hash_sync(&hash).unwrap().as_bytes().into()
}

/// Build and sign a request from [`signer`] to `to`.
pub fn signed_request(to: Address, nonce: u64, data: impl Into<Bytes>) -> SignedForwardRequest {
    signed_request_with(signer(), to, U256::ZERO, nonce, data)
}

/// Build and sign a request from `wallet` to `to` carrying `value`.
pub fn signed_request_with(
    wallet: &PrivateKeySigner,
    to: Address,
    value: U256,
    nonce: u64,
    data: impl Into<Bytes>,
) -> SignedForwardRequest {
    UnsignedForwardRequest::new()
        .with_to(to)
        .with_value(value)
        .with_nonce(U256::from(nonce))
        .with_data(data)
        .with_config(&test_config())
        .sign_sync(wallet)
        .unwrap()
}
