//! Proptest strategies for forwarder types.

use crate::ForwardRequest;
use alloy::primitives::{Address, Bytes, U256};
use proptest::prelude::*;

/// Strategy for an arbitrary address.
pub fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

/// Strategy for an arbitrary 256-bit word.
pub fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u8; 32]>().prop_map(U256::from_be_bytes)
}

/// Strategy for calldata of up to 256 bytes.
pub fn arb_calldata() -> impl Strategy<Value = Bytes> {
    proptest::collection::vec(any::<u8>(), 0..256).prop_map(Bytes::from)
}

/// Strategy for an arbitrary [`ForwardRequest`].
pub fn arb_forward_request() -> impl Strategy<Value = ForwardRequest> {
    (arb_address(), arb_address(), arb_u256(), arb_u256(), arb_u256(), arb_calldata())
        .prop_map(|(from, to, value, gas, nonce, data)| ForwardRequest {
            from,
            to,
            value,
            gas,
            nonce,
            data,
        })
}
