use alloy::{
    primitives::{uint, Address, Bytes, Signature, U256},
    signers::SignerSync,
};
use awl_forwarder::{ForwarderError, LifecycleState, Msg};
use awl_test_utils::{
    hosts::TestHost,
    specs::{sign_request, signed_request, simple_request, test_config, test_forwarder},
    users::{signer, OWNER, STRANGER},
};
use awl_types::{
    arb::{arb_address, arb_calldata, arb_forward_request, arb_u256},
    recover, ForwardRequest, IAwlForwarder, RecoveryError, TypedDataHasher, SECP256K1N_HALF,
};
use proptest::prelude::*;

/// secp256k1 curve order.
const SECP256K1N: U256 =
    uint!(0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141_U256);

/// Destination used throughout.
const TARGET: Address = Address::repeat_byte(0x7a);

fn host() -> TestHost {
    TestHost::new(test_config().verifying_contract())
}

#[test]
fn nonce_monotonicity() {
    let mut forwarder = test_forwarder();
    let mut host = host();
    let from = signer().address();

    for nonce in 0..5u64 {
        let signed = signed_request(TARGET, nonce, Bytes::new());
        assert_eq!(forwarder.get_nonce(from), U256::from(nonce));

        forwarder
            .execute(Msg::from_sender(*OWNER), signed.request(), signed.signature(), &mut host)
            .unwrap();

        assert_eq!(forwarder.get_nonce(from), U256::from(nonce + 1));
        assert!(!forwarder.verify(signed.request(), signed.signature()));
    }
}

#[test]
fn future_nonce_does_not_verify() {
    let forwarder = test_forwarder();
    let signed = signed_request(TARGET, 1, Bytes::new());

    assert!(!forwarder.verify(signed.request(), signed.signature()));
}

#[test]
fn malleable_signature_rejected() {
    let mut forwarder = test_forwarder();
    let mut host = host();
    let req = simple_request(signer().address(), TARGET, 0);

    let hash = TypedDataHasher::new(test_config().domain()).signing_hash(&req);
    let sig = signer().sign_hash_sync(&hash).unwrap();
    assert!(forwarder.verify(&req, &sig.as_bytes()));

    // (r, n - s, !v) encodes the same signer over the same digest
    let flipped = Signature::new(sig.r(), SECP256K1N - sig.s(), !sig.v());
    assert!(flipped.s() > SECP256K1N_HALF);
    assert_eq!(flipped.recover_address_from_prehash(&hash).unwrap(), signer().address());

    let bytes = flipped.as_bytes();
    assert_eq!(recover(&hash, &bytes), Err(RecoveryError::HighS));
    assert!(!forwarder.verify(&req, &bytes));
    assert_eq!(
        forwarder.execute(Msg::from_sender(*OWNER), &req, &bytes, &mut host),
        Err(ForwarderError::SignatureMismatch)
    );
    assert_eq!(forwarder.get_nonce(req.from), U256::ZERO);
}

#[test]
fn idempotent_removal() {
    let mut forwarder = test_forwarder();

    forwarder.remove_sender_from_whitelist(*OWNER, *STRANGER).unwrap();
    forwarder.remove_sender_from_whitelist(*OWNER, *STRANGER).unwrap();
    assert!(!forwarder.is_whitelisted(*STRANGER));
    // both succeed, both are logged
    assert_eq!(forwarder.events().len(), 2);

    forwarder.add_sender_to_whitelist(*OWNER, *STRANGER).unwrap();
    assert_eq!(
        forwarder.add_sender_to_whitelist(*OWNER, *STRANGER),
        Err(ForwarderError::AlreadyWhitelisted(*STRANGER))
    );
}

#[test]
fn lifecycle_gating() {
    let mut forwarder = test_forwarder();
    let mut host = host();
    let signed = signed_request(TARGET, 0, Bytes::new());

    forwarder.pause(*OWNER).unwrap();
    assert_eq!(
        forwarder.execute(Msg::from_sender(*OWNER), signed.request(), signed.signature(), &mut host),
        Err(ForwarderError::Paused)
    );
    // verify is a read, and stays available
    assert!(forwarder.verify(signed.request(), signed.signature()));

    forwarder.unpause(*OWNER).unwrap();
    let outcome = forwarder
        .execute(Msg::from_sender(*OWNER), signed.request(), signed.signature(), &mut host)
        .unwrap();
    assert!(outcome.success);
}

#[test]
fn kill_irreversibility() {
    let mut forwarder = test_forwarder();
    let mut host = host();
    let signed = signed_request(TARGET, 0, Bytes::new());

    forwarder.pause(*OWNER).unwrap();
    forwarder.kill(*OWNER, *OWNER, &mut host).unwrap();
    assert_eq!(forwarder.state(), LifecycleState::Killed);

    assert_eq!(forwarder.pause(*OWNER), Err(ForwarderError::Killed));
    assert_eq!(forwarder.unpause(*OWNER), Err(ForwarderError::Killed));
    assert_eq!(forwarder.kill(*OWNER, *OWNER, &mut host), Err(ForwarderError::Killed));
    assert_eq!(
        forwarder.execute(Msg::from_sender(*OWNER), signed.request(), signed.signature(), &mut host),
        Err(ForwarderError::Killed)
    );
    assert_eq!(
        forwarder.add_sender_to_whitelist(*OWNER, *STRANGER),
        Err(ForwarderError::Killed)
    );
    assert_eq!(forwarder.transfer_ownership(*OWNER, *STRANGER), Err(ForwarderError::Killed));

    // reads survive
    assert_eq!(forwarder.get_nonce(signer().address()), U256::ZERO);
    assert!(forwarder.verify(signed.request(), signed.signature()));
    assert_eq!(forwarder.state(), LifecycleState::Killed);
}

#[test]
fn end_to_end() {
    let mut forwarder = test_forwarder();
    let mut host = host();
    let from = signer().address();

    let req = ForwardRequest::new(
        from,
        TARGET,
        U256::ZERO,
        U256::from(100_000),
        U256::ZERO,
        Bytes::new(),
    );
    let sig = sign_request(signer(), &req);

    let outcome = forwarder.execute(Msg::from_sender(*OWNER), &req, &sig, &mut host).unwrap();
    assert!(outcome.success);
    assert_eq!(forwarder.get_nonce(from), U256::from(1));

    let results: Vec<_> =
        forwarder.events().iter().filter_map(|e| e.as_forward_result()).cloned().collect();
    assert_eq!(results, vec![IAwlForwarder::ForwardResult { from, to: TARGET, success: true }]);

    assert_eq!(
        forwarder.execute(Msg::from_sender(*OWNER), &req, &sig, &mut host),
        Err(ForwarderError::SignatureMismatch)
    );
    assert_eq!(forwarder.get_nonce(from), U256::from(1));
    assert_eq!(host.calls.len(), 1);
}

/// Replace one field of `req` with a different value.
fn tamper(
    req: &ForwardRequest,
    field: usize,
    address: Address,
    word: U256,
    data: Bytes,
) -> Option<ForwardRequest> {
    let mut tampered = req.clone();
    match field {
        0 if address != req.from => tampered.from = address,
        1 if address != req.to => tampered.to = address,
        2 if word != req.value => tampered.value = word,
        3 if word != req.gas => tampered.gas = word,
        4 if word != req.nonce => tampered.nonce = word,
        5 if data != req.data => tampered.data = data,
        _ => return None,
    }
    Some(tampered)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tamper_sensitivity(
        base in arb_forward_request(),
        field in 0..6usize,
        address in arb_address(),
        word in arb_u256(),
        data in arb_calldata(),
    ) {
        let forwarder = test_forwarder();
        let req = ForwardRequest { from: signer().address(), nonce: U256::ZERO, ..base };
        let sig = sign_request(signer(), &req);
        prop_assert!(forwarder.verify(&req, &sig));

        let tampered = tamper(&req, field, address, word, data);
        prop_assume!(tampered.is_some());
        prop_assert!(!forwarder.verify(&tampered.unwrap(), &sig));
    }
}
