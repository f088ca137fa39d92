use alloy::primitives::{Address, Bytes, U256};
use awl_forwarder::{ForwarderError, ForwarderEvent, Msg};
use awl_test_utils::{
    hosts::{ReentrantHost, TestHost},
    init_tracing,
    specs::{signed_request, test_config, test_forwarder},
    users::{signer, OWNER},
};

/// The malicious destination.
const ATTACKER: Address = Address::repeat_byte(0xa7);

fn inner() -> TestHost {
    TestHost::new(test_config().verifying_contract())
}

#[test]
fn reentrant_replay_is_refused() {
    init_tracing();
    let mut forwarder = test_forwarder();
    let signed = signed_request(ATTACKER, 0, Bytes::new());

    // the destination replays the very request it is being called for
    let mut host = ReentrantHost::new(
        inner(),
        Msg::from_sender(*OWNER),
        signed.request().clone(),
        signed.signature().clone(),
    );

    let outcome = forwarder
        .execute(Msg::from_sender(*OWNER), signed.request(), signed.signature(), &mut host)
        .unwrap();

    assert!(outcome.success);
    assert_eq!(host.reentry, Some(Err(ForwarderError::SignatureMismatch)));
    assert_eq!(host.inner.calls.len(), 1);
    assert_eq!(forwarder.get_nonce(signer().address()), U256::from(1));

    let results = forwarder.events().iter().filter_map(ForwarderEvent::as_forward_result).count();
    assert_eq!(results, 1);
}

#[test]
fn reentrant_fresh_request_is_relayed() {
    let mut forwarder = test_forwarder();
    let outer = signed_request(ATTACKER, 0, Bytes::new());
    let nested = signed_request(ATTACKER, 1, Bytes::new());

    let mut host = ReentrantHost::new(
        inner(),
        Msg::from_sender(*OWNER),
        nested.request().clone(),
        nested.signature().clone(),
    );

    forwarder
        .execute(Msg::from_sender(*OWNER), outer.request(), outer.signature(), &mut host)
        .unwrap();

    assert!(matches!(host.reentry, Some(Ok(ref outcome)) if outcome.success));
    assert_eq!(host.inner.calls.len(), 2);
    assert_eq!(forwarder.get_nonce(signer().address()), U256::from(2));
}

#[test]
fn reentry_from_unlisted_caller_is_refused() {
    let mut forwarder = test_forwarder();
    let outer = signed_request(ATTACKER, 0, Bytes::new());
    let nested = signed_request(ATTACKER, 1, Bytes::new());

    // the attacker itself is not a relayer
    let mut host = ReentrantHost::new(
        inner(),
        Msg::from_sender(ATTACKER),
        nested.request().clone(),
        nested.signature().clone(),
    );

    forwarder
        .execute(Msg::from_sender(*OWNER), outer.request(), outer.signature(), &mut host)
        .unwrap();

    assert_eq!(host.reentry, Some(Err(ForwarderError::NotWhitelisted(ATTACKER))));
    assert_eq!(forwarder.get_nonce(signer().address()), U256::from(1));
}
