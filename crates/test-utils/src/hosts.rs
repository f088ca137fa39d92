use crate::contracts::{CounterContract, COUNTER_TEST_ADDRESS};
use alloy::primitives::{Address, Bytes, U256};
use awl_forwarder::{CallHost, CallOutcome, ForwardedCall, Forwarder, ForwarderResult, Msg};
use awl_types::ForwardRequest;
use std::collections::{BTreeMap, BTreeSet};

/// Revert data returned by destinations marked as reverting.
pub const REVERT_DATA: Bytes = Bytes::from_static(b"TestHost: revert");

/// A host with a [`CounterContract`] at [`COUNTER_TEST_ADDRESS`]. Every other
/// destination is treated as an account that accepts any call, unless marked
/// as reverting.
#[derive(Debug, Clone)]
pub struct TestHost {
    /// The deployed counter.
    pub counter: CounterContract,
    /// Every call the forwarder dispatched, in order.
    pub calls: Vec<ForwardedCall>,
    /// Value received by each destination or sweep recipient.
    pub balances: BTreeMap<Address, U256>,
    /// Sweeps received on kill.
    pub sweeps: Vec<(Address, U256)>,
    reverting: BTreeSet<Address>,
}

impl TestHost {
    /// Create a host whose counter trusts `forwarder`.
    pub fn new(forwarder: Address) -> Self {
        Self {
            counter: CounterContract::new(forwarder),
            calls: Vec::new(),
            balances: BTreeMap::new(),
            sweeps: Vec::new(),
            reverting: BTreeSet::new(),
        }
    }

    /// Make every call to `target` revert with [`REVERT_DATA`].
    pub fn with_reverting(mut self, target: Address) -> Self {
        self.reverting.insert(target);
        self
    }

    /// Value held by `account`.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    fn credit(&mut self, account: Address, amount: U256) {
        *self.balances.entry(account).or_default() += amount;
    }
}

impl CallHost for TestHost {
    fn invoke(&mut self, _forwarder: &mut Forwarder, call: ForwardedCall) -> CallOutcome {
        self.calls.push(call.clone());

        let (success, return_data) = if self.reverting.contains(&call.target) {
            (false, REVERT_DATA)
        } else if call.target == COUNTER_TEST_ADDRESS {
            self.counter.call(call.caller, &call.payload)
        } else {
            (true, Bytes::new())
        };

        if success {
            self.credit(call.target, call.value);
            CallOutcome::success(return_data)
        } else {
            CallOutcome::failure(return_data)
        }
    }

    fn sweep(&mut self, recipient: Address, amount: U256) {
        self.sweeps.push((recipient, amount));
        self.credit(recipient, amount);
    }
}

/// A malicious destination. On its first invocation it calls back into the
/// forwarder with a stored `(msg, request, signature)`, then behaves like
/// [`TestHost`].
#[derive(Debug, Clone)]
pub struct ReentrantHost {
    /// Host used for the outer call and any successful inner call.
    pub inner: TestHost,
    replay: Option<(Msg, ForwardRequest, Bytes)>,
    /// Result of the re-entrant `execute`, once attempted.
    pub reentry: Option<ForwarderResult<CallOutcome>>,
}

impl ReentrantHost {
    /// Create a host that re-enters with `request` and `signature`, sent by
    /// `msg.sender`.
    pub fn new(inner: TestHost, msg: Msg, request: ForwardRequest, signature: Bytes) -> Self {
        Self { inner, replay: Some((msg, request, signature)), reentry: None }
    }
}

impl CallHost for ReentrantHost {
    fn invoke(&mut self, forwarder: &mut Forwarder, call: ForwardedCall) -> CallOutcome {
        if let Some((msg, request, signature)) = self.replay.take() {
            let result = forwarder.execute(msg, &request, &signature, self);
            self.reentry = Some(result);
        }
        self.inner.invoke(forwarder, call)
    }

    fn sweep(&mut self, recipient: Address, amount: U256) {
        self.inner.sweep(recipient, amount)
    }
}
