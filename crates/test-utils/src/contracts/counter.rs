use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::{SolInterface, SolValue},
};
use std::collections::BTreeMap;

alloy::sol! {
    #[derive(Debug)]
    contract Counter {
        function increment() public;
        function count(address account) public view returns (uint256);
        function fail() public;
    }
}

/// A test address for the Counter destination.
pub const COUNTER_TEST_ADDRESS: Address = Address::repeat_byte(0x49);

/// In-memory model of a Counter contract that trusts the forwarder per
/// ERC-2771, keeping one count per original signer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterContract {
    trusted_forwarder: Address,
    counts: BTreeMap<Address, U256>,
}

impl CounterContract {
    /// Deploy a counter trusting `trusted_forwarder`.
    pub fn new(trusted_forwarder: Address) -> Self {
        Self { trusted_forwarder, counts: BTreeMap::new() }
    }

    /// Count for `account`.
    pub fn count(&self, account: Address) -> U256 {
        self.counts.get(&account).copied().unwrap_or_default()
    }

    /// Split the ERC-2771 sender suffix off calls from the trusted forwarder.
    fn msg_sender_and_data<'a>(&self, caller: Address, payload: &'a [u8]) -> (Address, &'a [u8]) {
        if caller == self.trusted_forwarder && payload.len() >= 20 {
            let split = payload.len() - 20;
            (Address::from_slice(&payload[split..]), &payload[..split])
        } else {
            (caller, payload)
        }
    }

    /// Handle a call. Returns `(success, returndata)`.
    pub fn call(&mut self, caller: Address, payload: &[u8]) -> (bool, Bytes) {
        let (sender, data) = self.msg_sender_and_data(caller, payload);

        match Counter::CounterCalls::abi_decode(data) {
            Ok(Counter::CounterCalls::increment(_)) => {
                let count = self.counts.entry(sender).or_default();
                *count += U256::from(1);
                (true, Bytes::new())
            }
            Ok(Counter::CounterCalls::count(Counter::countCall { account })) => {
                (true, self.count(account).abi_encode().into())
            }
            Ok(Counter::CounterCalls::fail(_)) => (false, Bytes::from_static(b"Counter: fail")),
            Err(_) => (false, Bytes::new()),
        }
    }
}
