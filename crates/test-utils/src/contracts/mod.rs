mod counter;
pub use counter::{Counter, CounterContract, COUNTER_TEST_ADDRESS};
