use crate::{CallHost, CallOutcome, Forwarder, ForwarderResult, Msg};
use alloy::primitives::{Address, U256};
use awl_types::ForwardRequest;
use parking_lot::Mutex;
use std::sync::Arc;

/// A [`Forwarder`] shared between relayer threads.
///
/// Every operation holds the lock for its whole transition, including the
/// forwarded call, so concurrent submissions are linearized and at most one
/// request per signer nonce is executed. Hosts that re-enter the forwarder do
/// so through the `&mut Forwarder` they are handed, never through this handle.
#[derive(Debug, Clone)]
pub struct SharedForwarder {
    inner: Arc<Mutex<Forwarder>>,
}

impl From<Forwarder> for SharedForwarder {
    fn from(forwarder: Forwarder) -> Self {
        Self::new(forwarder)
    }
}

impl SharedForwarder {
    /// Share a forwarder.
    pub fn new(forwarder: Forwarder) -> Self {
        Self { inner: Arc::new(Mutex::new(forwarder)) }
    }

    /// Relay a request. See [`Forwarder::execute`].
    pub fn execute<H: CallHost + ?Sized>(
        &self,
        msg: Msg,
        request: &ForwardRequest,
        signature: &[u8],
        host: &mut H,
    ) -> ForwarderResult<CallOutcome> {
        self.inner.lock().execute(msg, request, signature, host)
    }

    /// See [`Forwarder::verify`].
    pub fn verify(&self, request: &ForwardRequest, signature: &[u8]) -> bool {
        self.inner.lock().verify(request, signature)
    }

    /// See [`Forwarder::get_nonce`].
    pub fn get_nonce(&self, from: Address) -> U256 {
        self.inner.lock().get_nonce(from)
    }

    /// Run `f` with exclusive access to the forwarder, e.g. for admin
    /// operations.
    pub fn with<R>(&self, f: impl FnOnce(&mut Forwarder) -> R) -> R {
        f(&mut self.inner.lock())
    }
}
