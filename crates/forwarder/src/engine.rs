use crate::{
    CallHost, CallOutcome, ForwardedCall, ForwarderError, ForwarderEvent, ForwarderResult,
    LifecycleGuard, LifecycleState, Msg, NonceLedger, Ownership, RelayerRegistry,
};
use alloy::primitives::{Address, Bytes, B256, U256};
use awl_types::{
    recover, ForwardRequest, ForwarderConfig, IAwlForwarder, RecoveryError, TypedDataHasher,
};
use tracing::{debug, instrument, warn};

/// A trusted meta-transaction forwarder.
///
/// Relays [`ForwardRequest`]s signed off-chain by their `from` address,
/// submitted by whitelisted relayers. The forwarder guarantees that each
/// request is authorized by its signer and executes at most once; it does not
/// guarantee the business outcome of the forwarded call.
///
/// All state (nonces, relayers, lifecycle, balance) is owned by the instance.
/// Transitions are serialized by `&mut self`; for concurrent submission use a
/// [`SharedForwarder`](crate::SharedForwarder).
#[derive(Debug)]
pub struct Forwarder {
    hasher: TypedDataHasher,
    address: Address,
    ownership: Ownership,
    nonces: NonceLedger,
    relayers: RelayerRegistry,
    lifecycle: LifecycleGuard,
    balance: U256,
    /// Recipient of the kill sweep, once killed.
    swept_to: Option<Address>,
    events: Vec<ForwarderEvent>,
}

impl Forwarder {
    /// Deploy a forwarder. The initial owner is whitelisted as a relayer.
    pub fn new(config: &ForwarderConfig, ownership: Ownership) -> Self {
        Self {
            hasher: TypedDataHasher::new(config.domain()),
            address: config.verifying_contract(),
            ownership,
            nonces: NonceLedger::new(),
            relayers: ownership.owner().into_iter().collect(),
            lifecycle: LifecycleGuard::new(),
            balance: U256::ZERO,
            swept_to: None,
            events: Vec::new(),
        }
    }

    /// The forwarder's own address, i.e. the domain's verifying contract.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The typed-data hasher for this forwarder's domain.
    pub const fn hasher(&self) -> &TypedDataHasher {
        &self.hasher
    }

    /// The EIP-712 domain separator.
    pub const fn domain_separator(&self) -> B256 {
        self.hasher.domain_separator()
    }

    /// The current owner, if ownership has not been renounced.
    pub const fn owner(&self) -> Option<Address> {
        self.ownership.owner()
    }

    /// The lifecycle state.
    pub const fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    /// Native value currently held by the forwarder.
    pub const fn balance(&self) -> U256 {
        self.balance
    }

    /// The next valid nonce for `from`.
    pub fn get_nonce(&self, from: Address) -> U256 {
        self.nonces.current(from)
    }

    /// True if `relayer` may submit requests.
    pub fn is_whitelisted(&self, relayer: Address) -> bool {
        self.relayers.is_whitelisted(relayer)
    }

    /// The whitelisted relayers.
    pub const fn relayers(&self) -> &RelayerRegistry {
        &self.relayers
    }

    /// Events emitted so far, oldest first.
    pub fn events(&self) -> &[ForwarderEvent] {
        &self.events
    }

    /// Take all emitted events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<ForwarderEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit(&mut self, event: ForwarderEvent) {
        self.events.push(event);
    }

    /// Recover the address that signed `request` under this forwarder's
    /// domain.
    pub fn recover_signer(
        &self,
        request: &ForwardRequest,
        signature: &[u8],
    ) -> Result<Address, RecoveryError> {
        recover(&self.hasher.signing_hash(request), signature)
    }

    /// True if `signature` is `request.from`'s signature over `request`, and
    /// `request.nonce` is `from`'s next nonce.
    ///
    /// Malformed signatures verify as `false`.
    pub fn verify(&self, request: &ForwardRequest, signature: &[u8]) -> bool {
        match self.recover_signer(request, signature) {
            Ok(signer) => {
                signer == request.from && self.nonces.current(request.from) == request.nonce
            }
            Err(err) => {
                debug!(%err, "signature recovery failed");
                false
            }
        }
    }

    /// Relay `request` on behalf of its signer.
    ///
    /// Fails, without mutating anything, if the forwarder is not active, if
    /// `msg.sender` is not a whitelisted relayer, or if the request does not
    /// verify. Otherwise the signer's nonce is consumed *before* the forwarded
    /// call is made, so a destination re-entering with the same request is
    /// refused. The forwarded call's own failure is returned as data.
    #[instrument(skip_all, fields(
        relayer = %msg.sender,
        from = %request.from,
        to = %request.to,
        nonce = %request.nonce
    ))]
    pub fn execute<H: CallHost + ?Sized>(
        &mut self,
        msg: Msg,
        request: &ForwardRequest,
        signature: &[u8],
        host: &mut H,
    ) -> ForwarderResult<CallOutcome> {
        self.lifecycle
            .ensure_active()
            .inspect_err(|err| debug!(%err, "rejecting request"))?;

        if !self.relayers.is_whitelisted(msg.sender) {
            debug!("relayer is not whitelisted");
            return Err(ForwarderError::NotWhitelisted(msg.sender));
        }

        if !self.verify(request, signature) {
            debug!("signature does not match request");
            return Err(ForwarderError::SignatureMismatch);
        }

        self.nonces.advance(request.from, request.nonce)?;
        self.balance = self.balance.saturating_add(msg.value);

        let outcome = if self.balance < request.value {
            debug!(balance = %self.balance, value = %request.value, "insufficient balance for forwarded value");
            CallOutcome::failure(Bytes::new())
        } else {
            self.balance -= request.value;
            let call = ForwardedCall {
                caller: self.address,
                target: request.to,
                value: request.value,
                gas_limit: request.gas,
                payload: request.forwarded_payload(),
            };
            let outcome = host.invoke(self, call);
            if !outcome.success {
                self.refund(request.value, host);
            }
            outcome
        };

        if !outcome.success {
            debug!(return_data = %outcome.return_data, "forwarded call failed");
        }

        self.emit(ForwarderEvent::ForwardResult(IAwlForwarder::ForwardResult {
            from: request.from,
            to: request.to,
            success: outcome.success,
        }));

        Ok(outcome)
    }

    /// Return the value of a failed forwarded call. If the destination killed
    /// the forwarder during the call, the value follows the kill sweep.
    fn refund<H: CallHost + ?Sized>(&mut self, value: U256, host: &mut H) {
        match self.swept_to {
            Some(recipient) => {
                warn!(%recipient, %value, "sweeping value refunded after kill");
                host.sweep(recipient, value);
            }
            None => self.balance = self.balance.saturating_add(value),
        }
    }

    /// Owner-gated operations are refused once killed, then refused for
    /// anyone but the owner.
    fn ensure_admin(&self, caller: Address) -> ForwarderResult<()> {
        self.lifecycle.ensure_alive()?;
        self.ownership.ensure_owner(caller)
    }

    /// Whitelist `sender` as a relayer. Owner only.
    pub fn add_sender_to_whitelist(
        &mut self,
        caller: Address,
        sender: Address,
    ) -> ForwarderResult<()> {
        self.ensure_admin(caller)?;
        self.relayers.add(sender)?;

        debug!(%sender, "relayer whitelisted");
        self.emit(ForwarderEvent::SenderWhitelisted(IAwlForwarder::SenderWhitelisted { sender }));
        Ok(())
    }

    /// Remove `sender` from the relayer whitelist. Owner only. Removing an
    /// address that is not whitelisted succeeds, and is logged all the same.
    pub fn remove_sender_from_whitelist(
        &mut self,
        caller: Address,
        sender: Address,
    ) -> ForwarderResult<()> {
        self.ensure_admin(caller)?;
        let was_whitelisted = self.relayers.remove(sender);

        debug!(%sender, was_whitelisted, "relayer removed from whitelist");
        self.emit(ForwarderEvent::SenderRemovedFromWhitelist(
            IAwlForwarder::SenderRemovedFromWhitelist { sender },
        ));
        Ok(())
    }

    /// Stop accepting requests. Owner only.
    pub fn pause(&mut self, caller: Address) -> ForwarderResult<()> {
        self.ensure_admin(caller)?;
        self.lifecycle.pause()?;

        debug!("forwarder paused");
        self.emit(ForwarderEvent::Paused(IAwlForwarder::Paused { account: caller }));
        Ok(())
    }

    /// Resume accepting requests. Owner only.
    pub fn unpause(&mut self, caller: Address) -> ForwarderResult<()> {
        self.ensure_admin(caller)?;
        self.lifecycle.unpause()?;

        debug!("forwarder unpaused");
        self.emit(ForwarderEvent::Unpaused(IAwlForwarder::Unpaused { account: caller }));
        Ok(())
    }

    /// Permanently disable the forwarder and sweep its balance to
    /// `recipient`. Owner only.
    pub fn kill<H: CallHost + ?Sized>(
        &mut self,
        caller: Address,
        recipient: Address,
        host: &mut H,
    ) -> ForwarderResult<U256> {
        self.ensure_admin(caller)?;
        self.lifecycle.kill()?;

        let amount = std::mem::take(&mut self.balance);
        self.swept_to = Some(recipient);
        host.sweep(recipient, amount);

        warn!(%recipient, %amount, "forwarder killed");
        self.emit(ForwarderEvent::Killed(IAwlForwarder::Killed { recipient, amount }));
        Ok(amount)
    }

    /// Hand ownership to `new_owner`. Owner only.
    pub fn transfer_ownership(
        &mut self,
        caller: Address,
        new_owner: Address,
    ) -> ForwarderResult<()> {
        self.ensure_admin(caller)?;
        let previous = self.ownership.transfer(new_owner)?;

        debug!(%new_owner, "ownership transferred");
        self.emit(ForwarderEvent::OwnershipTransferred(IAwlForwarder::OwnershipTransferred {
            previousOwner: previous.unwrap_or_default(),
            newOwner: new_owner,
        }));
        Ok(())
    }

    /// Give up ownership. Every owner-gated operation fails afterwards.
    pub fn renounce_ownership(&mut self, caller: Address) -> ForwarderResult<()> {
        self.ensure_admin(caller)?;
        let previous = self.ownership.renounce();

        debug!("ownership renounced");
        self.emit(ForwarderEvent::OwnershipTransferred(IAwlForwarder::OwnershipTransferred {
            previousOwner: previous.unwrap_or_default(),
            newOwner: Address::ZERO,
        }));
        Ok(())
    }

    /// The forwarder has no payable fallback: value may only enter through
    /// `execute`.
    pub const fn receive(&self, msg: Msg) -> ForwarderResult<()> {
        Err(ForwarderError::DirectTransferRejected { sender: msg.sender, value: msg.value })
    }
}
