use crate::{ForwarderError, ForwarderResult};
use serde::{Deserialize, Serialize};

/// Lifecycle states of a forwarder.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Requests are accepted.
    #[default]
    Active,
    /// Requests are refused until unpaused.
    Paused,
    /// Terminal. Nothing is accepted ever again.
    Killed,
}

/// Pause circuit breaker and kill switch.
///
/// `Active <-> Paused` is reversible. `Killed` is reachable from both and has
/// no way out. Access control is enforced by the [`Forwarder`](crate::Forwarder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LifecycleGuard {
    state: LifecycleState,
}

impl LifecycleGuard {
    /// Create an active guard.
    pub const fn new() -> Self {
        Self { state: LifecycleState::Active }
    }

    /// The current state.
    pub const fn state(&self) -> LifecycleState {
        self.state
    }

    /// True if the guard is in the `Active` state.
    pub const fn is_active(&self) -> bool {
        matches!(self.state, LifecycleState::Active)
    }

    /// True if the guard has been killed.
    pub const fn is_killed(&self) -> bool {
        matches!(self.state, LifecycleState::Killed)
    }

    /// Fail unless the guard is `Active`.
    pub const fn ensure_active(&self) -> ForwarderResult<()> {
        match self.state {
            LifecycleState::Active => Ok(()),
            LifecycleState::Paused => Err(ForwarderError::Paused),
            LifecycleState::Killed => Err(ForwarderError::Killed),
        }
    }

    /// Fail if the guard has been killed.
    pub const fn ensure_alive(&self) -> ForwarderResult<()> {
        match self.state {
            LifecycleState::Killed => Err(ForwarderError::Killed),
            _ => Ok(()),
        }
    }

    /// `Active -> Paused`.
    pub fn pause(&mut self) -> ForwarderResult<()> {
        match self.state {
            LifecycleState::Active => {
                self.state = LifecycleState::Paused;
                Ok(())
            }
            LifecycleState::Paused => Err(ForwarderError::AlreadyPaused),
            LifecycleState::Killed => Err(ForwarderError::Killed),
        }
    }

    /// `Paused -> Active`.
    pub fn unpause(&mut self) -> ForwarderResult<()> {
        match self.state {
            LifecycleState::Paused => {
                self.state = LifecycleState::Active;
                Ok(())
            }
            LifecycleState::Active => Err(ForwarderError::NotPaused),
            LifecycleState::Killed => Err(ForwarderError::Killed),
        }
    }

    /// `Active | Paused -> Killed`.
    pub fn kill(&mut self) -> ForwarderResult<()> {
        self.ensure_alive()?;
        self.state = LifecycleState::Killed;
        Ok(())
    }
}
