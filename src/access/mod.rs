//! Owner login gate.
//!
//! A demo credential match, not an authentication scheme: the credentials are
//! hard-coded strings and there is no backend. What the gate *does* enforce
//! is capability handout — the [`OwnerClient`] lives only behind it, so
//! owner-mode operations are unreachable until a login succeeds. A failed
//! attempt changes nothing and is reported with a generic message; retrying
//! is always allowed.

use crate::clients::OwnerClient;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Demo credentials.
pub const DEMO_USERNAME: &str = "owner";
pub const DEMO_PASSWORD: &str = "elite2024";

/// Errors from the owner login gate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoginError {
    /// Wrong username or password. Deliberately generic.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Holds the owner-mode client and hands out clones only on successful login.
pub struct OwnerGate {
    owner: OwnerClient,
}

impl OwnerGate {
    pub fn new(owner: OwnerClient) -> Self {
        Self { owner }
    }

    /// Checks the demo credentials and, on success, unlocks owner mode by
    /// returning an [`OwnerClient`].
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<OwnerClient, LoginError> {
        if username == DEMO_USERNAME && password == DEMO_PASSWORD {
            info!("Owner mode unlocked");
            Ok(self.owner.clone())
        } else {
            warn!(username, "Rejected owner login attempt");
            Err(LoginError::InvalidCredentials)
        }
    }
}
