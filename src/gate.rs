//! API-key gate collaborator.
//!
//! The shell does not decide on its own whether the API-key dialog appears.
//! It asks an [`ApiKeyGate`] and, when the user confirms the dialog, hands
//! control back to it through [`ApiKeyGate::try_continue`].

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::config::GateConfig;

/// Source of the "must show API key dialog" signal and its continuation.
pub trait ApiKeyGate: Send + Sync + fmt::Debug {
    /// Whether the dialog must overlay the shell.
    fn must_show(&self) -> bool;

    /// Called when the user confirms the dialog.
    ///
    /// Runs the continuation if the dialog is showing and returns whether it
    /// ran. Checking and running must be one atomic step: of any number of
    /// concurrent calls while the dialog shows, exactly one returns `true`.
    fn try_continue(&self) -> bool;
}

/// Gate driven by application configuration.
///
/// Shows while the gate is enabled, no key is configured, and nobody has
/// confirmed the dialog yet. Confirmation is shared by all sessions.
#[derive(Debug)]
pub struct ConfiguredKeyGate {
    enabled: bool,
    key_configured: bool,
    confirmed: AtomicBool,
}

impl ConfiguredKeyGate {
    /// Build a gate from explicit inputs.
    #[must_use]
    pub fn new(enabled: bool, key_configured: bool) -> Self {
        Self {
            enabled,
            key_configured,
            confirmed: AtomicBool::new(false),
        }
    }

    /// Build a gate from the `gate` config section.
    #[must_use]
    pub fn from_config(config: &GateConfig) -> Self {
        let key_configured = config
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());
        Self::new(config.enabled, key_configured)
    }

    /// Whether the user has confirmed the dialog.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.load(Ordering::Acquire)
    }
}

impl ApiKeyGate for ConfiguredKeyGate {
    fn must_show(&self) -> bool {
        self.enabled && !self.key_configured && !self.is_confirmed()
    }

    fn try_continue(&self) -> bool {
        if !self.enabled || self.key_configured {
            return false;
        }
        if self.confirmed.swap(true, Ordering::AcqRel) {
            return false;
        }
        info!(name: "gate.confirmed", "API key dialog confirmed");
        true
    }
}
