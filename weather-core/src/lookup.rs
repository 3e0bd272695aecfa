//! Lifecycle of a single weather lookup.
//!
//! ```text
//! Idle ──start──▶ Loading ──result──▶ Succeeded | Failed ──start──▶ Loading …
//! ```
//!
//! The whole state lives in one [`LookupStatus`] value that is replaced on
//! every transition, so a snapshot and an error can never coexist. While a
//! lookup is in flight the [`InFlight`] guard holds the machine.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    error::{ErrorKind, FetchError, LookupError},
    model::{LocationQuery, WeatherSnapshot},
};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(tag = "state", content = "detail", rename_all = "snake_case")]
pub enum LookupStatus {
    #[default]
    Idle,
    Loading,
    Succeeded(WeatherSnapshot),
    Failed(ErrorKind),
}

impl LookupStatus {
    pub fn name(&self) -> &'static str {
        match self {
            LookupStatus::Idle => "idle",
            LookupStatus::Loading => "loading",
            LookupStatus::Succeeded(_) => "succeeded",
            LookupStatus::Failed(_) => "failed",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LookupStatus::Loading)
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            LookupStatus::Succeeded(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self {
            LookupStatus::Failed(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// A lookup that has been started and not resolved yet.
///
/// Only [`LookupMachine::start_lookup`] creates one and it holds the machine
/// until [`InFlight::on_result`] consumes it. If it is dropped unresolved (the
/// request future was abandoned), the machine moves to
/// `Failed(NetworkError)`, so `Loading` is always left.
#[derive(Debug)]
#[must_use = "an in-flight lookup must be resolved with `InFlight::on_result`"]
pub struct InFlight<'m> {
    machine: &'m mut LookupMachine,
    query: LocationQuery,
    resolved: bool,
}

impl InFlight<'_> {
    pub fn query(&self) -> &LocationQuery {
        &self.query
    }

    /// Resolve the lookup with the outcome of its single request.
    pub fn on_result(mut self, outcome: Result<WeatherSnapshot, FetchError>) {
        self.machine.status = match outcome {
            Ok(snapshot) => {
                info!(location = %self.query, resolved = %snapshot.location_name, "lookup succeeded");
                LookupStatus::Succeeded(snapshot)
            }
            Err(err) => {
                let kind = err.kind();
                warn!(location = %self.query, error = %err, ?kind, "lookup failed");
                LookupStatus::Failed(kind)
            }
        };
        self.resolved = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.resolved {
            warn!(location = %self.query, "lookup abandoned before its result arrived");
            self.machine.status = LookupStatus::Failed(ErrorKind::NetworkError);
        }
    }
}

#[derive(Debug, Default)]
pub struct LookupMachine {
    status: LookupStatus,
}

impl LookupMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &LookupStatus {
        &self.status
    }

    /// Enter `Loading` for `query`, dropping any previous snapshot or error.
    pub fn start_lookup(&mut self, query: LocationQuery) -> Result<InFlight<'_>, LookupError> {
        if self.status.is_loading() {
            warn!(location = %query, "lookup rejected: another lookup is in flight");
            return Err(LookupError::Busy);
        }

        debug!(from = self.status.name(), location = %query, "lookup started");
        self.status = LookupStatus::Loading;
        Ok(InFlight { machine: self, query, resolved: false })
    }

    /// Record a local validation failure without touching the network.
    pub fn fail_validation(&mut self) -> Result<(), LookupError> {
        if self.status.is_loading() {
            return Err(LookupError::Busy);
        }

        debug!(from = self.status.name(), "empty location submitted");
        self.status = LookupStatus::Failed(ErrorKind::EmptyInput);
        Ok(())
    }
}
