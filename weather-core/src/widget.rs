//! The widget as a whole: input, lookup lifecycle and the view handed to a renderer.

use serde::Serialize;
use tracing::instrument;

use crate::{
    error::LookupError,
    input::{InputController, Submission},
    lookup::{LookupMachine, LookupStatus},
    messages::{Clock, DerivedMessages, SystemClock},
    provider::WeatherProvider,
};

/// Read-only snapshot of everything a renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub status: LookupStatus,
    /// Present only when `status` is `Succeeded`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<DerivedMessages>,
    pub input_enabled: bool,
}

#[derive(Debug)]
pub struct WeatherWidget<P, C = SystemClock> {
    input: InputController,
    machine: LookupMachine,
    provider: P,
    clock: C,
}

impl<P: WeatherProvider> WeatherWidget<P, SystemClock> {
    pub fn new(provider: P) -> Self {
        Self::with_clock(provider, SystemClock)
    }
}

impl<P: WeatherProvider, C: Clock> WeatherWidget<P, C> {
    pub fn with_clock(provider: P, clock: C) -> Self {
        Self {
            input: InputController::new(),
            machine: LookupMachine::new(),
            provider,
            clock,
        }
    }

    pub fn set_location(&mut self, raw: impl Into<String>) {
        self.input.set_location(raw);
    }

    pub fn location(&self) -> &str {
        self.input.location()
    }

    pub fn status(&self) -> &LookupStatus {
        self.machine.status()
    }

    /// Validate the current input and, if it is usable, run one lookup to completion.
    ///
    /// Holding `&mut self` across the request keeps a second submission out
    /// until this one has resolved. Dropping the returned future mid-request
    /// ends the lookup as `Failed(NetworkError)`.
    #[instrument(skip_all, fields(location = %self.input.location().trim()))]
    pub async fn submit(&mut self) -> Result<&LookupStatus, LookupError> {
        if let Submission::Started(flight) = self.input.submit(&mut self.machine)? {
            let outcome = self.provider.current_conditions(flight.query()).await;
            flight.on_result(outcome);
        }

        Ok(self.machine.status())
    }

    pub fn view(&self) -> WidgetView {
        let status = self.machine.status().clone();
        let messages = status
            .snapshot()
            .map(|snapshot| DerivedMessages::derive(snapshot, &self.clock));

        WidgetView {
            status,
            messages,
            input_enabled: self.input.is_enabled(&self.machine),
        }
    }
}
