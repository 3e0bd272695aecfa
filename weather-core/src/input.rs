use crate::{
    error::{ErrorKind, LookupError},
    lookup::{InFlight, LookupMachine},
    model::LocationQuery,
};

/// What happened to a submission that was not rejected as busy.
#[derive(Debug)]
pub enum Submission<'m> {
    /// A lookup is now in flight and must be resolved by the caller.
    Started(InFlight<'m>),
    /// Validation failed locally; the machine already shows the error.
    Invalid(ErrorKind),
}

/// Owns the text the user is typing.
///
/// The text is kept untrimmed; trimming happens on submit.
#[derive(Debug, Default)]
pub struct InputController {
    raw: String,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_location(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    pub fn location(&self) -> &str {
        &self.raw
    }

    /// Input and submit are disabled while a lookup is in flight.
    pub fn is_enabled(&self, machine: &LookupMachine) -> bool {
        !machine.status().is_loading()
    }

    pub fn submit<'m>(
        &self,
        machine: &'m mut LookupMachine,
    ) -> Result<Submission<'m>, LookupError> {
        match LocationQuery::try_from(self.raw.as_str()) {
            Ok(query) => machine.start_lookup(query).map(Submission::Started),
            Err(kind) => {
                machine.fail_validation()?;
                Ok(Submission::Invalid(kind))
            }
        }
    }
}
