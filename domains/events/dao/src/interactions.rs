use events_errors::ValidationError;
use events_models::{Interaction, Interest};

/// Append-only record of simulated user interactions.
#[derive(Debug, Default)]
pub struct InteractionLog {
    entries: Vec<Interaction>,
}

impl InteractionLog {
    pub fn new() -> Self { Self::default() }

    pub fn record(
        &mut self, user: impl Into<String>, event: impl Into<String>,
        interest: &str,
    ) -> Result<&Interaction, ValidationError> {
        let interest: Interest = interest.parse()?;
        self.entries.push(Interaction {
            user: user.into(),
            event: event.into(),
            interest,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    pub fn entries(&self) -> &[Interaction] { &self.entries }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
