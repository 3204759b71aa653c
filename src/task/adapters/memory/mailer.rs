//! Recording mailer for tests and local use.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::task::ports::{EmailMessage, Mailer, MailerError, MailerResult};

/// Mailer that records every message instead of dispatching it.
#[derive(Debug, Clone, Default)]
pub struct RecordingMailer {
    state: Arc<RwLock<MailerState>>,
}

#[derive(Debug, Default)]
struct MailerState {
    sent: Vec<EmailMessage>,
    fail_sends: bool,
}

impl RecordingMailer {
    /// Creates a mailer with an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent sends fail, simulating mail-service outage.
    pub fn fail_sends(&self, fail: bool) {
        if let Ok(mut state) = self.state.write() {
            state.fail_sends = fail;
        }
    }

    /// Returns a snapshot of every recorded message.
    #[must_use]
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.state
            .read()
            .map(|state| state.sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &EmailMessage) -> MailerResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MailerError::dispatch(std::io::Error::other(err.to_string())))?;
        if state.fail_sends {
            return Err(MailerError::dispatch(std::io::Error::other(
                "injected mail failure",
            )));
        }
        state.sent.push(message.clone());
        Ok(())
    }
}
