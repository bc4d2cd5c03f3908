// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Blocking bus polling loop.
//!
//! The polling controller waits on the bus for state changes, errors and
//! end-of-stream only, logs pipeline-level state changes and stops at the
//! first terminal message.

use crate::{Bus, Error, Message, MessageKind, MessageOrigin, Pipeline, Result, State};

/// Message kinds the polling loop waits for.
pub const POLL_FILTER: [MessageKind; 3] = [
    MessageKind::StateChanged,
    MessageKind::Error,
    MessageKind::EndOfStream,
];

/// How a polling session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Termination {
    /// The stream was played to the end.
    EndOfStream,
    /// An element posted an error; playback was stopped.
    Error {
        origin: MessageOrigin,
        description: String,
        debug: Option<String>,
    },
}

/// Message handler for the polling loop.
#[derive(Debug, Default)]
pub struct PollSession {
    termination: Option<Termination>,
}

impl PollSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_terminated(&self) -> bool {
        self.termination.is_some()
    }

    /// Handles one message, recording the termination reason if it is terminal.
    pub fn handle(&mut self, message: &Message) {
        match message {
            Message::Error {
                origin,
                description,
                debug: debug_info,
            } => {
                tracing::error!("Error received from element {}: {}", origin, description);
                tracing::error!(
                    "Debugging information: {}",
                    debug_info.as_deref().unwrap_or("none")
                );
                self.termination = Some(Termination::Error {
                    origin: origin.clone(),
                    description: description.clone(),
                    debug: debug_info.clone(),
                });
            }
            Message::EndOfStream { .. } => {
                tracing::info!("End-Of-Stream reached.");
                self.termination = Some(Termination::EndOfStream);
            }
            Message::StateChanged { old, current, .. } if message.is_from_pipeline() => {
                tracing::info!("Pipeline state changed from {} to {}", old, current);
            }
            Message::StateChanged { origin, .. } => {
                tracing::trace!("Ignoring state change of child {}", origin);
            }
            Message::Buffering { .. } | Message::ClockLost { .. } | Message::Other { .. } => {
                tracing::warn!("Unexpected message received: {:?}", message.kind());
            }
        }
    }

    /// Polls `bus` until an error or end-of-stream message arrives.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BusFlushing`] if the unbounded wait comes back empty,
    /// which only happens when the bus is flushing and will never deliver
    /// another message.
    pub fn run<B: Bus + ?Sized>(mut self, bus: &B) -> Result<Termination> {
        loop {
            let Some(message) = bus.pop_filtered(&POLL_FILTER, None) else {
                return Err(Error::BusFlushing);
            };
            self.handle(&message);
            if let Some(termination) = self.termination.take() {
                return Ok(termination);
            }
        }
    }
}

/// Requests PLAYING, then polls the bus until the session terminates.
///
/// # Errors
///
/// Returns [`Error::StateTransition`] if the pipeline refuses to start, in
/// which case the bus is never read.
pub fn play_and_poll<P, B>(pipeline: &P, bus: &B) -> Result<Termination>
where
    P: Pipeline + ?Sized,
    B: Bus + ?Sized,
{
    let change = pipeline.set_state(State::Playing)?;
    tracing::debug!("Pipeline '{}' start requested: {:?}", pipeline.name(), change);
    PollSession::new().run(bus)
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    #[traced_test]
    fn pipeline_state_changes_are_logged() {
        let mut session = PollSession::new();
        session.handle(&Message::StateChanged {
            origin: MessageOrigin::Pipeline,
            old: State::Ready,
            current: State::Paused,
            pending: Some(State::Playing),
        });
        assert!(!session.is_terminated());
        assert!(logs_contain("Pipeline state changed from READY to PAUSED"));
    }

    #[test]
    #[traced_test]
    fn child_state_changes_are_filtered_out() {
        let mut session = PollSession::new();
        session.handle(&Message::StateChanged {
            origin: MessageOrigin::Element("/test-pipeline/a_convert".into()),
            old: State::Null,
            current: State::Ready,
            pending: None,
        });
        assert!(!session.is_terminated());
        assert!(!logs_contain("Pipeline state changed"));
    }

    #[test]
    #[traced_test]
    fn errors_report_source_and_debug_info() {
        let mut session = PollSession::new();
        session.handle(&Message::Error {
            origin: MessageOrigin::Element("/test-pipeline/source".into()),
            description: "Resource not found.".into(),
            debug: Some("souphttpsrc.c(1234)".into()),
        });
        assert!(session.is_terminated());
        assert!(logs_contain(
            "Error received from element /test-pipeline/source: Resource not found."
        ));
        assert!(logs_contain("Debugging information: souphttpsrc.c(1234)"));
    }

    #[test]
    #[traced_test]
    fn unexpected_kinds_are_logged() {
        let mut session = PollSession::new();
        session.handle(&Message::ClockLost {
            origin: MessageOrigin::Pipeline,
        });
        assert!(!session.is_terminated());
        assert!(logs_contain("Unexpected message received"));
    }
}
