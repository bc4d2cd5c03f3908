// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Collaborator traits for the media framework, and pipeline teardown.
//!
//! A backend supplies a [`Pipeline`] (owns the element graph and its state)
//! and a [`Bus`] (ordered channel of messages posted by the pipeline). The
//! controllers in this crate only talk to these traits.

use std::time::Duration;

use crate::{Message, MessageKind, Result, State, StateChange};

/// A managed graph of processing elements with a lifecycle state.
pub trait Pipeline {
    /// Human readable name, used in log output.
    fn name(&self) -> String;

    /// Requests a state transition.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StateTransition`] if the framework reports failure.
    fn set_state(&self, state: State) -> Result<StateChange>;
}

impl<P: Pipeline + ?Sized> Pipeline for &P {
    fn name(&self) -> String {
        (**self).name()
    }

    fn set_state(&self, state: State) -> Result<StateChange> {
        (**self).set_state(state)
    }
}

/// Message channel of a pipeline.
pub trait Bus {
    /// Blocks until a message whose kind is in `kinds` is available.
    ///
    /// `timeout = None` waits without limit. Messages of other kinds are
    /// discarded. Returns `None` if the wait ended without a message.
    fn pop_filtered(&self, kinds: &[MessageKind], timeout: Option<Duration>) -> Option<Message>;
}

/// Owns a pipeline and forces it to [`State::Null`] when dropped.
///
/// Every controller holds its pipeline through a guard, so error paths and
/// early returns release the framework's resources the same way a normal
/// end of stream does.
pub struct PipelineGuard<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PipelineGuard<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the guarded pipeline.
    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }
}

impl<P: Pipeline> Drop for PipelineGuard<P> {
    fn drop(&mut self) {
        match self.pipeline.set_state(State::Null) {
            Ok(_) => tracing::debug!("Pipeline '{}' set to NULL", self.pipeline.name()),
            Err(err) => tracing::error!(
                "Failed to set pipeline '{}' to NULL: {}",
                self.pipeline.name(),
                err
            ),
        }
    }
}
