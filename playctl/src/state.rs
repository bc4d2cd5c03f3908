// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Pipeline lifecycle states.
//!
//! The state machine itself lives in the media framework. Controllers only
//! request transitions and observe the outcome.

use std::fmt;

/// Lifecycle state of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Initial state, no resources allocated.
    Null,
    /// Resources allocated, no data flowing.
    Ready,
    /// Prerolled, clock stopped.
    Paused,
    /// Data flowing, clock running.
    Playing,
}

impl State {
    /// Upper-case name as printed by the framework's own tools.
    pub fn name(self) -> &'static str {
        match self {
            State::Null => "NULL",
            State::Ready => "READY",
            State::Paused => "PAUSED",
            State::Playing => "PLAYING",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Successful outcome of a state change request.
///
/// Failure is reported as [`crate::Error::StateTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// The transition completed synchronously.
    Success,
    /// The transition continues in the background.
    Async,
    /// The transition succeeded but the pipeline cannot preroll (live source).
    NoPreroll,
}

impl StateChange {
    /// True when the pipeline reported a live, non-prerolling source.
    pub fn is_live(self) -> bool {
        self == StateChange::NoPreroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_framework_names() {
        assert_eq!(State::Null.to_string(), "NULL");
        assert_eq!(State::Playing.to_string(), "PLAYING");
    }

    #[test]
    fn only_no_preroll_is_live() {
        assert!(StateChange::NoPreroll.is_live());
        assert!(!StateChange::Success.is_live());
        assert!(!StateChange::Async.is_live());
    }
}
