// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Bus messages as a closed sum type.
//!
//! Backends translate their native messages into [`Message`] once, and the
//! controllers match on it exhaustively. Kinds the controllers have no use
//! for are kept as [`Message::Other`] so they can still be logged.

use std::fmt;

use crate::State;

/// Where a message was posted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageOrigin {
    /// The top-level pipeline owned by the controller.
    Pipeline,
    /// A child element, identified by its object path.
    Element(String),
    /// The message carried no source object.
    Unknown,
}

impl fmt::Display for MessageOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageOrigin::Pipeline => f.write_str("pipeline"),
            MessageOrigin::Element(path) => f.write_str(path),
            MessageOrigin::Unknown => f.write_str("unknown"),
        }
    }
}

/// Field-less tag for each [`Message`] variant, used to filter bus reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Error,
    EndOfStream,
    Buffering,
    ClockLost,
    StateChanged,
    Other,
}

/// A message read from a pipeline bus.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// A fatal stream error.
    Error {
        origin: MessageOrigin,
        description: String,
        debug: Option<String>,
    },
    /// All data has been consumed.
    EndOfStream { origin: MessageOrigin },
    /// Network buffering progress, `percent` in `0..=100`.
    Buffering { origin: MessageOrigin, percent: i32 },
    /// The selected clock became unusable.
    ClockLost { origin: MessageOrigin },
    /// An element changed state.
    StateChanged {
        origin: MessageOrigin,
        old: State,
        current: State,
        pending: Option<State>,
    },
    /// Any other message kind, by name.
    Other { origin: MessageOrigin, kind: String },
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Error { .. } => MessageKind::Error,
            Message::EndOfStream { .. } => MessageKind::EndOfStream,
            Message::Buffering { .. } => MessageKind::Buffering,
            Message::ClockLost { .. } => MessageKind::ClockLost,
            Message::StateChanged { .. } => MessageKind::StateChanged,
            Message::Other { .. } => MessageKind::Other,
        }
    }

    pub fn origin(&self) -> &MessageOrigin {
        match self {
            Message::Error { origin, .. }
            | Message::EndOfStream { origin }
            | Message::Buffering { origin, .. }
            | Message::ClockLost { origin }
            | Message::StateChanged { origin, .. }
            | Message::Other { origin, .. } => origin,
        }
    }

    /// True if the message was posted by the top-level pipeline.
    pub fn is_from_pipeline(&self) -> bool {
        *self.origin() == MessageOrigin::Pipeline
    }
}
