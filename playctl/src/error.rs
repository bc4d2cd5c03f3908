// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for playback controllers.
//!
//! Fatal failures (construction, initial state change, static links) are
//! returned as [`Error`]. Stream errors reported on the bus are not errors at
//! this level: they end a session in an orderly way and surface as
//! [`crate::Termination::Error`]. Per-pad link failures are reported as
//! [`crate::LinkOutcome`] values.

use crate::State;

/// Convenience result type using [`Error`] as the error variant.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building or driving a playback pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The media framework could not be initialized.
    #[error("Failed to initialize media framework: {0}")]
    Init(String),

    /// An element (or the pipeline itself) could not be created.
    #[error("Could not create element '{name}' from factory '{factory}'")]
    Construction { factory: String, name: String },

    /// A state change request returned failure.
    #[error("Unable to set the pipeline to the {target} state")]
    StateTransition { target: State },

    /// Two statically linked elements refused to link.
    #[error("Elements '{from}' and '{to}' could not be linked")]
    Link { from: String, to: String },

    /// An element is missing an always-present pad.
    #[error("Element '{element}' has no '{pad}' pad")]
    MissingPad { element: String, pad: String },

    /// An element does not expose a property the controller must set.
    #[error("Element '{element}' has no '{property}' property")]
    MissingProperty { element: String, property: String },

    /// The pipeline did not provide a message bus.
    #[error("Pipeline has no message bus")]
    MissingBus,

    /// An unbounded bus wait returned without a message.
    #[error("Bus is flushing, no further messages will arrive")]
    BusFlushing,

    /// The asynchronous bus watch could not be installed.
    #[error("Failed to install bus watch: {0}")]
    Watch(String),

    /// A generic error for failures not covered by the variants above.
    #[error("Other error: {0}")]
    Other(String),
}
