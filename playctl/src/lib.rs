// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! # playctl - event-driven playback controllers
//!
//! Framework-independent logic for two small playback controllers that drive
//! an external media framework. Demuxing, decoding, clocking and pad
//! negotiation all stay inside the framework; this crate only decides which
//! state to request and what to link, based on the messages the framework
//! reports.
//!
//! ## Controllers
//!
//! - **Watch-driven** ([`WatchSession`]): a single playback element, an
//!   asynchronous bus watch and a cooperative event loop. Each bus message is
//!   handed to [`WatchSession::dispatch`], which reacts to errors,
//!   end-of-stream, buffering and clock loss.
//! - **Poll-driven** ([`PollSession`], [`play_and_poll`]): a manually
//!   [`assemble`]d graph whose source pads are routed at runtime by a
//!   [`StreamRouter`], and a blocking loop reading the bus until a terminal
//!   message arrives.
//!
//! ## Collaborators
//!
//! ```text
//! ┌──────────┐   set_state    ┌──────────┐
//! │controller├───────────────►│ Pipeline │
//! └────▲─────┘                └────┬─────┘
//!      │  Message                  │ posts
//!      └───────────── Bus ◄────────┘
//! ```
//!
//! Backends implement [`Pipeline`], [`Bus`], [`BranchSink`] and
//! [`GraphBackend`]. A [`PipelineGuard`] makes sure every pipeline reaches
//! [`State::Null`] on the way out, whatever path the controller took.

mod blueprint;
mod error;
mod message;
mod pipeline;
mod poll;
mod router;
mod session;
mod state;

pub mod config;

pub use blueprint::{ElementSpec, Graph, GraphBackend, GraphBlueprint, assemble};
pub use error::{Error, Result};
pub use message::{Message, MessageKind, MessageOrigin};
pub use pipeline::{Bus, Pipeline, PipelineGuard};
pub use poll::{POLL_FILTER, PollSession, Termination, play_and_poll};
pub use router::{
    AUDIO_RAW_PREFIX, BranchSink, LinkOutcome, StreamKind, StreamRouter, VIDEO_RAW_PREFIX,
};
pub use session::{Flow, WatchSession};
pub use state::{State, StateChange};
