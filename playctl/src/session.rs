// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Watch-driven playback session.
//!
//! A [`WatchSession`] is the per-message handler behind an asynchronous bus
//! watch. The event loop calls [`WatchSession::dispatch`] once per message;
//! dispatch never blocks and tells the loop whether to keep running.
//!
//! ## Dispatch table
//! - `Error`: log it, request READY, quit
//! - `EndOfStream`: request READY, quit
//! - `Buffering(p)`: ignored for live sources; otherwise PAUSED below 100%,
//!   PLAYING at 100%
//! - `ClockLost`: PAUSED then PLAYING, so a new clock gets selected
//! - anything else: logged at debug level
//!
//! Termination happens once. Messages that arrive afterwards (the watch may
//! still have queued ones) are dropped without touching the pipeline.

use crate::{Message, Pipeline, Result, State};

/// What the event loop should do after a message was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Mutable state of a watch-driven playback controller.
pub struct WatchSession<P: Pipeline> {
    pipeline: P,
    is_live: bool,
    terminated: bool,
}

impl<P: Pipeline> WatchSession<P> {
    /// Creates a session without touching the pipeline state.
    pub fn new(pipeline: P, is_live: bool) -> Self {
        Self {
            pipeline,
            is_live,
            terminated: false,
        }
    }

    /// Requests PLAYING and creates a session for the pipeline.
    ///
    /// A `NoPreroll` outcome marks the session live, which disables buffering
    /// driven pausing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StateTransition`] when the pipeline refuses to
    /// start. No session is created in that case.
    pub fn start(pipeline: P) -> Result<Self> {
        let change = pipeline.set_state(State::Playing)?;
        let is_live = change.is_live();
        if is_live {
            tracing::info!("Pipeline '{}' is live, buffering is ignored", pipeline.name());
        }
        Ok(Self::new(pipeline, is_live))
    }

    pub fn is_live(&self) -> bool {
        self.is_live
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Handles a single bus message.
    pub fn dispatch(&mut self, message: &Message) -> Flow {
        if self.terminated {
            tracing::trace!("Session terminated, dropping {:?}", message.kind());
            return Flow::Quit;
        }

        match message {
            Message::Error {
                origin,
                description,
                debug: debug_info,
            } => {
                tracing::error!("Error: {}", description);
                tracing::debug!(
                    "Error source: {}, debugging information: {}",
                    origin,
                    debug_info.as_deref().unwrap_or("none")
                );
                self.terminate()
            }
            Message::EndOfStream { .. } => {
                tracing::info!("End-Of-Stream reached.");
                self.terminate()
            }
            Message::Buffering { percent, .. } => {
                if self.is_live {
                    return Flow::Continue;
                }
                tracing::info!("Buffering ({:3}%)", percent);
                if *percent < 100 {
                    self.request(State::Paused);
                } else {
                    self.request(State::Playing);
                }
                Flow::Continue
            }
            Message::ClockLost { .. } => {
                tracing::info!("Clock lost, selecting a new one");
                self.request(State::Paused);
                self.request(State::Playing);
                Flow::Continue
            }
            Message::StateChanged {
                origin,
                old,
                current,
                ..
            } => {
                tracing::debug!("{} changed state from {} to {}", origin, old, current);
                Flow::Continue
            }
            Message::Other { origin, kind } => {
                tracing::debug!("Ignoring {} message from {}", kind, origin);
                Flow::Continue
            }
        }
    }

    fn terminate(&mut self) -> Flow {
        self.request(State::Ready);
        self.terminated = true;
        Flow::Quit
    }

    fn request(&self, state: State) {
        if let Err(err) = self.pipeline.set_state(state) {
            tracing::warn!("{}", err);
        }
    }
}
