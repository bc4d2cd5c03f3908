//! Pipeline, Bus and Message Adapters
//!
//! This module implements the `playctl` collaborator traits on top of
//! GStreamer objects:
//! - `GstPipeline`: any top-level element (a `playbin` or a `gst::Pipeline`)
//! - `GstBus`: the pipeline's bus, polled or watched
//! - `convert_message()`: maps a `gst::Message` to a `playctl::Message`
//!
//! ## Message origin
//! Every converted message records whether it was posted by the pipeline
//! itself or by one of its children. The polling controller relies on this
//! to only report the pipeline's own state changes.

// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use gst::prelude::*;
use gstreamer as gst;
use playctl::{Error, Flow, Message, MessageKind, MessageOrigin, Result, State, StateChange};

use crate::CAT;

/// Converts a controller state to the GStreamer state.
pub fn to_gst_state(state: State) -> gst::State {
    match state {
        State::Null => gst::State::Null,
        State::Ready => gst::State::Ready,
        State::Paused => gst::State::Paused,
        State::Playing => gst::State::Playing,
    }
}

/// Converts a GStreamer state, `None` for `VoidPending`.
pub fn from_gst_state(state: gst::State) -> Option<State> {
    match state {
        gst::State::Null => Some(State::Null),
        gst::State::Ready => Some(State::Ready),
        gst::State::Paused => Some(State::Paused),
        gst::State::Playing => Some(State::Playing),
        _ => None,
    }
}

/// Maps a message kind to the GStreamer message type used for bus filtering.
///
/// `MessageKind::Other` has no single counterpart and maps to `None`; a
/// filter containing it is not applied at all.
fn to_gst_message_type(kind: MessageKind) -> Option<gst::MessageType> {
    match kind {
        MessageKind::Error => Some(gst::MessageType::Error),
        MessageKind::EndOfStream => Some(gst::MessageType::Eos),
        MessageKind::Buffering => Some(gst::MessageType::Buffering),
        MessageKind::ClockLost => Some(gst::MessageType::ClockLost),
        MessageKind::StateChanged => Some(gst::MessageType::StateChanged),
        MessageKind::Other => None,
    }
}

/// Converts a bus message.
///
/// # Arguments
/// * `msg` - The message as popped from (or delivered by) the bus
/// * `pipeline` - The top-level pipeline, to tell its messages from its children's
pub fn convert_message(msg: &gst::MessageRef, pipeline: &gst::Object) -> Message {
    let origin = match msg.src() {
        Some(src) if src == pipeline => MessageOrigin::Pipeline,
        Some(src) => MessageOrigin::Element(src.path_string().to_string()),
        None => MessageOrigin::Unknown,
    };

    use gst::MessageView;
    match msg.view() {
        MessageView::Error(err) => Message::Error {
            origin,
            description: err.error().to_string(),
            debug: err.debug().map(|debug| debug.to_string()),
        },
        MessageView::Eos(..) => Message::EndOfStream { origin },
        MessageView::Buffering(buffering) => Message::Buffering {
            origin,
            percent: buffering.percent(),
        },
        MessageView::ClockLost(..) => Message::ClockLost { origin },
        MessageView::StateChanged(changed) => {
            match (from_gst_state(changed.old()), from_gst_state(changed.current())) {
                (Some(old), Some(current)) => Message::StateChanged {
                    origin,
                    old,
                    current,
                    pending: from_gst_state(changed.pending()),
                },
                _ => Message::Other {
                    origin,
                    kind: "state-changed".into(),
                },
            }
        }
        _ => Message::Other {
            origin,
            kind: format!("{:?}", msg.type_()),
        },
    }
}

/// A top-level GStreamer element driven by a controller.
///
/// Cheap to clone: clones refer to the same element.
#[derive(Debug, Clone)]
pub struct GstPipeline {
    element: gst::Element,
}

impl GstPipeline {
    pub fn new(element: impl IsA<gst::Element>) -> Self {
        Self {
            element: element.upcast(),
        }
    }

    /// The wrapped element.
    pub fn element(&self) -> &gst::Element {
        &self.element
    }

    /// Returns the pipeline's bus.
    ///
    /// # Errors
    /// [`Error::MissingBus`] if the element has none (it is not top-level).
    pub fn bus(&self) -> Result<GstBus> {
        let bus = self.element.bus().ok_or(Error::MissingBus)?;
        Ok(GstBus {
            bus,
            pipeline: self.element.clone().upcast(),
        })
    }
}

impl playctl::Pipeline for GstPipeline {
    fn name(&self) -> String {
        self.element.name().to_string()
    }

    fn set_state(&self, state: State) -> Result<StateChange> {
        match self.element.set_state(to_gst_state(state)) {
            Ok(gst::StateChangeSuccess::Success) => Ok(StateChange::Success),
            Ok(gst::StateChangeSuccess::Async) => Ok(StateChange::Async),
            Ok(gst::StateChangeSuccess::NoPreroll) => Ok(StateChange::NoPreroll),
            Err(err) => {
                gst::warning!(CAT, obj = &self.element, "Setting {} failed: {:?}", state, err);
                Err(Error::StateTransition { target: state })
            }
        }
    }
}

/// The bus of a [`GstPipeline`].
#[derive(Debug, Clone)]
pub struct GstBus {
    /// The underlying GStreamer bus
    bus: gst::Bus,

    /// Pipeline owning the bus (used to resolve message origins)
    pipeline: gst::Object,
}

impl GstBus {
    /// Installs an asynchronous watch on the default main context.
    ///
    /// `handler` is called from the main loop for every message; returning
    /// [`Flow::Quit`] removes the watch. The watch also goes away when the
    /// returned guard is dropped.
    ///
    /// # Errors
    /// [`Error::Watch`] if the bus already has a watch.
    pub fn add_watch<F>(&self, mut handler: F) -> Result<gst::bus::BusWatchGuard>
    where
        F: FnMut(&Message) -> Flow + Send + 'static,
    {
        let pipeline = self.pipeline.clone();
        self.bus
            .add_watch(move |_, msg| {
                let message = convert_message(msg, &pipeline);
                match handler(&message) {
                    Flow::Continue => glib::ControlFlow::Continue,
                    Flow::Quit => glib::ControlFlow::Break,
                }
            })
            .map_err(|err| Error::Watch(err.to_string()))
    }
}

impl playctl::Bus for GstBus {
    fn pop_filtered(&self, kinds: &[MessageKind], timeout: Option<Duration>) -> Option<Message> {
        let timeout = timeout.map(|timeout| {
            let nanos = u64::try_from(timeout.as_nanos()).unwrap_or(u64::MAX);
            gst::ClockTime::from_nseconds(nanos.min(gst::ClockTime::MAX.nseconds()))
        });

        let msg = if kinds.contains(&MessageKind::Other) {
            self.bus.timed_pop(timeout)?
        } else {
            let types = kinds
                .iter()
                .filter_map(|kind| to_gst_message_type(*kind))
                .collect::<Vec<_>>();
            self.bus.timed_pop_filtered(timeout, &types)?
        };
        gst::trace!(CAT, obj = &self.bus, "Popped {:?}", msg.type_());
        Some(convert_message(&msg, &self.pipeline))
    }
}
